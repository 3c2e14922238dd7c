use serde::Serialize;

/// Mode a key mapping applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapMode {
    Normal,
    Visual,
    Select,
    OperatorPending,
    Insert,
    CmdLine,
}

/// A single `lhs -> rhs` mapping in one mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMapping {
    pub mode: MapMode,
    pub lhs: String,
    pub rhs: String,
    pub recursive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_mode_as_snake_case() {
        let json = serde_json::to_string(&MapMode::OperatorPending).unwrap();
        assert_eq!(json, "\"operator_pending\"");
    }
}
