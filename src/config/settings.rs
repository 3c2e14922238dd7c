use std::collections::BTreeMap;

use serde::Serialize;

use super::{KeyMapping, MapMode};

/// Option names and their short forms, in `:set` lookup order
const OPTION_NAMES: &[(&str, &str)] = &[
    ("number", "nu"),
    ("relativenumber", "rnu"),
    ("scrolloff", "so"),
    ("ignorecase", "ic"),
    ("smartcase", "scs"),
    ("hlsearch", "hls"),
    ("incsearch", "is"),
    ("wrapscan", "ws"),
    ("tabstop", "ts"),
    ("shiftwidth", "sw"),
    ("expandtab", "et"),
    ("autoindent", "ai"),
    ("history", "hi"),
    ("clipboard", "cb"),
    ("matchpairs", "mps"),
];

/// Value of a single option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Toggle(bool),
    Number(usize),
    Text(String),
}

/// Value stored by `:let`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Variable {
    Number(i64),
    String(String),
}

/// Editor settings that can be customized from an rc file
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    // Display
    pub number: bool,
    pub relative_number: bool,
    pub scroll_off: usize,

    // Search
    pub ignore_case: bool,
    pub smart_case: bool,
    pub hl_search: bool,
    pub inc_search: bool,
    pub wrap_scan: bool,

    // Editing
    pub tab_stop: usize,
    pub shift_width: usize,
    pub expand_tab: bool,
    pub auto_indent: bool,

    // Misc
    pub history: usize,
    pub clipboard: String,
    pub match_pairs: String,

    pub mappings: Vec<KeyMapping>,
    pub variables: BTreeMap<String, Variable>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number: false,
            relative_number: false,
            scroll_off: 0,

            ignore_case: false,
            smart_case: false,
            hl_search: false,
            inc_search: false,
            wrap_scan: true,

            tab_stop: 8,
            shift_width: 8,
            expand_tab: false,
            auto_indent: false,

            history: 50,
            clipboard: String::new(),
            match_pairs: "(:),{:},[:]".to_string(),

            mappings: Vec::new(),
            variables: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a full or short option name to its full name
    pub fn option_name(name: &str) -> Option<&'static str> {
        OPTION_NAMES
            .iter()
            .find(|(full, short)| *full == name || *short == name)
            .map(|(full, _)| *full)
    }

    /// Current value of an option, by full name
    pub fn option(&self, name: &str) -> Option<OptionValue> {
        let value = match name {
            "number" => OptionValue::Toggle(self.number),
            "relativenumber" => OptionValue::Toggle(self.relative_number),
            "scrolloff" => OptionValue::Number(self.scroll_off),
            "ignorecase" => OptionValue::Toggle(self.ignore_case),
            "smartcase" => OptionValue::Toggle(self.smart_case),
            "hlsearch" => OptionValue::Toggle(self.hl_search),
            "incsearch" => OptionValue::Toggle(self.inc_search),
            "wrapscan" => OptionValue::Toggle(self.wrap_scan),
            "tabstop" => OptionValue::Number(self.tab_stop),
            "shiftwidth" => OptionValue::Number(self.shift_width),
            "expandtab" => OptionValue::Toggle(self.expand_tab),
            "autoindent" => OptionValue::Toggle(self.auto_indent),
            "history" => OptionValue::Number(self.history),
            "clipboard" => OptionValue::Text(self.clipboard.clone()),
            "matchpairs" => OptionValue::Text(self.match_pairs.clone()),
            _ => return None,
        };
        Some(value)
    }

    /// Set an option by full name; the value kind must match the option
    pub fn set_option(&mut self, name: &str, value: OptionValue) -> Result<(), String> {
        match (name, value) {
            ("number", OptionValue::Toggle(v)) => self.number = v,
            ("relativenumber", OptionValue::Toggle(v)) => self.relative_number = v,
            ("scrolloff", OptionValue::Number(v)) => self.scroll_off = v,
            ("ignorecase", OptionValue::Toggle(v)) => self.ignore_case = v,
            ("smartcase", OptionValue::Toggle(v)) => self.smart_case = v,
            ("hlsearch", OptionValue::Toggle(v)) => self.hl_search = v,
            ("incsearch", OptionValue::Toggle(v)) => self.inc_search = v,
            ("wrapscan", OptionValue::Toggle(v)) => self.wrap_scan = v,
            ("tabstop" | "shiftwidth", OptionValue::Number(0)) => {
                return Err(format!("{} must be positive", name));
            }
            ("tabstop", OptionValue::Number(v)) => self.tab_stop = v,
            ("shiftwidth", OptionValue::Number(v)) => self.shift_width = v,
            ("expandtab", OptionValue::Toggle(v)) => self.expand_tab = v,
            ("autoindent", OptionValue::Toggle(v)) => self.auto_indent = v,
            ("history", OptionValue::Number(v)) => self.history = v,
            ("clipboard", OptionValue::Text(v)) => self.clipboard = v,
            ("matchpairs", OptionValue::Text(v)) => self.match_pairs = v,
            (name, _) if Self::option_name(name).is_some() => {
                return Err(format!("invalid value for {}", name));
            }
            (name, _) => return Err(format!("unknown option: {}", name)),
        }
        Ok(())
    }

    /// Restore every option to its default, keeping mappings and variables
    pub fn reset_options(&mut self) {
        let mappings = std::mem::take(&mut self.mappings);
        let variables = std::mem::take(&mut self.variables);
        *self = Self {
            mappings,
            variables,
            ..Self::default()
        };
    }

    /// Add a mapping for each mode, replacing any mapping of the same lhs
    pub fn map(&mut self, modes: &[MapMode], lhs: &str, rhs: &str, recursive: bool) {
        for &mode in modes {
            self.mappings.retain(|m| !(m.mode == mode && m.lhs == lhs));
            self.mappings.push(KeyMapping {
                mode,
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
                recursive,
            });
        }
    }

    pub fn mapping(&self, mode: MapMode, lhs: &str) -> Option<&KeyMapping> {
        self.mappings
            .iter()
            .find(|m| m.mode == mode && m.lhs == lhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_name_accepts_short_forms() {
        assert_eq!(Settings::option_name("nu"), Some("number"));
        assert_eq!(Settings::option_name("tabstop"), Some("tabstop"));
        assert_eq!(Settings::option_name("bogus"), None);
    }

    #[test]
    fn set_option_rejects_wrong_kind() {
        let mut settings = Settings::new();
        assert!(settings
            .set_option("number", OptionValue::Number(3))
            .is_err());
        assert!(!settings.number);
    }

    #[test]
    fn set_option_rejects_zero_tabstop() {
        let mut settings = Settings::new();
        assert!(settings
            .set_option("tabstop", OptionValue::Number(0))
            .is_err());
        assert_eq!(settings.tab_stop, 8);
    }

    #[test]
    fn map_replaces_same_lhs_in_same_mode() {
        let mut settings = Settings::new();
        settings.map(&[MapMode::Normal, MapMode::Visual], "Y", "y$", false);
        settings.map(&[MapMode::Normal], "Y", "yy", true);

        assert_eq!(settings.mappings.len(), 2);
        assert_eq!(settings.mapping(MapMode::Normal, "Y").unwrap().rhs, "yy");
        assert_eq!(settings.mapping(MapMode::Visual, "Y").unwrap().rhs, "y$");
    }
}
