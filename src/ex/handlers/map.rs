//! `:map` and friends - key mappings
//!
//! ```vim
//! nnoremap <silent> <leader>w :w<CR>
//! imap jk <Esc>
//! map! <C-a> <Home>
//! ```

use std::sync::{Arc, RwLock};

use crate::config::{MapMode, Settings};
use crate::ex::{ExCommand, ExError, ScriptCommand};

/// Special arguments accepted before the lhs; they do not change where a
/// mapping is stored
const MAP_MODIFIERS: &[&str] = &[
    "<buffer>", "<nowait>", "<silent>", "<special>", "<script>", "<expr>", "<unique>",
];

/// Which modes a map command writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// `map`: normal, visual, select and operator-pending; with `!` insert
    /// and command-line
    All,
    Normal,
    /// `vmap`: visual and select
    Visual,
    /// `xmap`: visual only
    VisualOnly,
    OperatorPending,
    Insert,
    CmdLine,
}

impl MapKind {
    fn modes(self, bang: bool) -> Option<&'static [MapMode]> {
        let modes: &'static [MapMode] = match (self, bang) {
            (MapKind::All, false) => &[
                MapMode::Normal,
                MapMode::Visual,
                MapMode::Select,
                MapMode::OperatorPending,
            ],
            (MapKind::All, true) => &[MapMode::Insert, MapMode::CmdLine],
            (_, true) => return None,
            (MapKind::Normal, false) => &[MapMode::Normal],
            (MapKind::Visual, false) => &[MapMode::Visual, MapMode::Select],
            (MapKind::VisualOnly, false) => &[MapMode::Visual],
            (MapKind::OperatorPending, false) => &[MapMode::OperatorPending],
            (MapKind::Insert, false) => &[MapMode::Insert],
            (MapKind::CmdLine, false) => &[MapMode::CmdLine],
        };
        Some(modes)
    }
}

pub struct MapCommand {
    settings: Arc<RwLock<Settings>>,
    kind: MapKind,
    recursive: bool,
}

impl MapCommand {
    pub fn new(settings: Arc<RwLock<Settings>>, kind: MapKind, recursive: bool) -> Self {
        Self {
            settings,
            kind,
            recursive,
        }
    }
}

impl ScriptCommand for MapCommand {
    fn execute(&self, command: &ExCommand) -> Result<(), ExError> {
        let modes = self
            .kind
            .modes(command.bang)
            .ok_or_else(|| ExError::InvalidArgument {
                command: command.name.clone(),
                reason: "E477: No ! allowed".to_string(),
            })?;

        let mut rest = command.argument.trim_start();
        while let Some(modifier) = MAP_MODIFIERS
            .iter()
            .find(|m| rest.get(..m.len()).is_some_and(|p| p.eq_ignore_ascii_case(m)))
        {
            rest = rest[modifier.len()..].trim_start();
        }

        let (lhs, rhs) = match rest.split_once([' ', '\t']) {
            Some((lhs, rhs)) => (lhs, rhs.trim_start()),
            None => (rest, ""),
        };

        // Without an rhs the command only lists mappings
        if lhs.is_empty() || rhs.is_empty() {
            return Ok(());
        }

        if let Ok(mut settings) = self.settings.write() {
            settings.map(modes, lhs, rhs, self.recursive);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        settings: &Arc<RwLock<Settings>>,
        kind: MapKind,
        recursive: bool,
        bang: bool,
        argument: &str,
    ) -> Result<(), ExError> {
        let command = ExCommand {
            name: "map".to_string(),
            bang,
            argument: argument.to_string(),
            ..Default::default()
        };
        MapCommand::new(Arc::clone(settings), kind, recursive).execute(&command)
    }

    fn settings() -> Arc<RwLock<Settings>> {
        Arc::new(RwLock::new(Settings::default()))
    }

    #[test]
    fn nnoremap_writes_normal_mapping() {
        let s = settings();
        run(&s, MapKind::Normal, false, false, "<leader>w :w<CR>").unwrap();

        let s = s.read().unwrap();
        let mapping = s.mapping(MapMode::Normal, "<leader>w").unwrap();
        assert_eq!(mapping.rhs, ":w<CR>");
        assert!(!mapping.recursive);
        assert!(s.mapping(MapMode::Insert, "<leader>w").is_none());
    }

    #[test]
    fn map_covers_normal_visual_select_and_operator_modes() {
        let s = settings();
        run(&s, MapKind::All, true, false, "Y y$").unwrap();
        assert_eq!(s.read().unwrap().mappings.len(), 4);

        let s = settings();
        run(&s, MapKind::All, true, true, "<C-a> <Home>").unwrap();
        let s = s.read().unwrap();
        assert_eq!(s.mappings.len(), 2);
        assert!(s.mapping(MapMode::Insert, "<C-a>").is_some());
        assert!(s.mapping(MapMode::CmdLine, "<C-a>").is_some());
    }

    #[test]
    fn modifiers_are_skipped_and_rhs_keeps_spaces() {
        let s = settings();
        run(
            &s,
            MapKind::Normal,
            false,
            false,
            "<silent> <Buffer> gb :ls<CR>:b ",
        )
        .unwrap();
        let s = s.read().unwrap();
        assert_eq!(s.mapping(MapMode::Normal, "gb").unwrap().rhs, ":ls<CR>:b ");
    }

    #[test]
    fn listing_is_a_no_op() {
        let s = settings();
        run(&s, MapKind::Normal, true, false, "").unwrap();
        run(&s, MapKind::Normal, true, false, "gb").unwrap();
        assert!(s.read().unwrap().mappings.is_empty());
    }

    #[test]
    fn bang_is_rejected_for_single_mode_maps() {
        let s = settings();
        assert!(matches!(
            run(&s, MapKind::Normal, true, true, "a b"),
            Err(ExError::InvalidArgument { .. })
        ));
    }
}
