use std::sync::{Arc, RwLock};

use super::handlers::{LetCommand, MapCommand, MapKind, SetCommand};
use super::{CommandHandler, CommandParser, EditorCommand, ExCommand, ExError, parse_line};
use crate::config::Settings;

struct Entry {
    name: &'static str,
    /// Shortest accepted abbreviation
    min_len: usize,
    handler: CommandHandler,
}

/// The built-in command table
pub struct Registry {
    entries: Vec<Entry>,
    goto_line: CommandHandler,
    settings: Arc<RwLock<Settings>>,
}

impl Registry {
    /// Create a registry writing into fresh settings
    pub fn new() -> Self {
        Self::with_settings(Arc::new(RwLock::new(Settings::default())))
    }

    pub fn with_settings(settings: Arc<RwLock<Settings>>) -> Self {
        let mut registry = Self {
            entries: Vec::new(),
            goto_line: CommandHandler::Editor(EditorCommand::GotoLine),
            settings: Arc::clone(&settings),
        };

        // Script commands
        registry.register(
            "set",
            2,
            CommandHandler::Script(Box::new(SetCommand::new(Arc::clone(&settings)))),
        );
        registry.register(
            "let",
            3,
            CommandHandler::Script(Box::new(LetCommand::new(Arc::clone(&settings)))),
        );

        let map_commands = [
            ("map", 3, MapKind::All),
            ("noremap", 2, MapKind::All),
            ("nmap", 2, MapKind::Normal),
            ("nnoremap", 2, MapKind::Normal),
            ("vmap", 2, MapKind::Visual),
            ("vnoremap", 2, MapKind::Visual),
            ("xmap", 2, MapKind::VisualOnly),
            ("xnoremap", 2, MapKind::VisualOnly),
            ("omap", 2, MapKind::OperatorPending),
            ("onoremap", 3, MapKind::OperatorPending),
            ("imap", 2, MapKind::Insert),
            ("inoremap", 3, MapKind::Insert),
            ("cmap", 2, MapKind::CmdLine),
            ("cnoremap", 3, MapKind::CmdLine),
        ];
        for (name, min_len, kind) in map_commands {
            let recursive = !name.contains("noremap");
            let handler = MapCommand::new(Arc::clone(&settings), kind, recursive);
            registry.register(name, min_len, CommandHandler::Script(Box::new(handler)));
        }

        // Editor-only commands
        registry.register("write", 1, CommandHandler::Editor(EditorCommand::Write));
        registry.register("quit", 1, CommandHandler::Editor(EditorCommand::Quit));
        registry.register("wq", 2, CommandHandler::Editor(EditorCommand::WriteQuit));
        registry.register("xit", 1, CommandHandler::Editor(EditorCommand::Exit));
        registry.register("edit", 1, CommandHandler::Editor(EditorCommand::Edit));

        registry
    }

    fn register(&mut self, name: &'static str, min_len: usize, handler: CommandHandler) {
        self.entries.push(Entry {
            name,
            min_len,
            handler,
        });
    }

    /// Settings the script commands write to
    pub fn settings(&self) -> Settings {
        self.settings.read().map(|s| s.clone()).unwrap_or_default()
    }

    /// Full name of the command `name` abbreviates, if any
    pub fn full_name(&self, name: &str) -> Option<&'static str> {
        self.lookup(name).map(|entry| entry.name)
    }

    fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| name.len() >= entry.min_len && entry.name.starts_with(name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser for Registry {
    fn parse(&self, line: &str) -> Result<ExCommand, ExError> {
        let mut command = parse_line(line)?;
        if !command.name.is_empty() {
            match self.full_name(&command.name) {
                Some(full) => command.name = full.to_string(),
                None => return Err(ExError::UnknownCommand(command.name)),
            }
        }
        Ok(command)
    }

    fn handler(&self, command: &ExCommand) -> Result<&CommandHandler, ExError> {
        if command.name.is_empty() {
            return Ok(&self.goto_line);
        }
        self.lookup(&command.name)
            .map(|entry| &entry.handler)
            .ok_or_else(|| ExError::UnknownCommand(command.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_abbreviations() {
        let registry = Registry::new();
        assert_eq!(registry.full_name("se"), Some("set"));
        assert_eq!(registry.full_name("set"), Some("set"));
        assert_eq!(registry.full_name("nn"), Some("nnoremap"));
        assert_eq!(registry.full_name("nm"), Some("nmap"));
        assert_eq!(registry.full_name("no"), Some("noremap"));
        assert_eq!(registry.full_name("ino"), Some("inoremap"));
        assert_eq!(registry.full_name("w"), Some("write"));
        assert_eq!(registry.full_name("wq"), Some("wq"));
        assert_eq!(registry.full_name("x"), Some("xit"));
        assert_eq!(registry.full_name("xn"), Some("xnoremap"));
    }

    #[test]
    fn rejects_too_short_or_unknown_names() {
        let registry = Registry::new();
        assert_eq!(registry.full_name("s"), None);
        assert_eq!(registry.full_name("le"), None);
        assert_eq!(registry.full_name("sets"), None);
        assert_eq!(
            registry.parse("frobnicate"),
            Err(ExError::UnknownCommand("frobnicate".to_string()))
        );
    }

    #[test]
    fn script_and_editor_handlers_are_distinguished() {
        let registry = Registry::new();

        let set = registry.parse("set number").unwrap();
        assert!(matches!(
            registry.handler(&set).unwrap(),
            CommandHandler::Script(_)
        ));

        let write = registry.parse("w").unwrap();
        assert!(matches!(
            registry.handler(&write).unwrap(),
            CommandHandler::Editor(EditorCommand::Write)
        ));

        let goto = registry.parse("12").unwrap();
        assert!(matches!(
            registry.handler(&goto).unwrap(),
            CommandHandler::Editor(EditorCommand::GotoLine)
        ));
    }

    #[test]
    fn parse_expands_abbreviated_names() {
        let registry = Registry::new();
        assert_eq!(registry.parse("nn Y y$").unwrap().name, "nnoremap");
        assert_eq!(registry.parse("se ic").unwrap().name, "set");
        assert!(registry.parse("12").unwrap().name.is_empty());
    }

    #[test]
    fn handlers_share_settings() {
        let registry = Registry::new();
        let command = registry.parse("set tabstop=4").unwrap();
        if let CommandHandler::Script(handler) = registry.handler(&command).unwrap() {
            handler.execute(&command).unwrap();
        }
        assert_eq!(registry.settings().tab_stop, 4);
    }
}
