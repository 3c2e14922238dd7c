//! Ex command dialect: parsing, handler lookup and the built-in commands
//!
//! The script loader only depends on the [`CommandParser`] and
//! [`ScriptCommand`] traits; [`Registry`] is the stock implementation.

mod handlers;
mod parser;
mod registry;

use thiserror::Error;

pub use parser::parse_line;
pub use registry::Registry;

/// A parsed ex command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExCommand {
    /// Raw range text preceding the command name, e.g. `1,$`
    pub range: Option<String>,
    /// Command name; the built-in registry expands abbreviations
    pub name: String,
    pub bang: bool,
    pub argument: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExError {
    #[error("E492: Not an editor command: {0}")]
    InvalidCommand(String),

    #[error("E492: Unknown command: {0}")]
    UnknownCommand(String),

    #[error("E518: Unknown option: {0}")]
    UnknownOption(String),

    #[error("E474: Invalid argument for {command}: {reason}")]
    InvalidArgument { command: String, reason: String },
}

/// A command that can run without an open document
pub trait ScriptCommand {
    fn execute(&self, command: &ExCommand) -> Result<(), ExError>;
}

/// Commands that only make sense inside an editor window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    GotoLine,
    Write,
    Quit,
    WriteQuit,
    Exit,
    Edit,
}

/// Handler bound to a command name
pub enum CommandHandler {
    Script(Box<dyn ScriptCommand>),
    Editor(EditorCommand),
}

/// Parses command lines and resolves their handlers
pub trait CommandParser {
    fn parse(&self, line: &str) -> Result<ExCommand, ExError>;

    fn handler(&self, command: &ExCommand) -> Result<&CommandHandler, ExError>;
}
