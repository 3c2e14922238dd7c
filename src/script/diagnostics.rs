use std::path::Path;

use super::{Error, ScriptLine};
use crate::ex::{EditorCommand, ExCommand, ExError};

/// Something that happened while executing a script
#[derive(Debug)]
pub enum ScriptEvent<'a> {
    /// The script file could not be read; nothing was executed
    Unreadable { path: &'a Path, error: &'a Error },
    /// The line did not parse or its command is unknown
    ParseFailed {
        line: ScriptLine<'a>,
        error: &'a ExError,
    },
    /// A script command ran
    Executed {
        line: ScriptLine<'a>,
        command: &'a ExCommand,
    },
    /// A script command ran and reported an error
    ExecutionFailed {
        line: ScriptLine<'a>,
        command: &'a ExCommand,
        error: &'a ExError,
    },
    /// The command needs an editor and was skipped
    Ignored {
        line: ScriptLine<'a>,
        command: EditorCommand,
    },
}

/// Observer for script execution; never affects control flow
pub trait Diagnostics {
    fn report(&self, event: &ScriptEvent<'_>);
}

/// Forwards script events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, event: &ScriptEvent<'_>) {
        match event {
            ScriptEvent::Unreadable { path, error } => {
                tracing::warn!(path = %path.display(), "skipping script: {}", error);
            }
            ScriptEvent::ParseFailed { line, error } => {
                tracing::warn!(line = line.number, text = line.text, "{}", error);
            }
            ScriptEvent::Executed { line, command } => {
                tracing::debug!(line = line.number, command = %command.name, "executed");
            }
            ScriptEvent::ExecutionFailed {
                line,
                command,
                error,
            } => {
                tracing::warn!(line = line.number, command = %command.name, "{}", error);
            }
            ScriptEvent::Ignored { line, command } => {
                tracing::trace!(line = line.number, ?command, "editor command ignored");
            }
        }
    }
}
