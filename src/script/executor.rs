use std::path::Path;

use super::{Diagnostics, ScriptEvent, eligible_lines, read};
use crate::ex::{CommandHandler, CommandParser};

/// Runs scripts line by line against a command parser.
///
/// Every failure is contained: an unreadable file executes nothing, a bad
/// line is skipped, and editor-only commands are ignored. None of this is
/// visible to the caller except through the optional diagnostics hook.
pub struct ScriptExecutor<'a, P: CommandParser + ?Sized> {
    parser: &'a P,
    diagnostics: Option<&'a dyn Diagnostics>,
}

impl<'a, P: CommandParser + ?Sized> ScriptExecutor<'a, P> {
    pub fn new(parser: &'a P) -> Self {
        Self {
            parser,
            diagnostics: None,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    fn report(&self, event: ScriptEvent<'_>) {
        if let Some(diagnostics) = self.diagnostics {
            diagnostics.report(&event);
        }
    }

    /// Execute a script file; an unreadable file is silently skipped
    pub fn execute_file(&self, path: &Path) {
        match read(path) {
            Ok(content) => self.execute_text(&content),
            Err(error) => self.report(ScriptEvent::Unreadable {
                path,
                error: &error,
            }),
        }
    }

    /// Execute every eligible line of `content`, in order
    pub fn execute_text(&self, content: &str) {
        for line in eligible_lines(content) {
            let command = match self.parser.parse(line.text) {
                Ok(command) => command,
                Err(error) => {
                    self.report(ScriptEvent::ParseFailed {
                        line,
                        error: &error,
                    });
                    continue;
                }
            };

            let handler = match self.parser.handler(&command) {
                Ok(handler) => handler,
                Err(error) => {
                    self.report(ScriptEvent::ParseFailed {
                        line,
                        error: &error,
                    });
                    continue;
                }
            };

            match handler {
                CommandHandler::Script(handler) => match handler.execute(&command) {
                    Ok(()) => self.report(ScriptEvent::Executed {
                        line,
                        command: &command,
                    }),
                    Err(error) => self.report(ScriptEvent::ExecutionFailed {
                        line,
                        command: &command,
                        error: &error,
                    }),
                },
                CommandHandler::Editor(kind) => self.report(ScriptEvent::Ignored {
                    line,
                    command: *kind,
                }),
            }
        }
    }
}
