//! rc script loading
//!
//! - `locator` - find the user's rc file
//! - `reader` - read a script as UTF-8
//! - `lines` - pick out the lines that can be executed
//! - `executor` - parse and dispatch those lines
//!
//! Loading is best effort: unreadable files and bad lines are skipped, and
//! failures are only reported through an optional [`Diagnostics`] hook.

mod diagnostics;
mod executor;
mod lines;
mod locator;
mod reader;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use diagnostics::{Diagnostics, ScriptEvent, TracingDiagnostics};
pub use executor::ScriptExecutor;
pub use lines::{COMMAND_MARKER, EligibleLines, ScriptLine, eligible_lines};
pub use locator::{RC_FILES, locate, locate_in};
pub use reader::{BUFSIZE, read};

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
