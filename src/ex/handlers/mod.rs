//! Script-level commands backed by the shared settings

mod map;
mod set;
mod variable;

pub use map::{MapCommand, MapKind};
pub use set::SetCommand;
pub use variable::LetCommand;
