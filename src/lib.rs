//! Best-effort loader for vim-style rc files
//!
//! [`script`] finds and executes the rc file line by line; [`ex`] parses
//! command lines and holds the built-in commands; [`config`] is the settings
//! those commands write to.

pub mod config;
pub mod ex;
pub mod script;
