use std::path::{Path, PathBuf};

/// rc file names in priority order; the first one found wins
pub const RC_FILES: [&str; 4] = [".ideavimrc", "_ideavimrc", ".vimrc", "_vimrc"];

/// Find the user's rc file in the home directory
pub fn locate() -> Option<PathBuf> {
    dirs::home_dir().and_then(|home| locate_in(&home))
}

/// Find the first rc file that exists in `dir`
pub fn locate_in(dir: &Path) -> Option<PathBuf> {
    RC_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
