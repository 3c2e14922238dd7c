use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ropey::Rope;

use super::Error;

/// Size of the read buffer used while loading a script
pub const BUFSIZE: usize = 4096;

/// Read a whole script file as UTF-8.
///
/// Invalid UTF-8 anywhere in the file fails the whole read.
pub fn read(path: &Path) -> Result<String, Error> {
    let to_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let text = Rope::from_reader(BufReader::with_capacity(BUFSIZE, file)).map_err(to_error)?;

    Ok(text.to_string())
}
