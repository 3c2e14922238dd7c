use super::{ExCommand, ExError};

fn is_range_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '$' | '%' | ',' | ';' | '+' | '-')
}

/// Split one command line into range, name, bang and argument.
///
/// Comment lines (first character `"`) and blank lines parse to the empty
/// command, which resolves to "go to line".
pub fn parse_line(line: &str) -> Result<ExCommand, ExError> {
    let line = line.trim_start_matches(|c: char| c == ':' || c == ' ' || c == '\t');

    if line.starts_with('"') || line.trim().is_empty() {
        return Ok(ExCommand::default());
    }

    let range_end = line.find(|c: char| !is_range_char(c)).unwrap_or(line.len());
    let (range, rest) = line.split_at(range_end);
    let rest = rest.trim_start();

    let name_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_end);

    if name.is_empty() && !rest.is_empty() {
        return Err(ExError::InvalidCommand(line.to_string()));
    }

    let (bang, rest) = match rest.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rest),
    };

    Ok(ExCommand {
        range: (!range.is_empty()).then(|| range.to_string()),
        name: name.to_string(),
        bang,
        argument: rest.trim_start().to_string(),
    })
}
