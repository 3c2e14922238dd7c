/// Leading character marking an explicit command line
pub const COMMAND_MARKER: char = ':';

/// One line that will be handed to the command parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptLine<'a> {
    /// 1-based line number in the source text
    pub number: usize,
    pub text: &'a str,
}

/// Iterator over the executable lines of a script, see [`eligible_lines`]
pub struct EligibleLines<'a> {
    rest: &'a str,
    number: usize,
}

/// Split `content` into lines, dropping indented ones and stripping one
/// leading `:`.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
///
/// Indented lines are skipped rather than joined to the previous line; nested
/// blocks and `\` continuations are not understood.
pub fn eligible_lines(content: &str) -> EligibleLines<'_> {
    EligibleLines {
        rest: content,
        number: 0,
    }
}

impl<'a> EligibleLines<'a> {
    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;

        let rest = self.rest;
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &rest[end + terminator..];
                Some(&rest[..end])
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }
}

impl<'a> Iterator for EligibleLines<'a> {
    type Item = ScriptLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.next_line() {
            if line.starts_with([' ', '\t']) {
                continue;
            }
            return Some(ScriptLine {
                number: self.number,
                text: line.strip_prefix(COMMAND_MARKER).unwrap_or(line),
            });
        }
        None
    }
}
