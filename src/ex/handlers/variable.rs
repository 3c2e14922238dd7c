//! `:let` - assign global variables
//!
//! Only literal values are supported: integers and quoted strings.

use std::sync::{Arc, RwLock};

use crate::config::{Settings, Variable};
use crate::ex::{ExCommand, ExError, ScriptCommand};

pub struct LetCommand {
    settings: Arc<RwLock<Settings>>,
}

impl LetCommand {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self { settings }
    }
}

impl ScriptCommand for LetCommand {
    fn execute(&self, command: &ExCommand) -> Result<(), ExError> {
        let invalid = |reason: &str| ExError::InvalidArgument {
            command: "let".to_string(),
            reason: reason.to_string(),
        };

        let (name, value) = command
            .argument
            .split_once('=')
            .ok_or_else(|| invalid("missing ="))?;

        let name = name.trim();
        let name = name.strip_prefix("g:").unwrap_or(name);
        if !is_valid_name(name) {
            return Err(invalid(&format!("illegal variable name: {}", name)));
        }

        let value = strip_comment(value).trim();
        let value = parse_value(value)
            .ok_or_else(|| invalid(&format!("unsupported expression: {}", value)))?;

        if let Ok(mut settings) = self.settings.write() {
            settings.variables.insert(name.to_string(), value);
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Cut a trailing `"` comment that is not inside a string literal
fn strip_comment(raw: &str) -> &str {
    let mut quote = None;
    let mut escaped = false;
    for (i, c) in raw.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' && !raw[..i].trim().is_empty() => return &raw[..i],
            None if c == '"' || c == '\'' => quote = Some(c),
            None => {}
        }
    }
    raw
}

fn parse_value(raw: &str) -> Option<Variable> {
    if let Some(inner) = raw.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')) {
        // Literal string, '' is a single quote
        return Some(Variable::String(inner.replace("''", "'")));
    }
    if let Some(inner) = raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        return Some(Variable::String(unescape(inner)));
    }
    raw.parse().ok().map(Variable::Number)
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
