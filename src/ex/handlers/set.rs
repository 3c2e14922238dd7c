//! `:set` - change options
//!
//! ```vim
//! set number relativenumber
//! set ts=4 sw=4 expandtab
//! set noignorecase hlsearch!
//! set matchpairs+=<:>
//! ```

use std::sync::{Arc, RwLock};

use crate::config::{OptionValue, Settings};
use crate::ex::{ExCommand, ExError, ScriptCommand};

pub struct SetCommand {
    settings: Arc<RwLock<Settings>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assign {
    Set,
    Add,
    Subtract,
    Prepend,
}

impl SetCommand {
    pub fn new(settings: Arc<RwLock<Settings>>) -> Self {
        Self { settings }
    }

    fn apply(settings: &mut Settings, token: &str) -> Result<(), ExError> {
        if token == "all" {
            return Ok(());
        }
        if token == "all&" {
            settings.reset_options();
            return Ok(());
        }

        if let Some(pos) = token.find(['=', ':']) {
            let (name, assign) = match token[..pos].char_indices().last() {
                Some((i, '+')) => (&token[..i], Assign::Add),
                Some((i, '-')) => (&token[..i], Assign::Subtract),
                Some((i, '^')) => (&token[..i], Assign::Prepend),
                _ => (&token[..pos], Assign::Set),
            };
            let name = resolve(name)?;
            return assign_value(settings, name, assign, &token[pos + 1..]);
        }

        if let Some(name) = token.strip_suffix('?') {
            resolve(name)?;
            return Ok(());
        }
        if let Some(name) = token.strip_suffix('!') {
            return invert(settings, resolve(name)?);
        }
        if let Some(name) = token.strip_suffix('&') {
            let name = resolve(name)?;
            let default = Settings::default().option(name);
            if let Some(value) = default {
                settings.set_option(name, value).map_err(invalid)?;
            }
            return Ok(());
        }

        if let Some(name) = Settings::option_name(token) {
            // A bare non-toggle option only shows its value
            return match settings.option(name) {
                Some(OptionValue::Toggle(_)) => settings
                    .set_option(name, OptionValue::Toggle(true))
                    .map_err(invalid),
                _ => Ok(()),
            };
        }
        if let Some(name) = token.strip_prefix("no") {
            let name = resolve_toggle(settings, name, token)?;
            return settings
                .set_option(name, OptionValue::Toggle(false))
                .map_err(invalid);
        }
        if let Some(name) = token.strip_prefix("inv") {
            let name = resolve_toggle(settings, name, token)?;
            return invert(settings, name);
        }

        Err(ExError::UnknownOption(token.to_string()))
    }
}

impl ScriptCommand for SetCommand {
    fn execute(&self, command: &ExCommand) -> Result<(), ExError> {
        let Ok(mut settings) = self.settings.write() else {
            return Ok(());
        };

        for token in command.argument.split_whitespace() {
            if token.starts_with('"') {
                break;
            }
            Self::apply(&mut settings, token)?;
        }
        Ok(())
    }
}

fn invalid(reason: String) -> ExError {
    ExError::InvalidArgument {
        command: "set".to_string(),
        reason,
    }
}

fn resolve(name: &str) -> Result<&'static str, ExError> {
    Settings::option_name(name).ok_or_else(|| ExError::UnknownOption(name.to_string()))
}

fn resolve_toggle(
    settings: &Settings,
    name: &str,
    token: &str,
) -> Result<&'static str, ExError> {
    let name = resolve(name).map_err(|_| ExError::UnknownOption(token.to_string()))?;
    match settings.option(name) {
        Some(OptionValue::Toggle(_)) => Ok(name),
        _ => Err(invalid(format!("{} is not a toggle option", name))),
    }
}

fn invert(settings: &mut Settings, name: &'static str) -> Result<(), ExError> {
    match settings.option(name) {
        Some(OptionValue::Toggle(v)) => settings
            .set_option(name, OptionValue::Toggle(!v))
            .map_err(invalid),
        _ => Err(invalid(format!("{} is not a toggle option", name))),
    }
}

fn assign_value(
    settings: &mut Settings,
    name: &'static str,
    assign: Assign,
    raw: &str,
) -> Result<(), ExError> {
    let value = match settings.option(name) {
        Some(OptionValue::Number(current)) => {
            let n: usize = raw
                .parse()
                .map_err(|_| invalid(format!("number required after =: {}", raw)))?;
            let result = match assign {
                Assign::Set => Some(n),
                Assign::Add => current.checked_add(n),
                Assign::Subtract => current.checked_sub(n),
                Assign::Prepend => current.checked_mul(n),
            };
            OptionValue::Number(result.ok_or_else(|| invalid(format!("{} out of range", name)))?)
        }
        Some(OptionValue::Text(current)) => OptionValue::Text(match assign {
            Assign::Set => raw.to_string(),
            Assign::Add => join_items(&[current.as_str(), raw]),
            Assign::Prepend => join_items(&[raw, current.as_str()]),
            Assign::Subtract => {
                let items: Vec<&str> = current.split(',').filter(|item| *item != raw).collect();
                join_items(&items)
            }
        }),
        Some(OptionValue::Toggle(_)) => {
            return Err(invalid(format!("{} does not take a value", name)));
        }
        None => return Err(ExError::UnknownOption(name.to_string())),
    };
    settings.set_option(name, value).map_err(invalid)
}

/// Join comma-list items, skipping empty ones
fn join_items(items: &[&str]) -> String {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(settings: &Arc<RwLock<Settings>>, argument: &str) -> Result<(), ExError> {
        let command = ExCommand {
            name: "set".to_string(),
            argument: argument.to_string(),
            ..Default::default()
        };
        SetCommand::new(Arc::clone(settings)).execute(&command)
    }

    fn settings() -> Arc<RwLock<Settings>> {
        Arc::new(RwLock::new(Settings::default()))
    }

    #[test]
    fn sets_toggles_and_numbers() {
        let s = settings();
        run(&s, "number rnu ts=4 sw:2 expandtab").unwrap();

        let s = s.read().unwrap();
        assert!(s.number);
        assert!(s.relative_number);
        assert_eq!(s.tab_stop, 4);
        assert_eq!(s.shift_width, 2);
        assert!(s.expand_tab);
    }

    #[test]
    fn no_and_inv_prefixes() {
        let s = settings();
        run(&s, "nowrapscan invhlsearch").unwrap();
        assert!(!s.read().unwrap().wrap_scan);
        assert!(s.read().unwrap().hl_search);

        run(&s, "hls!").unwrap();
        assert!(!s.read().unwrap().hl_search);
    }

    #[test]
    fn reset_to_default() {
        let s = settings();
        run(&s, "ts=2 ic").unwrap();
        run(&s, "ts&").unwrap();
        assert_eq!(s.read().unwrap().tab_stop, 8);
        assert!(s.read().unwrap().ignore_case);

        run(&s, "all&").unwrap();
        assert!(!s.read().unwrap().ignore_case);
    }

    #[test]
    fn arithmetic_assignment() {
        let s = settings();
        run(&s, "so=5 so+=3 hi-=10").unwrap();
        assert_eq!(s.read().unwrap().scroll_off, 8);
        assert_eq!(s.read().unwrap().history, 40);
    }

    #[test]
    fn list_assignment() {
        let s = settings();
        run(&s, "mps+=<:> clipboard^=unnamed").unwrap();
        assert_eq!(s.read().unwrap().match_pairs, "(:),{:},[:],<:>");
        assert_eq!(s.read().unwrap().clipboard, "unnamed");

        run(&s, "mps-=(:)").unwrap();
        assert_eq!(s.read().unwrap().match_pairs, "{:},[:],<:>");
    }

    #[test]
    fn query_and_trailing_comment_are_no_ops() {
        let s = settings();
        run(&s, "ts? tabstop \" show it").unwrap();
        assert_eq!(s.read().unwrap().tab_stop, 8);
    }

    #[test]
    fn errors_stop_at_bad_token() {
        let s = settings();
        let err = run(&s, "nu bogus ic").unwrap_err();
        assert_eq!(err, ExError::UnknownOption("bogus".to_string()));
        assert!(s.read().unwrap().number);
        assert!(!s.read().unwrap().ignore_case);

        assert!(matches!(
            run(&s, "ts=abc"),
            Err(ExError::InvalidArgument { .. })
        ));
        assert!(matches!(
            run(&s, "nots"),
            Err(ExError::InvalidArgument { .. })
        ));
        assert!(matches!(
            run(&s, "number=1"),
            Err(ExError::InvalidArgument { .. })
        ));
    }
}
