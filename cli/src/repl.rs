//! Commands understood by the interactive session.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `name = value`
    Set { name: String, value: f64 },
    Show,
    Source,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}', try :help")]
    Unknown(String),

    #[error("Expected `name = value`, got '{0}'")]
    BadAssignment(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

pub const HELP: &str = "\
  name = value   change a variable and re-derive the recipe
  :show          print the recipe again
  :source        print the current source with line numbers
  :json          print the recipe as JSON
  :help          show this message
  :quit          leave (Ctrl+D also works)";

/// Parse `name=value`, as given to `--set` or typed in the session.
pub fn parse_assignment(input: &str) -> Result<(String, f64), CommandError> {
    let bad = || CommandError::BadAssignment(input.to_string());
    let (name, value) = input.split_once('=').ok_or_else(bad)?;
    let name = name.trim();
    let value = value.trim();

    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(bad());
    }

    let value = value
        .parse::<f64>()
        .map_err(|_| CommandError::NotANumber(value.to_string()))?;
    Ok((name.to_string(), value))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        match input {
            ":show" | ":s" => Ok(Command::Show),
            ":source" => Ok(Command::Source),
            ":json" => Ok(Command::Json),
            ":help" | ":h" | "help" => Ok(Command::Help),
            ":quit" | ":q" | "quit" | "exit" => Ok(Command::Quit),
            _ if input.starts_with(':') => Err(CommandError::Unknown(input.to_string())),
            _ => {
                let (name, value) = parse_assignment(input)?;
                Ok(Command::Set { name, value })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assignment() {
        assert_eq!(parse_assignment("servings=2"), Ok(("servings".to_string(), 2.0)));
        assert_eq!(
            " temp = 180.5 ".parse::<Command>(),
            Ok(Command::Set {
                name: "temp".to_string(),
                value: 180.5
            })
        );
    }

    #[test]
    fn test_bad_assignment() {
        assert_eq!(
            parse_assignment("servings"),
            Err(CommandError::BadAssignment("servings".to_string()))
        );
        assert_eq!(
            parse_assignment("2x = 1"),
            Err(CommandError::BadAssignment("2x = 1".to_string()))
        );
        assert_eq!(
            parse_assignment("x = lots"),
            Err(CommandError::NotANumber("lots".to_string()))
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(":q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(":source".parse::<Command>(), Ok(Command::Source));
        assert_eq!(
            ":bake".parse::<Command>(),
            Err(CommandError::Unknown(":bake".to_string()))
        );
    }
}
