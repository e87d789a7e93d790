//! Command-line parsing.

use crate::error::{Result, StoreError};
use crate::state::Operation;

/// Names of the shell commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandName {
    Set,
    Get,
    Delete,
    Count,
    End,
    Begin,
    Rollback,
    Commit,
}

impl CommandName {
    /// Every command, in the order suggestions are offered.
    pub const ALL: [CommandName; 8] = [
        CommandName::Set,
        CommandName::Get,
        CommandName::Delete,
        CommandName::Count,
        CommandName::End,
        CommandName::Begin,
        CommandName::Rollback,
        CommandName::Commit,
    ];

    /// Upper-case spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::Set => "SET",
            CommandName::Get => "GET",
            CommandName::Delete => "DELETE",
            CommandName::Count => "COUNT",
            CommandName::End => "END",
            CommandName::Begin => "BEGIN",
            CommandName::Rollback => "ROLLBACK",
            CommandName::Commit => "COMMIT",
        }
    }

    /// Exact number of arguments the command takes.
    pub fn arity(self) -> usize {
        match self {
            CommandName::Set => 2,
            CommandName::Get | CommandName::Delete | CommandName::Count => 1,
            CommandName::End | CommandName::Begin | CommandName::Rollback | CommandName::Commit => 0,
        }
    }

    /// Case-insensitive lookup.
    pub fn lookup(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(token))
    }
}

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run an operation against the state.
    Apply(Operation),
    /// Terminate the session.
    End,
}

/// Parse one line of input.
///
/// Tokens are separated by whitespace and the command name is matched
/// without regard to case. The argument count must match the command's
/// arity exactly.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().ok_or(StoreError::EmptyCommand)?;
    let name =
        CommandName::lookup(word).ok_or_else(|| StoreError::UnknownCommand(word.to_string()))?;

    let args: Vec<&str> = tokens.collect();
    if args.len() != name.arity() {
        return Err(StoreError::Arity {
            command: name.as_str(),
            expected: name.arity(),
            got: args.len(),
        });
    }

    let arg = |i: usize| args[i].to_string();
    let command = match name {
        CommandName::Set => Command::Apply(Operation::Set {
            key: arg(0),
            value: arg(1),
        }),
        CommandName::Get => Command::Apply(Operation::Get { key: arg(0) }),
        CommandName::Delete => Command::Apply(Operation::Delete { key: arg(0) }),
        CommandName::Count => Command::Apply(Operation::Count { value: arg(0) }),
        CommandName::Begin => Command::Apply(Operation::Begin),
        CommandName::Commit => Command::Apply(Operation::Commit),
        CommandName::Rollback => Command::Apply(Operation::Rollback),
        CommandName::End => Command::End,
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_command("sEt a 1").unwrap(),
            Command::Apply(Operation::Set {
                key: "a".into(),
                value: "1".into()
            })
        );
        assert_eq!(parse_command("begin").unwrap(), Command::Apply(Operation::Begin));
        assert_eq!(parse_command("End").unwrap(), Command::End);
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        assert_eq!(
            parse_command("GET MixedKey").unwrap(),
            Command::Apply(Operation::Get {
                key: "MixedKey".into()
            })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(matches!(
            parse_command("sEt a"),
            Err(StoreError::Arity {
                command: "SET",
                expected: 2,
                got: 1
            })
        ));
        assert!(matches!(
            parse_command("SET a 1 2"),
            Err(StoreError::Arity { got: 3, .. })
        ));
        assert!(matches!(
            parse_command("BEGIN now"),
            Err(StoreError::Arity { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!(matches!(
            parse_command("FROB a"),
            Err(StoreError::UnknownCommand(name)) if name == "FROB"
        ));
        assert!(matches!(parse_command("   "), Err(StoreError::EmptyCommand)));
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        assert_eq!(
            parse_command("  COUNT \t 10  ").unwrap(),
            Command::Apply(Operation::Count { value: "10".into() })
        );
    }
}
