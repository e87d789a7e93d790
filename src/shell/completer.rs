//! Line completion.

use super::command::CommandName;
use crate::state::State;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Suggest whole-line completions for `line`.
///
/// A known `SET` or `GET` with at most one argument completes to every
/// visible key starting with that argument. Otherwise a bare command token
/// completes to the command names it prefixes. Suggestions are upper-case
/// when the typed command is all upper-case letters (or empty).
pub fn complete(state: &State, line: &str) -> Vec<String> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().unwrap_or("");
    let args: Vec<&str> = tokens.collect();

    let upper = word.chars().all(|c| c.is_ascii_uppercase());
    let lower = word.to_ascii_lowercase();
    let spell = |name: &str| {
        if upper {
            name.to_ascii_uppercase()
        } else {
            name.to_ascii_lowercase()
        }
    };

    match CommandName::lookup(word) {
        Some(name @ (CommandName::Set | CommandName::Get)) if args.len() <= 1 => {
            let prefix = args.first().copied().unwrap_or("");
            state
                .keys()
                .into_iter()
                .filter(|key| key.starts_with(prefix))
                .map(|key| format!("{} {}", spell(name.as_str()), key))
                .collect()
        }
        _ if args.is_empty() => CommandName::ALL
            .into_iter()
            .map(CommandName::as_str)
            .filter(|name| name.to_ascii_lowercase().starts_with(&lower))
            .map(spell)
            .collect(),
        _ => Vec::new(),
    }
}

/// Line-editor helper that completes against a state snapshot.
pub struct ShellHelper {
    state: State,
}

impl ShellHelper {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Replace the snapshot completions are drawn from.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
}

impl ShellHelper {
    /// Whole-line candidates for the cursor at `pos`. Suggestions replace the
    /// entire line, so nothing is offered unless the cursor is at its end.
    fn candidates(&self, line: &str, pos: usize) -> Vec<Pair> {
        if pos < line.len() {
            return Vec::new();
        }

        complete(&self.state, line)
            .into_iter()
            .map(|suggestion| Pair {
                display: suggestion.clone(),
                replacement: suggestion,
            })
            .collect()
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok((0, self.candidates(line, pos)))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::from_entries([("foo", "123"), ("bar", "456")])
    }

    #[test]
    fn test_empty_line_lists_all_commands() {
        assert_eq!(
            complete(&state(), ""),
            vec!["SET", "GET", "DELETE", "COUNT", "END", "BEGIN", "ROLLBACK", "COMMIT"]
        );
    }

    #[test]
    fn test_command_prefix_keeps_case() {
        assert_eq!(complete(&state(), "C"), vec!["COUNT", "COMMIT"]);
        assert_eq!(complete(&state(), "c"), vec!["count", "commit"]);
        assert_eq!(complete(&state(), "DELETE"), vec!["DELETE"]);
    }

    #[test]
    fn test_get_completes_keys() {
        assert_eq!(complete(&state(), "GET"), vec!["GET bar", "GET foo"]);
        assert_eq!(complete(&state(), "GET f"), vec!["GET foo"]);
        assert_eq!(complete(&state(), "set b"), vec!["set bar"]);
    }

    #[test]
    fn test_no_suggestions_past_key() {
        assert!(complete(&state(), "SET foo 1").is_empty());
        assert!(complete(&state(), "COUNT 1").is_empty());
    }

    #[test]
    fn test_helper_only_completes_at_end_of_line() {
        let helper = ShellHelper::new(state());

        let at_end: Vec<String> = helper
            .candidates("GET f", 5)
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(at_end, vec!["GET foo"]);

        assert!(helper.candidates("GET foo", 5).is_empty());
        assert!(helper.candidates("GET f", 0).is_empty());
    }

    #[test]
    fn test_deleted_keys_are_not_offered() {
        let state = state().begin().delete("foo");
        assert_eq!(complete(&state, "GET"), vec!["GET bar"]);
    }
}
