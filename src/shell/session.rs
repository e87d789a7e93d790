//! A shell session owning the live state.

use super::command::{parse_command, Command};
use crate::error::StoreError;
use crate::state::{apply_operation, Output, State};
use rand::seq::SliceRandom;
use tracing::debug;

/// Replies printed when a line cannot be understood.
pub const APOLOGIES: &[&str] = &[
    "Sorry, I can't do that.",
    "I don't follow.",
    "Come again?",
    "That doesn't look like anything to me.",
];

/// Pick one of the [`APOLOGIES`].
pub fn apology() -> &'static str {
    APOLOGIES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Sorry.")
}

/// Outcome of evaluating one line.
#[derive(Debug)]
pub enum Reply {
    /// The operation ran; print its output if it has any.
    Output(Output),
    /// The line was malformed. The state is unchanged.
    Rejected(StoreError),
    /// The session should end.
    End,
}

/// Holds the single live [`State`] and replaces it after each operation.
#[derive(Debug, Default)]
pub struct Session {
    state: State,
}

impl Session {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// The current snapshot.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Run one raw line of input. Bytes that are not UTF-8 are rejected
    /// like any other malformed line.
    pub fn eval_bytes(&mut self, line: &[u8]) -> Reply {
        match std::str::from_utf8(line) {
            Ok(line) => self.eval(line),
            Err(e) => {
                debug!(error = %e, "rejected command");
                Reply::Rejected(StoreError::InvalidEncoding)
            }
        }
    }

    /// Parse and run one line of input.
    pub fn eval(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Ok(Command::Apply(operation)) => {
                let write = operation.is_write();
                let (output, next) = apply_operation(&self.state, operation);
                self.state = next;
                if write {
                    debug!(
                        depth = %self.state.depth(),
                        line = line.trim(),
                        stats = ?self.state.stats(),
                        "applied operation"
                    );
                }
                Reply::Output(output)
            }
            Ok(Command::End) => Reply::End,
            Err(e) => {
                debug!(error = %e, "rejected command");
                Reply::Rejected(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Depth;

    fn output(reply: Reply) -> String {
        match reply {
            Reply::Output(output) => output.to_string(),
            other => panic!("expected output, got {:?}", other),
        }
    }

    #[test]
    fn test_eval_threads_state() {
        let mut session = Session::default();
        assert_eq!(output(session.eval("SET a 10")), "");
        assert_eq!(output(session.eval("GET a")), "10");
        assert_eq!(output(session.eval("COUNT 10")), "1");
        assert_eq!(output(session.eval("DELETE a")), "");
        assert_eq!(output(session.eval("GET a")), "NULL");
    }

    #[test]
    fn test_rejection_leaves_state_alone() {
        let mut session = Session::new(State::new().set("a", "1"));
        let before = session.state().clone();
        assert!(matches!(session.eval("SET a"), Reply::Rejected(_)));
        assert!(matches!(session.eval("nonsense"), Reply::Rejected(_)));
        assert!(session.state().ptr_eq(&before));
    }

    #[test]
    fn test_end() {
        let mut session = Session::default();
        session.eval("BEGIN");
        assert!(matches!(session.eval("end"), Reply::End));
        assert_eq!(session.state().depth(), Depth(1));
    }

    #[test]
    fn test_eval_bytes_rejects_invalid_utf8() {
        let mut session = Session::new(State::new().set("a", "1"));
        assert!(matches!(
            session.eval_bytes(b"GET \xff"),
            Reply::Rejected(StoreError::InvalidEncoding)
        ));
        assert_eq!(output(session.eval_bytes(b"GET a")), "1");
    }

    #[test]
    fn test_stats_follow_session() {
        let mut session = Session::default();
        session.eval("SET a 1");
        session.eval("BEGIN");
        session.eval("SET b 1");
        let stats = session.state().stats();
        assert_eq!(stats.depth, 1);
        assert_eq!(stats.live_keys, 2);
        assert_eq!(stats.data_layers, vec![1, 1]);

        session.eval("COMMIT");
        assert_eq!(session.state().stats().data_layers, vec![2]);
    }

    #[test]
    fn test_apology_is_from_list() {
        assert!(APOLOGIES.contains(&apology()));
    }
}
