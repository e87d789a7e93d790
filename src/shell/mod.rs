//! Line-oriented shell over the store.
//!
//! - [`parse_command`] turns a line into a [`Command`]
//! - [`Session`] owns the live state and evaluates lines
//! - [`complete`] suggests whole-line completions
//! - [`run_repl`] and [`run_pipe`] drive a session from a terminal or a
//!   stream

mod command;
mod completer;
mod repl;
mod session;

pub use command::{parse_command, Command, CommandName};
pub use completer::{complete, ShellHelper};
pub use repl::{run_pipe, run_repl, FAREWELL};
pub use session::{apology, Reply, Session, APOLOGIES};
