//! Interactive and piped input loops.

use super::completer::ShellHelper;
use super::session::{apology, Reply, Session};
use crate::config::ShellConfig;
use crate::error::Result;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Message printed when the session ends.
pub const FAREWELL: &str = "Bye!";

/// Print a reply. Returns `false` once the session should stop.
fn respond<W: Write>(reply: Reply, out: &mut W) -> Result<bool> {
    match reply {
        Reply::Output(output) => {
            if !output.is_empty() {
                writeln!(out, "{}", output)?;
            }
            Ok(true)
        }
        Reply::Rejected(_) => {
            writeln!(out, "{}", apology())?;
            Ok(true)
        }
        Reply::End => {
            writeln!(out, "{}", FAREWELL)?;
            Ok(false)
        }
    }
}

/// Evaluate `input` line by line until it runs out or `END` is read.
pub fn run_pipe<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        if !respond(session.eval_bytes(line), &mut out)? {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

/// Run the interactive prompt with completion and history.
pub fn run_repl(session: &mut Session, config: &ShellConfig) -> Result<()> {
    let editor_config = Config::builder()
        .max_history_size(config.history_size)?
        .completion_type(CompletionType::List)
        .build();

    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::with_config(editor_config)?;
    editor.set_helper(Some(ShellHelper::new(session.state().clone())));

    if let Some(path) = &config.history_path {
        if let Err(e) = editor.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let mut stdout = io::stdout();
    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }

                let keep_going = respond(session.eval(&line), &mut stdout)?;
                if let Some(helper) = editor.helper_mut() {
                    helper.set_state(session.state().clone());
                }
                if !keep_going {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                writeln!(stdout, "{}", FAREWELL)?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &config.history_path {
        if let Err(e) = editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }

    Ok(())
}
