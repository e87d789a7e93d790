//! Shell configuration.

use std::path::PathBuf;

/// Shell configuration.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Prompt shown before each line in interactive mode.
    pub prompt: String,

    /// File to load command history from and save it to.
    pub history_path: Option<PathBuf>,

    /// JSON object used to build the initial state.
    pub seed_path: Option<PathBuf>,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            history_path: None,
            seed_path: None,
            history_size: 1000,
        }
    }
}
