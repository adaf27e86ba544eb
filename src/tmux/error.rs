// ABOUTME: Error types for driving the tmux binary
// Defines error conditions that can occur when issuing tmux commands

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux not installed on host")]
    NotInstalled,

    #[error("tmux {command} failed for '{target}': {detail}")]
    CommandFailed {
        command: &'static str,
        target: String,
        detail: String,
    },

    #[error("running tmux {command}")]
    Io {
        command: &'static str,
        #[source]
        source: io::Error,
    },
}

impl TmuxError {
    /// Build a `CommandFailed` from a finished tmux process
    pub fn command_failed(command: &'static str, target: &str, output: &std::process::Output) -> Self {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() {
            output.status.code().map_or_else(
                || "terminated by signal".to_string(),
                |code| format!("exit status {code}"),
            )
        } else {
            stderr
        };

        Self::CommandFailed {
            command,
            target: target.to_string(),
            detail,
        }
    }
}
