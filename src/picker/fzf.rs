// ABOUTME: Picker implementation that pipes candidates through fzf
//
// Candidates go to fzf's stdin one per line; the choice comes back on stdout.
// fzf draws its interface on stderr, which is left attached to the terminal.

use std::io::{self, Write};
use std::process::{Command, Stdio};
use tracing::debug;

use super::{Picker, PickerError};

/// Name of the fzf executable looked up on PATH
pub const FZF_BINARY: &str = "fzf";

/// fzf exit status when the query matched nothing
pub const EXIT_NO_MATCH: i32 = 1;

/// fzf exit status when the user pressed Escape or Ctrl-C
pub const EXIT_INTERRUPTED: i32 = 130;

/// fzf driven as a child process
#[derive(Debug, Clone, Default)]
pub struct Fzf;

impl Fzf {
    pub const fn new() -> Self {
        Self
    }

    /// Check if fzf is installed on the host
    pub fn check_installed() -> Result<(), PickerError> {
        which::which(FZF_BINARY)
            .map(|_| ())
            .map_err(|_| PickerError::NotInstalled)
    }
}

impl Picker for Fzf {
    fn pick(&self, candidates: &[String]) -> Result<Option<String>, PickerError> {
        debug!("Launching fzf with {} candidates", candidates.len());

        let mut child = Command::new(FZF_BINARY)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    PickerError::NotInstalled
                } else {
                    PickerError::Io { source }
                }
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // fzf may exit before draining its input when the user bails early
            match stdin.write_all(candidates.join("\n").as_bytes()) {
                Err(source) if source.kind() != io::ErrorKind::BrokenPipe => {
                    return Err(PickerError::Io { source });
                }
                _ => {}
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|source| PickerError::Io { source })?;

        interpret_exit(output.status.code(), &output.stdout)
    }
}

/// Map fzf's exit status and stdout to a selection
fn interpret_exit(code: Option<i32>, stdout: &[u8]) -> Result<Option<String>, PickerError> {
    match code {
        Some(0) => {
            let selected = String::from_utf8_lossy(stdout).trim().to_string();
            Ok((!selected.is_empty()).then_some(selected))
        }
        Some(EXIT_NO_MATCH | EXIT_INTERRUPTED) => {
            debug!("fzf closed without a selection");
            Ok(None)
        }
        code => Err(PickerError::Failed { code }),
    }
}
