// ABOUTME: Fuzzy-selection capability boundary for twin
//
// Interactive flows ask a Picker to choose one line out of a candidate list.
// Fzf implements it by spawning the fzf binary; tests substitute mocks.

pub mod fzf;

pub use fzf::Fzf;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("fzf not installed on host")]
    NotInstalled,

    #[error(
        "fzf {}",
        .code.map_or_else(|| "was terminated by a signal".to_string(), |c| format!("exited with status {c}"))
    )]
    Failed { code: Option<i32> },

    #[error("talking to fzf")]
    Io {
        #[source]
        source: io::Error,
    },
}

/// Single-choice selector over a list of lines
#[cfg_attr(test, mockall::automock)]
pub trait Picker {
    /// Let the user choose one of `candidates`
    ///
    /// # Returns
    /// * `Ok(Some(line))` - the chosen line
    /// * `Ok(None)` - the user dismissed the picker or nothing matched
    /// * `Err(_)` - the picker itself failed
    fn pick(&self, candidates: &[String]) -> Result<Option<String>, PickerError>;
}
