// ABOUTME: Tmux capability boundary for twin
//
// The session flows only ever talk to tmux through the Multiplexer trait:
// - existence check and listing of sessions
// - session and window creation
// - key injection and window selection
// - client switching and popup display
//
// Tmux implements it by spawning the tmux binary; tests substitute fakes.

pub mod client;
pub mod error;
pub mod popup;

pub use client::Tmux;
pub use error::TmuxError;
pub use popup::Popup;

use std::path::Path;

/// Index tmux gives the window created along with a session
pub const FIRST_WINDOW_INDEX: usize = 1;

/// Narrow command interface over a terminal multiplexer
#[cfg_attr(test, mockall::automock)]
pub trait Multiplexer {
    /// True iff a session named exactly `name` is live
    fn has_session(&self, name: &str) -> Result<bool, TmuxError>;

    /// Create a detached session whose first window starts in `start_directory`
    fn new_session(&self, name: &str, start_directory: &Path) -> Result<(), TmuxError>;

    /// Create a window at `target` ("session:index")
    fn new_window(&self, target: &str, start_directory: &Path) -> Result<(), TmuxError>;

    /// Type `keys` into `target` followed by Enter
    fn send_keys(&self, target: &str, keys: &str) -> Result<(), TmuxError>;

    /// Make `target` the session's active window
    fn select_window(&self, target: &str) -> Result<(), TmuxError>;

    /// Names of all live sessions
    fn list_sessions(&self) -> Result<Vec<String>, TmuxError>;

    /// Point the attached client at session `name`
    fn switch_client(&self, name: &str) -> Result<(), TmuxError>;

    /// Open a transient overlay running `popup.command`
    fn display_popup(&self, popup: &Popup) -> Result<(), TmuxError>;
}

/// Characters tmux refuses in session names and replaces with '_'
const RESERVED_NAME_CHARS: [char; 2] = ['.', ':'];

/// Session name tmux will actually use for `name`
///
/// tmux silently rewrites '.' and ':' to '_' on new-session, so every lookup
/// has to go through the same mapping or the session is never found again.
pub fn session_name(name: &str) -> String {
    name.replace(RESERVED_NAME_CHARS, "_")
}

/// Target string for window `index` of `session`
pub fn window_target(session: &str, index: usize) -> String {
    format!("{session}:{index}")
}
