// ABOUTME: Layout of tmux display-popup overlays
//
// The session switcher popup is sized to fit the longest session name and the
// title, one row per session plus border and prompt rows.

/// Title shown on the session switcher popup
pub const SWITCHER_TITLE: &str = "sybau";

/// Border style of the session switcher popup
pub const SWITCHER_STYLE: &str = "fg=magenta bold";

/// Columns taken by the popup border and fzf's gutter
const HORIZONTAL_CHROME: usize = 5;

/// Rows taken by the popup border, fzf prompt and info line
const VERTICAL_CHROME: usize = 4;

/// A transient overlay running a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub style: String,
    pub command: String,
}

impl Popup {
    /// Popup sized for picking one of `sessions`, running `command` inside
    pub fn session_switcher(sessions: &[String], command: impl Into<String>) -> Self {
        let title_width = SWITCHER_TITLE.chars().count() + HORIZONTAL_CHROME;
        let width = sessions
            .iter()
            .map(|s| s.chars().count() + HORIZONTAL_CHROME)
            .fold(title_width, usize::max);

        Self {
            title: SWITCHER_TITLE.to_string(),
            width,
            height: sessions.len() + VERTICAL_CHROME,
            style: SWITCHER_STYLE.to_string(),
            command: command.into(),
        }
    }

    /// Column of the popup's left edge
    pub const fn x(&self) -> usize {
        0
    }

    /// Row tmux anchors the popup at so it hugs the top of the client
    pub const fn y(&self) -> usize {
        self.height + 1
    }
}
