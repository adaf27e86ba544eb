// ABOUTME: Recipe data model describing a tmux session to materialize
//
// A recipe is a base directory plus an ordered list of windows. Window order is
// the tmux window index order: the first window is the session's initial window
// (index 1), the rest are created at 2, 3, ...

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Declarative description of a tmux session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Recipe {
    /// Base working directory for the session (tilde-expanded at load)
    pub start_directory: PathBuf,

    /// Windows in tmux index order
    #[serde(default)]
    pub windows: Vec<Window>,
}

/// A single window within a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Window {
    /// Directory override, joined onto the recipe's base directory
    #[serde(default)]
    pub start_directory: Option<PathBuf>,

    /// Shell command lines, sent verbatim in order
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Recipe {
    pub fn new(start_directory: impl Into<PathBuf>, windows: Vec<Window>) -> Self {
        Self {
            start_directory: start_directory.into(),
            windows,
        }
    }

    /// Directory the session itself is created in.
    ///
    /// This is the first window's resolved directory, or the base directory
    /// when the recipe has no windows.
    pub fn session_directory(&self) -> PathBuf {
        self.windows.first().map_or_else(
            || self.start_directory.clone(),
            |window| window.resolve_directory(&self.start_directory),
        )
    }

    /// Total number of command lines across all windows
    pub fn command_count(&self) -> usize {
        self.windows.iter().map(|w| w.commands.len()).sum()
    }
}

impl Window {
    pub fn new(start_directory: Option<&str>, commands: &[&str]) -> Self {
        Self {
            start_directory: start_directory.map(PathBuf::from),
            commands: commands.iter().map(ToString::to_string).collect(),
        }
    }

    /// Resolve this window's working directory against the recipe base.
    ///
    /// An absent or empty override inherits `base` unchanged; otherwise the
    /// override is joined onto `base` (an absolute override replaces it).
    pub fn resolve_directory(&self, base: &Path) -> PathBuf {
        match &self.start_directory {
            Some(dir) if !dir.as_os_str().is_empty() => base.join(dir),
            _ => base.to_path_buf(),
        }
    }
}
