// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - RecordingMux: in-memory Multiplexer that records every call
// - MapRecipes: in-memory RecipeSource
// - TestConfig: temporary config directory with twin.toml and recipes
// - IsolatedTmux: a real tmux server on a private socket
// - require_tmux!(): Skip test if tmux unavailable

#![allow(dead_code)]

use anyhow::Result;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;
use twin::config::{ConfigError, RecipeSource, CONFIG_FILE_NAME};
use twin::models::Recipe;
use twin::tmux::{Multiplexer, Popup, Tmux, TmuxError};

/// A call made against the RecordingMux
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewSession { name: String, dir: PathBuf },
    NewWindow { target: String, dir: PathBuf },
    SendKeys { target: String, keys: String },
    SelectWindow { target: String },
    SwitchClient { name: String },
    DisplayPopup { popup: Popup },
}

/// In-memory multiplexer recording every mutating call in order
#[derive(Debug, Default)]
pub struct RecordingMux {
    live: RefCell<BTreeSet<String>>,
    calls: RefCell<Vec<Call>>,
    fail_command: Option<&'static str>,
    fail_target: Option<String>,
}

impl RecordingMux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with sessions `names` already live
    pub fn with_sessions(names: &[&str]) -> Self {
        let mux = Self::new();
        mux.live
            .borrow_mut()
            .extend(names.iter().map(ToString::to_string));
        mux
    }

    /// Make `command` fail whenever it is aimed at `target`
    pub fn failing(mut self, command: &'static str, target: &str) -> Self {
        self.fail_command = Some(command);
        self.fail_target = Some(target.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, command: &'static str, target: &str, call: Call) -> Result<(), TmuxError> {
        self.calls.borrow_mut().push(call);
        if self.fail_command == Some(command) && self.fail_target.as_deref() == Some(target) {
            return Err(TmuxError::CommandFailed {
                command,
                target: target.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Multiplexer for RecordingMux {
    fn has_session(&self, name: &str) -> Result<bool, TmuxError> {
        Ok(self.live.borrow().contains(name))
    }

    fn new_session(&self, name: &str, start_directory: &Path) -> Result<(), TmuxError> {
        self.record(
            "new-session",
            name,
            Call::NewSession {
                name: name.to_string(),
                dir: start_directory.to_path_buf(),
            },
        )?;
        self.live.borrow_mut().insert(name.to_string());
        Ok(())
    }

    fn new_window(&self, target: &str, start_directory: &Path) -> Result<(), TmuxError> {
        self.record(
            "new-window",
            target,
            Call::NewWindow {
                target: target.to_string(),
                dir: start_directory.to_path_buf(),
            },
        )
    }

    fn send_keys(&self, target: &str, keys: &str) -> Result<(), TmuxError> {
        self.record(
            "send-keys",
            target,
            Call::SendKeys {
                target: target.to_string(),
                keys: keys.to_string(),
            },
        )
    }

    fn select_window(&self, target: &str) -> Result<(), TmuxError> {
        self.record(
            "select-window",
            target,
            Call::SelectWindow {
                target: target.to_string(),
            },
        )
    }

    fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        Ok(self.live.borrow().iter().cloned().collect())
    }

    fn switch_client(&self, name: &str) -> Result<(), TmuxError> {
        self.record(
            "switch-client",
            name,
            Call::SwitchClient {
                name: name.to_string(),
            },
        )
    }

    fn display_popup(&self, popup: &Popup) -> Result<(), TmuxError> {
        self.record(
            "display-popup",
            &popup.title,
            Call::DisplayPopup {
                popup: popup.clone(),
            },
        )
    }
}

/// In-memory recipe source; unknown names fail like a missing file
#[derive(Debug, Default)]
pub struct MapRecipes {
    recipes: HashMap<String, Recipe>,
    loads: RefCell<Vec<String>>,
}

impl MapRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, recipe: Recipe) -> Self {
        self.recipes.insert(name.to_string(), recipe);
        self
    }

    /// Names passed to load_recipe, in call order
    pub fn loads(&self) -> Vec<String> {
        self.loads.borrow().clone()
    }
}

impl RecipeSource for MapRecipes {
    fn load_recipe(&self, name: &str) -> Result<Recipe, ConfigError> {
        self.loads.borrow_mut().push(name.to_string());
        self.recipes
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::Read {
                path: PathBuf::from(format!("/recipes/{name}.toml")),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }

    fn recipe_names(&self) -> Result<Vec<String>, ConfigError> {
        let mut names: Vec<String> = self.recipes.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Temporary config directory with a twin.toml and a recipes/ directory
pub struct TestConfig {
    pub dir: TempDir,
}

impl TestConfig {
    pub fn new(twin_toml: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join(CONFIG_FILE_NAME), twin_toml)?;
        fs::create_dir_all(dir.path().join("recipes"))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write recipes/<name>.toml
    pub fn add_recipe(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.dir.path().join("recipes").join(format!("{name}.toml")), content)?;
        Ok(())
    }
}

/// Check if tmux is available on the system
pub fn tmux_available() -> bool {
    Command::new("tmux")
        .args(["-V"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Macro to skip test if tmux is not available
#[macro_export]
macro_rules! require_tmux {
    () => {
        if !super::fixtures::tmux_available() {
            eprintln!("Skipping test: tmux not available");
            return Ok(());
        }
    };
}

/// Generate a name unique to this test process
pub fn unique_name(prefix: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!(
        "twin_{}_{}_{}",
        prefix,
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// A tmux server on a private socket, killed on drop
///
/// The server is configured with base-index 1 so window numbering matches
/// what recipes assume regardless of the user's own tmux.conf.
pub struct IsolatedTmux {
    pub socket: String,
    pub tmux: Tmux,
    _config_dir: TempDir,
}

impl IsolatedTmux {
    pub fn new() -> Result<Self> {
        let config_dir = TempDir::new()?;
        let config_path = config_dir.path().join("tmux.conf");
        fs::write(&config_path, "set -g base-index 1\n")?;

        let socket = unique_name("sock");
        let tmux = Tmux::new()
            .with_socket(socket.clone())
            .with_config_file(config_path);

        Ok(Self {
            socket,
            tmux,
            _config_dir: config_dir,
        })
    }

    /// Run a raw tmux command against this server and return stdout
    pub fn raw(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("tmux")
            .args(["-L", self.socket.as_str()])
            .args(args)
            .output()?;
        if !output.status.success() {
            anyhow::bail!(
                "tmux {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}

impl Drop for IsolatedTmux {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .args(["-L", self.socket.as_str(), "kill-server"])
            .output();
    }
}
