// ABOUTME: Multiplexer implementation that shells out to the tmux binary
//
// Every call is a blocking tmux invocation. Session targets are prefixed with
// '=' so tmux only accepts exact session-name matches.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

use super::{Multiplexer, Popup, TmuxError};

/// Name of the tmux executable looked up on PATH
pub const TMUX_BINARY: &str = "tmux";

/// stderr fragments tmux prints when no server is running
const NO_SERVER_MARKERS: [&str; 2] = ["no server running", "error connecting to"];

/// Restrict a tmux target to an exact session-name match
fn exact(target: &str) -> String {
    format!("={target}")
}

/// tmux driven through its command-line interface
#[derive(Debug, Clone, Default)]
pub struct Tmux {
    /// Server socket name (`tmux -L`), default server when unset
    socket_name: Option<String>,
    /// Config file the server is started with (`tmux -f`)
    config_file: Option<PathBuf>,
}

impl Tmux {
    /// Talk to the user's default tmux server
    pub const fn new() -> Self {
        Self {
            socket_name: None,
            config_file: None,
        }
    }

    /// Talk to the server listening on socket `name` instead
    #[must_use]
    pub fn with_socket(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }

    /// Start the server with `path` as its config file
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Check if tmux is installed on the host
    pub fn check_installed() -> Result<(), TmuxError> {
        which::which(TMUX_BINARY)
            .map(|_| ())
            .map_err(|_| TmuxError::NotInstalled)
    }

    fn command(&self, subcommand: &str) -> Command {
        let mut cmd = Command::new(TMUX_BINARY);
        if let Some(socket) = &self.socket_name {
            cmd.args(["-L", socket.as_str()]);
        }
        if let Some(config) = &self.config_file {
            cmd.arg("-f").arg(config);
        }
        cmd.arg(subcommand);
        cmd
    }

    /// Type `keys` into `target` as literal text, then press Enter
    ///
    /// Without -l a command line that happens to be a key name ("Up",
    /// "Escape", "F1") would be sent as that key.
    fn send_keys_commands(&self, target: &str, keys: &str) -> [Command; 2] {
        let mut literal = self.command("send-keys");
        literal.args(["-t", exact(target).as_str(), "-l", keys]);

        let mut enter = self.command("send-keys");
        enter.args(["-t", exact(target).as_str(), "C-m"]);

        [literal, enter]
    }

    /// Spawn `cmd` and wait for it, capturing stdout and stderr
    fn output(mut cmd: Command, subcommand: &'static str) -> Result<Output, TmuxError> {
        debug!("Running {:?}", cmd);
        cmd.output().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                TmuxError::NotInstalled
            } else {
                TmuxError::Io {
                    command: subcommand,
                    source,
                }
            }
        })
    }

    /// Spawn `cmd` and require a successful exit
    fn run(cmd: Command, subcommand: &'static str, target: &str) -> Result<Output, TmuxError> {
        let output = Self::output(cmd, subcommand)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(TmuxError::command_failed(subcommand, target, &output))
        }
    }
}

impl Multiplexer for Tmux {
    fn has_session(&self, name: &str) -> Result<bool, TmuxError> {
        let mut cmd = self.command("has-session");
        cmd.args(["-t", exact(name).as_str()]);

        // has-session reports absence through its exit status
        let output = Self::output(cmd, "has-session")?;
        Ok(output.status.success())
    }

    fn new_session(&self, name: &str, start_directory: &Path) -> Result<(), TmuxError> {
        let mut cmd = self.command("new-session");
        cmd.args(["-d", "-s", name, "-c"]).arg(start_directory);
        Self::run(cmd, "new-session", name).map(drop)
    }

    fn new_window(&self, target: &str, start_directory: &Path) -> Result<(), TmuxError> {
        let mut cmd = self.command("new-window");
        cmd.args(["-t", exact(target).as_str(), "-c"]).arg(start_directory);
        Self::run(cmd, "new-window", target).map(drop)
    }

    fn send_keys(&self, target: &str, keys: &str) -> Result<(), TmuxError> {
        let [literal, enter] = self.send_keys_commands(target, keys);
        Self::run(literal, "send-keys", target)?;
        Self::run(enter, "send-keys", target).map(drop)
    }

    fn select_window(&self, target: &str) -> Result<(), TmuxError> {
        let mut cmd = self.command("select-window");
        cmd.args(["-t", exact(target).as_str()]);
        Self::run(cmd, "select-window", target).map(drop)
    }

    fn list_sessions(&self) -> Result<Vec<String>, TmuxError> {
        let mut cmd = self.command("list-sessions");
        cmd.args(["-F", "#{session_name}"]);

        let output = Self::output(cmd, "list-sessions")?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if NO_SERVER_MARKERS.iter().any(|m| stderr.contains(m)) {
                debug!("No tmux server running, treating as zero sessions");
                return Ok(Vec::new());
            }
            return Err(TmuxError::command_failed("list-sessions", "", &output));
        }

        Ok(parse_session_names(&String::from_utf8_lossy(&output.stdout)))
    }

    fn switch_client(&self, name: &str) -> Result<(), TmuxError> {
        let mut cmd = self.command("switch-client");
        cmd.args(["-t", exact(name).as_str()]);
        Self::run(cmd, "switch-client", name).map(drop)
    }

    fn display_popup(&self, popup: &Popup) -> Result<(), TmuxError> {
        let mut cmd = self.command("display-popup");
        cmd.args(["-T", popup.title.as_str()])
            .args(["-x", popup.x().to_string().as_str()])
            .args(["-y", popup.y().to_string().as_str()])
            .args(["-w", popup.width.to_string().as_str()])
            .args(["-h", popup.height.to_string().as_str()])
            .args(["-S", popup.style.as_str()])
            .args(["-E", popup.command.as_str()]);
        Self::run(cmd, "display-popup", &popup.title).map(drop)
    }
}

/// Parse `list-sessions -F #{session_name}` output into names
fn parse_session_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
