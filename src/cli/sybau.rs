// ABOUTME: CLI sybau commands - fzf session switcher
//
// sybau opens a tmux popup sized to the session list that re-runs this binary
// as `sybau-picker`; the picker lets the user choose and switches the client.

use anyhow::{Context, Result};

use crate::picker::Fzf;
use crate::session::{launch_switcher, switch_session, LaunchOutcome, SwitchOutcome};
use crate::tmux::Tmux;

/// Hidden subcommand the popup runs
const PICKER_SUBCOMMAND: &str = "sybau-picker";

/// Execute the sybau command
pub fn execute() -> Result<()> {
    Tmux::check_installed()?;

    // The popup's shell may not have this binary on PATH
    let exe = std::env::current_exe().context("resolving executable path")?;
    let command = format!(
        "{} {PICKER_SUBCOMMAND}",
        shell_escape::escape(exe.to_string_lossy())
    );

    if launch_switcher(&Tmux::new(), &command)? == LaunchOutcome::NoSessions {
        println!("no tmux sessions running");
    }
    Ok(())
}

/// Execute the sybau-picker command
pub fn execute_picker() -> Result<()> {
    Tmux::check_installed()?;
    Fzf::check_installed()?;

    if switch_session(&Tmux::new(), &Fzf::new())? == SwitchOutcome::NoSessions {
        println!("no tmux sessions running");
    }
    Ok(())
}
