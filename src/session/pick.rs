// ABOUTME: Interactive flows built on the fuzzy picker
//
// - pick_recipe: choose a recipe without a live session and open it
// - switch_session: choose a live session and switch the client to it
// - launch_switcher: run the session switcher inside a tmux popup

use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::debug;

use super::open::{open, OpenOutcome};
use crate::config::RecipeSource;
use crate::picker::Picker;
use crate::tmux::{session_name, Multiplexer, Popup};

/// Result of the recipe picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Every recipe already has a live session
    NothingToPick,
    /// The picker closed without a selection
    Dismissed,
    Opened { name: String, outcome: OpenOutcome },
}

/// Result of the session switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    NoSessions,
    Dismissed,
    Switched(String),
}

/// Result of launching the switcher popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    NoSessions,
    Launched,
}

/// Recipes that do not have a live session yet, in recipe order
pub fn unopened_recipes<S, M>(recipes: &S, mux: &M) -> Result<Vec<String>>
where
    S: RecipeSource + ?Sized,
    M: Multiplexer + ?Sized,
{
    let names = recipes.recipe_names()?;
    let live: HashSet<String> = mux
        .list_sessions()
        .context("listing sessions")?
        .into_iter()
        .collect();

    Ok(names
        .into_iter()
        .filter(|name| !live.contains(&session_name(name)))
        .collect())
}

/// Let the user pick an unopened recipe and open it
pub fn pick_recipe<S, M, P>(recipes: &S, mux: &M, picker: &P) -> Result<PickOutcome>
where
    S: RecipeSource + ?Sized,
    M: Multiplexer + ?Sized,
    P: Picker + ?Sized,
{
    let candidates = unopened_recipes(recipes, mux)?;
    if candidates.is_empty() {
        return Ok(PickOutcome::NothingToPick);
    }

    let Some(name) = picker.pick(&candidates)? else {
        debug!("Recipe picker dismissed");
        return Ok(PickOutcome::Dismissed);
    };

    let outcome = open(&name, recipes, mux)?;
    Ok(PickOutcome::Opened { name, outcome })
}

/// Let the user pick a live session and switch the client to it
pub fn switch_session<M, P>(mux: &M, picker: &P) -> Result<SwitchOutcome>
where
    M: Multiplexer + ?Sized,
    P: Picker + ?Sized,
{
    let sessions = mux.list_sessions().context("listing sessions")?;
    if sessions.is_empty() {
        return Ok(SwitchOutcome::NoSessions);
    }

    let Some(name) = picker.pick(&sessions)? else {
        debug!("Session switcher dismissed");
        return Ok(SwitchOutcome::Dismissed);
    };

    mux.switch_client(&name)
        .with_context(|| format!("switching to session '{name}'"))?;
    Ok(SwitchOutcome::Switched(name))
}

/// Open the switcher popup, running `command` inside it
///
/// `command` is expected to run [`switch_session`] (twin's hidden
/// `sybau-picker` subcommand).
pub fn launch_switcher<M>(mux: &M, command: &str) -> Result<LaunchOutcome>
where
    M: Multiplexer + ?Sized,
{
    let sessions = mux.list_sessions().context("listing sessions")?;
    if sessions.is_empty() {
        return Ok(LaunchOutcome::NoSessions);
    }

    let popup = Popup::session_switcher(&sessions, command);
    mux.display_popup(&popup).context("opening switcher popup")?;
    Ok(LaunchOutcome::Launched)
}
