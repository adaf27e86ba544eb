// ABOUTME: Turns a recipe into a live tmux session
//
// Callers must already know that no session with the target name exists; the
// materializer does not check again. Nothing is rolled back on failure, so a
// failed run can leave a partially built session behind.

use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::Recipe;
use crate::tmux::{window_target, Multiplexer, TmuxError, FIRST_WINDOW_INDEX};

/// Tmux operation a materialization was performing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    NewSession,
    SendKeys,
    NewWindow,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NewSession => "new-session",
            Self::SendKeys => "send-keys to",
            Self::NewWindow => "new-window",
        })
    }
}

#[derive(Debug, Error)]
#[error("{step} {target}")]
pub struct MaterializeError {
    pub step: Step,
    pub target: String,
    #[source]
    pub source: TmuxError,
}

impl MaterializeError {
    fn at(step: Step, target: &str) -> impl FnOnce(TmuxError) -> Self + '_ {
        move |source| Self {
            step,
            target: target.to_string(),
            source,
        }
    }
}

/// Build session `name` from `recipe`
///
/// The first window comes with the session itself, later windows are created
/// at indices 2, 3, ... and every window gets its commands typed in order.
/// The session always lands on its first window; failing to select it is
/// logged and ignored.
pub fn materialize<M>(mux: &M, name: &str, recipe: &Recipe) -> Result<(), MaterializeError>
where
    M: Multiplexer + ?Sized,
{
    mux.new_session(name, &recipe.session_directory())
        .map_err(MaterializeError::at(Step::NewSession, name))?;

    let first = window_target(name, FIRST_WINDOW_INDEX);
    if let Some(window) = recipe.windows.first() {
        send_commands(mux, &first, &window.commands)?;
    }

    for (position, window) in recipe.windows.iter().enumerate().skip(1) {
        let target = window_target(name, position + FIRST_WINDOW_INDEX);
        let directory = window.resolve_directory(&recipe.start_directory);

        mux.new_window(&target, &directory)
            .map_err(MaterializeError::at(Step::NewWindow, &target))?;
        send_commands(mux, &target, &window.commands)?;
    }

    if let Err(e) = mux.select_window(&first) {
        debug!("Ignoring failure to select {}: {}", first, e);
    }

    info!(
        "Materialized session '{}' with {} window(s)",
        name,
        recipe.windows.len().max(1)
    );
    Ok(())
}

fn send_commands<M>(mux: &M, target: &str, commands: &[String]) -> Result<(), MaterializeError>
where
    M: Multiplexer + ?Sized,
{
    for command in commands {
        mux.send_keys(target, command)
            .map_err(MaterializeError::at(Step::SendKeys, target))?;
    }
    Ok(())
}
