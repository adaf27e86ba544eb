// ABOUTME: Opens a single recipe as a tmux session unless it is already running
//
// This is the one place that checks session existence before materializing;
// the batch reconciler and the recipe picker both go through it.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::materialize::{materialize, MaterializeError};
use crate::config::{ConfigError, RecipeSource};
use crate::tmux::{session_name, Multiplexer, TmuxError};

/// Result of opening a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenOutcome {
    Created,
    AlreadyExists,
}

/// Phase of opening a recipe that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpenStage {
    Check,
    Load,
    Create,
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("checking for session '{name}'")]
    Check {
        name: String,
        #[source]
        source: TmuxError,
    },

    #[error("loading recipe '{name}'")]
    Load {
        name: String,
        #[source]
        source: ConfigError,
    },

    #[error("creating session '{name}'")]
    Create {
        name: String,
        #[source]
        source: MaterializeError,
    },
}

impl OpenError {
    pub const fn stage(&self) -> OpenStage {
        match self {
            Self::Check { .. } => OpenStage::Check,
            Self::Load { .. } => OpenStage::Load,
            Self::Create { .. } => OpenStage::Create,
        }
    }
}

/// Open recipe `name` as a session named after it
///
/// The session name is `name` with tmux's reserved characters replaced (see
/// [`session_name`]). Returns `AlreadyExists` without loading the recipe when
/// that session is live. Otherwise the recipe is loaded and materialized.
pub fn open<S, M>(name: &str, recipes: &S, mux: &M) -> Result<OpenOutcome, OpenError>
where
    S: RecipeSource + ?Sized,
    M: Multiplexer + ?Sized,
{
    let session = session_name(name);
    let exists = mux.has_session(&session).map_err(|source| OpenError::Check {
        name: name.to_string(),
        source,
    })?;
    if exists {
        debug!("Session '{}' already exists", session);
        return Ok(OpenOutcome::AlreadyExists);
    }

    let recipe = recipes.load_recipe(name).map_err(|source| OpenError::Load {
        name: name.to_string(),
        source,
    })?;

    materialize(mux, &session, &recipe).map_err(|source| OpenError::Create {
        name: name.to_string(),
        source,
    })?;

    Ok(OpenOutcome::Created)
}
