// ABOUTME: Brings up every recipe on the active list that is not already running
//
// Recipes are handled one at a time in list order. A failure on one name is
// logged and recorded, never fatal; the batch always runs to the end.

use serde::Serialize;
use tracing::{info, warn};

use super::open::{open, OpenOutcome, OpenStage};
use crate::config::RecipeSource;
use crate::tmux::Multiplexer;

/// A recipe the reconciler could not bring up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRecipe {
    pub name: String,
    pub stage: OpenStage,
    pub reason: String,
}

/// What a reconciliation pass did, each list in active-list order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedRecipe>,
}

impl ReconcileReport {
    /// True when no name was processed at all
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Open each of `names`, skipping the ones whose session already exists
pub fn reconcile_active<S, M>(names: &[String], recipes: &S, mux: &M) -> ReconcileReport
where
    S: RecipeSource + ?Sized,
    M: Multiplexer + ?Sized,
{
    let mut report = ReconcileReport::default();

    for name in names {
        match open(name, recipes, mux) {
            Ok(OpenOutcome::Created) => report.created.push(name.clone()),
            Ok(OpenOutcome::AlreadyExists) => report.skipped.push(name.clone()),
            Err(e) => {
                let stage = e.stage();
                let reason = format!("{:#}", anyhow::Error::new(e));
                warn!("Recipe '{}' failed: {}", name, reason);
                report.failed.push(FailedRecipe {
                    name: name.clone(),
                    stage,
                    reason,
                });
            }
        }
    }

    info!(
        "Reconciled {} recipe(s): {} created, {} skipped, {} failed",
        names.len(),
        report.created.len(),
        report.skipped.len(),
        report.failed.len()
    );
    report
}
