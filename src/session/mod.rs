// ABOUTME: Session flows that turn recipes into live tmux sessions
//
// materialize  - build one session from a recipe (no existence check)
// open         - check existence, load, materialize
// reconcile    - open every recipe on the active list, never failing as a whole
// pick         - fzf-driven recipe opener and session switcher

pub mod materialize;
pub mod open;
pub mod pick;
pub mod reconcile;

pub use materialize::{materialize, MaterializeError, Step};
pub use open::{open, OpenError, OpenOutcome, OpenStage};
pub use pick::{
    launch_switcher, pick_recipe, switch_session, unopened_recipes, LaunchOutcome, PickOutcome,
    SwitchOutcome,
};
pub use reconcile::{reconcile_active, FailedRecipe, ReconcileReport};
