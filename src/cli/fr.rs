// ABOUTME: CLI fr command - open a single recipe
//
// twin fr <name>   opens the named recipe
// twin fr          picks an unopened recipe with fzf and opens it
// twin fr --list   prints every available recipe name

use anyhow::Result;

use super::{FrArgs, OutputFormat};
use crate::config::{RecipeSource, TwinConfig};
use crate::picker::Fzf;
use crate::session::{open, pick_recipe, OpenOutcome, PickOutcome};
use crate::tmux::Tmux;

/// Execute the fr command
pub fn execute(args: FrArgs, format: OutputFormat) -> Result<()> {
    let config = TwinConfig::load()?;
    let recipes = config.recipes();

    if args.list {
        return list(&recipes, format);
    }

    Tmux::check_installed()?;
    let tmux = Tmux::new();

    match args.name {
        Some(name) => {
            let outcome = open(&name, &recipes, &tmux)?;
            report_open(&name, outcome);
        }
        None => {
            Fzf::check_installed()?;
            match pick_recipe(&recipes, &tmux, &Fzf::new())? {
                PickOutcome::NothingToPick => println!("no unopened recipes available"),
                PickOutcome::Dismissed => {}
                PickOutcome::Opened { name, outcome } => report_open(&name, outcome),
            }
        }
    }

    Ok(())
}

/// Print all available recipe names
fn list(recipes: &impl RecipeSource, format: OutputFormat) -> Result<()> {
    let names = recipes.recipe_names()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
        OutputFormat::Text => {
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn report_open(name: &str, outcome: OpenOutcome) {
    match outcome {
        OpenOutcome::Created => println!("created: {name}"),
        OpenOutcome::AlreadyExists => println!("skipped (already exists): {name}"),
    }
}
