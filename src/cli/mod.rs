// ABOUTME: CLI argument parsing and command routing for twin
//
// Provides command-line interface for:
// - Spinning up every active recipe (tspmo)
// - Switching sessions through an fzf popup (sybau, sybau-picker)
// - Opening or listing single recipes (fr)

pub mod fr;
pub mod sybau;
pub mod tspmo;

use clap::{Parser, Subcommand, ValueEnum};

/// Shown under `--help` so files that fail to load are easy to diagnose
const RECIPE_FORMAT_HELP: &str = "\
Recipes are TOML files at <recipe-dir>/<name>.toml. Every recipe must set
start-directory. Unknown keys in twin.toml or in a recipe are rejected, so a
misspelled key fails to load instead of being silently ignored.

Session names are recipe names with '.' and ':' replaced by '_', matching
what tmux does.";

/// twin - tmux sessions from recipes
#[derive(Parser)]
#[command(name = "twin")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_long_help = RECIPE_FORMAT_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Spin up tmux sessions from the active recipes
    Tspmo,

    /// fzf-based session switcher in a tmux popup
    Sybau,

    /// Session picker that runs inside the sybau popup
    #[command(hide = true)]
    SybauPicker,

    /// Open a single recipe, picking one with fzf when no name is given
    Fr(FrArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tspmo => "tspmo",
            Self::Sybau => "sybau",
            Self::SybauPicker => "sybau-picker",
            Self::Fr(_) => "fr",
        }
    }
}

/// Arguments for the fr command
#[derive(clap::Args)]
pub struct FrArgs {
    /// Recipe to open
    #[arg(conflicts_with = "list")]
    pub name: Option<String>,

    /// Print all available recipe names
    #[arg(long)]
    pub list: bool,
}
