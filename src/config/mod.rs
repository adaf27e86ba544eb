// ABOUTME: Configuration management for twin
// Handles twin.toml discovery and parsing, tilde expansion, and the recipe directory

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub mod recipes;

pub use recipes::{RecipeDir, RecipeSource};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TWIN_CONFIG_DIR";

/// Name of the top-level config document inside the config directory
pub const CONFIG_FILE_NAME: &str = "twin.toml";

/// Recipe directory used when twin.toml does not set `recipe-dir`
pub const DEFAULT_RECIPE_DIR: &str = "recipes";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("loading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("listing recipes in {}", .path.display())]
    ListRecipes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// On-disk shape of twin.toml
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    recipe_dir: Option<PathBuf>,

    #[serde(default)]
    active: Vec<String>,
}

/// Loaded twin configuration with all paths resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwinConfig {
    /// Directory twin.toml was read from
    pub config_dir: PathBuf,

    /// Directory holding `<name>.toml` recipe files
    pub recipe_dir: PathBuf,

    /// Recipe names that `tspmo` should bring up, in order
    pub active: Vec<String>,
}

impl TwinConfig {
    /// Load twin.toml from the default config directory
    pub fn load() -> Result<Self, ConfigError> {
        let dir = config_dir()?;
        Self::load_from_dir(&dir)
    }

    /// Load twin.toml from an explicit config directory
    ///
    /// `recipe-dir` is tilde-expanded; a relative value is resolved against
    /// `dir`, and a missing value falls back to `<dir>/recipes`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        debug!("Loading config from {}", path.display());

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;

        let recipe_dir = match file.recipe_dir {
            Some(raw) => {
                let expanded = expand_tilde(&raw);
                if expanded.is_relative() {
                    dir.join(expanded)
                } else {
                    expanded
                }
            }
            None => dir.join(DEFAULT_RECIPE_DIR),
        };

        Ok(Self {
            config_dir: dir.to_path_buf(),
            recipe_dir,
            active: file.active,
        })
    }

    /// Recipe source backed by this config's recipe directory
    pub fn recipes(&self) -> RecipeDir {
        RecipeDir::new(self.recipe_dir.clone())
    }
}

/// Resolve the config directory
///
/// `$TWIN_CONFIG_DIR` wins when set and non-empty, otherwise `~/.config/twin`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(expand_tilde(Path::new(&dir)));
    }

    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(".config").join("twin"))
}

/// Replace a leading `~` component with the user's home directory
///
/// Paths like `~user/x` are left alone, as is everything when the home
/// directory cannot be determined.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
