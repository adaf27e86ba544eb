// ABOUTME: Recipe lookup by name from the configured recipe directory
//
// Recipes live at <recipe-dir>/<name>.toml. The RecipeSource trait lets the
// session flows load recipes without touching the filesystem in tests.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::{expand_tilde, ConfigError};
use crate::models::Recipe;

/// File extension recipes are stored with
pub const RECIPE_EXTENSION: &str = "toml";

/// Where session flows get recipes from
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource {
    /// Load and parse the recipe called `name`
    fn load_recipe(&self, name: &str) -> Result<Recipe, ConfigError>;

    /// Names of every available recipe, sorted
    fn recipe_names(&self) -> Result<Vec<String>, ConfigError>;
}

/// Recipe directory on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDir {
    path: PathBuf,
}

impl RecipeDir {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the document backing the recipe called `name`
    pub fn recipe_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{name}.{RECIPE_EXTENSION}"))
    }
}

impl RecipeSource for RecipeDir {
    fn load_recipe(&self, name: &str) -> Result<Recipe, ConfigError> {
        let path = self.recipe_path(name);
        debug!("Loading recipe '{}' from {}", name, path.display());

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let mut recipe: Recipe =
            toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })?;

        recipe.start_directory = expand_tilde(&recipe.start_directory);
        Ok(recipe)
    }

    fn recipe_names(&self) -> Result<Vec<String>, ConfigError> {
        let list_error = |source| ConfigError::ListRecipes {
            path: self.path.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(list_error)? {
            let path = entry.map_err(list_error)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(RECIPE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}
