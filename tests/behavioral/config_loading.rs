// ABOUTME: Behavioral tests for loading twin.toml and recipe files
//
// Works on real files in temporary directories and drives the same
// TwinConfig -> RecipeDir path the commands use.

use super::fixtures::{MapRecipes, RecordingMux, TestConfig};
use anyhow::Result;
use pretty_assertions::assert_eq;
use twin::config::{ConfigError, RecipeSource, TwinConfig};
use twin::models::{Recipe, Window};
use twin::session::unopened_recipes;

const PROJ_RECIPE: &str = r#"
start-directory = "/home/u/proj"

[[windows]]
commands = ["nvim"]

[[windows]]
start-directory = "server"
commands = ["npm i", "npm run dev"]
"#;

#[test]
fn test_recipe_file_loads_through_config() -> Result<()> {
    let config = TestConfig::new(r#"active = ["proj"]"#)?;
    config.add_recipe("proj", PROJ_RECIPE)?;

    let twin = TwinConfig::load_from_dir(config.path())?;
    assert_eq!(twin.active, vec!["proj".to_string()]);

    let recipe = twin.recipes().load_recipe("proj")?;
    assert_eq!(
        recipe,
        Recipe::new(
            "/home/u/proj",
            vec![
                Window::new(None, &["nvim"]),
                Window::new(Some("server"), &["npm i", "npm run dev"]),
            ],
        )
    );
    Ok(())
}

#[test]
fn test_relative_recipe_dir_resolves_against_config_dir() -> Result<()> {
    let config = TestConfig::new(r#"recipe-dir = "custom""#)?;
    std::fs::create_dir_all(config.path().join("custom"))?;
    std::fs::write(config.path().join("custom/side.toml"), "start-directory = \"/tmp\"\n")?;

    let twin = TwinConfig::load_from_dir(config.path())?;
    assert_eq!(twin.recipe_dir, config.path().join("custom"));
    assert_eq!(twin.recipes().recipe_names()?, vec!["side".to_string()]);
    Ok(())
}

#[test]
fn test_recipe_names_are_sorted_toml_stems() -> Result<()> {
    let config = TestConfig::new("")?;
    config.add_recipe("zeta", "start-directory = \"/z\"\n")?;
    config.add_recipe("alpha", "start-directory = \"/a\"\n")?;
    std::fs::write(config.path().join("recipes/notes.md"), "not a recipe")?;
    std::fs::create_dir_all(config.path().join("recipes/nested.toml"))?;

    let names = TwinConfig::load_from_dir(config.path())?.recipes().recipe_names()?;
    assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
    Ok(())
}

#[test]
fn test_missing_recipe_reports_its_path() -> Result<()> {
    let config = TestConfig::new("")?;
    let twin = TwinConfig::load_from_dir(config.path())?;

    let err = twin.recipes().load_recipe("nope").unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("nope.toml"));
    Ok(())
}

#[test]
fn test_unknown_recipe_field_is_a_parse_error() -> Result<()> {
    let config = TestConfig::new("")?;
    config.add_recipe("typo", "start-directory = \"/t\"\nwindow = []\n")?;

    let err = TwinConfig::load_from_dir(config.path())?
        .recipes()
        .load_recipe("typo")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let chain = format!("{:#}", anyhow::Error::new(err));
    assert!(chain.contains("typo.toml"), "{chain}");
    assert!(chain.contains("unknown field `window`"), "{chain}");
    Ok(())
}

#[test]
fn test_recipe_without_start_directory_is_rejected() -> Result<()> {
    let config = TestConfig::new("")?;
    config.add_recipe("bare", "[[windows]]\ncommands = [\"ls\"]\n")?;

    let result = TwinConfig::load_from_dir(config.path())?
        .recipes()
        .load_recipe("bare");
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let chain = format!("{:#}", anyhow::Error::new(err));
    assert!(chain.contains("missing field `start-directory`"), "{chain}");
    Ok(())
}

#[test]
fn test_unknown_config_key_is_a_parse_error() -> Result<()> {
    let config = TestConfig::new("recipe_dir = \"/r\"\n")?;

    let err = TwinConfig::load_from_dir(config.path()).unwrap_err();
    let chain = format!("{:#}", anyhow::Error::new(err));
    assert!(chain.contains("unknown field `recipe_dir`"), "{chain}");
    Ok(())
}

#[test]
fn test_missing_config_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TwinConfig::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { ref path, .. } if path == &dir.path().join("twin.toml")));
}

#[test]
fn test_unopened_recipes_hide_live_sessions() -> Result<()> {
    let recipes = MapRecipes::new()
        .with("front", Recipe::new("/f", vec![]))
        .with("back", Recipe::new("/b", vec![]));
    let mux = RecordingMux::with_sessions(&["front", "unrelated"]);

    assert_eq!(unopened_recipes(&recipes, &mux)?, vec!["back".to_string()]);
    Ok(())
}

#[test]
fn test_tilde_start_directory_is_expanded() -> Result<()> {
    let config = TestConfig::new("")?;
    config.add_recipe("home", "start-directory = \"~/work\"\n")?;

    let recipe = TwinConfig::load_from_dir(config.path())?
        .recipes()
        .load_recipe("home")?;
    let Some(home) = dirs::home_dir() else {
        eprintln!("Skipping test: no home directory");
        return Ok(());
    };
    assert_eq!(recipe.start_directory, home.join("work"));
    Ok(())
}
