use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::director::RecipeBook;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

/// Settings for the command-line demo. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub output: OutputConfig,
    pub recipes: RecipeBook,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|err| AppError::config(path, format!("cannot read file: {err}")))?;
        let config = Self::from_toml_str(&content).map_err(|err| AppError::config(path, err.to_string()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::director::Recipe;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_gives_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!(config.output.color);
        assert_eq!(config.recipes.basic, Recipe::basic());
    }

    #[test]
    fn test_partial_recipe_override() {
        let config = DemoConfig::from_toml_str(
            r#"
[output]
color = false

[recipes.advanced]
duration_weeks = 16
difficulty = "Expert"
subjects = ["Compilers", "Operating Systems"]
"#,
        )
        .unwrap();

        assert!(!config.output.color);
        assert!(!config.output.json);
        assert_eq!(config.recipes.basic, Recipe::basic());
        assert_eq!(
            config.recipes.advanced,
            Recipe::new(16, "Expert", &["Compilers", "Operating Systems"])
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DemoConfig::from_toml_str("[output]\ncolour = true\n").is_err());
        assert!(DemoConfig::from_toml_str("[recipes.intermediate]\nduration_weeks = 6\n").is_err());
    }

    #[test]
    fn test_incomplete_recipe_rejected() {
        let result = DemoConfig::from_toml_str("[recipes.basic]\nduration_weeks = 6\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\njson = true").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert!(config.output.json);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let error = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(error, AppError::Config { .. }));
        assert!(error.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(DemoConfig::load_or_default(None).unwrap(), DemoConfig::default());
    }
}
