//! Process-wide settings.
//!
//! Resolution order, later wins:
//! 1. Built-in defaults
//! 2. `~/.cheat_sheet_agent/config.toml` (or `$CHEATSHEET_CONFIG`)
//! 3. Environment variables (a `.env` file is loaded into the environment by `main`)
//! 4. Command-line flags, via [`ConfigOverrides`]
//!
//! The resulting [`Config`] is built once and passed by reference.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::types::{Difficulty, Format};

pub const CONFIG_DIR_NAME: &str = ".cheat_sheet_agent";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ENV_CONFIG_PATH: &str = "CHEATSHEET_CONFIG";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_API_BASE: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "CHEATSHEET_MODEL";
pub const ENV_MAX_TOKENS: &str = "CHEATSHEET_MAX_TOKENS";
pub const ENV_TEMPERATURE: &str = "CHEATSHEET_TEMPERATURE";
pub const ENV_DEFAULT_DIFFICULTY: &str = "CHEATSHEET_DEFAULT_DIFFICULTY";
pub const ENV_DEFAULT_FORMAT: &str = "CHEATSHEET_DEFAULT_FORMAT";
pub const ENV_OUTPUT_DIR: &str = "CHEATSHEET_OUTPUT_DIR";
pub const ENV_TIMEOUT_SECS: &str = "CHEATSHEET_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub default_difficulty: Difficulty,
    pub default_format: Format,
    pub default_include_examples: bool,
    pub default_exercise_count: u32,
    pub output_directory: PathBuf,
    pub api_base: String,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            max_tokens: 16000,
            temperature: 0.7,
            default_difficulty: Difficulty::Intermediate,
            default_format: Format::Comprehensive,
            default_include_examples: true,
            default_exercise_count: 20,
            output_directory: PathBuf::from("cheat_sheets"),
            api_base: "https://api.openai.com/v1".to_string(),
            timeout_secs: 600,
            api_key: None,
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub output_directory: Option<PathBuf>,
}

impl Config {
    /// `~/.cheat_sheet_agent/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Config file location, honoring `$CHEATSHEET_CONFIG`
    pub fn resolve_path<F>(env: &F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        non_empty(env(ENV_CONFIG_PATH))
            .map(PathBuf::from)
            .or_else(Self::default_path)
    }

    /// Load from the real process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    pub fn load_with<F>(env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match Self::resolve_path(&env) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(&env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env<F>(&mut self, env: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = non_empty(env(ENV_API_KEY)) {
            self.api_key = Some(key);
        }
        if let Some(base) = non_empty(env(ENV_API_BASE)) {
            self.api_base = base;
        }
        if let Some(model) = non_empty(env(ENV_MODEL)) {
            self.model = model;
        }
        if let Some(raw) = non_empty(env(ENV_MAX_TOKENS)) {
            self.max_tokens = parse_value(ENV_MAX_TOKENS, &raw)?;
        }
        if let Some(raw) = non_empty(env(ENV_TEMPERATURE)) {
            self.temperature = parse_value(ENV_TEMPERATURE, &raw)?;
        }
        if let Some(raw) = non_empty(env(ENV_TIMEOUT_SECS)) {
            self.timeout_secs = parse_value(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = non_empty(env(ENV_DEFAULT_DIFFICULTY)) {
            self.default_difficulty =
                Difficulty::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_DEFAULT_DIFFICULTY.to_string(),
                    value: raw.clone(),
                    reason: "expected beginner, intermediate, advanced or mixed".to_string(),
                })?;
        }
        if let Some(raw) = non_empty(env(ENV_DEFAULT_FORMAT)) {
            self.default_format = Format::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_DEFAULT_FORMAT.to_string(),
                value: raw.clone(),
                reason: "expected comprehensive or quick-reference".to_string(),
            })?;
        }
        if let Some(dir) = non_empty(env(ENV_OUTPUT_DIR)) {
            self.output_directory = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<(), ConfigError> {
        if let Some(model) = &overrides.model {
            self.model = model.clone();
        }
        if let Some(temperature) = overrides.temperature {
            self.temperature = temperature;
        }
        if let Some(max_tokens) = overrides.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(dir) = &overrides.output_directory {
            self.output_directory = dir.clone();
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(invalid("model", &self.model, "must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(invalid("max_tokens", "0", "must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(invalid(
                "temperature",
                &self.temperature.to_string(),
                "must be between 0.0 and 2.0",
            ));
        }
        if self.default_exercise_count == 0 {
            return Err(invalid(
                "default_exercise_count",
                "0",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Default level for cheat sheets. A `mixed` default only applies to
    /// practice documents, so cheat sheets fall back to intermediate.
    pub fn cheat_sheet_difficulty(&self) -> Difficulty {
        match self.default_difficulty {
            Difficulty::Mixed => Difficulty::Intermediate,
            level => level,
        }
    }

    /// Write the default settings to `path`. Returns `false` if a file is already there.
    pub fn write_default(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(&Self::default())?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(key, raw, "not a valid number"))
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let config =
            Config::load_with(env_from(&[(ENV_CONFIG_PATH, missing.to_str().unwrap())])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.output_directory, PathBuf::from("cheat_sheets"));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_file_then_env_precedence() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "model = \"gpt-4o-mini\"\ntemperature = 0.2\ndefault_format = \"quick-reference\"\napi_key = \"file-key\"\n",
        )
        .unwrap();

        let config = Config::load_with(env_from(&[
            (ENV_CONFIG_PATH, path.to_str().unwrap()),
            (ENV_TEMPERATURE, "0.9"),
            (ENV_API_KEY, "env-key"),
        ]))
        .unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert!((config.temperature - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.default_format, Format::QuickReference);
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        // untouched keys keep their defaults
        assert_eq!(config.max_tokens, 16000);
    }

    #[test]
    fn test_empty_env_key_is_ignored() {
        let mut config = Config::default();
        config.apply_env(&env_from(&[(ENV_API_KEY, "  ")])).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = Config::default();
        let err = config
            .apply_env(&env_from(&[(ENV_MAX_TOKENS, "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = config
            .apply_env(&env_from(&[(ENV_DEFAULT_DIFFICULTY, "expert")]))
            .unwrap_err();
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "model = [").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_cli_overrides_are_validated() {
        let mut config = Config::default();
        config
            .apply_overrides(&ConfigOverrides {
                model: Some("gpt-4.1".to_string()),
                output_directory: Some(PathBuf::from("out")),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.output_directory, PathBuf::from("out"));

        let err = config
            .apply_overrides(&ConfigOverrides {
                temperature: Some(3.5),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_write_default_does_not_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

        assert!(Config::write_default(&path).unwrap());
        assert!(!Config::write_default(&path).unwrap());

        let written = Config::from_file(&path).unwrap();
        assert_eq!(written, Config::default());
        assert!(!fs::read_to_string(&path).unwrap().contains("api_key"));
    }

    #[test]
    fn test_written_temperature_keeps_its_decimal_form() {
        let written = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(written.contains("temperature = 0.7\n"), "{}", written);
    }

    #[test]
    fn test_mixed_default_only_reaches_practice() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let config = Config::load_with(env_from(&[
            (ENV_CONFIG_PATH, missing.to_str().unwrap()),
            (ENV_DEFAULT_DIFFICULTY, "mixed"),
        ]))
        .unwrap();

        assert_eq!(config.default_difficulty, Difficulty::Mixed);
        assert_eq!(config.cheat_sheet_difficulty(), Difficulty::Intermediate);

        let advanced = Config {
            default_difficulty: Difficulty::Advanced,
            ..Config::default()
        };
        assert_eq!(advanced.cheat_sheet_difficulty(), Difficulty::Advanced);
    }
}
