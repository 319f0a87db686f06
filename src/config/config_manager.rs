use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, GITHUB_API_URL_ENV, MODEL_OVERRIDE_ENV};
use crate::errors::{GitGradeError, GitGradeResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# GitGrade configuration
#
# Only non-secret settings live here. API keys and tokens are read from the
# environment variables named below.

[ai]
# Gemini model used for grading; `gitgrade models` lists the alternatives
model = "gemini-2.5-flash"

# Environment variable holding the Gemini API key
api_key_env = "GEMINI_API_KEY"

base_url = "https://generativelanguage.googleapis.com/v1beta"
temperature = 0.4
max_output_tokens = 8192

[github]
api_url = "https://api.github.com"

# Environment variable holding an optional personal access token
token_env = "GITHUB_TOKEN"

[server]
port = 8501
open_browser = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the user configuration (or defaults) and applies environment overrides.
    pub fn load() -> GitGradeResult<Config> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Config::default(),
        };

        let config = Self::apply_overrides(config, |name| std::env::var(name).ok());
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> GitGradeResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup(GITHUB_API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.github.api_url = api_url;
        }
        if let Some(model) = lookup(MODEL_OVERRIDE_ENV).filter(|v| !v.trim().is_empty()) {
            config.ai.model = model;
        }
        config
    }

    /// Reads the secret named by `env_name`, treating blank values as unset.
    pub fn read_secret(env_name: &str) -> Option<String> {
        std::env::var(env_name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub fn create_sample_config(path: &Path) -> GitGradeResult<()> {
        if path.exists() {
            return Err(GitGradeError::config_error(
                &format!("{} already exists", path.display()),
                None,
                Some("Edit the existing file or delete it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> GitGradeResult<()> {
        if config.ai.model.trim().is_empty() {
            return Err(GitGradeError::config_error("model must not be empty", Some("ai.model"), None));
        }

        for (field, url) in [("ai.base_url", &config.ai.base_url), ("github.api_url", &config.github.api_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(GitGradeError::config_error(
                    &format!("'{}' is not an http(s) URL", url),
                    Some(field),
                    None,
                ));
            }
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            return Err(GitGradeError::config_error(
                "temperature must be between 0.0 and 2.0",
                Some("ai.temperature"),
                None,
            ));
        }

        if config.ai.api_key_env.trim().is_empty() {
            return Err(GitGradeError::config_error(
                "api_key_env must name an environment variable",
                Some("ai.api_key_env"),
                Some("Use GEMINI_API_KEY"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn sample_config_round_trips_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

        ConfigManager::create_sample_config(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn create_sample_config_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai]\nmodel = \"custom\"\n").unwrap();

        assert!(ConfigManager::create_sample_config(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[ai]\nmodel = \"custom\"\n");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.server.open_browser);
        assert_eq!(config.ai.model, "gemini-2.5-flash");
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai\nmodel = ").unwrap();

        let err = ConfigManager::load_from(&path).unwrap_err();
        assert!(matches!(err, GitGradeError::ConfigurationError { .. }));
    }

    #[test]
    fn environment_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            (GITHUB_API_URL_ENV, "http://127.0.0.1:9999"),
            (MODEL_OVERRIDE_ENV, "gemini-1.5-pro"),
        ]);

        let config = ConfigManager::apply_overrides(Config::default(), |name| env.get(name).map(ToString::to_string));
        assert_eq!(config.github.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.ai.model, "gemini-1.5-pro");
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = Config::default();
        config.ai.temperature = 3.5;
        assert!(ConfigManager::validate_config(&config).is_err());

        let mut config = Config::default();
        config.github.api_url = "ftp://example.com".to_string();
        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
