use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::secrets::Secrets;
use crate::generation::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, GenerationOptions, Language};
use crate::paths;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default settings in the `[assistant]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default response language.
    pub language: Option<Language>,
    /// Default sampling temperature.
    pub temperature: Option<f32>,
    /// Default response length limit.
    pub max_tokens: Option<u32>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/assist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Resolved configuration after merging CLI arguments, config file and secrets.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for generation.
    pub model: String,
    /// Starting generation options for the session.
    pub options: GenerationOptions,
    /// Required API keys.
    pub secrets: Secrets,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub language: Option<Language>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default. Temperature
/// and max tokens from either source must already be in range.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
    secrets: Secrets,
) -> Result<ResolvedConfig> {
    let defaults = &config_file.assistant;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(defaults.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .to_string();

    let model = options
        .model
        .as_ref()
        .or(defaults.model.as_ref())
        .map_or(DEFAULT_MODEL, String::as_str)
        .to_string();

    let language = options.language.or(defaults.language).unwrap_or_default();
    let temperature = options
        .temperature
        .or(defaults.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);
    let max_tokens = options
        .max_tokens
        .or(defaults.max_tokens)
        .unwrap_or(DEFAULT_MAX_TOKENS);

    let options = GenerationOptions::new(temperature, max_tokens, language)?;

    Ok(ResolvedConfig {
        endpoint,
        model,
        options,
        secrets,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/assist/config.toml`
    /// or `~/.config/assist/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::AssistantError;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    fn test_secrets() -> Secrets {
        Secrets {
            tracing_api_key: "trace".to_string(),
            inference_api_key: "groq".to_string(),
        }
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            assistant: AssistantConfig {
                endpoint: Some("http://localhost:8080".to_string()),
                model: Some("file-model".to_string()),
                language: Some(Language::German),
                temperature: Some(0.8),
                max_tokens: Some(400),
            },
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.save(&create_test_config()).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded.assistant.endpoint,
            Some("http://localhost:8080".to_string())
        );
        assert_eq!(loaded.assistant.model, Some("file-model".to_string()));
        assert_eq!(loaded.assistant.language, Some(Language::German));
        assert_eq!(loaded.assistant.temperature, Some(0.8));
        assert_eq!(loaded.assistant.max_tokens, Some(400));
    }

    #[test]
    fn test_load_language_by_code() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            "[assistant]\nlanguage = \"pt\"\nmax_tokens = 100\n",
        )
        .unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.assistant.language, Some(Language::Portuguese));
        assert_eq!(loaded.assistant.max_tokens, Some(100));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        let config = manager.load_or_default().unwrap();
        assert!(config.assistant.model.is_none());
    }

    #[test]
    fn test_load_or_default_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[assistant]\nlanguage = \"Klingon\"\n").unwrap();

        assert!(manager.load_or_default().is_err());
    }

    #[test]
    fn test_resolve_config_builtin_defaults() {
        let resolved =
            resolve_config(&ResolveOptions::default(), &ConfigFile::default(), test_secrets())
                .unwrap();

        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.options, GenerationOptions::default());
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let resolved =
            resolve_config(&ResolveOptions::default(), &create_test_config(), test_secrets())
                .unwrap();

        assert_eq!(resolved.endpoint, "http://localhost:8080");
        assert_eq!(resolved.model, "file-model");
        assert_eq!(resolved.options.language(), Language::German);
        assert_eq!(resolved.options.temperature(), 0.8);
        assert_eq!(resolved.options.max_tokens(), 400);
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let options = ResolveOptions {
            endpoint: Some("http://cli.local".to_string()),
            model: Some("cli-model".to_string()),
            language: Some(Language::Thai),
            temperature: Some(0.1),
            max_tokens: Some(60),
        };

        let resolved = resolve_config(&options, &create_test_config(), test_secrets()).unwrap();

        assert_eq!(resolved.endpoint, "http://cli.local");
        assert_eq!(resolved.model, "cli-model");
        assert_eq!(resolved.options.language(), Language::Thai);
        assert_eq!(resolved.options.temperature(), 0.1);
        assert_eq!(resolved.options.max_tokens(), 60);
    }

    #[test]
    fn test_resolve_config_rejects_out_of_range_values() {
        let options = ResolveOptions {
            temperature: Some(1.5),
            ..ResolveOptions::default()
        };
        let err = resolve_config(&options, &ConfigFile::default(), test_secrets()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssistantError>(),
            Some(AssistantError::InvalidOption {
                name: "temperature",
                ..
            })
        ));

        let mut config = ConfigFile::default();
        config.assistant.max_tokens = Some(1000);
        let err = resolve_config(&ResolveOptions::default(), &config, test_secrets()).unwrap_err();
        assert!(err.to_string().contains("max_tokens"));
    }
}
