use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub whisper: WhisperConfig,
    pub normalizer: NormalizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WhisperConfig {
    /// Model size to load: "tiny", "base", "small", "medium", "large".
    pub model: Option<String>,
    /// Source language of the audio (ISO code).
    pub language: Option<String>,
    /// Path to the whisper executable. Resolved from PATH when unset.
    pub command_path: Option<String>,
    /// Speech provider name. Only "whisper-cli" ships today.
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Generation backend for text normalization: "mock" or "openai".
    pub backend: Option<String>,
    pub api_key: Option<String>,
    pub api_endpoint: Option<String>,
    pub model: Option<String>,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model: Some("base".to_string()),
            language: Some("es".to_string()),
            command_path: None,
            provider: Some("whisper-cli".to_string()),
        }
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            backend: Some("mock".to_string()),
            api_key: None,
            api_endpoint: None,
            model: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.whisper.model.as_deref(), Some("base"));
        assert_eq!(parsed.whisper.language.as_deref(), Some("es"));
        assert_eq!(parsed.normalizer.backend.as_deref(), Some("mock"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[whisper]\nmodel = \"small\"\n").unwrap();

        assert_eq!(parsed.whisper.model.as_deref(), Some("small"));
        assert_eq!(parsed.whisper.language.as_deref(), Some("es"));
        assert_eq!(parsed.normalizer.backend.as_deref(), Some("mock"));
    }
}
