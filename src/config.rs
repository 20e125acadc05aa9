// ABOUTME: Configuration loading for shanti.
// ABOUTME: Reads ~/.shanti/config.toml plus CLI overrides.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub practice: PracticeConfig,
}

/// Gemini assistant configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// Jaap counting defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    pub default_target: u32,
    pub targets: Vec<u32>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            default_target: 11,
            targets: vec![11, 21, 108],
        }
    }
}

impl Config {
    /// Load config from ~/.shanti/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Directory holding all shanti state (~/.shanti).
    pub fn base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shanti")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::base_dir().join("config.toml")
    }

    /// Path to the persisted sessions file.
    pub fn sessions_path() -> PathBuf {
        Self::base_dir().join("sessions.json")
    }

    /// Path to the catalog override file.
    pub fn catalog_path() -> PathBuf {
        Self::base_dir().join("catalog.toml")
    }

    /// Path to the system-instruction override file.
    pub fn instruction_path() -> PathBuf {
        Self::base_dir().join("assistant.md")
    }

    /// Path to the secrets env file (GEMINI_API_KEY lives here or in .env).
    pub fn secrets_env_path() -> PathBuf {
        Self::base_dir().join("secrets.env")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.assistant.model, "gemini-3-flash-preview");
        assert_eq!(config.assistant.temperature, 0.7);
        assert_eq!(config.practice.default_target, 11);
        assert_eq!(config.practice.targets, vec![11, 21, 108]);
    }

    #[test]
    fn parse_config_toml() {
        let toml_str = r#"
[assistant]
model = "gemini-2.0-flash"
temperature = 0.4
base_url = "http://localhost:9090"

[practice]
default_target = 21
targets = [21, 54, 108]
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(config.assistant.temperature, 0.4);
        assert_eq!(config.assistant.base_url, "http://localhost:9090");
        assert_eq!(config.practice.default_target, 21);
        assert_eq!(config.practice.targets, vec![21, 54, 108]);
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let toml_str = r#"
[practice]
default_target = 108
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.practice.default_target, 108);
        assert_eq!(config.practice.targets, vec![11, 21, 108]);
        assert_eq!(config.assistant.model, "gemini-3-flash-preview");
    }
}
