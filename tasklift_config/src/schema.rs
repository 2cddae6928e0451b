use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides `providers.gemini.api_key`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const CONFIG_DIR: &str = "tasklift";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "GeminiConfig::default_model")]
    pub model: String,
    #[serde(default = "GeminiConfig::default_base_url")]
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: Self::default_model(),
            base_url: Self::default_base_url(),
        }
    }
}

impl GeminiConfig {
    fn default_model() -> String {
        "gemini-pro".to_string()
    }

    fn default_base_url() -> String {
        "https://generativelanguage.googleapis.com/v1beta".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtractionConfig {
    /// Try the remote service before falling back to pattern extraction.
    #[serde(default = "ExtractionConfig::default_remote_enabled")]
    pub remote_enabled: bool,
    /// Upper bound on one remote request, in seconds.
    #[serde(default = "ExtractionConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            remote_enabled: Self::default_remote_enabled(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl ExtractionConfig {
    const fn default_remote_enabled() -> bool {
        true
    }

    const fn default_timeout_secs() -> u64 {
        10
    }
}

impl Config {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    /// Load `~/tasklift/config.json`, failing if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'tasklift init' to create config.",
                config_path.display()
            );
        }

        Self::load_from(&config_path)
    }

    /// Load the config file if there is one, otherwise use defaults
    /// (pattern extraction only until a key is supplied).
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides on top of the file contents.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    #[must_use]
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {API_KEY_ENV}");
            self.providers.gemini.api_key = key;
        }
        self
    }

    /// Whether a remote extractor should be wired up at all.
    #[must_use]
    pub fn remote_configured(&self) -> bool {
        self.extraction.remote_enabled && !self.providers.gemini.api_key.trim().is_empty()
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "providers": {
    "gemini": {
      "api_key": "",
      "model": "gemini-pro",
      "base_url": "https://generativelanguage.googleapis.com/v1beta"
    }
  },
  "extraction": {
    "remote_enabled": true,
    "timeout_secs": 10
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Add your Gemini API key (or export {API_KEY_ENV})");
        println!("   2. Run 'tasklift add \"Meeting in AB1-324 at 9pm\"'");
        println!();
        println!("🔧 Configuration options:");
        println!("   - extraction.remote_enabled: false keeps everything offline");
        println!("   - extraction.timeout_secs: how long to wait for the service");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should parse");
        assert!(config.extraction.remote_enabled);
        assert_eq!(config.extraction.timeout_secs, 10);
        assert_eq!(config.providers.gemini.model, "gemini-pro");
        assert!(!config.remote_configured());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn key_and_switch_decide_remote() {
        let config: Config = serde_json::from_str(
            r#"{"providers": {"gemini": {"api_key": "abc"}}, "extraction": {"remote_enabled": false}}"#,
        )
        .expect("config should parse");
        assert!(!config.remote_configured());

        let mut config = config;
        config.extraction.remote_enabled = true;
        assert!(config.remote_configured());
    }

    #[test]
    fn override_replaces_key_only_when_non_blank() {
        let config = Config::default().with_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.providers.gemini.api_key, "from-env");
        assert!(config.remote_configured());

        let config = config.with_api_key_override(Some("   ".to_string()));
        assert_eq!(config.providers.gemini.api_key, "from-env");

        let config = Config::default().with_api_key_override(None);
        assert!(!config.remote_configured());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn load_from_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "tasklift-config-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"extraction": {"timeout_secs": 3}}"#)
            .expect("temp config should be writable");

        let config = Config::load_from(&path).expect("config should load");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.extraction.timeout_secs, 3);
        assert!(config.extraction.remote_enabled);
    }
}
