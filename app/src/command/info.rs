use tasklift_config::{API_KEY_ENV, Config};
use tasklift_core::Category;

/// Strategy for displaying configuration information.
///
/// Shows the effective settings after environment overrides, with the API
/// key masked, and whether remote extraction will be attempted.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?.with_env_overrides();

        println!("=== tasklift Configuration ===\n");

        println!("Gemini:");
        println!("  API Key: {}", mask_key(&config.providers.gemini.api_key));
        println!("  Model: {}", config.providers.gemini.model);
        println!("  Base URL: {}", config.providers.gemini.base_url);
        println!("  (key may be overridden by {API_KEY_ENV})");
        println!();

        println!("Extraction:");
        println!("  Remote Enabled: {}", config.extraction.remote_enabled);
        println!("  Timeout: {}s", config.extraction.timeout_secs);
        let mode = if config.remote_configured() {
            "remote with pattern fallback"
        } else {
            "pattern rules only"
        };
        println!("  Mode: {mode}");
        println!();

        let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
        println!("Categories: {}", labels.join(", "));

        Ok(())
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.is_empty() {
        "(not set)".to_string()
    } else if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_keys_by_length() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("short"), "***");
        assert_eq!(mask_key("AIzaSyExampleKey1234"), "AIza...1234");
    }
}
