//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a unit struct implementing [`CommandStrategy`] with its
//! own input type, dispatched statically from `main`.

use std::sync::Arc;
use std::time::Duration;
use tasklift_config::Config;
use tasklift_core::TaskExtractor;
use tasklift_extract::ExtractionPipeline;
use tasklift_providers::GeminiExtractor;
use tracing::info;

mod add;
mod extract;
mod info;
mod init;
mod version;

pub use add::AddStrategy;
pub use extract::ExtractStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// One sentence submitted from the command line.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub text: String,
    /// Pattern rules only, even if a key is configured.
    pub local: bool,
}

impl ExtractInput {
    /// Join the words given on the command line into one sentence.
    ///
    /// Blank submissions are rejected here; the pipeline itself would
    /// accept them and yield a placeholder.
    pub fn new(words: &[String], local: bool) -> anyhow::Result<Self> {
        let text = words.join(" ");
        if text.trim().is_empty() {
            anyhow::bail!("Nothing to extract: the sentence is empty");
        }
        Ok(Self { text, local })
    }
}

/// Wire the pipeline from configuration.
///
/// A remote extractor is attached only when remote extraction is enabled, a
/// key is present and the caller did not ask for local-only.
fn build_pipeline(config: &Config, local: bool) -> ExtractionPipeline {
    if local || !config.remote_configured() {
        info!("Remote extraction not configured, using pattern rules");
        return ExtractionPipeline::local();
    }

    let gemini = &config.providers.gemini;
    let remote: Arc<dyn TaskExtractor> = Arc::new(
        GeminiExtractor::new(gemini.api_key.clone())
            .with_base_url(gemini.base_url.clone())
            .with_model(gemini.model.clone())
            .with_timeout(Duration::from_secs(config.extraction.timeout_secs)),
    );
    ExtractionPipeline::new(Some(remote))
}

/// Load configuration for an extraction command.
fn load_config() -> anyhow::Result<Config> {
    Ok(Config::load_or_default()?.with_env_overrides())
}
