use tracing::info;

use super::ExtractInput;

/// Strategy for the `extract` command: print the structured fields as JSON.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config()?;
        let pipeline = super::build_pipeline(&config, input.local);

        let outcome = pipeline.process_with_outcome(&input.text).await;
        info!("Extracted via {:?}", outcome.source);

        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        Ok(())
    }
}
