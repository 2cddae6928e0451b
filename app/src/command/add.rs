use tasklift_core::TaskBuilder;
use tracing::info;

use super::ExtractInput;

/// Strategy for the `add` command.
///
/// Extracts the sentence, builds a fresh, not-completed task from the result
/// and prints it as JSON. Holding the collection is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = super::load_config()?;
        let pipeline = super::build_pipeline(&config, input.local);

        let result = pipeline.process(&input.text).await;
        let task = TaskBuilder::new().build(result);
        info!("Built task {} ({})", task.id, task.category.label());

        println!("{}", serde_json::to_string_pretty(&task)?);
        Ok(())
    }
}
