use tasklift_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the template to `~/tasklift/config.json`, refusing to overwrite.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}
