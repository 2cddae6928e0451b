#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    AddStrategy, CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy, InitStrategy,
    VersionStrategy,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklift")]
#[command(about = "Turn a sentence into a structured task", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract title, time, venue and category from a sentence
    Extract {
        /// The sentence, as one or more words
        #[arg(required = true)]
        text: Vec<String>,

        /// Skip the remote service and use pattern rules only
        #[arg(short, long)]
        local: bool,
    },
    /// Extract a sentence and build a task record from it
    Add {
        /// The sentence, as one or more words
        #[arg(required = true)]
        text: Vec<String>,

        /// Skip the remote service and use pattern rules only
        #[arg(short, long)]
        local: bool,
    },
    /// Show configuration information
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { text, local } => {
            ExtractStrategy
                .execute(ExtractInput::new(&text, local)?)
                .await
        }
        Commands::Add { text, local } => {
            AddStrategy
                .execute(ExtractInput::new(&text, local)?)
                .await
        }
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
