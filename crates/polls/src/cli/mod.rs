mod check;
mod run;

pub use check::CheckCommand;
pub use run::RunCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use polls_core::config::LoggingConfig;

/// Polls - publish questions and collect votes.
#[derive(Parser)]
#[command(name = "polls")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the polls server.
    Run(RunCommand),

    /// Validate a configuration file.
    Check(CheckCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run(cmd) => cmd.execute().await,
            Commands::Check(cmd) => cmd.execute(),
        }
    }
}

/// Initialize tracing. `RUST_LOG` wins over the configured level.
pub fn init_logging(logging: &LoggingConfig, dev: bool) {
    let level = if dev { "debug" } else { logging.level.as_str() };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // A subscriber may already be installed (tests); keep it.
    let _ = if logging.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
