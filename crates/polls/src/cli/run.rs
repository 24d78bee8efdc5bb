use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing::info;

use polls_core::config::PollsConfig;

use polls::Polls;

/// Default configuration file, used when present.
pub const DEFAULT_CONFIG: &str = "polls.toml";

/// Run the polls server.
#[derive(Parser)]
pub struct RunCommand {
    /// Configuration file path. Defaults to `polls.toml` if it exists.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Port to listen on (overrides config).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    pub host: Option<String>,

    /// Enable development mode (verbose logging).
    #[arg(long)]
    pub dev: bool,
}

impl RunCommand {
    /// Execute the run command.
    pub async fn execute(self) -> Result<()> {
        let mut config = load_config(self.config.as_deref())?;

        super::init_logging(&config.observability.logging, self.dev);

        // Apply command-line overrides
        if let Some(port) = self.port {
            config.gateway.port = port;
        }
        if let Some(host) = self.host {
            config.gateway.host = host;
        }

        println!();
        println!(
            "  {} v{}",
            style("POLLS").bold().cyan(),
            env!("CARGO_PKG_VERSION")
        );
        println!();
        println!(
            "  Listening on {}",
            style(format!(
                "http://{}:{}/polls/",
                config.gateway.host, config.gateway.port
            ))
            .cyan()
        );
        if self.dev {
            println!("  Development mode enabled");
        }
        println!();

        info!(
            questions = config.questions.len(),
            "Starting {}", config.project.name
        );

        let polls = Polls::builder().config(config).build()?;

        // Run the server (blocks until shutdown)
        polls.run().await?;

        println!("\n  Goodbye!");

        Ok(())
    }
}

/// Load configuration from `path`, or from `polls.toml` if present, or defaults.
pub fn load_config(path: Option<&str>) -> Result<PollsConfig> {
    match path {
        Some(path) => {
            if !Path::new(path).exists() {
                anyhow::bail!("Configuration file not found: {}", path);
            }
            Ok(PollsConfig::from_file(path)?)
        }
        None if Path::new(DEFAULT_CONFIG).exists() => Ok(PollsConfig::from_file(DEFAULT_CONFIG)?),
        None => Ok(PollsConfig::default()),
    }
}
