use anyhow::Result;
use clap::Parser;
use console::style;

use polls_core::config::validate_seed;

use super::run::load_config;

/// Validate a configuration file without starting the server.
#[derive(Parser)]
pub struct CheckCommand {
    /// Configuration file path. Defaults to `polls.toml` if it exists.
    #[arg(short, long)]
    pub config: Option<String>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self) -> Result<()> {
        let summary = self.check()?;
        println!("  {} {}", style("ok").green().bold(), summary);
        Ok(())
    }

    /// Load and validate, returning a one-line summary.
    pub fn check(&self) -> Result<String> {
        let config = load_config(self.config.as_deref())?;
        let now = chrono::Utc::now();
        validate_seed(&config.questions, now)?;

        let mut published = 0;
        for seed in &config.questions {
            if seed.resolve_pub_date(now)? <= now {
                published += 1;
            }
        }

        Ok(format!(
            "{}: {} question(s), {} published now, serving on {}:{}",
            config.project.name,
            config.questions.len(),
            published,
            config.gateway.host,
            config.gateway.port
        ))
    }
}
