mod observability;
mod seed;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use seed::{load_seed, validate_seed, SeedQuestion};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PollsError, Result};

/// Root configuration for a polls server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PollsConfig {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectConfig,

    /// Gateway configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Questions loaded at startup.
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

impl PollsConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PollsError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = substitute_env_vars(content);

        let config: Self = toml::from_str(&content)?;
        config.gateway.validate()?;
        Ok(config)
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name, shown in page titles.
    #[serde(default = "default_project_name")]
    pub name: String,

    /// Project version.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            version: default_version(),
        }
    }
}

fn default_project_name() -> String {
    "polls".to_string()
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Host to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP port.
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Number of questions on the index page.
    #[serde(default = "default_index_limit")]
    pub index_limit: usize,
}

impl GatewayConfig {
    fn validate(&self) -> Result<()> {
        if self.index_limit == 0 {
            return Err(PollsError::Config(
                "gateway.index_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_http_port(),
            index_limit: default_index_limit(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8000
}

fn default_index_limit() -> usize {
    5
}

static ENV_VAR: Lazy<regex_lite::Regex> = Lazy::new(|| {
    regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is valid")
});

/// Substitute `${VAR}` with environment values. Unset variables are left as is.
fn substitute_env_vars(content: &str) -> String {
    let mut result = content.to_string();

    for cap in ENV_VAR.captures_iter(content) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}
