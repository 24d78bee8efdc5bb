//! Polls server runtime.
//!
//! Wires the configured store, clock and gateway together and runs until
//! Ctrl-C or an explicit shutdown request.

use std::sync::Arc;

use tokio::sync::broadcast;

use polls_core::config::load_seed;
use polls_core::error::{PollsError, Result};
use polls_core::{Clock, MemoryStore, PollsConfig, QuestionStore, SystemClock};
use polls_runtime::gateway::{GatewayConfig, GatewayServer};

/// Prelude module for common imports.
pub mod prelude {
    pub use chrono::{DateTime, Utc};

    pub use polls_core::config::PollsConfig;
    pub use polls_core::error::{PollsError, Result};
    pub use polls_core::{
        is_currently_published, was_published_recently, Choice, ChoiceId, Clock, FixedClock,
        MemoryStore, Question, QuestionId, QuestionStore, SystemClock,
    };

    pub use crate::{Polls, PollsBuilder};
}

/// The polls server runtime.
pub struct Polls {
    config: PollsConfig,
    store: Arc<dyn QuestionStore>,
    clock: Arc<dyn Clock>,
    shutdown_tx: broadcast::Sender<()>,
}

impl Polls {
    /// Create a new builder.
    pub fn builder() -> PollsBuilder {
        PollsBuilder::new()
    }

    /// Get the configuration.
    pub fn config(&self) -> &PollsConfig {
        &self.config
    }

    /// Get the question store.
    pub fn store(&self) -> Arc<dyn QuestionStore> {
        self.store.clone()
    }

    /// Load the configured seed questions into the store.
    pub async fn seed(&self) -> Result<usize> {
        load_seed(self.store.as_ref(), &self.config.questions, self.clock.now()).await
    }

    /// The gateway server for this runtime.
    pub fn gateway(&self) -> GatewayServer {
        GatewayServer::new(
            GatewayConfig::from(&self.config),
            self.store.clone(),
            self.clock.clone(),
        )
    }

    /// Seed the store, then serve until shutdown.
    pub async fn run(self) -> Result<()> {
        tracing::info!("Polls runtime starting");

        self.seed().await?;

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let shutdown = async move {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received shutdown signal");
                }
                _ = shutdown_rx.recv() => {
                    tracing::info!("Received shutdown notification");
                }
            }
        };

        self.gateway().run(shutdown).await?;

        tracing::info!("Polls runtime stopped");
        Ok(())
    }

    /// A handle that can request shutdown after `run` has taken `self`.
    pub fn shutdown_handle(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }
}

/// Builder for configuring the polls runtime.
pub struct PollsBuilder {
    config: Option<PollsConfig>,
    store: Option<Arc<dyn QuestionStore>>,
    clock: Option<Arc<dyn Clock>>,
}

impl PollsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            store: None,
            clock: None,
        }
    }

    /// Set the configuration.
    pub fn config(mut self, config: PollsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific store. Defaults to an empty [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn QuestionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a specific clock. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the runtime.
    pub fn build(self) -> Result<Polls> {
        let config = self
            .config
            .ok_or_else(|| PollsError::Config("Configuration is required".to_string()))?;

        let (shutdown_tx, _) = broadcast::channel(1);

        Ok(Polls {
            config,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryStore::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            shutdown_tx,
        })
    }
}

impl Default for PollsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polls_core::config::SeedQuestion;

    #[test]
    fn test_builder_requires_config() {
        let result = PollsBuilder::new().build();
        polls_core::assert_err_variant!(result.map(|_| ()), PollsError::Config(_));
    }

    #[test]
    fn test_builder_with_config() {
        let polls = Polls::builder().config(PollsConfig::default()).build().unwrap();
        assert_eq!(polls.config().gateway.port, 8000);
    }

    #[tokio::test]
    async fn test_seed_loads_configured_questions() {
        let mut config = PollsConfig::default();
        config.questions.push(SeedQuestion {
            text: "What's new?".to_string(),
            pub_date: None,
            days_from_now: Some(-1),
            choices: vec!["Not much".to_string()],
        });
        let store = MemoryStore::new();
        let polls = Polls::builder()
            .config(config)
            .store(Arc::new(store.clone()))
            .build()
            .unwrap();

        assert_eq!(polls.seed().await.unwrap(), 1);
        let published = store
            .published_questions(chrono::Utc::now(), None)
            .await
            .unwrap();
        assert_eq!(published[0].text, "What's new?");
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let mut config = PollsConfig::default();
        config.gateway.port = 0;
        let polls = Polls::builder().config(config).build().unwrap();
        let handle = polls.shutdown_handle();

        let task = tokio::spawn(polls.run());
        // The receiver is created once `run` starts.
        for _ in 0..100 {
            if handle.send(()).is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
