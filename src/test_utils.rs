use crate::{config::Config, server::Server, telemetry::Dataset};

/// Test server builder for creating test instances with a configurable dataset
pub struct TestServerBuilder {
    config: Config,
    dataset: Option<Dataset>,
}

impl TestServerBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            dataset: None,
        }
    }

    /// Set a custom configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Analyze `dataset` instead of the built-in sample
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub async fn build(self) -> Server {
        let mut config = self.config;

        // The Prometheus recorder is process-global and binds a port
        config.metrics.enabled = false;
        config.logging.log_request = false;

        let dataset = self.dataset.unwrap_or_else(Dataset::builtin);
        Server::with_dataset(config, dataset).await.unwrap()
    }
}

impl Default for TestServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
