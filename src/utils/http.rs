//! HTTP client utilities.

use reqwest::Client;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::sources::SourceError;

/// Shared HTTP client with a bounded request timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a client using the timeout and user agent from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .build()?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
