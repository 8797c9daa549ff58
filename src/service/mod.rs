//! Service module
//!
//! Typed endpoint groups over a shared [`Transport`].
//!
//! ```rust,ignore
//! let client = Client::from_config(&load_config("redlist.yaml")?)?;
//! let (replies, messages) = client.messages().inbox(&ListOptions::new()).await?;
//! ```

mod message;
mod subreddit;

pub use message::MessageService;
pub use subreddit::SubredditService;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, Transport};
use std::sync::Arc;

/// Entry point bundling every service over one transport
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client over HTTP
    pub fn with_http(config: HttpClientConfig) -> Result<Self> {
        let http = HttpClient::with_config(config)?;
        Ok(Self::new(Arc::new(http)))
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_http(config.to_http_config())
    }

    /// Message and inbox endpoints
    pub fn messages(&self) -> MessageService {
        MessageService::new(Arc::clone(&self.transport))
    }

    /// Subreddit endpoints
    pub fn subreddits(&self) -> SubredditService {
        SubredditService::new(Arc::clone(&self.transport))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
