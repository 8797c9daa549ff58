//! Private messages and the inbox

use crate::error::{Error, Result};
use crate::http::{ApiRequest, Transport};
use crate::listing::{decode_inbox, InboxListing, Page};
use crate::model::{Message, SendMessageRequest};
use crate::pagination::ListOptions;
use crate::types::Params;
use std::sync::Arc;
use tracing::debug;

/// Message and inbox endpoints
#[derive(Clone)]
pub struct MessageService {
    transport: Arc<dyn Transport>,
}

impl MessageService {
    /// Create a service over a transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Mark everything in the inbox as read. The API only queues the work.
    pub async fn read_all(&self) -> Result<()> {
        self.transport
            .send(ApiRequest::post("api/read_all_messages"))
            .await?;
        Ok(())
    }

    /// Mark messages or comment replies as read, by full id
    pub async fn read(&self, ids: &[&str]) -> Result<()> {
        self.post_ids("api/read_message", ids).await
    }

    /// Mark messages or comment replies as unread, by full id
    pub async fn unread(&self, ids: &[&str]) -> Result<()> {
        self.post_ids("api/unread_message", ids).await
    }

    /// Collapse messages
    pub async fn collapse(&self, ids: &[&str]) -> Result<()> {
        self.post_ids("api/collapse_message", ids).await
    }

    /// Uncollapse messages
    pub async fn uncollapse(&self, ids: &[&str]) -> Result<()> {
        self.post_ids("api/uncollapse_message", ids).await
    }

    /// Block the author of a post, comment or message
    pub async fn block(&self, id: &str) -> Result<()> {
        self.post_form("api/block", vec![("id".to_string(), id.to_string())])
            .await
    }

    /// Delete a message
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.post_form("api/del_msg", vec![("id".to_string(), id.to_string())])
            .await
    }

    /// Send a message
    pub async fn send(&self, request: &SendMessageRequest) -> Result<()> {
        let mut form: Params = vec![
            ("to".to_string(), request.to.clone()),
            ("subject".to_string(), request.subject.clone()),
            ("text".to_string(), request.text.clone()),
        ];
        if let Some(from) = &request.from_subreddit {
            form.push(("from_sr".to_string(), from.clone()));
        }
        form.push(("api_type".to_string(), "json".to_string()));
        self.post_form("api/compose", form).await
    }

    /// Comment replies and messages in the inbox, in that order
    pub async fn inbox(&self, options: &ListOptions) -> Result<(Page<Message>, Page<Message>)> {
        let listing = self.listing("message/inbox", options).await?;
        Ok(listing.into_views())
    }

    /// Unread comment replies and messages, in that order
    pub async fn inbox_unread(
        &self,
        options: &ListOptions,
    ) -> Result<(Page<Message>, Page<Message>)> {
        let listing = self.listing("message/unread", options).await?;
        Ok(listing.into_views())
    }

    /// Messages you have sent
    pub async fn sent(&self, options: &ListOptions) -> Result<Page<Message>> {
        let listing = self.listing("message/sent", options).await?;
        Ok(listing.into_views().1)
    }

    /// Fetch and decode one page of an inbox-style listing
    pub async fn listing(&self, path: &str, options: &ListOptions) -> Result<InboxListing> {
        let request = ApiRequest::get(path).with_query(options.to_params());
        let body = self.transport.send(request).await?;
        let listing = decode_inbox(&body)?;
        debug!(
            path,
            comments = listing.things.comments.len(),
            messages = listing.things.messages.len(),
            "decoded inbox page"
        );
        Ok(listing)
    }

    async fn post_ids(&self, path: &str, ids: &[&str]) -> Result<()> {
        if ids.is_empty() {
            return Err(Error::invalid_argument("must provide at least 1 id"));
        }
        self.post_form(path, vec![("id".to_string(), ids.join(","))])
            .await
    }

    async fn post_form(&self, path: &str, form: Params) -> Result<()> {
        self.transport
            .send(ApiRequest::post(path).form(form))
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for MessageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageService").finish_non_exhaustive()
    }
}
