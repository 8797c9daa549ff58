//! Inbox items

use super::{nullable, Timestamp};
use crate::thing::{Kind, ThingData};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A private message or a comment reply, as shown in the inbox
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "name", default, deserialize_with = "nullable")]
    pub full_id: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,

    #[serde(default, deserialize_with = "nullable")]
    pub subject: String,
    #[serde(rename = "body", default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub parent_id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(rename = "dest", default, deserialize_with = "nullable")]
    pub to: String,

    /// True when the item is a reply to one of your posts or comments
    #[serde(rename = "was_comment", default, deserialize_with = "nullable")]
    pub is_comment: bool,

    /// Kind the item arrived under; `None` when decoded outside a thing
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Kind>,
}

impl ThingData for Message {
    const KIND: Kind = Kind::Message;

    fn from_thing(kind: Kind, data: Value) -> serde_json::Result<Self> {
        let mut message: Message = serde_json::from_value(data)?;
        message.origin = Some(kind);
        message.is_comment = kind == Kind::Comment;
        Ok(message)
    }
}

/// A request to send a private message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Username, or `/r/name` to reach that subreddit's moderators
    pub to: String,
    pub subject: String,
    pub text: String,
    /// Send as this subreddit instead of the current user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_subreddit: Option<String>,
}

impl SendMessageRequest {
    /// Create a new message request
    pub fn new(to: impl Into<String>, subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            from_subreddit: None,
        }
    }

    /// Send on behalf of a subreddit
    #[must_use]
    pub fn from_subreddit(mut self, subreddit: impl Into<String>) -> Self {
        self.from_subreddit = Some(subreddit.into());
        self
    }
}
