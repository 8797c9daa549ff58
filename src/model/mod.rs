//! Domain models
//!
//! Payload types for the thing kinds the crate decodes. Every field is
//! optional on the wire: absent or `null` values fall back to the field's
//! default, while a value of the wrong type fails the whole payload.

mod comment;
mod message;
mod post;
mod relationship;
mod subreddit;
mod timestamp;

pub use comment::{Comment, More, Replies};
pub use message::{Message, SendMessageRequest};
pub use post::{Post, PostAndComments};
pub use relationship::{Ban, Moderator, Relationship};
pub use subreddit::Subreddit;
pub use timestamp::Timestamp;

use serde::{Deserialize, Deserializer};

/// Read `null` as the type's default
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
