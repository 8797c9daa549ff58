//! Kind-routed decoding of thing arrays
//!
//! A [`ThingSet`] owns one bucket per kind it understands. [`decode_things`]
//! walks an array of envelopes and hands each payload to the set. Anything the
//! set cannot use is dropped on the spot and the walk goes on: an unknown kind,
//! a child that is not an envelope, or a payload that fails to decode. Drops
//! are only visible at `trace` level.

use super::types::{Kind, Thing, ThingData};
use crate::error::{Error, Result};
use crate::model::{Comment, Message, More, Post, Subreddit};
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

/// Outcome of handing one payload to a [`ThingSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Decoded and stored
    Stored,
    /// The set has no bucket for this kind
    Unhandled,
}

/// A collection of typed buckets filled from thing envelopes
///
/// `Default` must produce empty buckets, never absent ones.
pub trait ThingSet: Default {
    /// Decode `data` into the bucket for `kind`
    fn route(&mut self, kind: Kind, data: Value) -> serde_json::Result<Routed>;
}

/// Decode a sequence of envelopes into a bucket set
pub fn decode_things<S: ThingSet>(children: Vec<Value>) -> S {
    let mut set = S::default();

    for (index, child) in children.into_iter().enumerate() {
        let thing: Thing = match serde_json::from_value(child) {
            Ok(thing) => thing,
            Err(e) => {
                trace!(index, error = %e, "dropping child that is not a thing");
                continue;
            }
        };

        let Some(kind) = thing.kind() else {
            trace!(index, kind = %thing.kind, "dropping child of unknown kind");
            continue;
        };

        match set.route(kind, thing.data) {
            Ok(Routed::Stored) => {}
            Ok(Routed::Unhandled) => {
                trace!(index, %kind, "dropping child with no bucket");
            }
            Err(e) => {
                trace!(index, %kind, error = %e, "dropping malformed child");
            }
        }
    }

    set
}

/// Decode a raw JSON array of envelopes
///
/// The body itself must be an array; its elements are handled as in
/// [`decode_things`].
pub fn decode_thing_array<S: ThingSet>(body: &[u8]) -> Result<S> {
    let children: Vec<Value> = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("Expected an array of things: {e}")))?;
    Ok(decode_things(children))
}

// ============================================================================
// Homogeneous set
// ============================================================================

impl<T: ThingData> ThingSet for Vec<T> {
    fn route(&mut self, kind: Kind, data: Value) -> serde_json::Result<Routed> {
        if kind != T::KIND {
            return Ok(Routed::Unhandled);
        }
        self.push(T::from_thing(kind, data)?);
        Ok(Routed::Stored)
    }
}

// ============================================================================
// Inbox set
// ============================================================================

/// Inbox feed contents
///
/// Comment replies (`t1`) and private messages (`t4`) share the [`Message`]
/// shape on the inbox endpoints, so both buckets hold messages; each item
/// records the kind it arrived under.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InboxThings {
    pub comments: Vec<Message>,
    pub messages: Vec<Message>,
}

impl ThingSet for InboxThings {
    fn route(&mut self, kind: Kind, data: Value) -> serde_json::Result<Routed> {
        let bucket = match kind {
            Kind::Comment => &mut self.comments,
            Kind::Message => &mut self.messages,
            _ => return Ok(Routed::Unhandled),
        };
        bucket.push(Message::from_thing(kind, data)?);
        Ok(Routed::Stored)
    }
}

// ============================================================================
// Mixed set
// ============================================================================

/// Contents of a listing that can mix several kinds
/// (search results, comment trees, user overviews)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Things {
    pub comments: Vec<Comment>,
    pub mores: Vec<More>,
    pub posts: Vec<Post>,
    pub subreddits: Vec<Subreddit>,
    pub messages: Vec<Message>,
}

impl Things {
    /// Total number of decoded items across buckets
    pub fn len(&self) -> usize {
        self.comments.len()
            + self.mores.len()
            + self.posts.len()
            + self.subreddits.len()
            + self.messages.len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ThingSet for Things {
    fn route(&mut self, kind: Kind, data: Value) -> serde_json::Result<Routed> {
        match kind {
            Kind::Comment => self.comments.push(Comment::from_thing(kind, data)?),
            Kind::More => self.mores.push(More::from_thing(kind, data)?),
            Kind::Post => self.posts.push(Post::from_thing(kind, data)?),
            Kind::Subreddit => self.subreddits.push(Subreddit::from_thing(kind, data)?),
            Kind::Message => self.messages.push(Message::from_thing(kind, data)?),
            Kind::Account | Kind::Award | Kind::Listing => return Ok(Routed::Unhandled),
        }
        Ok(Routed::Stored)
    }
}
