//! Comments and comment trees

use super::{nullable, Timestamp};
use crate::listing::Listing;
use crate::thing::{Kind, ThingData, Things};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A comment on a post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "name", default, deserialize_with = "nullable")]
    pub full_id: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub edited: Option<Timestamp>,

    #[serde(default, deserialize_with = "nullable")]
    pub parent_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub permalink: String,

    #[serde(default, deserialize_with = "nullable")]
    pub body: String,
    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(rename = "author_fullname", default, deserialize_with = "nullable")]
    pub author_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub author_flair_text: String,

    #[serde(rename = "subreddit", default, deserialize_with = "nullable")]
    pub subreddit_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subreddit_name_prefixed: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subreddit_id: String,

    #[serde(default)]
    pub likes: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub score: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub controversiality: i64,

    #[serde(rename = "link_id", default, deserialize_with = "nullable")]
    pub post_id: String,
    #[serde(rename = "link_title", default, deserialize_with = "nullable")]
    pub post_title: String,
    #[serde(rename = "link_permalink", default, deserialize_with = "nullable")]
    pub post_permalink: String,
    #[serde(rename = "link_author", default, deserialize_with = "nullable")]
    pub post_author: String,
    #[serde(rename = "link_num_comments", default)]
    pub post_num_comments: Option<i64>,

    #[serde(default, deserialize_with = "nullable")]
    pub is_submitter: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub score_hidden: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub saved: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub stickied: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub locked: bool,

    #[serde(default)]
    pub replies: Replies,
}

impl ThingData for Comment {
    const KIND: Kind = Kind::Comment;
}

/// Direct replies to a comment
///
/// On the wire this is `""` when there are none, otherwise a listing of
/// `t1` comments optionally ending in a `more` stub.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Replies {
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more: Option<More>,
}

impl Replies {
    /// Whether there are no loaded replies and nothing left to load
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.more.is_none()
    }
}

impl<'de> Deserialize<'de> for Replies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null | Value::String(_) => Ok(Replies::default()),
            value => {
                let listing: Listing<Things> =
                    serde_json::from_value(value).map_err(de::Error::custom)?;
                let things = listing.things;
                Ok(Replies {
                    comments: things.comments,
                    more: things.mores.into_iter().next(),
                })
            }
        }
    }
}

/// Comments that were not expanded in a tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct More {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "name", default, deserialize_with = "nullable")]
    pub full_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub parent_id: String,
    /// Total number of replies left to load
    #[serde(default, deserialize_with = "nullable")]
    pub count: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub depth: i64,
    /// Ids of the direct children left to load
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<String>,
}

impl ThingData for More {
    const KIND: Kind = Kind::More;
}
