//! Link and self posts

use super::{nullable, Comment, More, Subreddit, Timestamp};
use crate::thing::{Kind, ThingData};
use serde::{Deserialize, Serialize};

/// A submitted post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "name", default, deserialize_with = "nullable")]
    pub full_id: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,
    #[serde(default)]
    pub edited: Option<Timestamp>,

    #[serde(default, deserialize_with = "nullable")]
    pub permalink: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(rename = "selftext", default, deserialize_with = "nullable")]
    pub body: String,

    /// Your vote: `Some(true)` up, `Some(false)` down, `None` no vote
    #[serde(default)]
    pub likes: Option<bool>,

    #[serde(default, deserialize_with = "nullable")]
    pub score: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub upvote_ratio: f32,
    #[serde(rename = "num_comments", default, deserialize_with = "nullable")]
    pub number_of_comments: i64,

    #[serde(rename = "subreddit", default, deserialize_with = "nullable")]
    pub subreddit_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subreddit_name_prefixed: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subreddit_id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(rename = "author_fullname", default, deserialize_with = "nullable")]
    pub author_id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub spoiler: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub locked: bool,
    #[serde(rename = "over_18", default, deserialize_with = "nullable")]
    pub nsfw: bool,
    #[serde(rename = "is_self", default, deserialize_with = "nullable")]
    pub is_self_post: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub saved: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub stickied: bool,

    /// The post's subreddit, present when requested with `sr_detail=true`
    #[serde(rename = "sr_detail", default, skip_serializing_if = "Option::is_none")]
    pub subreddit_detail: Option<Box<Subreddit>>,
}

impl ThingData for Post {
    const KIND: Kind = Kind::Post;
}

/// A post with its top-level comments, as returned for a single post
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostAndComments {
    pub post: Post,
    pub comments: Vec<Comment>,
    /// Stub for top-level comments that were not loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more: Option<More>,
}
