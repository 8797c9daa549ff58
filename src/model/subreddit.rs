//! Subreddits

use super::{nullable, Timestamp};
use crate::thing::{Kind, ThingData};
use serde::{Deserialize, Serialize};

/// A subreddit as returned by `about` and the subreddit listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subreddit {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "name", default, deserialize_with = "nullable")]
    pub full_id: String,
    #[serde(rename = "created_utc", default)]
    pub created: Option<Timestamp>,

    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(rename = "display_name", default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "display_name_prefixed", default, deserialize_with = "nullable")]
    pub name_prefixed: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(rename = "public_description", default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "subreddit_type", default, deserialize_with = "nullable")]
    pub kind: String,

    #[serde(default, deserialize_with = "nullable")]
    pub subscribers: i64,
    /// Only reported for some subreddits
    #[serde(default)]
    pub active_user_count: Option<i64>,
    #[serde(rename = "over18", default, deserialize_with = "nullable")]
    pub nsfw: bool,
    #[serde(rename = "user_is_moderator", default, deserialize_with = "nullable")]
    pub user_is_mod: bool,
    #[serde(rename = "user_is_subscriber", default, deserialize_with = "nullable")]
    pub subscribed: bool,
    #[serde(rename = "user_has_favorited", default, deserialize_with = "nullable")]
    pub favorite: bool,
}

impl ThingData for Subreddit {
    const KIND: Kind = Kind::Subreddit;
}
