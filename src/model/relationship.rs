//! User relationships with a subreddit
//!
//! These arrive as bare records inside a listing envelope, without the
//! `{kind, data}` wrapper that things carry.

use super::{nullable, Timestamp};
use serde::{Deserialize, Serialize};

/// A user's standing in a subreddit: contributor, muted, banned, moderator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "rel_id", default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename = "date", default)]
    pub created: Option<Timestamp>,
    #[serde(rename = "name", default, deserialize_with = "nullable")]
    pub user: String,
    /// Full id of the user (`t2_...`)
    #[serde(rename = "id", default, deserialize_with = "nullable")]
    pub user_id: String,
}

/// A ban from posting or from editing the wiki
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ban {
    #[serde(flatten)]
    pub relationship: Relationship,
    /// `None` for permanent bans
    #[serde(default)]
    pub days_left: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub note: String,
}

/// A moderator and their permissions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Moderator {
    #[serde(flatten)]
    pub relationship: Relationship,
    #[serde(rename = "mod_permissions", default, deserialize_with = "nullable")]
    pub permissions: Vec<String>,
}
