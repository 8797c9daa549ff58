//! Thing envelope types
//!
//! Every object the API returns is wrapped as `{"kind": "...", "data": {...}}`.
//! The kind code says how `data` should be read.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Kind codes of the things the API returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `t1`
    Comment,
    /// `t2`
    Account,
    /// `t3`, a link or self post
    Post,
    /// `t4`, a private message
    Message,
    /// `t5`
    Subreddit,
    /// `t6`
    Award,
    /// `more`, a stub for comments that were not expanded
    More,
    /// `Listing`
    Listing,
}

impl Kind {
    /// Parse a wire kind code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "t1" => Some(Kind::Comment),
            "t2" => Some(Kind::Account),
            "t3" => Some(Kind::Post),
            "t4" => Some(Kind::Message),
            "t5" => Some(Kind::Subreddit),
            "t6" => Some(Kind::Award),
            "more" => Some(Kind::More),
            "Listing" => Some(Kind::Listing),
            _ => None,
        }
    }

    /// The wire kind code
    pub fn code(self) -> &'static str {
        match self {
            Kind::Comment => "t1",
            Kind::Account => "t2",
            Kind::Post => "t3",
            Kind::Message => "t4",
            Kind::Subreddit => "t5",
            Kind::Award => "t6",
            Kind::More => "more",
            Kind::Listing => "Listing",
        }
    }

    /// Build a full id (`t3_abc123`) from a bare id
    pub fn full_id(self, id: &str) -> String {
        format!("{}_{id}", self.code())
    }

    /// Split a full id into its kind and bare id
    pub fn split_full_id(full_id: &str) -> Option<(Kind, &str)> {
        let (code, id) = full_id.split_once('_')?;
        let kind = Kind::from_code(code)?;
        if id.is_empty() {
            return None;
        }
        Some((kind, id))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// A raw `{kind, data}` envelope
///
/// `data` stays an owned JSON value until a router decides what it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thing {
    /// Kind code as sent on the wire
    pub kind: String,
    /// Payload, shape depends on `kind`
    #[serde(default)]
    pub data: Value,
}

impl Thing {
    /// The parsed kind, if it is one we know
    pub fn kind(&self) -> Option<Kind> {
        Kind::from_code(&self.kind)
    }
}

/// A type that a thing payload decodes into
pub trait ThingData: DeserializeOwned {
    /// Kind this type is stored under on the wire
    const KIND: Kind;

    /// Decode a payload that arrived under `kind`
    fn from_thing(kind: Kind, data: Value) -> serde_json::Result<Self> {
        let _ = kind;
        serde_json::from_value(data)
    }
}
