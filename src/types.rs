//! Common types used throughout redlist
//!
//! This module contains shared type definitions, type aliases,
//! and small enums used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Ordered list of key/value pairs used for query strings and form bodies
pub type Params = Vec<(String, String)>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::GET => f.write_str("GET"),
            Method::POST => f.write_str("POST"),
        }
    }
}

// ============================================================================
// Post Sort
// ============================================================================

/// Sort order for a subreddit's post listing. Each maps to a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostSort {
    #[default]
    Hot,
    New,
    Rising,
    Controversial,
    Top,
}

impl PostSort {
    /// Path segment for this sort
    pub fn as_str(self) -> &'static str {
        match self {
            PostSort::Hot => "hot",
            PostSort::New => "new",
            PostSort::Rising => "rising",
            PostSort::Controversial => "controversial",
            PostSort::Top => "top",
        }
    }

    /// Whether the listing honours a time filter
    pub fn accepts_time_filter(self) -> bool {
        matches!(self, PostSort::Controversial | PostSort::Top)
    }
}

// ============================================================================
// Time Filter
// ============================================================================

/// Time window for `top` and `controversial` listings (the `t` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeFilter {
    /// Query value for this filter
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFilter::Hour => "hour",
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::All => "all",
        }
    }
}

// ============================================================================
// Subreddit Search Sort
// ============================================================================

/// Sort order for subreddit search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubredditSearchSort {
    Relevance,
    Activity,
}

impl SubredditSearchSort {
    /// Query value for this sort
    pub fn as_str(self) -> &'static str {
        match self {
            SubredditSearchSort::Relevance => "relevance",
            SubredditSearchSort::Activity => "activity",
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Build a `Params` list from borrowed pairs
pub fn params<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Params {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
