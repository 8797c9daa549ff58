//! Pagination types
//!
//! Listing endpoints page with opaque `after`/`before` cursors taken from the
//! previous response. An empty cursor means there is no page in that
//! direction.

use crate::types::Params;
use serde::{Deserialize, Serialize};

/// Query options shared by every listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of items per page (the API caps this at 100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return items after this full id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Return items before this full id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Page forward from a cursor; clears `before`
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self.before = None;
        self
    }

    /// Page backward from a cursor; clears `after`
    #[must_use]
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self.after = None;
        self
    }

    /// Query parameters, omitting unset options
    ///
    /// Cursors are passed through untouched, including empty ones.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(after) = &self.after {
            params.push(("after".to_string(), after.clone()));
        }
        if let Some(before) = &self.before {
            params.push(("before".to_string(), before.clone()));
        }
        params
    }
}

/// Which cursor to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Follow `after`
    #[default]
    Forward,
    /// Follow `before`
    Backward,
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these options
    Continue(ListOptions),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

/// Tracks pagination state while walking pages
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages seen so far
    pub pages: u32,
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Items seen so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Record a fetched page
    pub fn add_page(&mut self, items: usize) {
        self.pages += 1;
        self.total_fetched += items as u64;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }
}
