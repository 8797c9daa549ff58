//! Listing envelope and page views
//!
//! A [`Listing`] is one decoded page: the routed buckets plus the cursors of
//! the outer envelope. A [`Page`] is a view of a single bucket carrying the
//! same cursors.

use crate::model::{Comment, Message, More, Post, Subreddit};
use crate::pagination::ListOptions;
use crate::thing::{decode_things, InboxThings, ThingSet, Things};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wire shape of a listing, before routing
#[derive(Deserialize)]
pub(super) struct RawListing {
    #[serde(default)]
    pub(super) kind: String,
    pub(super) data: RawListingData,
}

#[derive(Deserialize)]
pub(super) struct RawListingData {
    pub(super) children: Vec<Value>,
    #[serde(default, deserialize_with = "crate::model::nullable")]
    pub(super) after: String,
    #[serde(default, deserialize_with = "crate::model::nullable")]
    pub(super) before: String,
}

/// One decoded page of a listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing<S> {
    /// Outer kind, normally `Listing`
    pub kind: String,
    /// Routed children
    pub things: S,
    /// Cursor of the next page, empty on the last page
    pub after: String,
    /// Cursor of the previous page, empty on the first page
    pub before: String,
}

impl<'de, S: ThingSet> Deserialize<'de> for Listing<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawListing::deserialize(deserializer)?;
        Ok(Listing {
            kind: raw.kind,
            things: decode_things(raw.data.children),
            after: raw.data.after,
            before: raw.data.before,
        })
    }
}

impl<S> Listing<S> {
    /// A view over one bucket, sharing this page's cursors
    pub fn view<T: Clone>(&self, items: &[T]) -> Page<T> {
        Page {
            items: items.to_vec(),
            after: self.after.clone(),
            before: self.before.clone(),
        }
    }
}

impl<T> Listing<Vec<T>> {
    /// Convert a single-kind listing into its page
    pub fn into_page(self) -> Page<T> {
        Page {
            items: self.things,
            after: self.after,
            before: self.before,
        }
    }
}

/// The inbox feed: comment replies and private messages on one page
pub type InboxListing = Listing<InboxThings>;

impl Listing<InboxThings> {
    /// Comment replies on this page
    pub fn comments(&self) -> Page<Message> {
        self.view(&self.things.comments)
    }

    /// Private messages on this page
    pub fn messages(&self) -> Page<Message> {
        self.view(&self.things.messages)
    }

    /// Split into `(comments, messages)` without copying items
    pub fn into_views(self) -> (Page<Message>, Page<Message>) {
        let InboxThings { comments, messages } = self.things;
        let comments = Page {
            items: comments,
            after: self.after.clone(),
            before: self.before.clone(),
        };
        let messages = Page {
            items: messages,
            after: self.after,
            before: self.before,
        };
        (comments, messages)
    }
}

impl Listing<Things> {
    /// Comments on this page
    pub fn comments(&self) -> Page<Comment> {
        self.view(&self.things.comments)
    }

    /// Unexpanded comment stubs on this page
    pub fn mores(&self) -> Page<More> {
        self.view(&self.things.mores)
    }

    /// Posts on this page
    pub fn posts(&self) -> Page<Post> {
        self.view(&self.things.posts)
    }

    /// Subreddits on this page
    pub fn subreddits(&self) -> Page<Subreddit> {
        self.view(&self.things.subreddits)
    }

    /// Messages on this page
    pub fn messages(&self) -> Page<Message> {
        self.view(&self.things.messages)
    }

    /// Take the posts bucket, dropping the others
    pub fn into_posts(self) -> Page<Post> {
        Page {
            items: self.things.posts,
            after: self.after,
            before: self.before,
        }
    }
}

// ============================================================================
// Page
// ============================================================================

/// Items of one kind from one page, with the page's cursors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub after: String,
    pub before: String,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            after: String::new(),
            before: String::new(),
        }
    }
}

impl<T> Page<T> {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        !self.after.is_empty()
    }

    /// Whether an earlier page exists
    pub fn has_prev(&self) -> bool {
        !self.before.is_empty()
    }

    /// Options for the page after this one, keeping `base`'s other settings
    pub fn next_options(&self, base: &ListOptions) -> Option<ListOptions> {
        if !self.has_next() {
            return None;
        }
        Some(base.clone().after(self.after.clone()))
    }

    /// Options for the page before this one, keeping `base`'s other settings
    pub fn prev_options(&self, base: &ListOptions) -> Option<ListOptions> {
        if !self.has_prev() {
            return None;
        }
        Some(base.clone().before(self.before.clone()))
    }

    /// Map the items, keeping the cursors
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            after: self.after,
            before: self.before,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
