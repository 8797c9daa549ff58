//! Listing module
//!
//! Assembles decoded pages from listing envelopes.
//!
//! # Overview
//!
//! ```text
//! {"kind": "Listing", "data": {"children": [...], "after": .., "before": ..}}
//!                                   │                   │
//!                          thing decoder          cursors copied as-is
//!                                   │                   │
//!                                   └──► Listing<S> ◄───┘
//!                                            │
//!                          Page<T> views (comments(), messages(), ...)
//! ```
//!
//! Every view of one listing carries the same `after`/`before`.
//!
//! Relationship lists reuse the envelope with bare records as children
//! ([`decode_records`]), and a single post comes back as a pair of listings
//! ([`decode_post_and_comments`]).

mod assembler;
mod types;

pub use assembler::{
    decode_inbox, decode_listing, decode_page, decode_post_and_comments, decode_records,
    decode_thing,
};
pub use types::{InboxListing, Listing, Page};

#[cfg(test)]
mod tests;
