//! Decode entry points for listing and thing responses
//!
//! Structural problems with the outer envelope (not JSON, no `data`, no
//! `children` array) fail the call. Problems with individual children do not.

use super::types::{InboxListing, Listing, Page, RawListing};
use crate::error::{Error, Result};
use crate::model::{Post, PostAndComments};
use crate::thing::{Thing, ThingData, ThingSet, Things};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Decode a listing body into the bucket set `S`
pub fn decode_listing<S: ThingSet>(body: &[u8]) -> Result<Listing<S>> {
    let listing: Listing<S> = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("Invalid listing: {e}")))?;
    debug!(
        kind = %listing.kind,
        after = %listing.after,
        before = %listing.before,
        "decoded listing"
    );
    Ok(listing)
}

/// Decode a single-kind listing body into a page of `T`
///
/// Children of other kinds are dropped.
pub fn decode_page<T: ThingData>(body: &[u8]) -> Result<Page<T>> {
    decode_listing::<Vec<T>>(body).map(Listing::into_page)
}

/// Decode an inbox body (comment replies mixed with private messages)
pub fn decode_inbox(body: &[u8]) -> Result<InboxListing> {
    decode_listing(body)
}

/// Decode a body holding one thing, such as `r/{name}/about`
///
/// Unlike listing children, a lone thing of the wrong kind or with a bad
/// payload is an error: there is nothing else to return.
pub fn decode_thing<T: ThingData>(body: &[u8]) -> Result<T> {
    let thing: Thing = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("Invalid thing: {e}")))?;

    match thing.kind() {
        Some(kind) if kind == T::KIND => T::from_thing(kind, thing.data)
            .map_err(|e| Error::decode(format!("Invalid {} payload: {e}", kind.code()))),
        _ => Err(Error::unexpected_kind(T::KIND.code(), thing.kind)),
    }
}

/// Decode a listing whose children are bare records rather than thing
/// envelopes, such as the relationship lists under `r/{name}/about/`
///
/// The envelope rules are those of [`decode_listing`]. A child that fails to
/// decode as `T` is dropped and the rest are kept.
pub fn decode_records<T: DeserializeOwned>(body: &[u8]) -> Result<Page<T>> {
    let raw: RawListing = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("Invalid listing: {e}")))?;

    let mut items = Vec::with_capacity(raw.data.children.len());
    for (index, child) in raw.data.children.into_iter().enumerate() {
        match serde_json::from_value(child) {
            Ok(item) => items.push(item),
            Err(e) => trace!(index, error = %e, "dropping malformed record"),
        }
    }

    debug!(kind = %raw.kind, records = items.len(), "decoded record listing");
    Ok(Page {
        items,
        after: raw.data.after,
        before: raw.data.before,
    })
}

/// Decode the two-listing array returned for a single post: the post's
/// listing followed by its comment tree
pub fn decode_post_and_comments(body: &[u8]) -> Result<PostAndComments> {
    let (posts, replies): (Listing<Vec<Post>>, Listing<Things>) = serde_json::from_slice(body)
        .map_err(|e| Error::decode(format!("Invalid post and comments: {e}")))?;

    let post = posts
        .things
        .into_iter()
        .next()
        .ok_or_else(|| Error::decode("Post listing holds no post"))?;
    let Things {
        comments, mores, ..
    } = replies.things;

    Ok(PostAndComments {
        post,
        comments,
        more: mores.into_iter().next(),
    })
}
