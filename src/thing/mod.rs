//! Thing module
//!
//! Decodes the API's `{kind, data}` envelopes.
//!
//! # Overview
//!
//! Each envelope is routed by its kind code into a typed bucket of a
//! [`ThingSet`]. Sets exist for a single kind (`Vec<T>`), for the inbox feed
//! ([`InboxThings`]) and for mixed listings ([`Things`]). One bad child never
//! fails the batch.

mod decoder;
mod types;

pub use decoder::{decode_thing_array, decode_things, InboxThings, Routed, ThingSet, Things};
pub use types::{Kind, Thing, ThingData};
