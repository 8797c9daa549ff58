#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # redlist
//!
//! A typed client for the Reddit API, built around one decoding problem:
//! listing responses wrap every item in a `{kind, data}` envelope, and some
//! feeds mix several kinds on one page.
//!
//! ## Features
//!
//! - **Kind routing**: children are decoded by kind code into typed buckets
//! - **Fault isolation**: an unknown or malformed child is dropped, the rest
//!   of the page still decodes
//! - **Shared cursors**: every view of a page carries the page's
//!   `after`/`before` cursors, ready to request the next one
//! - **Pluggable transport**: services talk to a `Transport` trait;
//!   `HttpClient` implements it over `reqwest`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use redlist::{Client, HttpClientConfig, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::with_http(
//!         HttpClientConfig::builder().access_token("...").build(),
//!     )?;
//!
//!     let (replies, messages) = client.messages().inbox(&ListOptions::new()).await?;
//!     println!("{} replies, {} messages", replies.len(), messages.len());
//!
//!     if let Some(next) = messages.next_options(&ListOptions::new()) {
//!         let (_, older) = client.messages().inbox(&next).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │   Services: MessageService, SubredditService (Client)     │
//! └───────────────┬──────────────────────────┬────────────────┘
//!                 │ ApiRequest               │ raw bytes
//!          ┌──────┴──────┐          ┌────────┴─────────┐
//!          │  Transport  │          │  listing decode  │
//!          │ (HttpClient)│          │  thing routing   │
//!          └─────────────┘          │  page cursors    │
//!                                   └──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Thing envelopes and kind routing
pub mod thing;

/// Listing envelopes and page views
pub mod listing;

/// Cursor pagination
pub mod pagination;

/// Domain models
pub mod model;

/// Transport trait and HTTP client
pub mod http;

/// Endpoint services
pub mod service;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::{load_config, load_config_from_str, ClientConfig};
pub use http::{ApiRequest, HttpClient, HttpClientConfig, Transport};
pub use listing::{
    decode_inbox, decode_listing, decode_page, decode_post_and_comments, decode_records,
    decode_thing, InboxListing, Listing, Page,
};
pub use model::{
    Ban, Comment, Message, Moderator, More, Post, PostAndComments, Relationship,
    SendMessageRequest, Subreddit, Timestamp,
};
pub use pagination::{paginate, ListOptions, PageWalker};
pub use service::{Client, MessageService, SubredditService};
pub use thing::{InboxThings, Kind, Thing, ThingData, ThingSet, Things};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
