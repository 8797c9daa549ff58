//! CLI module
//!
//! Command-line interface for browsing listings.
//!
//! # Commands
//!
//! - `inbox` - Comment replies and messages, as separate views
//! - `sent` - Sent messages
//! - `posts` - A subreddit's posts, optionally across several pages
//! - `subreddit` - Details of one subreddit
//! - `decode` - Decode a saved response body offline

mod commands;
mod runner;

pub use commands::{Cli, Commands, PageArgs};
pub use runner::Runner;
