//! CLI commands and argument parsing

use crate::config::ACCESS_TOKEN_ENV;
use crate::types::{PostSort, TimeFilter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse Reddit listings from the command line
#[derive(Parser, Debug)]
#[command(name = "redlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// OAuth access token
    #[arg(long, global = true, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show comment replies and messages in your inbox
    Inbox {
        /// Only unread items
        #[arg(long)]
        unread: bool,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show messages you have sent
    Sent {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show a subreddit's posts
    Posts {
        /// Subreddit name, without the r/ prefix
        subreddit: String,

        /// Sort order
        #[arg(short, long, value_enum, default_value = "hot")]
        sort: PostSort,

        /// Time window for top and controversial
        #[arg(short, long, value_enum)]
        time: Option<TimeFilter>,

        #[command(flatten)]
        page: PageArgs,

        /// Number of pages to follow
        #[arg(long, default_value = "1")]
        pages: u32,
    },

    /// Show details of a subreddit
    Subreddit {
        /// Subreddit name
        name: String,
    },

    /// Decode a saved listing response without touching the network
    Decode {
        /// File containing the response body
        file: PathBuf,

        /// Treat the body as an inbox feed
        #[arg(long)]
        inbox: bool,
    },
}

/// Paging flags shared by listing commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Items per page
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Start after this full id
    #[arg(long, conflicts_with = "before")]
    pub after: Option<String>,

    /// Start before this full id
    #[arg(long)]
    pub before: Option<String>,
}
