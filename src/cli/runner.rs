//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, PageArgs};
use crate::config::{load_config, ClientConfig};
use crate::error::Result;
use crate::listing::{decode_inbox, decode_listing, Listing, Page};
use crate::pagination::{ListOptions, PageWalker};
use crate::service::Client;
use crate::thing::Things;
use crate::types::{PostSort, TimeFilter};
use futures::{pin_mut, StreamExt};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Inbox { unread, page } => self.inbox(*unread, page).await,
            Commands::Sent { page } => self.sent(page).await,
            Commands::Posts {
                subreddit,
                sort,
                time,
                page,
                pages,
            } => self.posts(subreddit, *sort, *time, page, *pages).await,
            Commands::Subreddit { name } => self.subreddit(name).await,
            Commands::Decode { file, inbox } => self.decode(file, *inbox),
        }
    }

    /// Resolve configuration from file, flags and environment
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => ClientConfig::default(),
        };
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(token) = &self.cli.token {
            config.access_token = Some(token.clone());
        }
        config.validate()?;
        Ok(config)
    }

    fn client(&self) -> Result<Client> {
        let config = self.load_config()?;
        if self.cli.verbose {
            info!("Using API at {}", config.base_url);
        }
        Client::from_config(&config)
    }

    async fn inbox(&self, unread: bool, page: &PageArgs) -> Result<()> {
        let messages = self.client()?.messages();
        let options = list_options(page);
        let (comments, direct) = if unread {
            messages.inbox_unread(&options).await?
        } else {
            messages.inbox(&options).await?
        };
        emit_page("comment", &comments)?;
        emit_page("message", &direct)?;
        emit_cursors(&comments)
    }

    async fn sent(&self, page: &PageArgs) -> Result<()> {
        let sent = self.client()?.messages().sent(&list_options(page)).await?;
        emit_page("message", &sent)?;
        emit_cursors(&sent)
    }

    async fn posts(
        &self,
        subreddit: &str,
        sort: PostSort,
        time: Option<TimeFilter>,
        page: &PageArgs,
        pages: u32,
    ) -> Result<()> {
        let service = self.client()?.subreddits();
        let options = list_options(page);

        if pages <= 1 {
            let posts = service.posts(subreddit, sort, time, &options).await?;
            emit_page("post", &posts)?;
            return emit_cursors(&posts);
        }

        let walker = PageWalker::new(options).max_pages(pages);
        let stream = service.post_pages(subreddit, sort, walker);
        pin_mut!(stream);

        let mut last = None;
        while let Some(page) = stream.next().await {
            let page = page?;
            emit_page("post", &page)?;
            last = Some(page);
        }
        match last {
            Some(page) => emit_cursors(&page),
            None => Ok(()),
        }
    }

    async fn subreddit(&self, name: &str) -> Result<()> {
        let subreddit = self.client()?.subreddits().get(name).await?;
        emit(&json!({"type": "subreddit", "item": subreddit}))
    }

    fn decode(&self, file: &Path, inbox: bool) -> Result<()> {
        let body = fs::read(file)?;

        if inbox {
            let listing = decode_inbox(&body)?;
            emit_page("comment", &listing.comments())?;
            emit_page("message", &listing.messages())?;
            return emit_cursors(&listing.messages());
        }

        let listing: Listing<Things> = decode_listing(&body)?;
        emit_page("comment", &listing.comments())?;
        emit_page("more", &listing.mores())?;
        emit_page("post", &listing.posts())?;
        emit_page("subreddit", &listing.subreddits())?;
        emit_page("message", &listing.messages())?;
        emit_cursors(&listing.posts())
    }
}

fn list_options(page: &PageArgs) -> ListOptions {
    ListOptions {
        limit: page.limit,
        after: page.after.clone(),
        before: page.before.clone(),
    }
}

fn emit(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn emit_page<T: Serialize>(label: &str, page: &Page<T>) -> Result<()> {
    for item in page {
        emit(&json!({"type": label, "item": item}))?;
    }
    Ok(())
}

fn emit_cursors<T>(page: &Page<T>) -> Result<()> {
    emit(&json!({"type": "cursors", "after": page.after, "before": page.before}))
}
