//! Page walking
//!
//! [`PageWalker`] turns each decoded page into the options for the next
//! request. [`paginate`] drives a fetch function with it as a stream.

use super::types::{Direction, ListOptions, NextPage, PaginationState};
use crate::error::{Error, Result};
use crate::listing::Page;
use futures::stream::{self, Stream};
use std::future::Future;
use tracing::debug;

/// Follows one cursor direction across pages
#[derive(Debug, Clone)]
pub struct PageWalker {
    base: ListOptions,
    direction: Direction,
    max_pages: Option<u32>,
    state: PaginationState,
}

impl PageWalker {
    /// Walk forward starting from `base`
    pub fn new(base: ListOptions) -> Self {
        Self {
            base,
            direction: Direction::Forward,
            max_pages: None,
            state: PaginationState::new(),
        }
    }

    /// Follow `before` instead of `after`
    #[must_use]
    pub fn backward(mut self) -> Self {
        self.direction = Direction::Backward;
        self
    }

    /// Stop after this many pages
    #[must_use]
    pub fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = Some(pages);
        self
    }

    /// Current state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Options for the next request, or `None` once done
    pub fn next_request(&self) -> Option<ListOptions> {
        if self.state.done {
            return None;
        }
        match (&self.state.cursor, self.direction) {
            (None, _) => Some(self.base.clone()),
            (Some(cursor), Direction::Forward) => Some(self.base.clone().after(cursor.clone())),
            (Some(cursor), Direction::Backward) => Some(self.base.clone().before(cursor.clone())),
        }
    }

    /// Record a page and decide whether to continue
    pub fn advance<T>(&mut self, page: &Page<T>) -> NextPage {
        self.state.add_page(page.len());

        if self.max_pages.is_some_and(|max| self.state.pages >= max) {
            self.state.mark_done();
            return NextPage::Done;
        }

        let cursor = match self.direction {
            Direction::Forward => &page.after,
            Direction::Backward => &page.before,
        };
        if cursor.is_empty() {
            self.state.mark_done();
            return NextPage::Done;
        }

        self.state.set_cursor(cursor.clone());
        match self.next_request() {
            Some(options) => NextPage::Continue(options),
            None => NextPage::Done,
        }
    }
}

/// Stream pages by repeatedly calling `fetch` with the walker's options
///
/// The stream ends after the walker reports done, or after the first error.
pub fn paginate<T, F, Fut>(walker: PageWalker, fetch: F) -> impl Stream<Item = Result<Page<T>>>
where
    F: FnMut(ListOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    stream::try_unfold((walker, fetch), |(mut walker, mut fetch)| async move {
        let Some(options) = walker.next_request() else {
            return Ok::<_, Error>(None);
        };
        let page = fetch(options).await?;
        let next = walker.advance(&page);
        debug!(
            pages = walker.state().pages,
            total = walker.state().total_fetched,
            done = next.is_done(),
            "fetched page"
        );
        Ok::<_, Error>(Some((page, (walker, fetch))))
    })
}
