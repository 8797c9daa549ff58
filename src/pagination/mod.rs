//! Pagination module
//!
//! Cursor pagination shared by every listing endpoint.
//!
//! # Overview
//!
//! A decoded [`Page`](crate::listing::Page) carries the `after` and `before`
//! cursors of its response. [`ListOptions`] feeds them back as request
//! parameters, and [`PageWalker`] / [`paginate`] follow them until a cursor
//! comes back empty.

mod types;
mod walker;

pub use types::{Direction, ListOptions, NextPage, PaginationState};
pub use walker::{paginate, PageWalker};

#[cfg(test)]
mod tests;
