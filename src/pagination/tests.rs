//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::listing::Page;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;

fn page(items: usize, after: &str, before: &str) -> Page<usize> {
    Page {
        items: (0..items).collect(),
        after: after.to_string(),
        before: before.to_string(),
    }
}

fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
    params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

// ============================================================================
// ListOptions Tests
// ============================================================================

#[test]
fn test_list_options_empty() {
    assert!(ListOptions::new().to_params().is_empty());
}

#[test]
fn test_list_options_params_order() {
    let options = ListOptions {
        limit: Some(25),
        after: Some("t3_a".to_string()),
        before: Some("t3_b".to_string()),
    };
    assert_eq!(
        pairs(&options.to_params()),
        vec![("limit", "25"), ("after", "t3_a"), ("before", "t3_b")]
    );
}

#[test]
fn test_list_options_cursor_builders_are_exclusive() {
    let options = ListOptions::new().limit(10).before("t3_b").after("t3_a");
    assert_eq!(options.after.as_deref(), Some("t3_a"));
    assert_eq!(options.before, None);

    let options = options.before("t3_b");
    assert_eq!(options.after, None);
    assert_eq!(options.before.as_deref(), Some("t3_b"));
    assert_eq!(options.limit, Some(10));
}

#[test]
fn test_list_options_empty_cursor_is_sent() {
    let options = ListOptions::new().after("");
    assert_eq!(pairs(&options.to_params()), vec![("after", "")]);
}

#[test]
fn test_list_options_yaml() {
    let options: ListOptions = serde_yaml::from_str("limit: 5\nafter: t3_x\n").unwrap();
    assert_eq!(options, ListOptions::new().limit(5).after("t3_x"));
}

// ============================================================================
// NextPage / PaginationState Tests
// ============================================================================

#[test]
fn test_next_page_predicates() {
    assert!(NextPage::Done.is_done());
    assert!(!NextPage::Done.is_continue());

    let next = NextPage::Continue(ListOptions::new());
    assert!(next.is_continue());
    assert!(!next.is_done());
}

#[test]
fn test_pagination_state() {
    let mut state = PaginationState::new();
    state.add_page(25);
    state.add_page(10);
    state.set_cursor("t3_z".to_string());
    assert_eq!(state.pages, 2);
    assert_eq!(state.total_fetched, 35);
    assert_eq!(state.cursor.as_deref(), Some("t3_z"));
    assert!(!state.done);
    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// PageWalker Tests
// ============================================================================

#[test]
fn test_walker_first_request_is_base() {
    let base = ListOptions::new().limit(2);
    let walker = PageWalker::new(base.clone());
    assert_eq!(walker.next_request(), Some(base));
}

#[test]
fn test_walker_follows_after() {
    let mut walker = PageWalker::new(ListOptions::new().limit(2));

    let next = walker.advance(&page(2, "t3_2", ""));
    assert_eq!(
        next,
        NextPage::Continue(ListOptions::new().limit(2).after("t3_2"))
    );
    assert_eq!(walker.next_request(), Some(ListOptions::new().limit(2).after("t3_2")));

    let next = walker.advance(&page(1, "", "t3_2"));
    assert!(next.is_done());
    assert_eq!(walker.next_request(), None);
    assert_eq!(walker.state().pages, 2);
    assert_eq!(walker.state().total_fetched, 3);
}

#[test]
fn test_walker_backward_follows_before() {
    let mut walker = PageWalker::new(ListOptions::new()).backward();

    let next = walker.advance(&page(3, "t3_after", "t3_before"));
    assert_eq!(next, NextPage::Continue(ListOptions::new().before("t3_before")));

    assert!(walker.advance(&page(3, "t3_after", "")).is_done());
}

#[test]
fn test_walker_max_pages() {
    let mut walker = PageWalker::new(ListOptions::new()).max_pages(1);
    assert!(walker.advance(&page(5, "t3_more", "")).is_done());
    assert!(walker.state().done);
    assert_eq!(walker.next_request(), None);
}

#[test]
fn test_walker_empty_page_with_cursor_continues() {
    let mut walker = PageWalker::new(ListOptions::new());
    assert!(walker.advance(&page(0, "t3_x", "")).is_continue());
}

// ============================================================================
// paginate Tests
// ============================================================================

#[tokio::test]
async fn test_paginate_until_cursor_empty() {
    let mut responses = VecDeque::from(vec![
        page(2, "t3_b", ""),
        page(2, "t3_d", "t3_a"),
        page(1, "", "t3_c"),
    ]);
    let mut requests = Vec::new();

    let pages: Vec<Page<usize>> = paginate(PageWalker::new(ListOptions::new().limit(2)), |options| {
        requests.push(options);
        let next = responses.pop_front();
        async move { next.ok_or_else(|| Error::Other("no more responses".to_string())) }
    })
    .try_collect()
    .await
    .unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[2].len(), 1);
    assert_eq!(
        requests,
        vec![
            ListOptions::new().limit(2),
            ListOptions::new().limit(2).after("t3_b"),
            ListOptions::new().limit(2).after("t3_d"),
        ]
    );
}

#[tokio::test]
async fn test_paginate_respects_max_pages() {
    let mut calls = 0_u32;
    let pages: Vec<Page<usize>> = paginate(PageWalker::new(ListOptions::new()).max_pages(2), |_| {
        calls += 1;
        async { Ok(page(1, "t3_forever", "")) }
    })
    .try_collect()
    .await
    .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(calls, 2);
}

#[tokio::test]
async fn test_paginate_stops_on_error() {
    let mut calls = 0_u32;
    let result: crate::Result<Vec<Page<usize>>> = paginate(PageWalker::new(ListOptions::new()), |_| {
        calls += 1;
        let n = calls;
        async move {
            if n == 1 {
                Ok(page(1, "t3_next", ""))
            } else {
                Err(Error::decode("bad page"))
            }
        }
    })
    .try_collect()
    .await;

    assert!(result.unwrap_err().is_decode());
    assert_eq!(calls, 2);
}
