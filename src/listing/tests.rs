//! Tests for listing module

use super::*;
use crate::model::{Ban, Moderator, Post, Relationship, Subreddit};
use crate::pagination::ListOptions;
use crate::thing::{InboxThings, Kind, Things};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const INBOX: &[u8] = br#"{"kind":"Listing","data":{"children":[{"kind":"t1","data":{"id":"c1","was_comment":true}},{"kind":"t4","data":{"id":"m1","was_comment":false}},{"kind":"t9","data":{}}],"after":"next1","before":""}}"#;

fn body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
}

// ============================================================================
// Inbox Listing Tests
// ============================================================================

#[test]
fn test_inbox_scenario() {
    let listing = decode_inbox(INBOX).unwrap();
    assert_eq!(listing.kind, "Listing");

    let comments = listing.comments();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments.items[0].id, "c1");
    assert!(comments.items[0].is_comment);

    let messages = listing.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.items[0].id, "m1");
    assert!(!messages.items[0].is_comment);

    assert_eq!(comments.after, "next1");
    assert_eq!(comments.before, "");
    assert_eq!(messages.after, "next1");
    assert_eq!(messages.before, "");
}

#[test]
fn test_inbox_malformed_child_scenario() {
    let listing = decode_inbox(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t1", "data": "not-an-object"},
                {"kind": "t1", "data": {"id": "c1", "was_comment": true}}
            ],
            "after": "",
            "before": ""
        }
    })))
    .unwrap();

    let comments = listing.comments();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments.items[0].id, "c1");
    assert!(listing.messages().is_empty());
}

#[test]
fn test_inbox_into_views_matches_accessors() {
    let listing = decode_inbox(INBOX).unwrap();
    let comments = listing.comments();
    let messages = listing.messages();

    let (owned_comments, owned_messages) = listing.into_views();
    assert_eq!(owned_comments, comments);
    assert_eq!(owned_messages, messages);
}

#[test]
fn test_inbox_zero_children() {
    let listing = decode_inbox(&body(json!({
        "kind": "Listing",
        "data": {"children": [], "after": null, "before": null}
    })))
    .unwrap();

    assert_eq!(listing.things, InboxThings::default());
    assert!(listing.comments().items.is_empty());
    assert!(listing.messages().items.is_empty());
    assert_eq!(listing.after, "");
    assert_eq!(listing.before, "");
}

#[test]
fn test_inbox_counts_only_valid_recognised_children() {
    let listing = decode_inbox(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t1", "data": {"id": "c1"}},
                {"kind": "t1", "data": {"id": ["bad"]}},
                {"kind": "t4", "data": {"id": "m1"}},
                {"kind": "t3", "data": {"id": "p1"}},
                {"kind": "t1", "data": {"id": "c2"}},
                {"kind": "zz", "data": {"id": "x"}},
                {"kind": "t4", "data": {"id": "m2"}}
            ],
            "after": "t4_m2",
            "before": "t1_c1"
        }
    })))
    .unwrap();

    let comments: Vec<String> = listing.comments().into_iter().map(|m| m.id).collect();
    let messages: Vec<String> = listing.messages().into_iter().map(|m| m.id).collect();
    assert_eq!(comments, vec!["c1", "c2"]);
    assert_eq!(messages, vec!["m1", "m2"]);
    assert_eq!(listing.comments().before, "t1_c1");
    assert_eq!(listing.messages().after, "t4_m2");
}

#[test]
fn test_decoding_twice_is_equal() {
    assert_eq!(decode_inbox(INBOX).unwrap(), decode_inbox(INBOX).unwrap());
}

// ============================================================================
// Cursor Tests
// ============================================================================

#[test_case(json!("t3_abc"), "t3_abc" ; "populated")]
#[test_case(json!(""), "" ; "empty string")]
#[test_case(json!(null), "" ; "null")]
#[test_case(json!(" t3_abc "), " t3_abc " ; "whitespace kept")]
fn test_after_cursor_preserved(after: serde_json::Value, expected: &str) {
    let listing = decode_inbox(&body(json!({
        "kind": "Listing",
        "data": {"children": [], "after": after, "before": "b"}
    })))
    .unwrap();
    assert_eq!(listing.after, expected);
    assert_eq!(listing.comments().after, expected);
    assert_eq!(listing.messages().after, expected);
    assert_eq!(listing.messages().before, "b");
}

#[test]
fn test_absent_cursors_are_empty() {
    let listing = decode_inbox(&body(json!({"kind": "Listing", "data": {"children": []}}))).unwrap();
    assert_eq!(listing.after, "");
    assert_eq!(listing.before, "");
}

// ============================================================================
// Envelope Error Tests
// ============================================================================

#[test_case(b"not json" ; "not json")]
#[test_case(br#"{"kind":"Listing"}"# ; "missing data")]
#[test_case(br#"{"kind":"Listing","data":{"after":"x"}}"# ; "missing children")]
#[test_case(br#"{"kind":"Listing","data":{"children":{"kind":"t1"}}}"# ; "children not an array")]
#[test_case(br#"{"kind":"Listing","data":{"children":null}}"# ; "children null")]
#[test_case(br#"{"kind":"Listing","data":"oops"}"# ; "data not an object")]
#[test_case(br#"[]"# ; "top level array")]
#[test_case(br#"{"kind":"Listing","data":{"children":[],"after":5}}"# ; "numeric cursor")]
fn test_envelope_errors_are_fatal(input: &[u8]) {
    let err = decode_inbox(input).unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err}");
}

// ============================================================================
// Homogeneous Page Tests
// ============================================================================

#[test]
fn test_decode_page_of_posts() {
    let page: Page<Post> = decode_page(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t3", "data": {"id": "agi5zf", "title": "test"}},
                {"kind": "t3", "data": {"id": "hyhquk", "title": "Veggies"}}
            ],
            "after": "t3_hyhquk",
            "before": null
        }
    })))
    .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.items[1].title, "Veggies");
    assert_eq!(page.after, "t3_hyhquk");
    assert_eq!(page.before, "");
    assert!(page.has_next());
    assert!(!page.has_prev());
}

#[test]
fn test_decode_page_drops_other_kinds() {
    let page: Page<Subreddit> = decode_page(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t3", "data": {"id": "p1"}},
                {"kind": "t5", "data": {"id": "s1", "display_name": "pics"}}
            ]
        }
    })))
    .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].name, "pics");
}

#[test]
fn test_mixed_listing_views_share_cursors() {
    let listing: Listing<Things> = decode_listing(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t3", "data": {"id": "p1"}},
                {"kind": "t1", "data": {"id": "c1"}},
                {"kind": "more", "data": {"id": "m1"}}
            ],
            "after": "a",
            "before": "b"
        }
    })))
    .unwrap();

    assert_eq!(listing.posts().len(), 1);
    assert_eq!(listing.comments().len(), 1);
    assert_eq!(listing.mores().len(), 1);
    assert!(listing.subreddits().is_empty());
    assert!(listing.messages().is_empty());
    for (after, before) in [
        (listing.posts().after, listing.posts().before),
        (listing.subreddits().after, listing.subreddits().before),
        (listing.mores().after, listing.mores().before),
    ] {
        assert_eq!(after, "a");
        assert_eq!(before, "b");
    }

    let posts = listing.into_posts();
    assert_eq!(posts.items[0].id, "p1");
    assert_eq!(posts.after, "a");
}

// ============================================================================
// Single Thing Tests
// ============================================================================

#[test]
fn test_decode_thing() {
    let subreddit: Subreddit = decode_thing(&body(json!({
        "kind": "t5",
        "data": {"id": "2rc7j", "name": "t5_2rc7j", "display_name": "golang"}
    })))
    .unwrap();
    assert_eq!(subreddit.full_id, "t5_2rc7j");
    assert_eq!(subreddit.name, "golang");
}

#[test]
fn test_decode_thing_wrong_kind() {
    let err = decode_thing::<Subreddit>(&body(json!({"kind": "t3", "data": {}}))).unwrap_err();
    assert!(matches!(err, crate::Error::UnexpectedKind { .. }));
}

#[test]
fn test_decode_thing_bad_payload() {
    let err = decode_thing::<Subreddit>(&body(json!({"kind": "t5", "data": "x"}))).unwrap_err();
    assert!(err.is_decode());
}

// ============================================================================
// Record Listing Tests
// ============================================================================

#[test]
fn test_decode_records_bare_children() {
    let page: Page<Ban> = decode_records(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"date": 1597113302.0, "days_left": 43, "rel_id": "rb_123", "name": "testuser1", "note": "Spam", "id": "t2_user1"},
                {"date": 1597113300.0, "days_left": null, "rel_id": "rb_456", "name": "testuser2", "note": "Spam", "id": "t2_user2"}
            ],
            "after": "rb_456",
            "before": null
        }
    })))
    .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].relationship.id, "rb_123");
    assert_eq!(page.items[0].days_left, Some(43));
    assert_eq!(page.items[1].relationship.user, "testuser2");
    assert_eq!(page.items[1].days_left, None);
    assert_eq!(page.after, "rb_456");
    assert_eq!(page.before, "");
}

#[test]
fn test_decode_records_drops_malformed_record() {
    let page: Page<Relationship> = decode_records(&body(json!({
        "kind": "Listing",
        "data": {
            "children": [
                {"rel_id": ["bad"]},
                "not-a-record",
                {"rel_id": "rel_id2", "name": "testuser2", "id": "t2_user2"}
            ],
            "after": "",
            "before": "rel_id1"
        }
    })))
    .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].id, "rel_id2");
    assert_eq!(page.before, "rel_id1");
}

#[test]
fn test_decode_records_user_list_without_cursors() {
    let page: Page<Moderator> = decode_records(&body(json!({
        "kind": "UserList",
        "data": {
            "children": [
                {"name": "testuser1", "mod_permissions": ["all"], "rel_id": "rb_tmatb9", "id": "t2_test1"}
            ]
        }
    })))
    .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].permissions, vec!["all"]);
    assert_eq!(page.after, "");
    assert_eq!(page.before, "");
}

#[test_case(b"not json" ; "not json")]
#[test_case(br#"{"kind":"UserList","data":{}}"# ; "missing children")]
#[test_case(br#"{"kind":"UserList","data":{"children":{}}}"# ; "children not an array")]
fn test_decode_records_envelope_errors_are_fatal(input: &[u8]) {
    let err = decode_records::<Relationship>(input).unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err}");
}

// ============================================================================
// Post And Comments Tests
// ============================================================================

#[test]
fn test_decode_post_and_comments() {
    let pair = decode_post_and_comments(&body(json!([
        {"kind": "Listing", "data": {"children": [
            {"kind": "t3", "data": {"id": "hyhquk", "title": "Rules", "stickied": true}}
        ]}},
        {"kind": "Listing", "data": {"children": [
            {"kind": "t1", "data": {"id": "c1", "body": "first"}},
            {"kind": "t1", "data": {"id": "c2", "body": "second"}},
            {"kind": "more", "data": {"id": "m1", "count": 4, "children": ["m1", "m2"]}}
        ]}}
    ])))
    .unwrap();

    assert_eq!(pair.post.id, "hyhquk");
    assert!(pair.post.stickied);
    let ids: Vec<&str> = pair.comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    let more = pair.more.unwrap();
    assert_eq!(more.count, 4);
    assert_eq!(more.children, vec!["m1", "m2"]);
}

#[test]
fn test_decode_post_and_comments_without_post() {
    let err = decode_post_and_comments(&body(json!([
        {"kind": "Listing", "data": {"children": []}},
        {"kind": "Listing", "data": {"children": []}}
    ])))
    .unwrap_err();
    assert!(err.is_decode());
}

#[test_case(json!({"kind": "Listing", "data": {"children": []}}) ; "single listing")]
#[test_case(json!([{"kind": "Listing", "data": {"children": []}}]) ; "one element array")]
#[test_case(json!([{"kind": "Listing"}, {"kind": "Listing", "data": {"children": []}}]) ; "bad post envelope")]
fn test_decode_post_and_comments_bad_shape(input: serde_json::Value) {
    let err = decode_post_and_comments(&body(input)).unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err}");
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_next_options() {
    let page = Page {
        items: vec![1, 2, 3],
        after: "t3_next".to_string(),
        before: String::new(),
    };
    let base = ListOptions::new().limit(3).before("stale");

    let next = page.next_options(&base).unwrap();
    assert_eq!(next.after.as_deref(), Some("t3_next"));
    assert_eq!(next.before, None);
    assert_eq!(next.limit, Some(3));

    assert!(page.prev_options(&base).is_none());
}

#[test]
fn test_page_prev_options() {
    let page: Page<u8> = Page {
        items: Vec::new(),
        after: String::new(),
        before: "t3_prev".to_string(),
    };
    let prev = page.prev_options(&ListOptions::new()).unwrap();
    assert_eq!(prev.before.as_deref(), Some("t3_prev"));
    assert_eq!(prev.after, None);
    assert!(page.next_options(&ListOptions::new()).is_none());
}

#[test]
fn test_page_map_keeps_cursors() {
    let page = Page {
        items: vec![Kind::Post, Kind::Comment],
        after: "a".to_string(),
        before: "b".to_string(),
    };
    let codes = page.map(Kind::code);
    assert_eq!(codes.items, vec!["t3", "t1"]);
    assert_eq!(codes.after, "a");
    assert_eq!(codes.before, "b");
}

#[test]
fn test_page_default_is_empty() {
    let page: Page<Post> = Page::default();
    assert!(page.is_empty());
    assert!(!page.has_next());
    assert!(!page.has_prev());
}
