//! Copy requests and the timed "copied" indicator.
//!
//! Runs on a paused tokio clock so the 2 second window is exact.

mod common;

use std::time::Duration;

use common::{sample_post, sample_store, sample_week, store_from, test_app};
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_copy_payload_layout() {
    let mut post = sample_post(5, 1);
    post.caption = "Hello".to_string();
    post.hashtags = vec!["#A".to_string(), "#B".to_string()];
    post.cta = "Visit us".to_string();
    let store = store_from(vec![post], vec![sample_week(1, &[5])]);

    let (mut app, clipboard) = test_app(store);
    app.copy_post(5);

    assert_eq!(clipboard.writes(), vec!["Hello\n\n#A #B\n\nVisit us".to_string()]);
    assert_eq!(app.view.copied_id, Some(5));
}

#[tokio::test(start_paused = true)]
async fn test_indicator_clears_after_two_seconds() {
    let (mut app, _) = test_app(sample_store());
    app.copy_post(101);

    sleep(Duration::from_millis(1999)).await;
    app.drain_messages();
    assert_eq!(app.view.copied_id, Some(101));

    sleep(Duration::from_millis(2)).await;
    app.drain_messages();
    assert_eq!(app.view.copied_id, None);
}

#[tokio::test(start_paused = true)]
async fn test_newer_copy_survives_older_timer() {
    let (mut app, _) = test_app(sample_store());
    app.copy_post(101);

    sleep(Duration::from_millis(500)).await;
    app.copy_post(102);
    assert_eq!(app.view.copied_id, Some(102));

    // First timer fires at 2000ms and must not clear post 102.
    sleep(Duration::from_millis(1501)).await;
    app.drain_messages();
    assert_eq!(app.view.copied_id, Some(102));

    // Second timer fires at 2500ms.
    sleep(Duration::from_millis(500)).await;
    app.drain_messages();
    assert_eq!(app.view.copied_id, None);
}

#[tokio::test(start_paused = true)]
async fn test_clipboard_failure_still_shows_indicator() {
    let (mut app, clipboard) = test_app(sample_store());
    clipboard.set_should_fail(true);

    app.copy_post(201);
    assert_eq!(app.view.copied_id, Some(201));
    assert!(clipboard.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_copy_unknown_post_is_ignored() {
    let (mut app, clipboard) = test_app(sample_store());
    app.copy_post(999);
    assert_eq!(app.view.copied_id, None);
    assert!(clipboard.writes().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_expiry_marks_dirty() {
    let (mut app, _) = test_app(sample_store());
    app.copy_post(101);
    app.needs_redraw = false;

    sleep(Duration::from_millis(2001)).await;
    assert_eq!(app.drain_messages(), 1);
    assert!(app.needs_redraw);
}
