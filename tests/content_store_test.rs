//! Content store lookups and validation.

mod common;

use common::{sample_post, sample_store, sample_week, store_from};
use contenthub::content::{ContentStore, PageMetadata, PostingGuidelines, TargetAudience};
use contenthub::error::ContentError;

fn build(
    posts: Vec<contenthub::content::Post>,
    weeks: Vec<contenthub::content::CalendarWeek>,
) -> Result<ContentStore, ContentError> {
    ContentStore::new(
        posts,
        weeks,
        PostingGuidelines::default(),
        Vec::new(),
        TargetAudience::default(),
        PageMetadata::default(),
    )
}

#[test]
fn test_posts_for_week_keeps_calendar_order() {
    let store = sample_store();
    let ids: Vec<u32> = store.posts_for_week(1).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![101, 102]);

    let ids: Vec<u32> = store.posts_for_week(2).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![201]);
}

#[test]
fn test_posts_for_unknown_week_is_empty() {
    let store = sample_store();
    assert!(store.posts_for_week(3).is_empty());
    assert!(store.posts_for_week(0).is_empty());
}

#[test]
fn test_calendar_order_wins_over_catalog_order() {
    let store = store_from(
        vec![sample_post(1, 1), sample_post(2, 2)],
        vec![sample_week(1, &[2, 1])],
    );
    let ids: Vec<u32> = store.posts_for_week(1).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_lookup_by_id() {
    let store = sample_store();
    assert_eq!(store.post(201).map(|p| p.day), Some(8));
    assert!(store.post(999).is_none());
    assert_eq!(store.week_of_post(102), Some(1));
    assert_eq!(store.week_of_post(999), None);
}

#[test]
fn test_unscheduled_post_is_allowed() {
    let store = store_from(
        vec![sample_post(1, 1), sample_post(2, 2)],
        vec![sample_week(1, &[1])],
    );
    assert_eq!(store.post_count(), 2);
    assert_eq!(store.week_of_post(2), None);
}

#[test]
fn test_rejects_duplicate_post_ids() {
    let result = build(vec![sample_post(1, 1), sample_post(1, 2)], vec![]);
    assert_eq!(result.unwrap_err(), ContentError::DuplicatePostId { id: 1 });
}

#[test]
fn test_rejects_unknown_reference() {
    let result = build(vec![sample_post(1, 1)], vec![sample_week(1, &[1, 7])]);
    assert_eq!(
        result.unwrap_err(),
        ContentError::UnknownPostReference { week: 1, id: 7 }
    );
}

#[test]
fn test_rejects_post_in_two_weeks() {
    let result = build(
        vec![sample_post(1, 1)],
        vec![sample_week(1, &[1]), sample_week(2, &[1])],
    );
    assert_eq!(
        result.unwrap_err(),
        ContentError::PostInMultipleWeeks {
            id: 1,
            first: 1,
            second: 2
        }
    );
}

#[test]
fn test_rejects_duplicate_week() {
    let result = build(
        vec![sample_post(1, 1), sample_post(2, 2)],
        vec![sample_week(1, &[1]), sample_week(1, &[2])],
    );
    assert_eq!(result.unwrap_err(), ContentError::DuplicateWeek { week: 1 });
}

#[test]
fn test_builtin_catalog_shape() {
    let store = ContentStore::builtin().expect("built-in catalog is valid");
    assert_eq!(store.post_count(), 30);
    assert_eq!(store.weeks().len(), 5);

    let scheduled: usize = store.weeks().iter().map(|w| w.posts.len()).sum();
    assert_eq!(scheduled, 30);

    for week in store.weeks() {
        let ids: Vec<u32> = store.posts_for_week(week.week).iter().map(|p| p.id).collect();
        assert_eq!(ids, week.posts, "week {} lookup order", week.week);
    }

    for post in store.posts() {
        assert!((1..=30).contains(&post.day));
        assert!(post.hashtags.iter().all(|h| h.starts_with('#')));
        assert!(!post.caption.is_empty());
    }
}

#[test]
fn test_builtin_returns_shared_handle() {
    let a = ContentStore::builtin().unwrap();
    let b = ContentStore::builtin().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}
