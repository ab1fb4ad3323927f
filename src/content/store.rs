//! The read-only content catalog.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::catalog;
use super::models::{CalendarWeek, PageMetadata, Post, PostingGuidelines, TargetAudience};
use crate::error::ContentError;

static BUILTIN: Lazy<Result<Arc<ContentStore>, ContentError>> =
    Lazy::new(|| catalog::build().map(Arc::new));

/// Immutable catalog of posts, calendar weeks and guidelines.
///
/// Built once and shared behind an `Arc`; there are no mutating methods.
/// Lookups of absent keys return `None` or an empty list rather than an
/// error.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
    weeks: Vec<CalendarWeek>,
    guidelines: PostingGuidelines,
    strategies: Vec<String>,
    audience: TargetAudience,
    metadata: PageMetadata,
    /// Post id -> index into `posts`
    post_index: HashMap<u32, usize>,
}

impl ContentStore {
    /// Assemble and validate a store.
    ///
    /// Rejects duplicate post ids, duplicate week numbers, week entries
    /// pointing at unknown posts, and posts scheduled in more than one week.
    pub fn new(
        posts: Vec<Post>,
        weeks: Vec<CalendarWeek>,
        guidelines: PostingGuidelines,
        strategies: Vec<String>,
        audience: TargetAudience,
        metadata: PageMetadata,
    ) -> Result<Self, ContentError> {
        let mut post_index = HashMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            if post_index.insert(post.id, idx).is_some() {
                return Err(ContentError::DuplicatePostId { id: post.id });
            }
        }

        let mut seen_weeks = HashSet::new();
        let mut scheduled: HashMap<u32, u32> = HashMap::new();
        for week in &weeks {
            if !seen_weeks.insert(week.week) {
                return Err(ContentError::DuplicateWeek { week: week.week });
            }
            for &id in &week.posts {
                if !post_index.contains_key(&id) {
                    return Err(ContentError::UnknownPostReference {
                        week: week.week,
                        id,
                    });
                }
                if let Some(&first) = scheduled.get(&id) {
                    return Err(ContentError::PostInMultipleWeeks {
                        id,
                        first,
                        second: week.week,
                    });
                }
                scheduled.insert(id, week.week);
            }
        }

        tracing::debug!(
            posts = posts.len(),
            weeks = weeks.len(),
            "content store validated"
        );

        Ok(Self {
            posts,
            weeks,
            guidelines,
            strategies,
            audience,
            metadata,
            post_index,
        })
    }

    /// The compiled-in 30-day campaign, built on first use.
    pub fn builtin() -> Result<Arc<ContentStore>, ContentError> {
        (*BUILTIN).clone()
    }

    /// All posts in catalog order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn weeks(&self) -> &[CalendarWeek] {
        &self.weeks
    }

    pub fn guidelines(&self) -> &PostingGuidelines {
        &self.guidelines
    }

    /// Freeform growth strategy suggestions.
    pub fn strategies(&self) -> &[String] {
        &self.strategies
    }

    pub fn audience(&self) -> &TargetAudience {
        &self.audience
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    pub fn post(&self, id: u32) -> Option<&Post> {
        self.post_index.get(&id).map(|&idx| &self.posts[idx])
    }

    pub fn week(&self, week: u32) -> Option<&CalendarWeek> {
        self.weeks.iter().find(|w| w.week == week)
    }

    /// Posts scheduled in `week`, in the week's listed order.
    ///
    /// Unknown week numbers yield an empty list.
    pub fn posts_for_week(&self, week: u32) -> Vec<&Post> {
        match self.week(week) {
            Some(w) => w.posts.iter().filter_map(|&id| self.post(id)).collect(),
            None => Vec::new(),
        }
    }

    /// Week number a post is scheduled in, if any.
    pub fn week_of_post(&self, id: u32) -> Option<u32> {
        self.weeks
            .iter()
            .find(|w| w.posts.contains(&id))
            .map(|w| w.week)
    }
}
