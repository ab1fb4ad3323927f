//! Common test utilities for integration tests.
//!
//! Provides a small hand-built content store and an `App` wired to a
//! [`MockClipboard`] so tests can inspect clipboard writes.
//!
//! # Example
//!
//! ```ignore
//! use common::{sample_store, test_app};
//!
//! let (mut app, clipboard) = test_app(sample_store());
//! app.copy_post(101);
//! assert!(clipboard.last_text().is_some());
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use contenthub::adapters::MockClipboard;
use contenthub::app::App;
use contenthub::config::AppConfig;
use contenthub::content::{
    CalendarWeek, ContentStore, PageMetadata, Post, PostingGuidelines, TargetAudience,
};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// A post with the given id and day and predictable text.
pub fn sample_post(id: u32, day: u32) -> Post {
    Post {
        id,
        day,
        weekday: "Tuesday".to_string(),
        post_time: "9:00 AM".to_string(),
        category: "Introduction".to_string(),
        caption: format!("Caption for post {}", id),
        image_idea: format!("Image idea for post {}", id),
        hashtags: vec!["#Events".to_string(), format!("#Post{}", id)],
        cta: format!("CTA {}", id),
    }
}

pub fn sample_week(week: u32, posts: &[u32]) -> CalendarWeek {
    CalendarWeek {
        week,
        focus: format!("Focus {}", week),
        posts: posts.to_vec(),
    }
}

pub fn store_from(posts: Vec<Post>, weeks: Vec<CalendarWeek>) -> Arc<ContentStore> {
    let metadata = PageMetadata {
        title: "Test Content Manager".to_string(),
        description: "Test description".to_string(),
        heading: "Test Content Hub".to_string(),
        tagline: "Test tagline".to_string(),
        footer: "Test footer".to_string(),
    };
    let store = ContentStore::new(
        posts,
        weeks,
        PostingGuidelines::default(),
        Vec::new(),
        TargetAudience::default(),
        metadata,
    )
    .expect("sample store should validate");
    Arc::new(store)
}

/// Two weeks: week 1 holds posts 101 and 102, week 2 holds post 201.
pub fn sample_store() -> Arc<ContentStore> {
    store_from(
        vec![sample_post(101, 1), sample_post(102, 2), sample_post(201, 8)],
        vec![sample_week(1, &[101, 102]), sample_week(2, &[201])],
    )
}

/// An `App` over `store` with a mock clipboard shared with the caller.
pub fn test_app(store: Arc<ContentStore>) -> (App, MockClipboard) {
    let clipboard = MockClipboard::new();
    let app = App::new(store, Box::new(clipboard.clone()), AppConfig::new());
    (app, clipboard)
}

/// Render one frame into a test backend and return the buffer.
pub fn render_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| contenthub::ui::render(f, app))
        .expect("draw should succeed");
    terminal.backend().buffer().clone()
}

/// Buffer contents as one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_lines(buffer).iter().any(|line| line.contains(needle))
}
