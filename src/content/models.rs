//! Content data types.
//!
//! Everything here is immutable once the [`super::ContentStore`] is built.
//! Field names serialize in camelCase so `--export` output matches the
//! names used by the content authors (`postTime`, `imageIdea`).

use serde::Serialize;

/// Preview length used on collapsed post cards.
pub const PREVIEW_CHARS: usize = 100;

/// A single pre-authored social media post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identity key, unique across the catalog
    pub id: u32,
    /// Day of the campaign (1..=30)
    pub day: u32,
    /// Day-of-week name
    pub weekday: String,
    /// Recommended publishing time, human readable
    pub post_time: String,
    /// Open-ended content category ("Introduction", "Testimonial", ...)
    pub category: String,
    /// Main post body
    pub caption: String,
    /// Description of the accompanying image or video
    pub image_idea: String,
    /// Hashtags in display order, including the leading '#'
    pub hashtags: Vec<String>,
    /// Call to action line
    pub cta: String,
}

impl Post {
    /// The text placed on the clipboard by "Copy Full Post".
    ///
    /// Caption, blank line, hashtags joined by single spaces, blank line, CTA.
    pub fn full_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.caption,
            self.hashtags.join(" "),
            self.cta
        )
    }

    /// First `max_chars` characters of the caption followed by `...`.
    ///
    /// Counts chars, not bytes, so multi-byte captions never split mid
    /// code point. The ellipsis is always appended.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.caption.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }

    /// `Day {day} • {weekday}` label shown on the card header.
    pub fn schedule_label(&self) -> String {
        format!("Day {} • {}", self.day, self.weekday)
    }
}

/// A week of the content calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWeek {
    pub week: u32,
    /// Short theme for the week
    pub focus: String,
    /// Post ids scheduled this week, in publishing order
    pub posts: Vec<u32>,
}

/// Posting schedule advice shown on the guidelines tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingGuidelines {
    pub best_days: Vec<String>,
    pub best_times: Vec<String>,
    pub avoid_days: Vec<String>,
    pub frequency: String,
    pub engagement: String,
}

/// Who the campaign is written for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    pub primary: Vec<String>,
    pub key_services: Vec<String>,
}

/// Fixed page text: window title, header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageMetadata {
    /// Terminal window title
    pub title: String,
    pub description: String,
    /// Large heading in the header bar
    pub heading: String,
    pub tagline: String,
    pub footer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(caption: &str, hashtags: &[&str], cta: &str) -> Post {
        Post {
            id: 5,
            day: 1,
            weekday: "Monday".to_string(),
            post_time: "9:00 AM".to_string(),
            category: "Introduction".to_string(),
            caption: caption.to_string(),
            image_idea: String::new(),
            hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
            cta: cta.to_string(),
        }
    }

    #[test]
    fn test_full_text_layout() {
        let p = post("Hello", &["#A", "#B"], "Visit us");
        assert_eq!(p.full_text(), "Hello\n\n#A #B\n\nVisit us");
    }

    #[test]
    fn test_full_text_without_hashtags_keeps_blank_lines() {
        let p = post("Hello", &[], "Visit us");
        assert_eq!(p.full_text(), "Hello\n\n\n\nVisit us");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let p = post("héllo wörld", &[], "");
        assert_eq!(p.preview(4), "héll...");
    }

    #[test]
    fn test_preview_short_caption_still_gets_ellipsis() {
        let p = post("Hi", &[], "");
        assert_eq!(p.preview(PREVIEW_CHARS), "Hi...");
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let p = post("Hello", &["#A"], "Go");
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("postTime").is_some());
        assert!(json.get("imageIdea").is_some());
        assert!(json.get("post_time").is_none());
    }
}
