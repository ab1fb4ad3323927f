//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

/// Clipboard provider that records writes in memory.
///
/// Clones share the same storage, so a test can hand one clone to the
/// `App` and inspect writes through another.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_should_fail(&self, fail: bool) {
        if let Ok(mut flag) = self.should_fail.lock() {
            *flag = fail;
        }
    }

    /// Every successful write, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Most recent successful write.
    pub fn last_text(&self) -> Option<String> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }
}

impl ClipboardProvider for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let fail = self.should_fail.lock().map(|f| *f).unwrap_or(false);
        if fail {
            return Err(ClipboardError::WriteFailed {
                message: "mock clipboard configured to fail".to_string(),
            });
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_writes() {
        let observer = MockClipboard::new();
        let mut writer = observer.clone();
        writer.set_text("one").unwrap();
        writer.set_text("two").unwrap();
        assert_eq!(observer.writes(), vec!["one", "two"]);
    }

    #[test]
    fn test_failing_write_is_not_recorded() {
        let mut clipboard = MockClipboard::new();
        clipboard.set_should_fail(true);
        assert!(clipboard.set_text("x").is_err());
        assert!(clipboard.writes().is_empty());

        clipboard.set_should_fail(false);
        clipboard.set_text("y").unwrap();
        assert_eq!(clipboard.last_text().as_deref(), Some("y"));
    }
}
