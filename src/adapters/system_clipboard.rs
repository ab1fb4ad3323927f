//! System clipboard adapter backed by `arboard`.

use arboard::Clipboard;

use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

/// Clipboard provider for the OS clipboard (NSPasteboard, X11/Wayland,
/// Windows clipboard).
///
/// The `arboard` handle is opened lazily on the first write and kept
/// afterwards. On X11 the selection is only served while the handle is
/// alive, so holding it for the whole session keeps copied text pasteable.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable {
                message: e.to_string(),
            })?;
            self.inner = Some(clipboard);
        }
        self.inner.as_mut().ok_or_else(|| ClipboardError::Unavailable {
            message: "clipboard handle missing".to_string(),
        })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.handle()?;
        let result = clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed {
                message: e.to_string(),
            });
        if result.is_err() {
            // Drop the handle so the next copy reopens the clipboard.
            self.inner = None;
        }
        result
    }
}
