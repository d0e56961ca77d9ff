//! Trait for clipboard access used by paste.

/// Reads text from the system clipboard.
///
/// Some platforms only allow clipboard access from a thread with a specific
/// affinity. [`KeyboardDispatcher`](crate::KeyboardDispatcher) therefore calls
/// this from a dedicated thread and blocks until it returns, so an
/// implementation may initialize whatever thread state it needs.
pub trait ClipboardProvider: Send + Sync {
    /// Current clipboard text, or `None` if the clipboard holds no text.
    fn text(&self) -> Option<String>;
}

/// Clipboard that is always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl ClipboardProvider for NoClipboard {
    fn text(&self) -> Option<String> {
        None
    }
}
