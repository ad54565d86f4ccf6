use std::time::{Duration, Instant};

/// Where copied URLs go. Writing is fire-and-forget: a clipboard that cannot
/// be reached behaves the same as one that can.
pub trait ClipboardSink {
    fn write(&mut self, text: &str);
}

/// System clipboard via arboard.
#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write(&mut self, text: &str) {
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(text);
        }
    }
}

/// How long the copied-URL indicator stays visible.
pub const FEEDBACK_TTL: Duration = Duration::from_secs(3);

/// Tracks which history entry's URL was just copied. The feedback expires
/// after `FEEDBACK_TTL` unless superseded by another copy; expiry is
/// observed on read rather than by a background timer. Never persisted.
pub struct ClipboardFeedbackController {
    sink: Box<dyn ClipboardSink>,
    copied: Option<(String, Instant)>,
    ttl: Duration,
}

impl ClipboardFeedbackController {
    pub fn new(sink: Box<dyn ClipboardSink>) -> Self {
        Self {
            sink,
            copied: None,
            ttl: FEEDBACK_TTL,
        }
    }

    #[cfg(test)]
    fn with_ttl(sink: Box<dyn ClipboardSink>, ttl: Duration) -> Self {
        Self {
            sink,
            copied: None,
            ttl,
        }
    }

    /// Copy a URL and mark it as the one just copied.
    pub fn copy(&mut self, url: &str) {
        self.sink.write(url);
        self.copied = Some((url.to_string(), Instant::now() + self.ttl));
    }

    /// The most recently copied URL, if the feedback window is still open.
    pub fn copied(&self) -> Option<&str> {
        match &self.copied {
            Some((url, deadline)) if Instant::now() < *deadline => Some(url),
            _ => None,
        }
    }
}
