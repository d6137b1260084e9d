//! Clipboard export.
//!
//! The system clipboard goes through `arboard`. Initialization can fail on
//! headless machines or without a display server; callers treat that as a
//! warning, never as fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard. The handle is opened on first use and kept so the
/// copied text stays owned for the rest of the session.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.inner.take() {
            Some(c) => c,
            None => arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()));
        self.inner = Some(clipboard);
        result
    }
}

/// Writes `text` verbatim to `clipboard`.
pub fn copy_all(clipboard: &mut dyn Clipboard, text: &str) -> Result<(), ClipboardError> {
    clipboard.set_text(text)?;
    tracing::debug!(bytes = text.len(), "copied output to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);

    impl Clipboard for Recorder {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_owned());
            Ok(())
        }
    }

    #[test]
    fn copy_all_is_verbatim() {
        let mut rec = Recorder(Vec::new());
        let text = "[A]\nhttps://x.test/a\n\n[B]\nhttps://x.test/b";
        copy_all(&mut rec, text).unwrap();
        assert_eq!(rec.0, [text]);
    }

    #[test]
    fn error_messages() {
        let e = ClipboardError::Unavailable("no display".into());
        assert_eq!(e.to_string(), "clipboard unavailable: no display");
    }

    #[test]
    fn system_clipboard_no_panic() {
        // Headless CI usually has no clipboard; only check that it fails cleanly.
        let _ = SystemClipboard::new().set_text("quickurl");
    }
}
