//! Clipboard access for copy actions
//!
//! Copying is best effort: callers log failures and move on.

use ideas_core::prelude::*;

/// Clipboard abstraction so copy actions can be exercised without a display
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard using arboard.
///
/// The handle is created on first use; headless sessions without a display
/// simply fail each copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn ensure(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::clipboard("clipboard not initialized"))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = self.ensure()?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::clipboard(e.to_string()))
    }
}

/// Clipboard that keeps the last copied text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
