//! System clipboard adapter backed by `arboard`.

use panel_application::{ClipboardError, ClipboardPort};

/// Writes export text to the OS clipboard.
///
/// The underlying handle is opened on first use and then kept for the
/// lifetime of the adapter. On X11 the copied text is served by this
/// process, so it stays pasteable only while the handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                tracing::debug!("opening system clipboard");
                arboard::Clipboard::new()
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()))?
            }
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl ClipboardPort for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.handle()?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        tracing::debug!("clipboard text written ({} bytes)", text.len());
        Ok(())
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_does_not_touch_the_clipboard() {
        let clipboard = SystemClipboard::new();
        assert!(clipboard.inner.is_none());
        assert_eq!(format!("{:?}", clipboard), "SystemClipboard { open: false }");
    }
}
