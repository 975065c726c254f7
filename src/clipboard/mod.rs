//! Copying a result's target path to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest text we will put on the clipboard; target paths are far shorter
const MAX_CLIPBOARD_BYTES: usize = 4096;

/// Clipboard seam so the UI can be tested without a display server
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard, connected lazily on first use
///
/// Headless sessions have no clipboard; connecting only when the user asks for a copy keeps
/// startup working there.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().context("Failed to initialize clipboard")?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text).context("Failed to set clipboard contents")?;
        }
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Nothing to copy");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }
    if text.contains(['\n', '\r']) {
        bail!("Refusing to copy multi-line text");
    }
    Ok(())
}

/// Validate and copy `text` through `provider`
pub fn copy_to_clipboard(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory clipboard for tests
    #[derive(Default)]
    pub(crate) struct MockClipboard {
        pub(crate) text: Option<String>,
        pub(crate) should_fail: bool,
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_target_path() {
        let mut mock = MockClipboard::default();
        copy_to_clipboard("/cases/c1", &mut mock).unwrap();
        assert_eq!(mock.text.as_deref(), Some("/cases/c1"));
    }

    #[test]
    fn test_copy_empty_rejected() {
        let mut mock = MockClipboard::default();
        let err = copy_to_clipboard("", &mut mock).unwrap_err();
        assert!(err.to_string().contains("Nothing to copy"));
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_copy_multiline_rejected() {
        let mut mock = MockClipboard::default();
        assert!(copy_to_clipboard("/cases/1\nrm -rf", &mut mock).is_err());
    }

    #[test]
    fn test_copy_too_large_rejected() {
        let mut mock = MockClipboard::default();
        let text = "a".repeat(MAX_CLIPBOARD_BYTES + 1);
        let err = copy_to_clipboard(&text, &mut mock).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let mut mock = MockClipboard { should_fail: true, ..Default::default() };
        let err = copy_to_clipboard("/cases/c1", &mut mock).unwrap_err();
        assert!(err.to_string().contains("Mock clipboard error"));
    }
}
