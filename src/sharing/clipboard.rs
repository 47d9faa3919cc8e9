//! Clipboard backends

use std::fmt;
#[cfg(feature = "system-clipboard")]
use std::time::Duration;
#[cfg(all(feature = "system-clipboard", target_os = "linux"))]
use std::time::Instant;

use tracing::warn;

use crate::sharing::{Clipboard, ClipboardError};

/// The operating system clipboard.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    hold: Option<Duration>,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Connect to the OS clipboard.
    ///
    /// On Linux the copied text is served by this process, so it is lost when the
    /// process exits unless a clipboard manager took it over. Long-lived processes
    /// can use this; short-lived ones want [`SystemClipboard::connect_holding`].
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when no clipboard can be reached, e.g. in a
    /// headless session.
    pub fn connect() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner, hold: None })
            .map_err(|error| ClipboardError::Unavailable(error.to_string()))
    }

    /// Connect to the OS clipboard for a process that exits right after copying.
    ///
    /// On Linux every [`Clipboard::copy_text`] then blocks until another program
    /// takes ownership of the text (a clipboard manager, or a paste) or until `hold`
    /// has elapsed, whichever comes first. After the deadline the text is only kept
    /// if a clipboard manager picked it up. A zero `hold` behaves like
    /// [`SystemClipboard::connect`]. Other platforms never block.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when no clipboard can be reached.
    pub fn connect_holding(hold: Duration) -> Result<Self, ClipboardError> {
        let mut clipboard = Self::connect()?;
        clipboard.hold = (!hold.is_zero()).then_some(hold);

        Ok(clipboard)
    }

    /// How long a copy may block to hand the text over, if at all.
    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    #[cfg(target_os = "linux")]
    fn write(&mut self, text: &str) -> Result<(), arboard::Error> {
        use arboard::SetExtLinux;

        match self.hold.and_then(|hold| Instant::now().checked_add(hold)) {
            Some(deadline) => self.inner.set().wait_until(deadline).text(text),
            None => self.inner.set_text(text),
        }
    }

    #[cfg(not(target_os = "linux"))]
    fn write(&mut self, text: &str) -> Result<(), arboard::Error> {
        self.inner.set_text(text)
    }
}

#[cfg(feature = "system-clipboard")]
impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("hold", &self.hold)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.write(text)
            .map_err(|error| ClipboardError::Unavailable(error.to_string()))
    }
}

/// Stand-in for environments without clipboard access. Every copy fails.
#[derive(Clone, PartialEq, Eq)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    /// Create a clipboard that always reports `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Debug for UnavailableClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnavailableClipboard")
            .field(&self.reason)
            .finish()
    }
}

impl Clipboard for UnavailableClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        warn!(reason = %self.reason, "clipboard write attempted without clipboard access");

        Err(ClipboardError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_clipboard_always_fails() {
        let mut clipboard = UnavailableClipboard::new("no display");

        assert_eq!(
            clipboard.copy_text("SUMMER30"),
            Err(ClipboardError::Unavailable("no display".to_string()))
        );
        assert_eq!(
            clipboard.copy_text("SUMMER30"),
            Err(ClipboardError::Unavailable("no display".to_string()))
        );
    }

    #[cfg(feature = "system-clipboard")]
    #[test]
    fn holding_clipboard_records_its_window() {
        match SystemClipboard::connect_holding(Duration::from_secs(10)) {
            Ok(clipboard) => assert_eq!(clipboard.hold(), Some(Duration::from_secs(10))),
            Err(error) => assert!(matches!(error, ClipboardError::Unavailable(_))),
        }

        match SystemClipboard::connect_holding(Duration::ZERO) {
            Ok(clipboard) => assert_eq!(clipboard.hold(), None),
            Err(error) => assert!(matches!(error, ClipboardError::Unavailable(_))),
        }
    }
}
