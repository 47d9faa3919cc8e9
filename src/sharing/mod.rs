//! Sharing
//!
//! Copying a promo code to the clipboard and sharing a promo page. Native sharing is an optional
//! platform capability: [`detect_sharer`] picks [`NativeShare`] when a share dialog is available
//! and [`ClipboardFallbackShare`] otherwise, once, at startup.

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{catalog::models::PromoCode, formatting::Locale};

mod clipboard;
mod fallback;
mod native;

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use clipboard::UnavailableClipboard;
pub use fallback::ClipboardFallbackShare;
pub use native::{CommandShareDialog, NativeShare};

/// How long the "copied" confirmation stays visible after a copy.
pub const COPIED_FEEDBACK_WINDOW: SignedDuration = SignedDuration::from_millis(2000);

/// Clipboard errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The clipboard cannot be reached: no display server, denied permission or an
    /// unsupported platform
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Share errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The native share dialog failed or was dismissed
    #[error("Share dialog failed: {0}")]
    Dialog(String),

    /// The clipboard fallback failed
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Write access to a clipboard.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] if the clipboard cannot be written.
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A platform share dialog.
#[cfg_attr(test, mockall::automock)]
pub trait ShareDialog {
    /// Present `payload` to the user.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError::Dialog`] if the dialog cannot be shown or fails.
    fn present(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Result of a successful share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native dialog handled the payload
    Shared,

    /// The page URL was copied to the clipboard instead
    LinkCopied,
}

/// Shares a promo page.
pub trait Sharer {
    /// Share `payload`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying dialog or clipboard fails. Failures are terminal for
    /// this call; callers may retry on a later user action.
    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Content handed to a share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    /// Dialog title
    pub title: String,

    /// Message body
    pub text: String,

    /// Page URL
    pub url: String,
}

impl SharePayload {
    /// Payload for a promo detail page at `url`.
    pub fn for_promo(promo: &PromoCode, url: impl Into<String>, locale: Locale) -> Self {
        let (title, text) = match locale {
            Locale::En => (
                format!("Promo code {}: {}", promo.store.name, promo.discount),
                format!("I found this promo code on PromoSwap: {}", promo.description),
            ),
            Locale::Fr => (
                format!("Code promo {}: {}", promo.store.name, promo.discount),
                format!(
                    "J'ai trouvé ce code promo sur PromoSwap: {}",
                    promo.description
                ),
            ),
        };

        Self {
            title,
            text,
            url: url.into(),
        }
    }
}

/// Pick the sharer for this platform.
pub fn detect_sharer(
    dialog: Option<Box<dyn ShareDialog>>,
    clipboard: Box<dyn Clipboard>,
) -> Box<dyn Sharer> {
    let sharer: Box<dyn Sharer> = match dialog {
        Some(dialog) => Box::new(NativeShare::new(dialog)),
        None => Box::new(ClipboardFallbackShare::new(clipboard)),
    };

    debug!(sharer = sharer.name(), "share capability detected");

    sharer
}

/// Marks when a code was copied, so a view can show "copied" for [`COPIED_FEEDBACK_WINDOW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    copied_at: Timestamp,
}

impl CopyFeedback {
    /// Feedback for a copy made at `copied_at`.
    pub fn new(copied_at: Timestamp) -> Self {
        Self { copied_at }
    }

    /// When the copy happened.
    pub fn copied_at(&self) -> Timestamp {
        self.copied_at
    }

    /// Whether the confirmation is still showing at `now`.
    pub fn is_active(&self, now: Timestamp) -> bool {
        let elapsed = now.duration_since(self.copied_at);

        !elapsed.is_negative() && elapsed < COPIED_FEEDBACK_WINDOW
    }
}

/// Copy a promo's code and start its confirmation window.
///
/// # Errors
///
/// Returns [`ClipboardError::Unavailable`] if the clipboard cannot be written.
pub fn copy_promo_code(
    clipboard: &mut dyn Clipboard,
    promo: &PromoCode,
    now: Timestamp,
) -> Result<CopyFeedback, ClipboardError> {
    match clipboard.copy_text(&promo.code) {
        Ok(()) => {
            info!(promo = %promo.id, code = %promo.code, "promo code copied");

            Ok(CopyFeedback::new(now))
        }
        Err(error) => {
            warn!(promo = %promo.id, %error, "could not copy promo code");

            Err(error)
        }
    }
}
