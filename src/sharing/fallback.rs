//! Clipboard fallback sharer

use std::fmt;

use tracing::info;

use crate::sharing::{Clipboard, ShareError, ShareOutcome, SharePayload, Sharer};

/// Shares by copying the page URL, for platforms without a share dialog.
pub struct ClipboardFallbackShare {
    clipboard: Box<dyn Clipboard>,
}

impl ClipboardFallbackShare {
    /// Share through `clipboard`.
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self { clipboard }
    }
}

impl fmt::Debug for ClipboardFallbackShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardFallbackShare")
            .finish_non_exhaustive()
    }
}

impl Sharer for ClipboardFallbackShare {
    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        self.clipboard.copy_text(&payload.url)?;

        info!(url = %payload.url, "share link copied");

        Ok(ShareOutcome::LinkCopied)
    }

    fn name(&self) -> &'static str {
        "clipboard"
    }
}

#[cfg(test)]
mod tests {
    use crate::sharing::{ClipboardError, UnavailableClipboard};

    use super::*;

    #[test]
    fn clipboard_failure_is_reported() {
        let mut sharer = ClipboardFallbackShare::new(Box::new(UnavailableClipboard::new("denied")));

        let payload = SharePayload {
            title: "Code promo Zalando: 30%".to_string(),
            text: "J'ai trouvé ce code promo sur PromoSwap".to_string(),
            url: "https://promoswap.fr/promo/1".to_string(),
        };

        assert_eq!(
            sharer.share(&payload),
            Err(ShareError::Clipboard(ClipboardError::Unavailable(
                "denied".to_string()
            )))
        );
    }
}
