//! PromoSwap prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{
        CatalogError, PromoCatalog,
        models::{Category, PromoCode, Store},
    },
    discounts::{DiscountTier, leading_integer},
    filters::{FilterCriteria, filter_promos, search_promos},
    fixtures::{Fixture, FixtureError},
    formatting::{DateStyle, Expiry, Locale, PromoFormatter, days_left, store_url},
    registration::{PasswordRule, PasswordRuleKind, RegistrationForm},
    render::RenderError,
    sharing::{
        COPIED_FEEDBACK_WINDOW, Clipboard, ClipboardError, ClipboardFallbackShare,
        CommandShareDialog, CopyFeedback, NativeShare, ShareDialog, ShareError, ShareOutcome,
        SharePayload, Sharer, UnavailableClipboard, copy_promo_code, detect_sharer,
    },
};

#[cfg(feature = "system-clipboard")]
pub use crate::sharing::SystemClipboard;
