//! Catalog records

use jiff::Timestamp;

use crate::discounts::DiscountTier;

/// A merchant offering promo codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    /// Unique store identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional logo URL
    pub logo: Option<String>,
}

impl Store {
    /// Create a store without a logo.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            logo: None,
        }
    }
}

/// A flat label used to group promo codes for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier
    pub id: String,

    /// Display name
    pub name: String,
}

impl Category {
    /// Create a category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A redeemable promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCode {
    /// Unique promo identifier
    pub id: String,

    /// The literal code to enter at checkout, e.g. `SUMMER30`
    pub code: String,

    /// Offer text
    pub description: String,

    /// Free-form discount text: `30%`, `20€` or `Livraison gratuite`
    pub discount: String,

    /// Embedded copy of the issuing store
    pub store: Store,

    /// Category label, matched case-insensitively when filtering
    pub category: String,

    /// Expiry instant. Display only, expired codes stay listed.
    pub expires_at: Timestamp,

    /// Creation instant
    pub created_at: Timestamp,

    /// Community verification flag
    pub is_verified: bool,
}

impl PromoCode {
    /// Display tier derived from the discount text.
    pub fn discount_tier(&self) -> DiscountTier {
        DiscountTier::from_discount(&self.discount)
    }

    /// Whether the code expired strictly before `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at < now
    }
}
