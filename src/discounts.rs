//! Discounts
//!
//! Discount text is free-form (`30%`, `20€`, `Livraison gratuite`). The only thing read from it
//! is a leading integer, which picks a display tier.

/// Discount magnitude classification, used for styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountTier {
    /// Discount text has no leading integer
    Default,

    /// Leading integer below 30
    Low,

    /// Leading integer from 30 to 49
    Medium,

    /// Leading integer of 50 or more
    High,
}

impl DiscountTier {
    /// Lower bound (inclusive) of the high tier.
    pub const HIGH_THRESHOLD: i64 = 50;

    /// Lower bound (inclusive) of the medium tier.
    pub const MEDIUM_THRESHOLD: i64 = 30;

    /// Classify a discount string.
    pub fn from_discount(discount: &str) -> Self {
        match leading_integer(discount) {
            None => Self::Default,
            Some(value) if value >= Self::HIGH_THRESHOLD => Self::High,
            Some(value) if value >= Self::MEDIUM_THRESHOLD => Self::Medium,
            Some(_) => Self::Low,
        }
    }

    /// CSS class list used by the web front-end badge for this tier.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Default => "bg-promotion-primary",
            Self::Low => "bg-promotion-primary text-white",
            Self::Medium => "bg-orange-500 text-white",
            Self::High => "bg-promotion-success text-white",
        }
    }
}

/// Parse the integer a discount string starts with.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, then digits are read until the
/// first non-digit. Returns `None` if no digit follows. Values that overflow saturate.
pub fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();

    let (negative, rest) = match trimmed.chars().next() {
        Some('-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some('+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let mut digits = rest.chars().map_while(|c| c.to_digit(10)).peekable();

    digits.peek()?;

    let magnitude = digits.fold(0_i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit))
    });

    Some(if negative { -magnitude } else { magnitude })
}
