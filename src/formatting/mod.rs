//! Formatting
//!
//! Locale-aware display values derived from a promo record: dates, the expiry label, the
//! discount tier badge and the store URL. Nothing here filters or hides promos.

use jiff::{Timestamp, tz::TimeZone};

use crate::{
    catalog::models::{PromoCode, Store},
    discounts::DiscountTier,
};

mod expiry;

pub use expiry::{Expiry, days_left};

const FR_MONTHS_LONG: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const FR_MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const EN_MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    /// English
    #[default]
    En,

    /// French
    Fr,
}

/// Month rendering for [`PromoFormatter::format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Abbreviated month, used on promo cards
    Short,

    /// Full month name, used on the detail page
    Long,
}

/// Display values for a single promo, ready for a view to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoDisplay {
    /// Creation date, short style
    pub created: String,

    /// Expiry date, long style
    pub expires: String,

    /// Relative expiry label
    pub expiry_label: String,

    /// Discount badge tier
    pub tier: DiscountTier,

    /// Store website
    pub store_url: String,
}

/// Formats promo fields for one locale and time zone.
#[derive(Debug, Clone)]
pub struct PromoFormatter {
    locale: Locale,
    time_zone: TimeZone,
}

impl PromoFormatter {
    /// Create a formatter.
    pub fn new(locale: Locale, time_zone: TimeZone) -> Self {
        Self { locale, time_zone }
    }

    /// The formatter's locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render `timestamp` as day, month and year in the formatter's time zone.
    pub fn format_date(&self, timestamp: Timestamp, style: DateStyle) -> String {
        let date = timestamp.to_zoned(self.time_zone.clone()).date();

        let months = match (self.locale, style) {
            (Locale::En, DateStyle::Short) => &EN_MONTHS_SHORT,
            (Locale::En, DateStyle::Long) => &EN_MONTHS_LONG,
            (Locale::Fr, DateStyle::Short) => &FR_MONTHS_SHORT,
            (Locale::Fr, DateStyle::Long) => &FR_MONTHS_LONG,
        };

        let month = usize::try_from(date.month() - 1)
            .ok()
            .and_then(|idx| months.get(idx))
            .copied()
            .unwrap_or_default();

        format!("{} {month} {}", date.day(), date.year())
    }

    /// Relative expiry label, e.g. "Expires in 3 days".
    pub fn expiry_label(&self, expires_at: Timestamp, now: Timestamp) -> String {
        self.label_for(days_left(expires_at, now))
    }

    /// Label for an already computed [`Expiry`].
    pub fn label_for(&self, expiry: Expiry) -> String {
        match (self.locale, expiry) {
            (Locale::En, Expiry::Expired) => "Expired".to_string(),
            (Locale::En, Expiry::DaysLeft(0)) => "Expires today".to_string(),
            (Locale::En, Expiry::DaysLeft(1)) => "Expires tomorrow".to_string(),
            (Locale::En, Expiry::DaysLeft(days)) => format!("Expires in {days} days"),
            (Locale::Fr, Expiry::Expired) => "Expiré".to_string(),
            (Locale::Fr, Expiry::DaysLeft(0)) => "Expire aujourd'hui".to_string(),
            (Locale::Fr, Expiry::DaysLeft(1)) => "Expire demain".to_string(),
            (Locale::Fr, Expiry::DaysLeft(days)) => format!("Expire dans {days} jours"),
        }
    }

    /// Verification badge text.
    pub fn verified_label(&self, is_verified: bool) -> &'static str {
        match (self.locale, is_verified) {
            (Locale::En, true) => "Verified",
            (Locale::Fr, true) => "Vérifié",
            (Locale::En, false) => "Unverified",
            (Locale::Fr, false) => "Non vérifié",
        }
    }

    /// Every display value for `promo` at `now`.
    pub fn display(&self, promo: &PromoCode, now: Timestamp) -> PromoDisplay {
        PromoDisplay {
            created: self.format_date(promo.created_at, DateStyle::Short),
            expires: self.format_date(promo.expires_at, DateStyle::Long),
            expiry_label: self.expiry_label(promo.expires_at, now),
            tier: promo.discount_tier(),
            store_url: store_url(&promo.store),
        }
    }
}

impl Default for PromoFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), TimeZone::UTC)
    }
}

/// Store website derived from its name: `https://<lowercase name, no whitespace>.com`.
pub fn store_url(store: &Store) -> String {
    let host: String = store
        .name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    format!("https://{host}.com")
}
