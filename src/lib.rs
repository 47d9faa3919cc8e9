//! PromoSwap
//!
//! PromoSwap is a promotional-code discovery library: an immutable catalog of stores, categories
//! and promo codes, filtering and search over it, locale-aware display formatting, and clipboard
//! sharing with a native-share fallback chain.

pub mod catalog;
pub mod discounts;
pub mod filters;
pub mod fixtures;
pub mod formatting;
pub mod prelude;
pub mod registration;
pub mod render;
pub mod sharing;
