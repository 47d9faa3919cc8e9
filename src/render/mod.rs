//! Render
//!
//! Terminal tables for the catalog views.

use std::io;

use jiff::Timestamp;
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};
use thiserror::Error;

use crate::{
    catalog::{PromoCatalog, models::PromoCode},
    discounts::DiscountTier,
    formatting::{DateStyle, Locale, PromoFormatter},
    registration::RegistrationForm,
};

/// Errors that can occur when writing a view.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output stream error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

const DISCOUNT_COLUMN: usize = 3;

/// Write the promo listing, or an empty-state hint when nothing matched.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_promo_table(
    mut out: impl io::Write,
    promos: &[&PromoCode],
    formatter: &PromoFormatter,
    now: Timestamp,
) -> Result<(), RenderError> {
    if promos.is_empty() {
        writeln!(out, "{}", empty_state(formatter.locale()))?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(match formatter.locale() {
        Locale::En => ["ID", "Code", "Store", "Discount", "Category", "Status", "Added", "Expiry"],
        Locale::Fr => [
            "ID",
            "Code",
            "Site",
            "Réduction",
            "Catégorie",
            "Statut",
            "Ajouté",
            "Expiration",
        ],
    });

    for promo in promos {
        let display = formatter.display(promo, now);

        builder.push_record([
            promo.id.clone(),
            promo.code.clone(),
            promo.store.name.clone(),
            promo.discount.clone(),
            promo.category.clone(),
            formatter.verified_label(promo.is_verified).to_string(),
            display.created,
            display.expiry_label,
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    for (idx, promo) in promos.iter().enumerate() {
        if let Some(color) = tier_color(promo.discount_tier()) {
            table.modify((idx + 1, DISCOUNT_COLUMN), color);
        }
    }

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the detail view of one promo.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_promo_detail(
    mut out: impl io::Write,
    promo: &PromoCode,
    formatter: &PromoFormatter,
    now: Timestamp,
) -> Result<(), RenderError> {
    let display = formatter.display(promo, now);
    let labels = detail_labels(formatter.locale());

    let expires = format!("{} ({})", display.expires, display.expiry_label);
    let added = formatter.format_date(promo.created_at, DateStyle::Long);

    let mut builder = Builder::default();

    for (label, value) in labels.iter().zip([
        promo.code.as_str(),
        promo.store.name.as_str(),
        promo.discount.as_str(),
        promo.description.as_str(),
        promo.category.as_str(),
        formatter.verified_label(promo.is_verified),
        added.as_str(),
        expires.as_str(),
        display.store_url.as_str(),
    ]) {
        builder.push_record([*label, value]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    if let Some(color) = tier_color(display.tier) {
        table.modify((2, 1), color);
    }

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the category list.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_categories(
    mut out: impl io::Write,
    catalog: &PromoCatalog,
) -> Result<(), RenderError> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name"]);

    for category in catalog.list_categories() {
        builder.push_record([category.id.as_str(), category.name.as_str()]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the store list with each store's promo count.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_stores(mut out: impl io::Write, catalog: &PromoCatalog) -> Result<(), RenderError> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Codes"]);

    for store in catalog.list_stores() {
        builder.push_record([
            store.id.clone(),
            store.name.clone(),
            catalog.promo_count(&store.id).to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the password checklist of a registration form.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_password_rules(
    mut out: impl io::Write,
    form: &RegistrationForm,
) -> Result<(), RenderError> {
    for rule in form.password_rules() {
        let mark = if rule.valid { "✓" } else { "✗" };

        writeln!(out, "{mark} {}", rule.kind.text())?;
    }

    Ok(())
}

/// Write the view shown for an unknown promo id.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_not_found(mut out: impl io::Write, locale: Locale) -> Result<(), RenderError> {
    let (title, body) = match locale {
        Locale::En => (
            "Promo code not found",
            "The promo code you are looking for does not exist or has been removed.",
        ),
        Locale::Fr => (
            "Code promo non trouvé",
            "Le code promo que vous recherchez n'existe pas ou a été supprimé.",
        ),
    };

    writeln!(out, "{title}")?;
    writeln!(out, "{body}")?;

    Ok(())
}

/// What a successful copy put on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Copied {
    /// The promo code itself
    Code,

    /// The promo page link
    Link,
}

/// Write the confirmation shown after a successful copy or share.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_copied(
    mut out: impl io::Write,
    locale: Locale,
    copied: Copied,
) -> Result<(), RenderError> {
    let message = match (locale, copied) {
        (Locale::En, Copied::Code) => "Code copied!",
        (Locale::En, Copied::Link) => "Link copied!",
        (Locale::Fr, Copied::Code) => "Code copié !",
        (Locale::Fr, Copied::Link) => "Lien copié !",
    };

    writeln!(out, "{message}")?;

    Ok(())
}

/// Write the confirmation shown after the native share dialog completed.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_shared(mut out: impl io::Write, locale: Locale) -> Result<(), RenderError> {
    writeln!(
        out,
        "{}",
        match locale {
            Locale::En => "Shared!",
            Locale::Fr => "Partagé !",
        }
    )?;

    Ok(())
}

/// Write a hint to copy `value` by hand when the clipboard cannot be reached.
///
/// # Errors
///
/// Returns a [`RenderError`] if the output cannot be written.
pub fn write_manual_copy_hint(
    mut out: impl io::Write,
    locale: Locale,
    value: &str,
) -> Result<(), RenderError> {
    let hint = match locale {
        Locale::En => "Clipboard unavailable, copy it manually:",
        Locale::Fr => "Presse-papiers indisponible, copiez-le manuellement :",
    };

    writeln!(out, "{hint}")?;
    writeln!(out, "  {value}")?;

    Ok(())
}

fn tier_color(tier: DiscountTier) -> Option<Color> {
    match tier {
        DiscountTier::High => Some(Color::FG_GREEN),
        DiscountTier::Medium => Some(Color::FG_YELLOW),
        DiscountTier::Low => Some(Color::FG_BLUE),
        DiscountTier::Default => None,
    }
}

fn empty_state(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No promo code matches your search. Try changing your filters.",
        Locale::Fr => {
            "Aucun code promo ne correspond à vos critères de recherche. Essayez de modifier vos filtres."
        }
    }
}

fn detail_labels(locale: Locale) -> [&'static str; 9] {
    match locale {
        Locale::En => [
            "Code",
            "Store",
            "Discount",
            "Description",
            "Category",
            "Status",
            "Added",
            "Expires",
            "Website",
        ],
        Locale::Fr => [
            "Code",
            "Site",
            "Réduction",
            "Description",
            "Catégorie",
            "Statut",
            "Ajouté le",
            "Expire le",
            "Site web",
        ],
    }
}
