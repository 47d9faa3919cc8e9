//! Browsing the seeded catalog: category and store filters, lookups, expiry labels and discount
//! tiers, as a listing or detail view sees them.

use jiff::{SignedDuration, Timestamp};
use testresult::TestResult;

use promoswap::{
    catalog::{CatalogError, PromoCatalog, models::PromoCode},
    discounts::DiscountTier,
    filters::{FilterCriteria, filter_promos, search_promos},
    fixtures::Fixture,
    formatting::PromoFormatter,
};

fn seeded() -> TestResult<(PromoCatalog, Timestamp)> {
    let now: Timestamp = "2025-02-03T10:00:00Z".parse()?;

    Ok((Fixture::seeded(now)?, now))
}

fn ids<'a>(promos: impl IntoIterator<Item = &'a PromoCode>) -> Vec<&'a str> {
    promos.into_iter().map(|promo| promo.id.as_str()).collect()
}

#[test]
fn electronics_filter_keeps_source_order() -> TestResult {
    let (catalog, _now) = seeded()?;

    let by_name = filter_promos(
        &FilterCriteria::new().with_category("Électronique"),
        catalog.list_promos(),
    );

    assert_eq!(ids(by_name), ["2", "3", "5"]);

    let lowercase = filter_promos(
        &FilterCriteria::new().with_category("électronique"),
        catalog.list_promos(),
    );

    assert_eq!(ids(lowercase), ["2", "3", "5"]);

    let resolved = catalog
        .resolve_category("electronics")
        .map(|category| category.name.as_str());

    assert_eq!(resolved, Some("Électronique"));

    Ok(())
}

#[test]
fn empty_filter_returns_everything() -> TestResult {
    let (catalog, _now) = seeded()?;

    let promos = filter_promos(&FilterCriteria::new(), catalog.list_promos());

    assert_eq!(ids(promos), ["1", "2", "3", "4", "5", "6"]);

    Ok(())
}

#[test]
fn category_and_store_filters_combine() -> TestResult {
    let (catalog, _now) = seeded()?;

    let criteria = FilterCriteria::new()
        .with_category("Électronique")
        .with_category("Mode")
        .with_store("fnac")
        .with_store("zalando");

    assert_eq!(ids(filter_promos(&criteria, catalog.list_promos())), ["1", "2"]);

    let no_match = FilterCriteria::new().with_category("Mode").with_store("fnac");

    assert!(filter_promos(&no_match, catalog.list_promos()).is_empty());

    Ok(())
}

#[test]
fn search_applies_after_filters() -> TestResult {
    let (catalog, _now) = seeded()?;

    let filtered = filter_promos(
        &FilterCriteria::new().with_category("Électronique"),
        catalog.list_promos(),
    );

    assert_eq!(ids(search_promos("LIVRAISON", filtered)), ["3"]);

    Ok(())
}

#[test]
fn lookup_by_id() -> TestResult {
    let (catalog, now) = seeded()?;

    assert_eq!(
        catalog.get_promo("nonexistent"),
        Err(CatalogError::PromoNotFound("nonexistent".to_string()))
    );

    let promo = catalog.get_promo("1")?;

    assert_eq!(promo.code, "SUMMER30");
    assert_eq!(promo.description, "30% de réduction sur tout le site");
    assert_eq!(promo.discount, "30%");
    assert_eq!(promo.store.id, "zalando");
    assert_eq!(promo.store.name, "Zalando");
    assert_eq!(promo.category, "Mode");
    assert_eq!(promo.created_at, now);
    assert_eq!(promo.expires_at, now + SignedDuration::from_hours(7 * 24));
    assert!(promo.is_verified);

    Ok(())
}

/// Expired codes stay visible and copyable on purpose. This mirrors the live site and is
/// pending product review; change this test if expired codes get hidden.
#[test]
fn expired_promos_stay_listed_and_readable() -> TestResult {
    let (catalog, now) = seeded()?;
    let later = now + SignedDuration::from_hours(24 * 60);

    let promos = filter_promos(&FilterCriteria::new(), catalog.list_promos());

    assert_eq!(promos.len(), 6);
    assert!(promos.iter().all(|promo| promo.is_expired(later)));
    assert_eq!(
        PromoFormatter::default().expiry_label(catalog.get_promo("6")?.expires_at, later),
        "Expired"
    );

    Ok(())
}

#[test]
fn expiry_labels_around_day_boundaries() -> TestResult {
    let now: Timestamp = "2025-02-03T10:00:00Z".parse()?;
    let formatter = PromoFormatter::default();

    let cases = [
        (SignedDuration::from_secs(-1), "Expired"),
        (SignedDuration::ZERO, "Expires today"),
        (SignedDuration::from_secs(24 * 3600 - 1), "Expires tomorrow"),
        (SignedDuration::from_hours(24), "Expires tomorrow"),
        (SignedDuration::from_hours(24 * 14), "Expires in 14 days"),
    ];

    for (offset, expected) in cases {
        assert_eq!(formatter.expiry_label(now + offset, now), expected, "offset {offset}");
    }

    Ok(())
}

#[test]
fn discount_tiers_from_labels() -> TestResult {
    let (catalog, _now) = seeded()?;

    assert_eq!(DiscountTier::from_discount("55%"), DiscountTier::High);
    assert_eq!(DiscountTier::from_discount("35%"), DiscountTier::Medium);
    assert_eq!(DiscountTier::from_discount("10%"), DiscountTier::Low);
    assert_eq!(DiscountTier::from_discount("20€"), DiscountTier::Low);
    assert_eq!(
        DiscountTier::from_discount("Livraison gratuite"),
        DiscountTier::Default
    );

    assert_eq!(catalog.get_promo("6")?.discount_tier(), DiscountTier::High);
    assert_eq!(catalog.get_promo("1")?.discount_tier(), DiscountTier::Medium);
    assert_eq!(catalog.get_promo("3")?.discount_tier(), DiscountTier::Default);

    Ok(())
}

#[test]
fn store_counts_cover_every_promo() -> TestResult {
    let (catalog, _now) = seeded()?;

    let total: usize = catalog
        .list_stores()
        .iter()
        .map(|store| catalog.promo_count(&store.id))
        .sum();

    assert_eq!(catalog.list_stores().len(), 6);
    assert_eq!(total, catalog.list_promos().len());

    Ok(())
}
