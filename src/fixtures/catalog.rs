//! Catalog Fixtures

use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    catalog::{
        PromoCatalog,
        models::{Category, PromoCode, Store},
    },
    fixtures::FixtureError,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Catalog fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Categories, in display order
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Stores, in display order
    #[serde(default)]
    pub stores: Vec<StoreFixture>,

    /// Promo codes, in display order
    #[serde(default)]
    pub promotions: Vec<PromoFixture>,
}

/// Category fixture from YAML
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id
    pub id: String,

    /// Display name
    pub name: String,
}

/// Store fixture from YAML
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Store id
    pub id: String,

    /// Display name
    pub name: String,

    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
}

/// Promo code fixture from YAML
///
/// Each date is given either absolutely (`expires_at`, `created_at`) or relative to the load
/// instant (`expires_in_days`, `created_days_ago`). Absolute wins when both are present.
#[derive(Debug, Deserialize)]
pub struct PromoFixture {
    /// Promo id
    pub id: String,

    /// Redeemable code
    pub code: String,

    /// Offer text
    pub description: String,

    /// Discount text
    pub discount: String,

    /// Issuing store id
    pub store: String,

    /// Category label
    pub category: String,

    /// Absolute expiry
    #[serde(default)]
    pub expires_at: Option<Timestamp>,

    /// Expiry in days from the load instant
    #[serde(default)]
    pub expires_in_days: Option<i64>,

    /// Absolute creation instant
    #[serde(default)]
    pub created_at: Option<Timestamp>,

    /// Creation in days before the load instant
    #[serde(default)]
    pub created_days_ago: Option<i64>,

    /// Verification flag
    #[serde(default)]
    pub verified: bool,
}

impl From<CategoryFixture> for Category {
    fn from(fixture: CategoryFixture) -> Self {
        Category::new(fixture.id, fixture.name)
    }
}

impl From<StoreFixture> for Store {
    fn from(fixture: StoreFixture) -> Self {
        Store {
            id: fixture.id,
            name: fixture.name,
            logo: fixture.logo,
        }
    }
}

impl CatalogFixture {
    /// Convert into a [`PromoCatalog`], embedding a copy of each promo's store.
    ///
    /// # Errors
    ///
    /// Returns an error if a promo references an unknown store, a date is missing or out of
    /// range, or ids are duplicated.
    pub fn into_catalog(self, now: Timestamp) -> Result<PromoCatalog, FixtureError> {
        let categories: Vec<Category> = self.categories.into_iter().map(Category::from).collect();
        let stores: Vec<Store> = self.stores.into_iter().map(Store::from).collect();

        let stores_by_id: FxHashMap<&str, &Store> =
            stores.iter().map(|store| (store.id.as_str(), store)).collect();

        let promos = self
            .promotions
            .into_iter()
            .map(|fixture| fixture.try_into_promo(&stores_by_id, now))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PromoCatalog::new(categories, stores, promos)?)
    }
}

impl PromoFixture {
    /// Convert to a [`PromoCode`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unknown or a date cannot be resolved.
    pub fn try_into_promo(
        self,
        stores: &FxHashMap<&str, &Store>,
        now: Timestamp,
    ) -> Result<PromoCode, FixtureError> {
        let store = stores
            .get(self.store.as_str())
            .map(|store| (*store).clone())
            .ok_or_else(|| FixtureError::UnknownStore {
                promo: self.id.clone(),
                store: self.store.clone(),
            })?;

        let expires_at = resolve(
            &self.id,
            "expires_at",
            self.expires_at,
            self.expires_in_days,
            now,
        )?;

        let created_at = resolve(
            &self.id,
            "created_at",
            self.created_at,
            self.created_days_ago.map(i64::saturating_neg),
            now,
        )?;

        Ok(PromoCode {
            id: self.id,
            code: self.code,
            description: self.description,
            discount: self.discount,
            store,
            category: self.category,
            expires_at,
            created_at,
            is_verified: self.verified,
        })
    }
}

/// Pick the absolute timestamp, or offset `now` by whole days.
fn resolve(
    promo: &str,
    field: &'static str,
    absolute: Option<Timestamp>,
    offset_days: Option<i64>,
    now: Timestamp,
) -> Result<Timestamp, FixtureError> {
    if let Some(timestamp) = absolute {
        return Ok(timestamp);
    }

    let days = offset_days.ok_or_else(|| FixtureError::MissingTimestamp {
        promo: promo.to_string(),
        field,
    })?;

    let invalid = |reason: String| FixtureError::InvalidTimestamp {
        promo: promo.to_string(),
        field,
        reason,
    };

    let secs = days
        .checked_mul(SECONDS_PER_DAY)
        .ok_or_else(|| invalid(format!("{days} days overflows")))?;

    now.checked_add(SignedDuration::from_secs(secs))
        .map_err(|error| invalid(error.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn absolute_timestamp_wins_over_offset() -> TestResult {
        let now: Timestamp = "2025-06-01T12:00:00Z".parse()?;
        let absolute: Timestamp = "2025-01-01T00:00:00Z".parse()?;

        assert_eq!(resolve("1", "expires_at", Some(absolute), Some(3), now)?, absolute);

        Ok(())
    }

    #[test]
    fn negative_offsets_go_back_in_time() -> TestResult {
        let now: Timestamp = "2025-06-01T12:00:00Z".parse()?;

        assert_eq!(
            resolve("1", "created_at", None, Some(-1), now)?,
            "2025-05-31T12:00:00Z".parse::<Timestamp>()?
        );

        Ok(())
    }

    #[test]
    fn huge_offsets_are_out_of_range() {
        let result = resolve("9", "expires_at", None, Some(i64::MAX), Timestamp::UNIX_EPOCH);

        assert!(matches!(
            result,
            Err(FixtureError::InvalidTimestamp {
                field: "expires_at",
                ..
            })
        ));
    }
}
