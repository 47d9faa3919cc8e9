//! Promo Catalog
//!
//! The immutable set of stores, categories and promo codes every view reads from. A catalog is
//! built once, from fixtures or an external loader, and handed to consumers by reference.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::info;

use crate::catalog::models::{Category, PromoCode, Store};

pub mod models;

/// Catalog errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No promo code has the requested id
    #[error("Promo code not found: {0}")]
    PromoNotFound(String),

    /// Two promo codes share an id
    #[error("Duplicate promo code id: {0}")]
    DuplicatePromo(String),

    /// Two stores share an id
    #[error("Duplicate store id: {0}")]
    DuplicateStore(String),

    /// Two categories share an id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),
}

/// Read-only promo catalog.
#[derive(Debug, Clone, Default)]
pub struct PromoCatalog {
    categories: Vec<Category>,
    stores: Vec<Store>,
    promos: Vec<PromoCode>,

    /// Promo id -> index into `promos`
    promo_index: FxHashMap<String, usize>,
}

impl PromoCatalog {
    /// Build a catalog, keeping the given order of every sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if two records of the same kind share an id.
    pub fn new(
        categories: Vec<Category>,
        stores: Vec<Store>,
        promos: Vec<PromoCode>,
    ) -> Result<Self, CatalogError> {
        ensure_unique(categories.iter().map(|c| c.id.as_str()))
            .map_err(CatalogError::DuplicateCategory)?;
        ensure_unique(stores.iter().map(|s| s.id.as_str())).map_err(CatalogError::DuplicateStore)?;

        let mut promo_index = FxHashMap::default();

        for (idx, promo) in promos.iter().enumerate() {
            if promo_index.insert(promo.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicatePromo(promo.id.clone()));
            }
        }

        info!(
            categories = categories.len(),
            stores = stores.len(),
            promos = promos.len(),
            "promo catalog built"
        );

        Ok(Self {
            categories,
            stores,
            promos,
            promo_index,
        })
    }

    /// Categories in insertion order.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Stores in insertion order.
    pub fn list_stores(&self) -> &[Store] {
        &self.stores
    }

    /// Promo codes in insertion order. No implicit sort is applied.
    pub fn list_promos(&self) -> &[PromoCode] {
        &self.promos
    }

    /// Look up a promo code by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::PromoNotFound`] if no promo has this id.
    pub fn get_promo(&self, id: &str) -> Result<&PromoCode, CatalogError> {
        self.promo_index
            .get(id)
            .and_then(|&idx| self.promos.get(idx))
            .ok_or_else(|| CatalogError::PromoNotFound(id.to_string()))
    }

    /// First promo whose code matches `code`, ignoring ASCII case.
    pub fn promo_by_code(&self, code: &str) -> Option<&PromoCode> {
        self.promos
            .iter()
            .find(|promo| promo.code.eq_ignore_ascii_case(code))
    }

    /// Resolve a category by id, or failing that by case-insensitive name.
    pub fn resolve_category(&self, id_or_name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id == id_or_name)
            .or_else(|| {
                let wanted = id_or_name.to_lowercase();

                self.categories
                    .iter()
                    .find(|category| category.name.to_lowercase() == wanted)
            })
    }

    /// Look up a store by id.
    pub fn store(&self, id: &str) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    /// Number of promo codes issued by a store.
    pub fn promo_count(&self, store_id: &str) -> usize {
        self.promos
            .iter()
            .filter(|promo| promo.store.id == store_id)
            .count()
    }
}

/// Return the first repeated id, if any.
fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), String> {
    let mut seen = FxHashSet::default();

    for id in ids {
        if !seen.insert(id) {
            return Err(id.to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use super::*;

    fn promo(id: &str, code: &str, store: &Store) -> TestResult<PromoCode> {
        let at: Timestamp = "2025-01-15T10:00:00Z".parse()?;

        Ok(PromoCode {
            id: id.to_string(),
            code: code.to_string(),
            description: format!("{code} description"),
            discount: "10%".to_string(),
            store: store.clone(),
            category: "Mode".to_string(),
            expires_at: at,
            created_at: at,
            is_verified: false,
        })
    }

    fn catalog() -> TestResult<PromoCatalog> {
        let fnac = Store::new("fnac", "Fnac");
        let darty = Store::new("darty", "Darty");

        Ok(PromoCatalog::new(
            vec![
                Category::new("mode", "Mode"),
                Category::new("electronics", "Électronique"),
            ],
            vec![fnac.clone(), darty.clone()],
            vec![
                promo("2", "BIENVENUE20", &fnac)?,
                promo("1", "PROMO10", &darty)?,
                promo("3", "FNAC5", &fnac)?,
            ],
        )?)
    }

    #[test]
    fn listings_keep_insertion_order() -> TestResult {
        let catalog = catalog()?;

        let ids: Vec<&str> = catalog
            .list_promos()
            .iter()
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(ids, ["2", "1", "3"]);
        assert_eq!(catalog.list_categories().len(), 2);
        assert_eq!(catalog.list_stores().first().map(|s| s.id.as_str()), Some("fnac"));

        Ok(())
    }

    #[test]
    fn get_promo_returns_matching_record() -> TestResult {
        let catalog = catalog()?;

        let found = catalog.get_promo("1")?;

        assert_eq!(found, &promo("1", "PROMO10", &Store::new("darty", "Darty"))?);

        Ok(())
    }

    #[test]
    fn get_promo_missing_id_is_not_found() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            catalog.get_promo("nonexistent"),
            Err(CatalogError::PromoNotFound("nonexistent".to_string()))
        );

        Ok(())
    }

    #[test]
    fn duplicate_promo_ids_are_rejected() -> TestResult {
        let fnac = Store::new("fnac", "Fnac");

        let result = PromoCatalog::new(
            Vec::new(),
            vec![fnac.clone()],
            vec![promo("1", "A", &fnac)?, promo("1", "B", &fnac)?],
        );

        assert_eq!(result.err(), Some(CatalogError::DuplicatePromo("1".to_string())));

        Ok(())
    }

    #[test]
    fn duplicate_store_and_category_ids_are_rejected() {
        let stores = PromoCatalog::new(
            Vec::new(),
            vec![Store::new("fnac", "Fnac"), Store::new("fnac", "Fnac bis")],
            Vec::new(),
        );

        let categories = PromoCatalog::new(
            vec![Category::new("mode", "Mode"), Category::new("mode", "Fashion")],
            Vec::new(),
            Vec::new(),
        );

        assert_eq!(stores.err(), Some(CatalogError::DuplicateStore("fnac".to_string())));
        assert_eq!(
            categories.err(),
            Some(CatalogError::DuplicateCategory("mode".to_string()))
        );
    }

    #[test]
    fn resolve_category_by_id_then_name() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            catalog.resolve_category("electronics").map(|c| c.name.as_str()),
            Some("Électronique")
        );
        assert_eq!(
            catalog.resolve_category("ÉLECTRONIQUE").map(|c| c.id.as_str()),
            Some("electronics")
        );
        assert!(catalog.resolve_category("voyage").is_none());

        Ok(())
    }

    #[test]
    fn promo_lookups_by_code_and_store() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(catalog.promo_by_code("promo10").map(|p| p.id.as_str()), Some("1"));
        assert_eq!(catalog.promo_count("fnac"), 2);
        assert_eq!(catalog.promo_count("amazon"), 0);
        assert_eq!(catalog.store("darty").map(|s| s.name.as_str()), Some("Darty"));

        Ok(())
    }
}
