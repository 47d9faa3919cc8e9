//! Filters
//!
//! Category/store filtering and free-text search over a promo sequence. Both are pure, single
//! pass and keep the relative order of their input.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::catalog::models::PromoCode;

/// Selected categories and stores.
///
/// Within a group selection is "any of"; the two groups combine with "and". An empty group does
/// not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Lowercased category labels
    categories: FxHashSet<String>,

    /// Store ids
    stores: FxHashSet<String>,
}

impl FilterCriteria {
    /// Criteria with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw category labels and store ids.
    pub fn from_selection<C, S>(categories: C, stores: S) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut criteria = Self::new();

        for category in categories {
            criteria.select_category(category.as_ref());
        }

        for store in stores {
            criteria.select_store(store.as_ref());
        }

        criteria
    }

    /// Add a category to the selection.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.select_category(category);
        self
    }

    /// Add a store id to the selection.
    #[must_use]
    pub fn with_store(mut self, store_id: &str) -> Self {
        self.select_store(store_id);
        self
    }

    /// Add a category to the selection. Categories compare case-insensitively.
    pub fn select_category(&mut self, category: &str) {
        self.categories.insert(category.to_lowercase());
    }

    /// Add a store id to the selection.
    pub fn select_store(&mut self, store_id: &str) {
        self.stores.insert(store_id.to_string());
    }

    /// Select the category if absent, deselect it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        let key = category.to_lowercase();

        if !self.categories.remove(&key) {
            self.categories.insert(key);
        }
    }

    /// Select the store if absent, deselect it otherwise.
    pub fn toggle_store(&mut self, store_id: &str) {
        if !self.stores.remove(store_id) {
            self.stores.insert(store_id.to_string());
        }
    }

    /// Clear both groups.
    pub fn reset(&mut self) {
        self.categories.clear();
        self.stores.clear();
    }

    /// Whether no category and no store is selected.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.stores.is_empty()
    }

    /// Whether the category is selected.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(&category.to_lowercase())
    }

    /// Whether the store is selected.
    pub fn has_store(&self, store_id: &str) -> bool {
        self.stores.contains(store_id)
    }

    /// Whether a single promo passes both groups.
    pub fn matches(&self, promo: &PromoCode) -> bool {
        let category_match =
            self.categories.is_empty() || self.categories.contains(&promo.category.to_lowercase());

        let store_match = self.stores.is_empty() || self.stores.contains(&promo.store.id);

        category_match && store_match
    }
}

/// Promos matching `criteria`, in input order.
pub fn filter_promos<'a>(criteria: &FilterCriteria, promos: &'a [PromoCode]) -> Vec<&'a PromoCode> {
    if criteria.is_empty() {
        return promos.iter().collect();
    }

    let matched: Vec<&PromoCode> = promos.iter().filter(|p| criteria.matches(p)).collect();

    debug!(
        categories = criteria.categories.len(),
        stores = criteria.stores.len(),
        total = promos.len(),
        matched = matched.len(),
        "filtered promos"
    );

    matched
}

/// Promos whose code, description, store name or category contains `query`, ignoring case.
///
/// The query is trimmed first; a blank query matches everything.
pub fn search_promos<'a, I>(query: &str, promos: I) -> Vec<&'a PromoCode>
where
    I: IntoIterator<Item = &'a PromoCode>,
{
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return promos.into_iter().collect();
    }

    let matched: Vec<&PromoCode> = promos
        .into_iter()
        .filter(|promo| {
            [
                promo.code.as_str(),
                promo.description.as_str(),
                promo.store.name.as_str(),
                promo.category.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect();

    debug!(query = %needle, matched = matched.len(), "searched promos");

    matched
}
