//! Category taxonomy repository.
//!
//! Categories form a parent-keyed hierarchy: a record with `parent: null`
//! is a root (a "category group" for product faceting), anything else hangs
//! under its parent's key. Depth is not limited, though the shipped data is
//! two levels deep.

use crate::catalog::{CatalogError, load_documents};
use crate::types::Locale;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One `categories/*.json` document.
#[derive(Debug, Clone, Deserialize)]
struct CategoryDocument {
    key: String,
    #[serde(default)]
    parent: Option<String>,
    locales: HashMap<String, CategoryText>,
}

#[derive(Debug, Clone, Deserialize)]
struct CategoryText {
    name: String,
}

/// A category resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub key: String,
    pub name: String,
    pub parent: Option<String>,
}

/// Read-only category store, keyed by category key.
#[derive(Debug)]
pub struct CategoryRepository {
    records: BTreeMap<String, CategoryDocument>,
}

impl CategoryRepository {
    /// Load every category document from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let records = load_documents::<CategoryDocument>(dir)?
            .into_iter()
            .map(|doc| (doc.key.clone(), doc))
            .collect();
        Ok(Self { records })
    }

    /// Resolve one category for a locale. `None` when the key is unknown or
    /// the record has no text for the locale.
    pub fn by_key(&self, key: &str, locale: Locale) -> Option<CategoryView> {
        let record = self.records.get(key)?;
        let text = record.locales.get(locale.as_str())?;
        Some(CategoryView {
            key: record.key.clone(),
            name: text.name.clone(),
            parent: record.parent.clone(),
        })
    }

    /// Localized display name for a key.
    pub fn name(&self, key: &str, locale: Locale) -> Option<String> {
        self.by_key(key, locale).map(|view| view.name)
    }

    /// Every category visible in a locale, in key order.
    pub fn all(&self, locale: Locale) -> Vec<CategoryView> {
        self.records
            .keys()
            .filter_map(|key| self.by_key(key, locale))
            .collect()
    }

    /// All category keys, locale-independent, in key order.
    pub fn keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    /// All localized names visible in a locale, in key order.
    pub fn names(&self, locale: Locale) -> Vec<String> {
        self.all(locale).into_iter().map(|view| view.name).collect()
    }

    /// Categories with the given parent (`None` selects the roots).
    pub fn by_parent(&self, parent: Option<&str>, locale: Locale) -> Vec<CategoryView> {
        self.records
            .values()
            .filter(|record| record.parent.as_deref() == parent)
            .filter_map(|record| self.by_key(&record.key, locale))
            .collect()
    }

    pub fn roots(&self, locale: Locale) -> Vec<CategoryView> {
        self.by_parent(None, locale)
    }

    pub fn children(&self, parent_key: &str, locale: Locale) -> Vec<CategoryView> {
        self.by_parent(Some(parent_key), locale)
    }

    pub fn has_children(&self, key: &str) -> bool {
        self.records
            .values()
            .any(|record| record.parent.as_deref() == Some(key))
    }

    pub fn has_in_locale(&self, key: &str, locale: Locale) -> bool {
        self.records
            .get(key)
            .is_some_and(|record| record.locales.contains_key(locale.as_str()))
    }

    /// Locale strings a record carries text for, sorted.
    pub fn locales_of(&self, key: &str) -> Vec<String> {
        let mut locales: Vec<String> = self
            .records
            .get(key)
            .map(|record| record.locales.keys().cloned().collect())
            .unwrap_or_default();
        locales.sort();
        locales
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
