//! Product repository with variant expansion.
//!
//! Product documents reference categories by key; views returned to callers
//! carry the category's localized display name instead (falling back to the
//! raw key when the category has no text for the locale). Documents with
//! variant axes are expanded at load time — the repository only ever holds
//! concrete SKUs.

use crate::catalog::variants::{VariantAxes, combinations, derive_sku, interpolate};
use crate::catalog::{CatalogError, CategoryRepository, load_documents};
use crate::types::Locale;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use tracing::debug;

/// One `products/*.json` document (or one expanded variant of one).
#[derive(Debug, Clone, Deserialize)]
struct ProductDocument {
    sku: String,
    category: String,
    locales: HashMap<String, ProductText>,
    #[serde(default)]
    variants: Option<VariantAxes>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProductText {
    name: String,
    description: String,
}

/// A product resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub sku: String,
    pub name: String,
    pub description: String,
    /// Localized category name, or the raw key if the category is unknown
    /// in this locale.
    pub category: String,
}

/// Read-only product store, keyed by SKU, with its category taxonomy.
#[derive(Debug)]
pub struct ProductRepository {
    records: BTreeMap<String, ProductDocument>,
    categories: CategoryRepository,
}

impl ProductRepository {
    /// Load every product document from `dir`, expanding variant axes into
    /// concrete SKUs. Categories resolve against the given taxonomy.
    pub fn load(dir: &Path, categories: CategoryRepository) -> Result<Self, CatalogError> {
        let mut records = BTreeMap::new();
        for document in load_documents::<ProductDocument>(dir)? {
            for expanded in expand(document) {
                records.insert(expanded.sku.clone(), expanded);
            }
        }
        debug!(products = records.len(), "loaded product catalog");
        Ok(Self {
            records,
            categories,
        })
    }

    /// Load products and categories from the conventional layout:
    /// `<data_dir>/products` and `<data_dir>/categories`.
    pub fn load_data_dir(data_dir: &Path) -> Result<Self, CatalogError> {
        let categories = CategoryRepository::load(&data_dir.join("categories"))?;
        Self::load(&data_dir.join("products"), categories)
    }

    pub fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    /// Resolve one product for a locale.
    pub fn by_sku(&self, sku: &str, locale: Locale) -> Option<ProductView> {
        let record = self.records.get(sku)?;
        self.resolve(record, locale)
    }

    /// Find a product by its localized display name.
    pub fn find_by_name(&self, name: &str, locale: Locale) -> Option<ProductView> {
        self.records
            .values()
            .find(|record| {
                record
                    .locales
                    .get(locale.as_str())
                    .is_some_and(|text| text.name == name)
            })
            .and_then(|record| self.resolve(record, locale))
    }

    /// Every product visible in a locale, in SKU order.
    pub fn all(&self, locale: Locale) -> Vec<ProductView> {
        self.records
            .values()
            .filter_map(|record| self.resolve(record, locale))
            .collect()
    }

    /// All SKUs (variant-expanded), locale-independent, in SKU order.
    pub fn skus(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn names(&self, locale: Locale) -> Vec<String> {
        self.all(locale).into_iter().map(|view| view.name).collect()
    }

    /// Products assigned to one category key.
    pub fn by_category(&self, category_key: &str, locale: Locale) -> Vec<ProductView> {
        self.records
            .values()
            .filter(|record| record.category == category_key)
            .filter_map(|record| self.resolve(record, locale))
            .collect()
    }

    /// Products under a category group: the group key itself plus its
    /// direct children in the taxonomy.
    pub fn by_category_group(&self, group_key: &str, locale: Locale) -> Vec<ProductView> {
        let mut member_keys: BTreeSet<String> = self
            .categories
            .children(group_key, locale)
            .into_iter()
            .map(|child| child.key)
            .collect();
        member_keys.insert(group_key.to_string());

        self.records
            .values()
            .filter(|record| member_keys.contains(&record.category))
            .filter_map(|record| self.resolve(record, locale))
            .collect()
    }

    /// Distinct category keys referenced by products, sorted.
    pub fn used_categories(&self) -> Vec<String> {
        self.records
            .values()
            .map(|record| record.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// One product drawn with the thread RNG, `None` if the locale has no
    /// products at all.
    pub fn random(&self, locale: Locale) -> Option<ProductView> {
        let products = self.all(locale);
        if products.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..products.len());
        products.into_iter().nth(index)
    }

    pub fn has_in_locale(&self, sku: &str, locale: Locale) -> bool {
        self.records
            .get(sku)
            .is_some_and(|record| record.locales.contains_key(locale.as_str()))
    }

    /// Locale strings a record carries text for, sorted.
    pub fn locales_of(&self, sku: &str) -> Vec<String> {
        let mut locales: Vec<String> = self
            .records
            .get(sku)
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

    fn resolve(&self, record: &ProductDocument, locale: Locale) -> Option<ProductView> {
        let text = record.locales.get(locale.as_str())?;
        let category = self
            .categories
            .name(&record.category, locale)
            .unwrap_or_else(|| record.category.clone());
        Some(ProductView {
            sku: record.sku.clone(),
            name: text.name.clone(),
            description: text.description.clone(),
            category,
        })
    }
}

/// Expand a document's variant axes into concrete documents. Documents
/// without axes pass through unchanged.
fn expand(document: ProductDocument) -> Vec<ProductDocument> {
    let Some(axes) = document.variants.as_ref().filter(|axes| !axes.0.is_empty()) else {
        return vec![ProductDocument {
            variants: None,
            ..document
        }];
    };

    combinations(&axes.0)
        .into_iter()
        .map(|combo| ProductDocument {
            sku: derive_sku(&document.sku, &combo),
            category: document.category.clone(),
            locales: document
                .locales
                .iter()
                .map(|(locale, text)| {
                    (
                        locale.clone(),
                        ProductText {
                            name: interpolate(&text.name, &combo),
                            description: interpolate(&text.description, &combo),
                        },
                    )
                })
                .collect(),
            variants: None,
        })
        .collect()
}
