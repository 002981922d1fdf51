//! Locale-bound provider adapters over the cache and repositories.
//!
//! Providers are the surface a test-fixture harness talks to. They pin a
//! locale at construction and translate the core's "absent is a value"
//! results into caller-facing behavior, following one rule:
//!
//! - An **explicit identifier** that doesn't resolve raises
//!   [`ProviderError`] — the caller named something specific and it isn't
//!   there.
//! - An **absent identifier** never raises: blog posts fall back to a
//!   random seed, products and categories to a canned default record when
//!   their repository is empty.
//!
//! Blog identifiers resolve as slug first, then title, so either form of a
//! previously generated post works.
//!
//! [`Fixtures`] bundles the three providers for one locale. Instances are
//! fully independent — two `Fixtures` never share caches, so parallel test
//! cases can't contaminate each other.

use crate::cache::PostCache;
use crate::catalog::{CatalogError, CategoryRepository, CategoryView, ProductRepository, ProductView};
use crate::templates::{TemplateError, TemplateStore};
use crate::types::{Category, Locale, Post};
use rand::Rng;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("blog post '{identifier}' not found in locale {locale}")]
    UnknownPost { identifier: String, locale: Locale },
    #[error("product '{identifier}' not found in locale {locale}")]
    UnknownProduct { identifier: String, locale: Locale },
    #[error("category '{identifier}' not found in locale {locale}")]
    UnknownCategory { identifier: String, locale: Locale },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Blog post provider: generated content behind identifier-based access.
pub struct BlogPosts {
    cache: PostCache,
    locale: Locale,
}

impl BlogPosts {
    pub fn new(templates_dir: &Path, locale: Locale) -> Self {
        Self::with_cache(PostCache::new(TemplateStore::new(templates_dir)), locale)
    }

    /// Wrap an existing cache, e.g. to share one across assertions.
    pub fn with_cache(cache: PostCache, locale: Locale) -> Self {
        Self { cache, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn cache(&self) -> &PostCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut PostCache {
        &mut self.cache
    }

    /// Resolve an optional identifier: absent draws a random post, present
    /// tries slug then title and raises when neither matches.
    pub fn post(&mut self, identifier: Option<&str>) -> Result<Post, ProviderError> {
        match identifier {
            None => Ok(self.cache.random(None, self.locale)?),
            Some(id) => {
                if let Some(post) = self.cache.by_slug(id, self.locale)? {
                    return Ok(post);
                }
                self.cache
                    .by_title(id, self.locale)?
                    .ok_or_else(|| ProviderError::UnknownPost {
                        identifier: id.to_string(),
                        locale: self.locale,
                    })
            }
        }
    }

    pub fn title(&mut self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.post(identifier).map(|post| post.title)
    }

    pub fn content(&mut self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.post(identifier).map(|post| post.content)
    }

    pub fn excerpt(&mut self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.post(identifier).map(|post| post.excerpt)
    }

    pub fn category(&mut self, identifier: Option<&str>) -> Result<Category, ProviderError> {
        self.post(identifier).map(|post| post.category)
    }

    pub fn tags(&mut self, identifier: Option<&str>) -> Result<Vec<String>, ProviderError> {
        self.post(identifier).map(|post| post.tags)
    }

    pub fn author(&mut self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.post(identifier).map(|post| post.author)
    }

    pub fn reading_time(&mut self, identifier: Option<&str>) -> Result<u32, ProviderError> {
        self.post(identifier).map(|post| post.reading_time)
    }

    /// Strict slug lookup, optionally in another locale.
    pub fn post_by_slug(
        &mut self,
        slug: &str,
        locale: Option<Locale>,
    ) -> Result<Post, ProviderError> {
        let locale = locale.unwrap_or(self.locale);
        self.cache
            .by_slug(slug, locale)?
            .ok_or_else(|| ProviderError::UnknownPost {
                identifier: slug.to_string(),
                locale,
            })
    }

    /// The slug a previously generated title maps to.
    pub fn slug_for_title(&mut self, title: &str) -> Result<String, ProviderError> {
        self.cache
            .by_title(title, self.locale)?
            .map(|post| post.slug)
            .ok_or_else(|| ProviderError::UnknownPost {
                identifier: title.to_string(),
                locale: self.locale,
            })
    }

    pub fn post_in_locale(&mut self, slug: &str, locale: Locale) -> Result<Post, ProviderError> {
        self.post_by_slug(slug, Some(locale))
    }

    /// A deterministic batch of 100 posts (seeds 0..100).
    pub fn all(&mut self) -> Result<Vec<Post>, TemplateError> {
        self.cache.unique_batch(100, None, self.locale)
    }

    /// A deterministic batch of 50 posts pinned to one category.
    pub fn by_category(&mut self, category: Category) -> Result<Vec<Post>, TemplateError> {
        self.cache.unique_batch(50, Some(category), self.locale)
    }
}

/// Canned record returned for an absent product identifier when the
/// repository has nothing for the locale.
fn default_product() -> ProductView {
    ProductView {
        sku: "GENERIC-001".to_string(),
        name: "Generic Product".to_string(),
        description: "A high-quality product designed for everyday use.".to_string(),
        category: "Electronics".to_string(),
    }
}

/// Product provider over the static catalog.
pub struct Products {
    repo: ProductRepository,
    locale: Locale,
}

impl Products {
    pub fn new(repo: ProductRepository, locale: Locale) -> Self {
        Self { repo, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn repository(&self) -> &ProductRepository {
        &self.repo
    }

    /// Resolve an optional identifier: absent draws a random product (or
    /// the canned default when the locale is empty), present tries SKU then
    /// name and raises when neither matches.
    pub fn product(&self, identifier: Option<&str>) -> Result<ProductView, ProviderError> {
        match identifier {
            None => Ok(self.repo.random(self.locale).unwrap_or_else(default_product)),
            Some(id) => self
                .repo
                .by_sku(id, self.locale)
                .or_else(|| self.repo.find_by_name(id, self.locale))
                .ok_or_else(|| ProviderError::UnknownProduct {
                    identifier: id.to_string(),
                    locale: self.locale,
                }),
        }
    }

    pub fn name(&self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.product(identifier).map(|view| view.name)
    }

    pub fn description(&self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.product(identifier).map(|view| view.description)
    }

    pub fn category(&self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.product(identifier).map(|view| view.category)
    }

    /// Strict SKU lookup, optionally in another locale.
    pub fn product_by_sku(
        &self,
        sku: &str,
        locale: Option<Locale>,
    ) -> Result<ProductView, ProviderError> {
        let locale = locale.unwrap_or(self.locale);
        self.repo
            .by_sku(sku, locale)
            .ok_or_else(|| ProviderError::UnknownProduct {
                identifier: sku.to_string(),
                locale,
            })
    }

    /// The SKU a localized product name maps to.
    pub fn sku_for_name(&self, name: &str) -> Result<String, ProviderError> {
        self.repo
            .find_by_name(name, self.locale)
            .map(|view| view.sku)
            .ok_or_else(|| ProviderError::UnknownProduct {
                identifier: name.to_string(),
                locale: self.locale,
            })
    }

    pub fn product_in_locale(&self, sku: &str, locale: Locale) -> Result<ProductView, ProviderError> {
        self.product_by_sku(sku, Some(locale))
    }
}

/// Canned record returned for an absent category identifier when the
/// repository has nothing for the locale.
fn default_category() -> CategoryView {
    CategoryView {
        key: "general".to_string(),
        name: "General".to_string(),
        parent: None,
    }
}

/// Category provider over the static taxonomy.
pub struct Categories {
    repo: CategoryRepository,
    locale: Locale,
}

impl Categories {
    pub fn new(repo: CategoryRepository, locale: Locale) -> Self {
        Self { repo, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn repository(&self) -> &CategoryRepository {
        &self.repo
    }

    /// Resolve an optional identifier: absent draws a random category (or
    /// the canned default when the locale is empty), present tries key then
    /// name and raises when neither matches.
    pub fn category(&self, identifier: Option<&str>) -> Result<CategoryView, ProviderError> {
        match identifier {
            None => {
                let all = self.repo.all(self.locale);
                if all.is_empty() {
                    return Ok(default_category());
                }
                let index = rand::thread_rng().gen_range(0..all.len());
                Ok(all.into_iter().nth(index).unwrap_or_else(default_category))
            }
            Some(id) => self
                .repo
                .by_key(id, self.locale)
                .or_else(|| {
                    self.repo
                        .all(self.locale)
                        .into_iter()
                        .find(|view| view.name == id)
                })
                .ok_or_else(|| ProviderError::UnknownCategory {
                    identifier: id.to_string(),
                    locale: self.locale,
                }),
        }
    }

    pub fn name(&self, identifier: Option<&str>) -> Result<String, ProviderError> {
        self.category(identifier).map(|view| view.name)
    }
}

/// All three providers for one locale, loaded from the conventional
/// resource layout. Independent instances never share state.
pub struct Fixtures {
    pub posts: BlogPosts,
    pub products: Products,
    pub categories: Categories,
}

impl Fixtures {
    /// `templates_dir` holds the six blog template documents; `data_dir`
    /// holds `categories/` and `products/`.
    pub fn new(templates_dir: &Path, data_dir: &Path, locale: Locale) -> Result<Self, CatalogError> {
        let products = ProductRepository::load_data_dir(data_dir)?;
        let categories = CategoryRepository::load(&data_dir.join("categories"))?;
        Ok(Self {
            posts: BlogPosts::new(templates_dir, locale),
            products: Products::new(products, locale),
            categories: Categories::new(categories, locale),
        })
    }
}
