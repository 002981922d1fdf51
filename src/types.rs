//! Shared value types used across the generator, cache, and provider layers.
//!
//! These types are serialized to JSON by the CLI and by downstream test
//! harnesses, and use the original wire field names (`publishedAt`,
//! `readingTime`) so fixtures stay drop-in compatible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed blog post category enumeration.
///
/// Every template document is keyed by these four values; the template
/// loader rejects documents that don't cover all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Travel,
    Lifestyle,
}

/// All categories, in the draw order used when a caller doesn't pick one.
pub const CATEGORIES: [Category; 4] = [
    Category::Technology,
    Category::Business,
    Category::Travel,
    Category::Lifestyle,
];

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Travel => "travel",
            Category::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technology" => Ok(Category::Technology),
            "business" => Ok(Category::Business),
            "travel" => Ok(Category::Travel),
            "lifestyle" => Ok(Category::Lifestyle),
            other => Err(format!(
                "unknown category '{other}' (expected technology, business, travel, or lifestyle)"
            )),
        }
    }
}

/// Supported content locales.
///
/// Exactly two for this version. Catalog documents may carry entries for
/// other locale strings; those entries are simply never reachable through
/// this enum, which matches the "unknown locale yields empty results"
/// contract of the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "de_DE")]
    DeDe,
}

pub const LOCALES: [Locale; 2] = [Locale::EnUs, Locale::DeDe];

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::DeDe => "de_DE",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_US" => Ok(Locale::EnUs),
            "de_DE" => Ok(Locale::DeDe),
            other => Err(format!("unsupported locale '{other}' (expected en_US or de_DE)")),
        }
    }
}

/// A generated blog post.
///
/// Immutable once composed: the composer builds the full field set in one
/// pass and the cache hands out clones. For a fixed (seed, category, locale)
/// every field is byte-identical across regenerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe identifier derived from the title.
    pub slug: String,
    pub title: String,
    /// Full markdown body: `# title`, intro, `##` sections, `## Conclusion`.
    pub content: String,
    /// First ~150 chars of the introduction, cut at a word boundary, `...`-terminated.
    pub excerpt: String,
    pub category: Category,
    /// 3–5 tags drawn from the category's configured pool.
    pub tags: Vec<String>,
    pub author: String,
    /// Calendar date, `YYYY-MM-DD`, within the configured year range.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// Estimated minutes at 200 words per minute, never below 1.
    #[serde(rename = "readingTime")]
    pub reading_time: u32,
    pub locale: Locale,
}
