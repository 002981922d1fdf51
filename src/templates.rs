//! Template loading and validation for the blog post generator.
//!
//! Six JSON documents under a configured directory drive all content
//! generation:
//!
//! ```text
//! blog-templates/
//! ├── titles.json          # category → title templates (with placeholders)
//! ├── introductions.json   # category → intro templates ({title}, {topic})
//! ├── sections.json        # category → [{heading, content}]
//! ├── conclusions.json     # category → closing paragraphs
//! ├── code-examples.json   # sub-topic → [{title, code}]
//! └── metadata.json        # authors, tag pools, topic word-lists, year range
//! ```
//!
//! The store loads them lazily, at most once per instance, and validates
//! structural completeness up front: every category must have a non-empty
//! entry in the four category-keyed documents, every code sub-topic must
//! have a pool, and metadata must carry its required keys. There is no
//! partial or degraded mode — a generator without templates cannot produce
//! anything, so any violation aborts the whole subsystem on first use.
//!
//! A store is an explicit context object, not a process-wide global: tests
//! and embedders can run several independent stores (pointing at different
//! template sets) in one process without cross-contamination.
//!
//! ## Fingerprint
//!
//! The loaded set carries a SHA-256 fingerprint over the six raw documents.
//! Reverse lookups (slug → seed) are only as durable as the templates that
//! produced them; a fixture suite that records slugs can record the
//! fingerprint alongside and detect template drift instead of chasing
//! mysterious lookup misses.

use crate::types::{CATEGORIES, Category};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// The fixed set of code example sub-topics.
pub const CODE_TOPICS: [&str; 7] = [
    "rust",
    "javascript",
    "python",
    "docker",
    "configuration",
    "api",
    "general",
];

/// File stems of the six template documents, in fingerprint order.
const TEMPLATE_FILES: [&str; 6] = [
    "titles",
    "introductions",
    "sections",
    "conclusions",
    "code-examples",
    "metadata",
];

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template file not found or unreadable: {path}")]
    MissingTemplateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed template data in {path}: {source}")]
    MalformedTemplateData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid template structure: {0}")]
    InvalidTemplateStructure(String),
}

/// One section template: a heading plus a body paragraph.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionTemplate {
    pub heading: String,
    pub content: String,
}

/// One code example: a display title plus the code itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeExample {
    pub title: String,
    pub code: String,
}

/// Inclusive year range for publish dates and `{year}` placeholders.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// Cross-cutting metadata: authors, tag pools, topic word-lists, year range.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub authors: Vec<String>,
    /// Tag groups per category; groups are flattened before the tag draw.
    pub tags_by_category: HashMap<String, Vec<Vec<String>>>,
    pub year_range: YearRange,
    pub tech_topics: Vec<String>,
    pub business_topics: Vec<String>,
    pub travel_destinations: Vec<String>,
    pub lifestyle_topics: Vec<String>,
}

/// Permissive mirror of `metadata.json`. Missing keys surface as structure
/// errors during validation, not as parse errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    authors: Option<Vec<String>>,
    tags_by_category: Option<HashMap<String, Vec<Vec<String>>>>,
    year_range: Option<YearRange>,
    #[serde(default)]
    tech_topics: Vec<String>,
    #[serde(default)]
    business_topics: Vec<String>,
    #[serde(default)]
    travel_destinations: Vec<String>,
    #[serde(default)]
    lifestyle_topics: Vec<String>,
}

/// The six template collections, immutable after load.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    titles: HashMap<String, Vec<String>>,
    introductions: HashMap<String, Vec<String>>,
    sections: HashMap<String, Vec<SectionTemplate>>,
    conclusions: HashMap<String, Vec<String>>,
    code_examples: HashMap<String, Vec<CodeExample>>,
    metadata: Metadata,
    fingerprint: String,
}

impl TemplateSet {
    /// Load and validate all six documents from `dir`.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let mut hasher = Sha256::new();
        let mut read = |stem: &str| -> Result<(PathBuf, String), TemplateError> {
            let path = dir.join(format!("{stem}.json"));
            let content = std::fs::read_to_string(&path).map_err(|source| {
                TemplateError::MissingTemplateFile {
                    path: path.clone(),
                    source,
                }
            })?;
            hasher.update(stem.as_bytes());
            hasher.update(b"\0");
            hasher.update(content.as_bytes());
            Ok((path, content))
        };

        // Fixed read order — the fingerprint depends on it.
        let titles = read(TEMPLATE_FILES[0])?;
        let introductions = read(TEMPLATE_FILES[1])?;
        let sections = read(TEMPLATE_FILES[2])?;
        let conclusions = read(TEMPLATE_FILES[3])?;
        let code_examples = read(TEMPLATE_FILES[4])?;
        let metadata = read(TEMPLATE_FILES[5])?;
        let fingerprint = format!("{:x}", hasher.finalize());

        let set = Self {
            titles: parse(&titles)?,
            introductions: parse(&introductions)?,
            sections: parse(&sections)?,
            conclusions: parse(&conclusions)?,
            code_examples: parse(&code_examples)?,
            metadata: validate_metadata(parse::<RawMetadata>(&metadata)?)?,
            fingerprint,
        };
        set.validate()?;

        info!(
            dir = %dir.display(),
            fingerprint = %set.fingerprint,
            "loaded blog templates"
        );
        Ok(set)
    }

    /// SHA-256 over the six raw documents. Stable across loads of identical
    /// files; changes whenever any template text changes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    // Accessors index directly: presence and non-emptiness of every
    // category entry is a load-time invariant enforced by validate().

    pub fn titles(&self, category: Category) -> &[String] {
        &self.titles[category.as_str()]
    }

    pub fn introductions(&self, category: Category) -> &[String] {
        &self.introductions[category.as_str()]
    }

    pub fn sections(&self, category: Category) -> &[SectionTemplate] {
        &self.sections[category.as_str()]
    }

    pub fn conclusions(&self, category: Category) -> &[String] {
        &self.conclusions[category.as_str()]
    }

    pub fn code_examples(&self, topic: &str) -> &[CodeExample] {
        &self.code_examples[topic]
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Topic word-list backing the `{topic}` placeholder for a category.
    pub fn topics(&self, category: Category) -> &[String] {
        match category {
            Category::Technology => &self.metadata.tech_topics,
            Category::Business => &self.metadata.business_topics,
            Category::Travel => &self.metadata.travel_destinations,
            Category::Lifestyle => &self.metadata.lifestyle_topics,
        }
    }

    /// Flattened tag pool for a category, groups in document order.
    pub fn tag_pool(&self, category: Category) -> Vec<String> {
        self.metadata.tags_by_category[category.as_str()]
            .iter()
            .flatten()
            .cloned()
            .collect()
    }

    fn validate(&self) -> Result<(), TemplateError> {
        for category in CATEGORIES {
            require_entries(&self.titles, category.as_str(), "titles")?;
            require_entries(&self.introductions, category.as_str(), "introductions")?;
            require_entries(&self.sections, category.as_str(), "sections")?;
            require_entries(&self.conclusions, category.as_str(), "conclusions")?;
            if !self
                .metadata
                .tags_by_category
                .get(category.as_str())
                .is_some_and(|groups| groups.iter().any(|g| !g.is_empty()))
            {
                return Err(TemplateError::InvalidTemplateStructure(format!(
                    "metadata is missing tags for category '{category}'"
                )));
            }
        }
        for topic in CODE_TOPICS {
            require_entries(&self.code_examples, topic, "code-examples")?;
        }
        Ok(())
    }
}

fn require_entries<T>(
    map: &HashMap<String, Vec<T>>,
    key: &str,
    document: &str,
) -> Result<(), TemplateError> {
    if map.get(key).is_some_and(|entries| !entries.is_empty()) {
        Ok(())
    } else {
        Err(TemplateError::InvalidTemplateStructure(format!(
            "{document} has no entries for '{key}'"
        )))
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    (path, content): &(PathBuf, String),
) -> Result<T, TemplateError> {
    serde_json::from_str(content).map_err(|source| TemplateError::MalformedTemplateData {
        path: path.clone(),
        source,
    })
}

fn validate_metadata(raw: RawMetadata) -> Result<Metadata, TemplateError> {
    let missing = |key: &str| {
        TemplateError::InvalidTemplateStructure(format!("metadata is missing required key '{key}'"))
    };
    let authors = raw.authors.ok_or_else(|| missing("authors"))?;
    let tags_by_category = raw.tags_by_category.ok_or_else(|| missing("tagsByCategory"))?;
    let year_range = raw.year_range.ok_or_else(|| missing("yearRange"))?;

    if authors.is_empty() {
        return Err(TemplateError::InvalidTemplateStructure(
            "metadata.authors must not be empty".into(),
        ));
    }
    if year_range.min > year_range.max {
        return Err(TemplateError::InvalidTemplateStructure(format!(
            "metadata.yearRange is inverted: {} > {}",
            year_range.min, year_range.max
        )));
    }
    if chrono::NaiveDate::from_ymd_opt(year_range.min, 1, 1).is_none()
        || chrono::NaiveDate::from_ymd_opt(year_range.max, 12, 31).is_none()
    {
        return Err(TemplateError::InvalidTemplateStructure(format!(
            "metadata.yearRange [{}, {}] is outside the supported calendar",
            year_range.min, year_range.max
        )));
    }
    for (name, list) in [
        ("techTopics", &raw.tech_topics),
        ("businessTopics", &raw.business_topics),
        ("travelDestinations", &raw.travel_destinations),
        ("lifestyleTopics", &raw.lifestyle_topics),
    ] {
        if list.is_empty() {
            return Err(TemplateError::InvalidTemplateStructure(format!(
                "metadata.{name} must not be empty"
            )));
        }
    }

    Ok(Metadata {
        authors,
        tags_by_category,
        year_range,
        tech_topics: raw.tech_topics,
        business_topics: raw.business_topics,
        travel_destinations: raw.travel_destinations,
        lifestyle_topics: raw.lifestyle_topics,
    })
}

/// Lazily loaded, at-most-once template context.
///
/// Construction is cheap and infallible; the documents are read on the
/// first [`get`](TemplateStore::get) and cached for the lifetime of the
/// store. Single-threaded by design — a multi-threaded embedder wraps the
/// store behind its own at-most-once guard.
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    set: OnceCell<TemplateSet>,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            set: OnceCell::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The loaded template set, reading and validating on first call.
    pub fn get(&self) -> Result<&TemplateSet, TemplateError> {
        if let Some(set) = self.set.get() {
            return Ok(set);
        }
        let set = TemplateSet::load(&self.dir)?;
        Ok(self.set.get_or_init(|| set))
    }
}
