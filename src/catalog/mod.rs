//! Static catalog data: categories and products.
//!
//! Unlike blog posts, catalog records are not generated — they are curated
//! JSON documents, one file per record, loaded once per repository instance:
//!
//! ```text
//! data/
//! ├── categories/
//! │   ├── electronics.json     # {key, parent?, locales: {en_US: {name}, ...}}
//! │   └── ...
//! └── products/
//!     ├── laptop-pro.json      # {sku, category, locales, variants?}
//!     └── ...
//! ```
//!
//! Records carry their own per-locale text; a record without an entry for
//! the requested locale is simply invisible in that locale. Unknown locales
//! therefore yield empty result sets, never errors.
//!
//! Repositories are explicit context objects like
//! [`TemplateStore`](crate::templates::TemplateStore): construct as many
//! independent instances as needed, nothing is shared behind the scenes.

pub mod categories;
pub mod products;
pub mod variants;

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use categories::{CategoryRepository, CategoryView};
pub use products::{ProductRepository, ProductView};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog data directory unreadable: {path}")]
    UnreadableDataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog document unreadable: {path}")]
    UnreadableDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog document {path}: {source}")]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse every `*.json` document in `dir`, sorted by file name so
/// load order (and thus iteration order downstream) is stable across
/// platforms and runs.
pub(crate) fn load_documents<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, CatalogError> {
    let entries = std::fs::read_dir(dir).map_err(|source| CatalogError::UnreadableDataDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content =
            std::fs::read_to_string(&path).map_err(|source| CatalogError::UnreadableDocument {
                path: path.clone(),
                source,
            })?;
        let document =
            serde_json::from_str(&content).map_err(|source| CatalogError::MalformedDocument {
                path: path.clone(),
                source,
            })?;
        documents.push(document);
    }
    Ok(documents)
}
