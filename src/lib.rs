//! # Faux CMS
//!
//! Deterministic fake catalog and blog content for test fixtures and demos.
//! Blog posts are generated, not stored: an integer seed fully determines a
//! post, so fixtures can name content by seed, slug, or title and get the
//! same bytes back on every run.
//!
//! # Architecture: Compose Behind a Cache
//!
//! ```text
//! request (seed | random | slug | title)
//!     │
//! PostCache ── memo (seed, category, locale) → Post
//!     │            slug/title reverse indexes
//!     │ miss
//! compose() ── fixed draw sequence over one SeededStream
//!     │
//! TemplateStore ── six JSON documents, loaded once, validated up front
//! ```
//!
//! The cache resolves every request to a seed — directly, via a reverse
//! index, or by drawing one — and the composer turns seeds into posts with
//! a strict, published draw order. Products and categories are the static
//! counterpart: curated JSON documents behind read-only repositories.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared value types: `Post`, `Category`, `Locale` |
//! | [`rng`] | Fixed, versioned deterministic PRNG wrapper |
//! | [`templates`] | Template documents: loading, validation, fingerprint |
//! | [`compose`] | The seed → post assembly algorithm |
//! | [`text`] | Slugs, excerpts, topic extraction, reading time |
//! | [`cache`] | Post memoization plus slug/title reverse lookup |
//! | [`catalog`] | Category taxonomy and product repository with variant expansion |
//! | [`provider`] | Locale-bound adapters with the not-found policy |
//! | [`config`] | `faux-cms.toml` resource configuration for the CLI |
//! | [`output`] | CLI display formatting |
//!
//! # Design Decisions
//!
//! ## Determinism Over Everything
//!
//! The load-bearing invariant is byte-stable regeneration: slug and title
//! lookups re-derive posts from recorded seeds, which only works if a seed
//! produces identical output forever. The PRNG, its seed expansion, and the
//! bounded-draw mapping are all pinned in [`rng`] and stamped with
//! [`rng::ALGORITHM_VERSION`]; the composer's draw order is documented in
//! [`compose`] and covered by tests. Template content is part of the
//! contract too — [`templates::TemplateSet::fingerprint`] lets fixtures
//! detect template drift.
//!
//! ## Context Objects, Not Globals
//!
//! Template stores, caches, and repositories are plain values the caller
//! constructs and owns. Nothing hides in module-level statics, so
//! independent catalogs coexist in one process (one per test case, one per
//! locale) without cross-contamination, and teardown is just `drop`.
//!
//! ## Absence Is a Value
//!
//! Reverse lookups are best-effort by design: they only know what this
//! cache produced. The core returns `Option` for misses; only the
//! [`provider`] layer — which knows whether the caller named an identifier
//! explicitly — turns absence into an error.
//!
//! ## Single-Threaded Core, Parallel Batches
//!
//! Generation is synchronous with no shared mutable state between seeds.
//! Batch calls fan composition out with rayon (composition is pure) while
//! all cache writes stay sequential; a multi-threaded embedder wraps the
//! whole cache behind its own lock.

pub mod cache;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod output;
pub mod provider;
pub mod rng;
pub mod templates;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
