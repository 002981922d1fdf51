//! Post memoization with reverse lookup by slug and title.
//!
//! Composing a post is cheap but not free, and more importantly the same
//! logical post must come back for the same request. The cache memoizes by
//! the full request key `(seed, category-argument, locale)` and maintains
//! two reverse indexes so a post can be re-derived from an identifier it
//! produced earlier:
//!
//! ```text
//! (seed, category?, locale) → Post
//! locale → slug  → (seed, category?)
//! locale → title → (seed, category?)
//! ```
//!
//! The indexes store the *input* category argument, not the drawn category:
//! re-deriving must replay the exact original request, and a `None` argument
//! draws the category from the stream itself.
//!
//! ## Best-effort reverse lookup
//!
//! The indexes only know about posts generated through this cache instance.
//! A slug computed out of band never resolves, even if some seed would
//! produce it — there is no way to invert the composer. Absence is therefore
//! a value (`None`), not an error; callers with stronger expectations raise
//! their own (see [`provider`](crate::provider)).
//!
//! Entries accumulate without eviction. The seed space is 10,000 wide and
//! posts are a few kilobytes, so the worst case is bounded and fine for the
//! test-fixture use case this crate targets.

use crate::compose::compose;
use crate::templates::{TemplateError, TemplateSet, TemplateStore};
use crate::types::{Category, Locale, Post};
use rand::Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Seeds live in `[0, SEED_SPACE)`. Small on purpose: `random()` collides
/// and reproduces earlier posts eventually, which is accepted behavior for
/// fixture data, and `unique_batch` can enumerate the space exhaustively.
pub const SEED_SPACE: u32 = 10_000;

/// Full memoization key for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PostKey {
    seed: u32,
    category: Option<Category>,
    locale: Locale,
}

/// What a reverse index entry needs to replay the original request.
#[derive(Debug, Clone, Copy)]
struct SeedRef {
    seed: u32,
    category: Option<Category>,
}

/// Hit/miss counters for one cache instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    pub hits: u32,
    pub misses: u32,
}

impl CacheStats {
    pub fn total(&self) -> u32 {
        self.hits + self.misses
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hits > 0 {
            write!(
                f,
                "{} cached, {} composed ({} total)",
                self.hits,
                self.misses,
                self.total()
            )
        } else {
            write!(f, "{} composed", self.misses)
        }
    }
}

/// Memoizing post store. One instance per independent catalog; instances
/// never share state.
pub struct PostCache {
    store: TemplateStore,
    posts: HashMap<PostKey, Post>,
    slug_index: HashMap<Locale, HashMap<String, SeedRef>>,
    title_index: HashMap<Locale, HashMap<String, SeedRef>>,
    stats: CacheStats,
}

impl PostCache {
    pub fn new(store: TemplateStore) -> Self {
        Self {
            store,
            posts: HashMap::new(),
            slug_index: HashMap::new(),
            title_index: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// The loaded template set (reads the documents on first use).
    pub fn templates(&self) -> Result<&TemplateSet, TemplateError> {
        self.store.get()
    }

    /// Get or compose the post for an explicit seed.
    pub fn by_seed(
        &mut self,
        seed: u32,
        category: Option<Category>,
        locale: Locale,
    ) -> Result<Post, TemplateError> {
        let key = PostKey {
            seed,
            category,
            locale,
        };
        if let Some(post) = self.posts.get(&key) {
            self.stats.hits += 1;
            return Ok(post.clone());
        }

        let templates = self.store.get()?;
        let post = compose(templates, seed, category, locale);
        debug!(seed, slug = %post.slug, %locale, "composed post");
        self.stats.misses += 1;
        self.remember(key, post.clone());
        Ok(post)
    }

    /// Compose a post for a randomly drawn seed.
    ///
    /// The seed comes from the thread RNG, deliberately independent of any
    /// post's own deterministic stream. Collisions with earlier draws
    /// reproduce the earlier post.
    pub fn random(
        &mut self,
        category: Option<Category>,
        locale: Locale,
    ) -> Result<Post, TemplateError> {
        let seed = rand::thread_rng().gen_range(0..SEED_SPACE);
        self.by_seed(seed, category, locale)
    }

    /// Resolve a previously generated slug back to its post.
    ///
    /// Tries the reverse index, then falls back to scanning cached posts.
    /// `Ok(None)` means "this cache never produced that slug".
    pub fn by_slug(&mut self, slug: &str, locale: Locale) -> Result<Option<Post>, TemplateError> {
        if let Some(seed_ref) = self
            .slug_index
            .get(&locale)
            .and_then(|index| index.get(slug))
            .copied()
        {
            return self
                .by_seed(seed_ref.seed, seed_ref.category, locale)
                .map(Some);
        }
        Ok(self.scan(locale, |post| post.slug == slug))
    }

    /// Resolve a previously generated title back to its post.
    pub fn by_title(&mut self, title: &str, locale: Locale) -> Result<Option<Post>, TemplateError> {
        if let Some(seed_ref) = self
            .title_index
            .get(&locale)
            .and_then(|index| index.get(title))
            .copied()
        {
            return self
                .by_seed(seed_ref.seed, seed_ref.category, locale)
                .map(Some);
        }
        Ok(self.scan(locale, |post| post.title == title))
    }

    /// Generate `count` distinct posts using seeds `0..count`, in order.
    ///
    /// Deliberately not random: the batch is idempotent call over call, and
    /// enumerating from zero gives full seed-space coverage for tests.
    /// Capped at the seed space.
    pub fn unique_batch(
        &mut self,
        count: usize,
        category: Option<Category>,
        locale: Locale,
    ) -> Result<Vec<Post>, TemplateError> {
        let count = count.min(SEED_SPACE as usize);
        let templates = self.store.get()?;

        // Compose the misses in parallel: composition is pure and every
        // seed owns its stream, so only the table writes below need to stay
        // sequential.
        let missing: Vec<u32> = (0..count as u32)
            .filter(|&seed| {
                !self.posts.contains_key(&PostKey {
                    seed,
                    category,
                    locale,
                })
            })
            .collect();
        let mut fresh: HashMap<u32, Post> = missing
            .par_iter()
            .map(|&seed| (seed, compose(templates, seed, category, locale)))
            .collect();

        let mut batch = Vec::with_capacity(count);
        for seed in 0..count as u32 {
            let key = PostKey {
                seed,
                category,
                locale,
            };
            let post = match self.posts.get(&key) {
                Some(post) => {
                    self.stats.hits += 1;
                    post.clone()
                }
                None => {
                    self.stats.misses += 1;
                    let post = fresh.remove(&seed).expect("composed above");
                    self.remember(key, post.clone());
                    post
                }
            };
            batch.push(post);
        }
        Ok(batch)
    }

    /// Drop every memoized post and index entry. Counters are cumulative
    /// and survive; they describe the instance's lifetime, not its content.
    pub fn clear(&mut self) {
        self.posts.clear();
        self.slug_index.clear();
        self.title_index.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Store a post and both its index entries as one unit — a reader must
    /// never observe a memoized post without its reverse mappings.
    fn remember(&mut self, key: PostKey, post: Post) {
        let seed_ref = SeedRef {
            seed: key.seed,
            category: key.category,
        };
        self.slug_index
            .entry(key.locale)
            .or_default()
            .insert(post.slug.clone(), seed_ref);
        self.title_index
            .entry(key.locale)
            .or_default()
            .insert(post.title.clone(), seed_ref);
        self.posts.insert(key, post);
    }

    fn scan(&self, locale: Locale, matches: impl Fn(&Post) -> bool) -> Option<Post> {
        self.posts
            .iter()
            .find(|(key, post)| key.locale == locale && matches(post))
            .map(|(_, post)| post.clone())
    }

    /// Test hook: wipe the reverse indexes but keep the memoized posts, to
    /// exercise the linear-scan fallback path.
    #[cfg(test)]
    fn forget_indexes(&mut self) {
        self.slug_index.clear();
        self.title_index.clear();
    }
}
