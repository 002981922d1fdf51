//! End-to-end determinism and lookup properties against the shipped
//! `resources/` tree, exercised through the public API only.

use faux_cms::cache::{PostCache, SEED_SPACE};
use faux_cms::provider::{BlogPosts, ProviderError};
use faux_cms::templates::TemplateStore;
use faux_cms::types::{CATEGORIES, Category, Locale};
use std::path::{Path, PathBuf};

fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/blog-templates")
}

fn cache() -> PostCache {
    PostCache::new(TemplateStore::new(templates_dir()))
}

// =========================================================================
// Determinism
// =========================================================================

#[test]
fn seed_42_technology_scenario() {
    // Two fully independent caches must produce byte-identical output.
    let mut a = cache();
    let mut b = cache();
    let post_a = a.by_seed(42, Some(Category::Technology), Locale::EnUs).unwrap();
    let post_b = b.by_seed(42, Some(Category::Technology), Locale::EnUs).unwrap();

    assert_eq!(post_a.content, post_b.content);
    assert_eq!(post_a.slug, post_b.slug);
    assert_eq!(post_a.reading_time, post_b.reading_time);
    assert_eq!(post_a, post_b);
}

#[test]
fn repeated_by_seed_is_field_for_field_identical() {
    let mut cache = cache();
    for seed in 0..25 {
        let first = cache.by_seed(seed, None, Locale::EnUs).unwrap();
        let second = cache.by_seed(seed, None, Locale::EnUs).unwrap();
        assert_eq!(first, second, "seed {seed}");
    }
}

#[test]
fn regeneration_after_clear_matches() {
    let mut cache = cache();
    let before = cache.by_seed(123, Some(Category::Travel), Locale::DeDe).unwrap();
    cache.clear();
    let after = cache.by_seed(123, Some(Category::Travel), Locale::DeDe).unwrap();
    assert_eq!(before, after);
}

// =========================================================================
// Reverse lookup round trips
// =========================================================================

#[test]
fn slug_round_trip() {
    let mut cache = cache();
    for seed in 0..20 {
        let post = cache.by_seed(seed, None, Locale::EnUs).unwrap();
        let found = cache.by_slug(&post.slug, Locale::EnUs).unwrap().unwrap();
        assert_eq!(found.slug, post.slug, "seed {seed}");
        assert_eq!(found, post, "seed {seed}");
    }
}

#[test]
fn title_round_trip() {
    let mut cache = cache();
    for seed in 0..20 {
        let post = cache.by_seed(seed, None, Locale::DeDe).unwrap();
        let found = cache.by_title(&post.title, Locale::DeDe).unwrap().unwrap();
        assert_eq!(found, post, "seed {seed}");
    }
}

#[test]
fn unknown_slug_is_absent_not_an_error() {
    let mut cache = cache();
    cache.by_seed(0, None, Locale::EnUs).unwrap();
    assert_eq!(
        cache.by_slug("definitely-unused-slug-xyz", Locale::EnUs).unwrap(),
        None
    );
}

// =========================================================================
// Field properties over the seed space
// =========================================================================

#[test]
fn field_invariants_hold_over_a_batch() {
    let mut cache = cache();
    let pool_by_category: Vec<(Category, Vec<String>)> = {
        let templates = cache.templates().unwrap();
        CATEGORIES
            .iter()
            .map(|&c| (c, templates.tag_pool(c)))
            .collect()
    };

    let posts = cache.unique_batch(100, None, Locale::EnUs).unwrap();
    for (seed, post) in posts.iter().enumerate() {
        assert!(CATEGORIES.contains(&post.category), "seed {seed}");
        assert!(post.reading_time >= 1, "seed {seed}");
        assert!((3..=5).contains(&post.tags.len()), "seed {seed}");

        let pool = &pool_by_category
            .iter()
            .find(|(c, _)| *c == post.category)
            .unwrap()
            .1;
        for tag in &post.tags {
            assert!(!tag.is_empty());
            assert!(pool.contains(tag), "seed {seed}: tag {tag} not in pool");
        }

        assert!(post.excerpt.ends_with("..."), "seed {seed}");
        assert!(post.excerpt.chars().count() <= 153, "seed {seed}");
    }
}

#[test]
fn published_dates_are_iso_and_within_the_year_range() {
    let mut cache = cache();
    let (min_year, max_year) = {
        let range = cache.templates().unwrap().metadata().year_range;
        (range.min, range.max)
    };

    let posts = cache.unique_batch(100, None, Locale::EnUs).unwrap();
    for post in &posts {
        let bytes = post.published_at.as_bytes();
        assert_eq!(bytes.len(), 10, "{}", post.published_at);
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');

        let year: i32 = post.published_at[..4].parse().unwrap();
        let month: u32 = post.published_at[5..7].parse().unwrap();
        let day: u32 = post.published_at[8..10].parse().unwrap();
        assert!((min_year..=max_year).contains(&year));
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
    }
}

// =========================================================================
// Batches
// =========================================================================

#[test]
fn unique_batch_covers_seeds_in_ascending_order() {
    let mut batch_cache = cache();
    let mut reference = cache();

    let batch = batch_cache.unique_batch(100, None, Locale::EnUs).unwrap();
    assert_eq!(batch.len(), 100);
    for (seed, post) in batch.iter().enumerate() {
        let expected = reference.by_seed(seed as u32, None, Locale::EnUs).unwrap();
        assert_eq!(*post, expected, "seed {seed}");
    }
}

#[test]
fn seed_space_is_ten_thousand() {
    assert_eq!(SEED_SPACE, 10_000);
}

// =========================================================================
// Code example scenario
// =========================================================================

#[test]
fn technology_code_examples_follow_the_coin_flip() {
    let mut cache = cache();
    let mut with_code = 0u32;
    let mut without_code = 0u32;

    for seed in 0..100 {
        let post = cache.by_seed(seed, Some(Category::Technology), Locale::EnUs).unwrap();
        if post.content.contains("```") {
            with_code += 1;
            // The example is a ### subheading between the intro and the
            // first ## section.
            let code_pos = post.content.find("### ").unwrap();
            let section_pos = post.content.find("\n## ").unwrap();
            assert!(code_pos < section_pos, "seed {seed}");
        } else {
            without_code += 1;
        }
    }

    assert!(with_code > 0, "no technology post drew a code example");
    assert!(without_code > 0, "every technology post drew a code example");
}

#[test]
fn non_technology_posts_never_carry_code() {
    let mut cache = cache();
    for seed in 0..50 {
        for category in [Category::Business, Category::Travel, Category::Lifestyle] {
            let post = cache.by_seed(seed, Some(category), Locale::EnUs).unwrap();
            assert!(!post.content.contains("```"), "seed {seed} {category}");
        }
    }
}

// =========================================================================
// Provider policy
// =========================================================================

#[test]
fn provider_raises_only_for_explicit_identifiers() {
    let mut posts = BlogPosts::new(&templates_dir(), Locale::EnUs);

    // Absent identifier: always succeeds.
    let random = posts.post(None).unwrap();
    assert_eq!(random.locale, Locale::EnUs);

    // Explicit identifier that was generated: succeeds.
    assert!(posts.post(Some(&random.slug)).is_ok());

    // Explicit identifier never generated: raises.
    let err = posts.post(Some("never-generated-anywhere")).unwrap_err();
    assert!(matches!(err, ProviderError::UnknownPost { .. }));
}

#[test]
fn locales_keep_separate_lookup_spaces() {
    let mut cache = cache();
    let en_post = cache.by_seed(5, None, Locale::EnUs).unwrap();
    assert_eq!(cache.by_slug(&en_post.slug, Locale::DeDe).unwrap(), None);

    let de_post = cache.by_seed(5, None, Locale::DeDe).unwrap();
    assert_eq!(de_post.locale, Locale::DeDe);
    // Same seed, same draws — only the locale field differs.
    assert_eq!(de_post.title, en_post.title);
}
