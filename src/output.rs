//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity — title or name plus a positional index — with
//! machine identifiers (slug, SKU, seed) as indented context lines below.
//!
//! ```text
//! Posts
//! 001 Mastering Kubernetes: From Zero to Production (technology, 4 min)
//!     Slug: mastering-kubernetes-from-zero-to-production
//!     Author: Sarah Mitchell · Published: 2022-07-14
//!     Tags: containers, devops, cloud
//! ```

use crate::cache::CacheStats;
use crate::catalog::{CategoryRepository, CategoryView, ProductView};
use crate::types::{Locale, Post};

/// `001 Title (category, N min)` header plus context lines for one post.
pub fn print_post(index: usize, post: &Post) {
    println!(
        "{:03} {} ({}, {} min)",
        index, post.title, post.category, post.reading_time
    );
    println!("    Slug: {}", post.slug);
    println!("    Author: {} · Published: {}", post.author, post.published_at);
    println!("    Tags: {}", post.tags.join(", "));
}

pub fn print_post_list(posts: &[Post], locale: Locale) {
    println!("Posts ({locale})");
    for (index, post) in posts.iter().enumerate() {
        print_post(index + 1, post);
    }
}

/// Full markdown body with a trailing excerpt line, for single-post output.
pub fn print_post_body(post: &Post) {
    println!("{}", post.content);
    println!("---");
    println!("Excerpt: {}", post.excerpt);
}

pub fn print_products(products: &[ProductView], locale: Locale) {
    println!("Products ({locale})");
    for (index, product) in products.iter().enumerate() {
        println!("{:03} {} ({})", index + 1, product.name, product.category);
        println!("    Sku: {}", product.sku);
        println!("    Description: {}", product.description);
    }
}

/// Two-level taxonomy tree: roots with their children indented.
pub fn print_category_tree(repo: &CategoryRepository, locale: Locale) {
    println!("Categories ({locale})");
    for root in repo.roots(locale) {
        print_category_line(&root, 0);
        for child in repo.children(&root.key, locale) {
            print_category_line(&child, 1);
        }
    }
}

fn print_category_line(category: &CategoryView, depth: usize) {
    let indent = "    ".repeat(depth);
    println!("{indent}{} ({})", category.name, category.key);
}

pub fn print_cache_stats(stats: CacheStats) {
    if stats.total() > 0 {
        println!("Cache: {stats}");
    }
}
