//! Derived-text helpers: slugs, excerpts, topic extraction, reading time.
//!
//! Everything here is a pure function of its input. The composer calls these
//! after all random draws are finished, so nothing in this module may touch
//! a [`SeededStream`](crate::rng::SeededStream) — derived text must be a
//! function of the already-drawn title/introduction/content alone.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Reading speed assumed by [`reading_time`].
pub const WORDS_PER_MINUTE: u32 = 200;

/// Maximum characters of introduction kept in an excerpt (before the `...`).
const EXCERPT_LEN: usize = 150;

/// Derive a URL-safe slug from a title.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen, and strips leading/trailing hyphens:
///
/// - `"Mastering Rust: A Guide"` → `"mastering-rust-a-guide"`
/// - `"  10 Tips (2023)!"` → `"10-tips-2023"`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Truncate an introduction into an excerpt.
///
/// Takes the first 150 characters, cuts back to the last space so no word is
/// split, and appends a literal `...`. Introductions shorter than the limit
/// are still cut at their last space — the trailing ellipsis always reads as
/// a continuation.
pub fn excerpt(intro: &str) -> String {
    let truncated: String = intro.chars().take(EXCERPT_LEN).collect();
    let cut = match truncated.rfind(' ') {
        Some(pos) => &truncated[..pos],
        None => truncated.as_str(),
    };
    format!("{cut}...")
}

/// Stock title openers stripped before topic extraction, tried in order.
const STOCK_PREFIXES: [&str; 9] = [
    "The",
    "A",
    "An",
    "Essential",
    "Introduction to",
    "Guide to",
    "Mastering",
    "Understanding",
    "Getting Started with",
];

/// Heuristically extract the main topic from a generated title.
///
/// Strips one leading stock phrase (case-insensitive, must be followed by
/// whitespace), then keeps the text up to the first colon or dash:
///
/// - `"Mastering Kubernetes: From Zero to Production"` → `"Kubernetes"`
/// - `"The Future of Remote Work"` → `"Future of Remote Work"`
pub fn extract_topic(title: &str) -> String {
    let mut rest = title;
    for prefix in STOCK_PREFIXES {
        if rest.len() > prefix.len()
            && rest.is_char_boundary(prefix.len())
            && rest[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            let after = &rest[prefix.len()..];
            let trimmed = after.trim_start();
            if trimmed.len() < after.len() {
                rest = trimmed;
                break;
            }
        }
    }
    let topic = rest.split([':', '-']).next().unwrap_or(rest).trim();
    if topic.is_empty() {
        rest.trim().to_string()
    } else {
        topic.to_string()
    }
}

/// Estimate reading time in whole minutes, never below 1.
pub fn reading_time(markdown: &str) -> u32 {
    word_count(markdown).div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Count prose words in markdown content.
///
/// Fenced code blocks, inline code, and image alt text don't count; link
/// text does. Markdown punctuation (headings, emphasis markers, list
/// bullets) never reaches the counter because only text events are
/// collected from the parse stream.
fn word_count(markdown: &str) -> u32 {
    let mut prose = String::new();
    let mut skip_depth = 0usize;
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(_)) | Event::Start(Tag::Image { .. }) => skip_depth += 1,
            Event::End(TagEnd::CodeBlock) | Event::End(TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(text) if skip_depth == 0 => {
                prose.push_str(&text);
                prose.push(' ');
            }
            Event::SoftBreak | Event::HardBreak => prose.push(' '),
            // Inline code is dropped entirely, matching the excerpt of
            // "strip code" rather than "count code tokens".
            _ => {}
        }
    }
    prose.split_whitespace().count() as u32
}
