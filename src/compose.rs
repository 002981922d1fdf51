//! Post composition: one seed in, one fully assembled post out.
//!
//! [`compose`] is a pure function of `(templates, seed, category, locale)`.
//! Determinism rests on a strict draw order — the sequence of calls against
//! the seeded stream below is a published contract, not an implementation
//! detail. Reordering any two draws, or adding a draw where one wasn't
//! consumed before, changes every post ever generated and orphans every
//! recorded slug and title. The order is:
//!
//! 1. category (only when the caller didn't pick one)
//! 2. title template, then its placeholders in the fixed order of
//!    [`fill_placeholders`] — a placeholder absent from the chosen template
//!    consumes no draw
//! 3. introduction template
//! 4. section count in [4, 5]
//! 5. section shuffle
//! 6. conclusion
//! 7. technology only: coin flip, then code sub-topic and example
//! 8. tag shuffle, then tag count in [3, 5]
//! 9. author
//! 10. publish-day offset
//!
//! Slug, excerpt, and reading time are derived from already-drawn text and
//! consume nothing.

use crate::rng::SeededStream;
use crate::templates::{CODE_TOPICS, CodeExample, SectionTemplate, TemplateSet};
use crate::text;
use crate::types::{CATEGORIES, Category, Locale, Post};
use chrono::{Duration, NaiveDate};

const MIN_SECTIONS: u32 = 4;
const MAX_SECTIONS: u32 = 5;
const MIN_TAGS: u32 = 3;
const MAX_TAGS: u32 = 5;

// `{number}` placeholder range ("12 Tips for...").
const MIN_NUMBER: u32 = 5;
const MAX_NUMBER: u32 = 15;

// Inline pools for placeholders that aren't worth a template file.
const EXPERIENCES: [&str; 6] = [
    "adventure",
    "culture",
    "relaxation",
    "food",
    "nature",
    "history",
];
const ADJECTIVES: [&str; 6] = [
    "Essential",
    "Advanced",
    "Modern",
    "Complete",
    "Ultimate",
    "Practical",
];
const BENEFITS: [&str; 5] = [
    "Success",
    "Best Results",
    "Maximum Impact",
    "Better Outcomes",
    "Peak Performance",
];

/// Assemble the post for a seed.
///
/// Never fails: every pool this function draws from is guaranteed non-empty
/// by template validation, so a panic here means a bug in
/// [`TemplateSet::load`](crate::templates::TemplateSet::load), not bad user
/// input.
pub fn compose(
    templates: &TemplateSet,
    seed: u32,
    category: Option<Category>,
    locale: Locale,
) -> Post {
    let mut stream = SeededStream::new(u64::from(seed));

    let category = category.unwrap_or_else(|| *stream.pick(&CATEGORIES));

    let title = fill_placeholders(
        stream.pick(templates.titles(category)).clone(),
        templates,
        category,
        &mut stream,
    );
    let intro = draw_introduction(templates, category, &title, &mut stream);

    let section_count = stream.next_int(MIN_SECTIONS, MAX_SECTIONS) as usize;
    let sections = draw_sections(templates, category, section_count, &mut stream);
    let conclusion = stream.pick(templates.conclusions(category)).clone();

    let code_example = if category == Category::Technology && stream.coin_flip() {
        let topic = *stream.pick(&CODE_TOPICS);
        Some(stream.pick(templates.code_examples(topic)).clone())
    } else {
        None
    };

    let content = compose_content(&title, &intro, &sections, code_example.as_ref(), &conclusion);

    let slug = text::slugify(&title);
    let excerpt = text::excerpt(&intro);
    let tags = draw_tags(templates, category, &mut stream);
    let author = stream.pick(&templates.metadata().authors).clone();
    let published_at = draw_publish_date(templates, &mut stream);
    let reading_time = text::reading_time(&content);

    Post {
        slug,
        title,
        content,
        excerpt,
        category,
        tags,
        author,
        published_at,
        reading_time,
        locale,
    }
}

/// Substitute placeholder tokens in a title template.
///
/// Token order is fixed and each token is checked before drawing, so the
/// draw sequence depends only on which tokens the chosen template contains.
/// One draw covers every occurrence of the same token.
fn fill_placeholders(
    template: String,
    templates: &TemplateSet,
    category: Category,
    stream: &mut SeededStream,
) -> String {
    let meta = templates.metadata();
    let mut title = template;

    if title.contains("{tech}") {
        title = title.replace("{tech}", stream.pick::<String>(&meta.tech_topics));
    }
    if title.contains("{alternative}") {
        title = title.replace("{alternative}", stream.pick::<String>(&meta.tech_topics));
    }
    if title.contains("{topic}") {
        title = title.replace("{topic}", stream.pick::<String>(templates.topics(category)));
    }
    if title.contains("{destination}") {
        title = title.replace("{destination}", stream.pick::<String>(&meta.travel_destinations));
    }
    if title.contains("{year}") {
        let year = stream.next_int(meta.year_range.min as u32, meta.year_range.max as u32);
        title = title.replace("{year}", &year.to_string());
    }
    if title.contains("{number}") {
        let number = stream.next_int(MIN_NUMBER, MAX_NUMBER);
        title = title.replace("{number}", &number.to_string());
    }
    if title.contains("{experience}") {
        title = title.replace("{experience}", stream.pick::<&str>(&EXPERIENCES));
    }
    if title.contains("{Adjective}") {
        title = title.replace("{Adjective}", stream.pick::<&str>(&ADJECTIVES));
    }
    if title.contains("{Benefit}") {
        title = title.replace("{Benefit}", stream.pick::<&str>(&BENEFITS));
    }

    title
}

fn draw_introduction(
    templates: &TemplateSet,
    category: Category,
    title: &str,
    stream: &mut SeededStream,
) -> String {
    let template = stream.pick(templates.introductions(category));
    let topic = text::extract_topic(title);
    template.replace("{title}", title).replace("{topic}", &topic)
}

/// Shuffle the category's section pool and keep the first `count` (or the
/// whole pool when it's smaller).
fn draw_sections(
    templates: &TemplateSet,
    category: Category,
    count: usize,
    stream: &mut SeededStream,
) -> Vec<SectionTemplate> {
    let pool = templates.sections(category);
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    stream.shuffle(&mut indices);
    indices
        .into_iter()
        .take(count)
        .map(|i| pool[i].clone())
        .collect()
}

fn draw_tags(templates: &TemplateSet, category: Category, stream: &mut SeededStream) -> Vec<String> {
    let mut pool = templates.tag_pool(category);
    stream.shuffle(&mut pool);
    let count = stream.next_int(MIN_TAGS, MAX_TAGS) as usize;
    pool.truncate(count.min(pool.len()));
    pool
}

fn draw_publish_date(templates: &TemplateSet, stream: &mut SeededStream) -> String {
    let range = templates.metadata().year_range;
    // Both endpoints were proven representable during template validation.
    let start = NaiveDate::from_ymd_opt(range.min, 1, 1).expect("year range validated at load");
    let end = NaiveDate::from_ymd_opt(range.max, 12, 31).expect("year range validated at load");
    let span = (end - start).num_days() as u32;
    let offset = stream.next_int(0, span);
    (start + Duration::days(i64::from(offset)))
        .format("%Y-%m-%d")
        .to_string()
}

/// Stitch the markdown body together.
///
/// Layout: `# title`, intro, optional `###` code example (spliced between
/// the intro and the first `##` section, and only when at least one section
/// exists), the `##` sections, then a literal `## Conclusion`.
fn compose_content(
    title: &str,
    intro: &str,
    sections: &[SectionTemplate],
    code_example: Option<&CodeExample>,
    conclusion: &str,
) -> String {
    let mut content = format!("# {title}\n\n{intro}\n\n");

    if let Some(example) = code_example
        && !sections.is_empty()
    {
        content.push_str(&format!(
            "### {}\n\n```\n{}\n```\n\n",
            example.title, example.code
        ));
    }

    for section in sections {
        content.push_str(&format!("## {}\n\n{}\n\n", section.heading, section.content));
    }

    content.push_str(&format!("## Conclusion\n\n{conclusion}\n"));
    content
}
