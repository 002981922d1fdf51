//! Shared test fixtures for the faux-cms test suite.
//!
//! Writes small but structurally complete template and catalog documents
//! into a temp directory, so unit tests exercise the real load/validate
//! paths without depending on the shipped `resources/` tree. The shipped
//! tree is covered separately by the integration tests.

use crate::templates::{TemplateSet, TemplateStore};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Template fixtures
// =========================================================================

/// Write all six template documents into `dir`.
pub fn write_template_fixtures(dir: &Path) {
    let write = |name: &str, value: serde_json::Value| {
        std::fs::write(
            dir.join(name),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    };

    write(
        "titles.json",
        json!({
            "technology": [
                "{Adjective} Guide to {tech}",
                "Why {tech} Beats {alternative} in {year}",
                "{number} Tips for Mastering {topic}",
                "Getting Started with {tech}"
            ],
            "business": [
                "The Future of {topic}",
                "{number} Strategies for {Benefit}",
                "Understanding {topic} in {year}"
            ],
            "travel": [
                "Exploring {destination}: A {experience} Journey",
                "{number} Hidden Gems in {destination}",
                "The {Adjective} Guide to {destination}"
            ],
            "lifestyle": [
                "Mastering {topic}: A Path to {Benefit}",
                "{number} Habits for Better {topic}",
                "The Art of {topic}"
            ]
        }),
    );

    write(
        "introductions.json",
        json!({
            "technology": [
                "Every engineering team eventually runs into {topic}. This article walks through the trade-offs step by step and shows where the sharp edges hide once real traffic arrives.",
                "There has never been a better moment to get serious about {topic}. Below we cover the fundamentals, the common mistakes, and the habits that separate toy projects from production systems.",
                "{title} is a big promise, so let's earn it. We start with what {topic} actually solves, then work outward to the operational details nobody mentions in the quickstart."
            ],
            "business": [
                "Markets reward the teams that understand {topic} before their competitors do. This piece lays out the landscape, the numbers that matter, and the decisions they should drive.",
                "{title} sounds like consultant-speak until you watch {topic} reshape a balance sheet. Here is what practitioners actually do differently, drawn from the field rather than the slide deck."
            ],
            "travel": [
                "Some places you visit; {topic} you carry home with you. This guide collects the routes, seasons, and small rituals that turn a trip into a story worth retelling.",
                "Forget the postcard version. {title} starts where the tour bus stops, with honest notes on costs, crowds, and the corners locals would rather keep to themselves."
            ],
            "lifestyle": [
                "Small habits compound. {title} is really about designing days you don't need a vacation from, and {topic} is the lever this guide pulls first.",
                "Nobody changes their life in a weekend, but {topic} is a fine place to start. What follows is a practical, low-drama approach you can actually sustain."
            ]
        }),
    );

    write(
        "sections.json",
        json!({
            "technology": [
                {"heading": "Core Concepts", "content": "Before touching configuration, get the mental model right. The system is a pipeline of small, composable stages, and every advanced feature is a variation on that theme."},
                {"heading": "Setting Up Your Environment", "content": "A reproducible environment saves hours of debugging later. Pin your versions, script the bootstrap, and make the clean path the easy path for everyone on the team."},
                {"heading": "Common Pitfalls", "content": "Most failures trace back to three causes: implicit defaults, unbounded queues, and retries without budgets. Each has a cheap fix if you catch it in review."},
                {"heading": "Performance Considerations", "content": "Measure before you optimize. A single profile run usually contradicts at least one strongly held belief about where the time goes."},
                {"heading": "Testing Strategies", "content": "Fast deterministic tests keep refactors honest. Push randomness to the edges, seed it when you must, and assert on behavior rather than internals."},
                {"heading": "Deployment Checklist", "content": "Ship behind a flag, watch the dashboards you wrote down in advance, and keep the rollback one command away. Boring deploys are a feature."}
            ],
            "business": [
                {"heading": "Market Context", "content": "Zoom out before zooming in. The same initiative can be brilliant or doomed depending on where the market sits in its cycle."},
                {"heading": "Building the Case", "content": "A good business case names its assumptions and the evidence that would falsify them. Decision-makers fund clarity, not confidence."},
                {"heading": "Execution Risks", "content": "Plans fail at the handoffs. Map the seams between teams early and assign owners to the gaps, not just the boxes."},
                {"heading": "Measuring Outcomes", "content": "Pick a small set of metrics before launch and resist adding more mid-flight. Moving goalposts make every project look successful and none of them be."},
                {"heading": "Stakeholder Alignment", "content": "Alignment is not a meeting, it is a standing agreement about trade-offs. Write it down and revisit it when priorities shift."},
                {"heading": "Scaling What Works", "content": "Scale processes only after they survive contact with a second team. What works for five people often breaks at fifteen."}
            ],
            "travel": [
                {"heading": "When to Go", "content": "Shoulder season is the connoisseur's choice: the light is better, the lines are shorter, and prices drop by a third."},
                {"heading": "Getting Around", "content": "Regional trains and a willingness to walk beat any tour package. Buy tickets locally and keep small change for the surprises."},
                {"heading": "Where to Stay", "content": "Choose the neighborhood before the hotel. A modest room on a lively square beats a palace beside the ring road."},
                {"heading": "Food Worth Traveling For", "content": "Eat where the menu is short and handwritten. Ask what the kitchen is proud of, then order exactly that."},
                {"heading": "Budget Notes", "content": "The big costs are predictable; the small ones add up in cafés. A daily cash envelope keeps the holiday honest."},
                {"heading": "Beyond the Highlights", "content": "Leave one day unplanned. The best stories rarely come from the itinerary."}
            ],
            "lifestyle": [
                {"heading": "Start Small", "content": "Pick a change so small it feels trivial, then protect it for a month. Momentum is built, not found."},
                {"heading": "Design Your Environment", "content": "Willpower loses to environment every time. Make the good choice the default and the bad one mildly inconvenient."},
                {"heading": "Track Without Obsessing", "content": "A simple written record beats an app with forty charts. You are looking for trends, not grades."},
                {"heading": "Handling Setbacks", "content": "Missing a day is data, not failure. The rule is never to miss twice, and to shrink the habit rather than abandon it."},
                {"heading": "The Social Layer", "content": "Habits shared are habits kept. Tell one person what you are changing and let the gentle accountability work."},
                {"heading": "Reviewing the System", "content": "Once a quarter, drop what stopped serving you. A routine you resent is a routine you will quit."}
            ]
        }),
    );

    write(
        "conclusions.json",
        json!({
            "technology": [
                "The tooling will keep changing; the fundamentals above won't. Start small, automate the boring parts, and let measurements settle the arguments.",
                "None of this requires a rewrite. Adopt one practice per sprint and the codebase will feel different within a quarter."
            ],
            "business": [
                "Strategy is choosing what not to do. Revisit the assumptions quarterly and let the numbers retire the slideware.",
                "The teams that win treat execution as the strategy. Everything above is useless without an owner and a date."
            ],
            "travel": [
                "Go in the shoulder season, pack half of what you planned, and leave room in the bag and the schedule for what you find.",
                "The destination matters less than the attention you bring to it. Travel slow enough to be surprised."
            ],
            "lifestyle": [
                "Perfection is the enemy here. A routine you keep at seventy percent beats one you abandon at one hundred.",
                "Start with the smallest version tonight. Future you is built from evenings like this one."
            ]
        }),
    );

    write(
        "code-examples.json",
        json!({
            "rust": [
                {"title": "Spawning Worker Threads", "code": "let handles: Vec<_> = (0..4)\n    .map(|id| std::thread::spawn(move || work(id)))\n    .collect();\nfor handle in handles {\n    handle.join().unwrap();\n}"},
                {"title": "Error Propagation", "code": "fn read_config(path: &Path) -> io::Result<Config> {\n    let text = fs::read_to_string(path)?;\n    Ok(parse(&text))\n}"}
            ],
            "javascript": [
                {"title": "Debouncing Input", "code": "function debounce(fn, ms) {\n  let t;\n  return (...args) => {\n    clearTimeout(t);\n    t = setTimeout(() => fn(...args), ms);\n  };\n}"},
                {"title": "Fetch with Timeout", "code": "const controller = new AbortController();\nsetTimeout(() => controller.abort(), 5000);\nconst res = await fetch(url, { signal: controller.signal });"}
            ],
            "python": [
                {"title": "Context Managers", "code": "from contextlib import contextmanager\n\n@contextmanager\ndef timer(label):\n    start = time.monotonic()\n    yield\n    print(label, time.monotonic() - start)"},
                {"title": "Dataclass Models", "code": "@dataclass(frozen=True)\nclass Point:\n    x: float\n    y: float\n\n    def norm(self) -> float:\n        return (self.x ** 2 + self.y ** 2) ** 0.5"}
            ],
            "docker": [
                {"title": "Multi-Stage Build", "code": "FROM rust:1.80 AS build\nWORKDIR /app\nCOPY . .\nRUN cargo build --release\n\nFROM debian:bookworm-slim\nCOPY --from=build /app/target/release/app /usr/local/bin/app\nCMD [\"app\"]"},
                {"title": "Healthcheck", "code": "HEALTHCHECK --interval=30s --timeout=3s \\\n  CMD curl -f http://localhost:8080/health || exit 1"}
            ],
            "configuration": [
                {"title": "Layered Settings", "code": "# base.toml\nlog_level = \"info\"\n\n# production.toml overrides base\nlog_level = \"warn\"\nworkers = 16"},
                {"title": "Environment Overrides", "code": "export APP_DATABASE_URL=postgres://localhost/app\nexport APP_LOG_LEVEL=debug"}
            ],
            "api": [
                {"title": "Pagination Contract", "code": "GET /posts?cursor=eyJpZCI6NDJ9&limit=50\n\n200 OK\n{ \"items\": [...], \"next_cursor\": \"eyJpZCI6OTJ9\" }"},
                {"title": "Idempotency Keys", "code": "POST /payments\nIdempotency-Key: 7f3b2c1a\n\nRetries with the same key return the original result."}
            ],
            "general": [
                {"title": "Feature Flag Rollout", "code": "if flags.enabled(\"new-checkout\", user) {\n    render_new_checkout()\n} else {\n    render_legacy_checkout()\n}"},
                {"title": "Retry with Backoff", "code": "for attempt in 0..5 {\n    match send() {\n        Ok(r) => return Ok(r),\n        Err(_) => sleep(base * 2u32.pow(attempt)),\n    }\n}"}
            ]
        }),
    );

    write(
        "metadata.json",
        json!({
            "authors": [
                "Sarah Mitchell",
                "James Okafor",
                "Lena Hoffmann",
                "Diego Ramírez",
                "Priya Nair",
                "Tom Becker"
            ],
            "tagsByCategory": {
                "technology": [
                    ["rust", "devops", "cloud", "containers"],
                    ["testing", "architecture", "performance", "security"]
                ],
                "business": [
                    ["strategy", "leadership", "growth", "finance"],
                    ["marketing", "operations", "analytics"]
                ],
                "travel": [
                    ["europe", "asia", "budget", "food"],
                    ["adventure", "city-breaks", "hiking"]
                ],
                "lifestyle": [
                    ["habits", "wellness", "productivity", "minimalism"],
                    ["mindfulness", "fitness", "sleep"]
                ]
            },
            "yearRange": {"min": 2020, "max": 2023},
            "techTopics": [
                "Kubernetes", "Rust", "WebAssembly", "GraphQL",
                "PostgreSQL", "Terraform", "gRPC", "SQLite"
            ],
            "businessTopics": [
                "Remote Work", "Digital Transformation", "Customer Retention",
                "Pricing Strategy", "Supply Chains", "Hiring"
            ],
            "travelDestinations": [
                "Kyoto", "Lisbon", "Patagonia", "Reykjavik",
                "Hanoi", "the Dolomites", "Marrakech", "Tbilisi"
            ],
            "lifestyleTopics": [
                "Morning Routines", "Digital Minimalism", "Meal Planning",
                "Deep Work", "Home Workouts", "Journaling"
            ]
        }),
    );
}

/// Temp dir with templates written and loaded.
pub fn loaded_templates() -> (TempDir, TemplateSet) {
    let tmp = TempDir::new().unwrap();
    write_template_fixtures(tmp.path());
    let set = TemplateSet::load(tmp.path()).unwrap();
    (tmp, set)
}

/// Temp dir with templates written, wrapped in a lazy store.
pub fn template_store() -> (TempDir, TemplateStore) {
    let tmp = TempDir::new().unwrap();
    write_template_fixtures(tmp.path());
    let store = TemplateStore::new(tmp.path());
    (tmp, store)
}

// =========================================================================
// Catalog fixtures
// =========================================================================

/// Write `categories/` and `products/` document trees under `root`.
pub fn write_catalog_fixtures(root: &Path) {
    let categories = root.join("categories");
    let products = root.join("products");
    std::fs::create_dir_all(&categories).unwrap();
    std::fs::create_dir_all(&products).unwrap();

    let write = |dir: &Path, name: &str, value: serde_json::Value| {
        std::fs::write(
            dir.join(name),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    };

    write(
        &categories,
        "electronics.json",
        json!({
            "key": "electronics",
            "parent": null,
            "locales": {
                "en_US": {"name": "Electronics"},
                "de_DE": {"name": "Elektronik"}
            }
        }),
    );
    write(
        &categories,
        "computers.json",
        json!({
            "key": "computers",
            "parent": "electronics",
            "locales": {
                "en_US": {"name": "Computers"},
                "de_DE": {"name": "Computer"}
            }
        }),
    );
    write(
        &categories,
        "smartphones.json",
        json!({
            "key": "smartphones",
            "parent": "electronics",
            "locales": {
                "en_US": {"name": "Smartphones"},
                "de_DE": {"name": "Smartphones"}
            }
        }),
    );
    write(
        &categories,
        "clothing.json",
        json!({
            "key": "clothing",
            "parent": null,
            "locales": {
                "en_US": {"name": "Clothing"},
                "de_DE": {"name": "Kleidung"}
            }
        }),
    );
    write(
        &categories,
        "mens-clothing.json",
        json!({
            "key": "mens-clothing",
            "parent": "clothing",
            "locales": {
                "en_US": {"name": "Men's Clothing"},
                "de_DE": {"name": "Herrenbekleidung"}
            }
        }),
    );

    write(
        &products,
        "laptop-pro-14.json",
        json!({
            "sku": "LAPTOP-PRO-14",
            "category": "computers",
            "locales": {
                "en_US": {
                    "name": "Pro Laptop 14",
                    "description": "A 14-inch workstation with all-day battery life."
                },
                "de_DE": {
                    "name": "Pro Notebook 14",
                    "description": "Eine 14-Zoll-Workstation mit langer Akkulaufzeit."
                }
            }
        }),
    );
    write(
        &products,
        "phone-x200.json",
        json!({
            "sku": "PHONE-X200",
            "category": "smartphones",
            "locales": {
                "en_US": {
                    "name": "Phone X200",
                    "description": "A compact phone with a week of standby."
                },
                "de_DE": {
                    "name": "Phone X200",
                    "description": "Ein kompaktes Telefon mit einer Woche Standby."
                }
            }
        }),
    );
    write(
        &products,
        "tee-classic.json",
        json!({
            "sku": "TEE-CLASSIC",
            "category": "mens-clothing",
            "locales": {
                "en_US": {
                    "name": "Classic Tee {color}, size {size}",
                    "description": "Heavyweight cotton tee in {color}."
                },
                "de_DE": {
                    "name": "Klassisches T-Shirt {color}, Größe {size}",
                    "description": "Schweres Baumwoll-Shirt in {color}."
                }
            },
            "variants": {
                "color": ["Midnight Black", "Arctic White"],
                "size": ["S", "M"]
            }
        }),
    );
}
