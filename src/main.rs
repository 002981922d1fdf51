use clap::{Parser, Subcommand};
use faux_cms::cache::PostCache;
use faux_cms::catalog::{CategoryRepository, ProductRepository};
use faux_cms::config;
use faux_cms::output;
use faux_cms::provider::BlogPosts;
use faux_cms::templates::{TemplateSet, TemplateStore};
use faux_cms::types::{Category, Locale};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "faux-cms")]
#[command(about = "Deterministic fake catalog and blog content for fixtures and demos")]
#[command(long_about = "\
Deterministic fake catalog and blog content for fixtures and demos

Blog posts are generated from a seed: the same seed always produces the
same post, byte for byte, so fixtures can reference posts by seed, slug,
or title and get identical content on every run. Products and categories
come from static JSON documents with per-locale text.

Resource layout (override via faux-cms.toml or --config):

  resources/
  ├── blog-templates/          # titles, intros, sections, conclusions,
  │   └── *.json               # code examples, metadata
  └── data/
      ├── categories/*.json    # {key, parent?, locales}
      └── products/*.json      # {sku, category, locales, variants?}

Run 'faux-cms gen-config' to print a documented faux-cms.toml.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./faux-cms.toml if present, else stock defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content locale
    #[arg(long, global = true, value_parser = Locale::from_str)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one blog post (random seed unless --seed is given)
    Post {
        /// Seed in [0, 10000); same seed, same post
        #[arg(long)]
        seed: Option<u32>,
        /// Pin the category instead of drawing one
        #[arg(long, value_parser = Category::from_str)]
        category: Option<Category>,
        /// Emit the post as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Generate a deterministic batch using seeds 0..count
    Batch {
        count: usize,
        #[arg(long, value_parser = Category::from_str)]
        category: Option<Category>,
        #[arg(long)]
        json: bool,
    },
    /// Resolve a slug or title back to its post
    Lookup {
        /// Slug or title of a post within the primed seed range
        identifier: String,
        /// Seeds 0..N generated before the lookup
        #[arg(long, default_value_t = 100)]
        prime: usize,
    },
    /// List the product catalog
    Products {
        #[arg(long)]
        json: bool,
    },
    /// Show the category taxonomy
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Validate templates and catalog data without generating
    Check,
    /// Print a stock faux-cms.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(cli.config.as_deref(), &cwd)?;
    let locale = match cli.locale {
        Some(locale) => locale,
        None => cfg.default_locale()?,
    };
    let templates_dir = PathBuf::from(&cfg.resources.templates_dir);
    let data_dir = PathBuf::from(&cfg.resources.data_dir);

    match cli.command {
        Command::Post {
            seed,
            category,
            json,
        } => {
            let mut cache = PostCache::new(TemplateStore::new(&templates_dir));
            let post = match seed {
                Some(seed) => cache.by_seed(seed, category, locale)?,
                None => cache.random(category, locale)?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                output::print_post(1, &post);
                println!();
                output::print_post_body(&post);
            }
        }
        Command::Batch {
            count,
            category,
            json,
        } => {
            let mut cache = PostCache::new(TemplateStore::new(&templates_dir));
            let posts = cache.unique_batch(count, category, locale)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                output::print_post_list(&posts, locale);
                output::print_cache_stats(cache.stats());
            }
        }
        Command::Lookup { identifier, prime } => {
            let mut posts = BlogPosts::new(&templates_dir, locale);
            posts.cache_mut().unique_batch(prime, None, locale)?;
            // Provider semantics: an explicit identifier that doesn't
            // resolve is an error, surfaced to the shell as one.
            let post = posts.post(Some(&identifier))?;
            output::print_post(1, &post);
        }
        Command::Products { json } => {
            let repo = ProductRepository::load_data_dir(&data_dir)?;
            let products = repo.all(locale);
            if json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                output::print_products(&products, locale);
            }
        }
        Command::Categories { json } => {
            let repo = CategoryRepository::load(&data_dir.join("categories"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&repo.all(locale))?);
            } else {
                output::print_category_tree(&repo, locale);
            }
        }
        Command::Check => {
            let templates = TemplateSet::load(&templates_dir)?;
            println!(
                "Templates OK: {} (fingerprint {})",
                templates_dir.display(),
                templates.fingerprint()
            );
            let products = ProductRepository::load_data_dir(&data_dir)?;
            println!(
                "Catalog OK ({} categories, {} products)",
                products.categories().len(),
                products.len()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_toml());
        }
    }

    Ok(())
}
