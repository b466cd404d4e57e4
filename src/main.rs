//! wiki-scraper main entry point
//!
//! This is the command-line interface for extracting wiki articles and
//! crawling their link graph for word counts.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wiki_scraper::config::{load_config_or_default, Config, MAX_WAIT_SECONDS};
use wiki_scraper::crawler::crawl;
use wiki_scraper::extract::{extract_summary, extract_tables, extract_word_counts};
use wiki_scraper::output::{
    compare_frequencies, normalize_counts, normalize_frequencies, print_crawl_stats,
    print_frequency_table, print_table, print_value_counts, reference_frequencies,
    table_csv_path, value_counts, write_frequency_chart, write_table_csv, FrequencyMode,
};
use wiki_scraper::{
    CountStore, JsonCountStore, PageResolver, PageSource, ScraperError, WikiPage, WikiResolver,
};

/// wiki-scraper: article extraction and word counting for MediaWiki sites
///
/// Prints article summaries, exports tables to CSV, and counts words across
/// single articles or whole regions of the article link graph.
#[derive(Parser, Debug)]
#[command(name = "wiki-scraper")]
#[command(version)]
#[command(about = "Wiki article extraction and link-graph word counting", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Path to the word-count store, overriding the configuration
    #[arg(long, value_name = "PATH", global = true)]
    word_counts: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first paragraph of an article
    Summary(ArticleArgs),

    /// Save a table from an article to CSV and print its value counts
    Table {
        #[command(flatten)]
        article: ArticleArgs,

        /// Table number within the article, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,

        /// Treat the first row of the table as its header
        #[arg(long)]
        first_row_is_header: bool,
    },

    /// Add an article's word counts to the word-count store
    CountWords(ArticleArgs),

    /// Count words across every article reachable within a number of links
    AutoCountWords {
        #[command(flatten)]
        article: ArticleArgs,

        /// Maximum number of links to follow from the root article
        #[arg(short, long)]
        depth: Option<u32>,

        /// Seconds to wait between articles
        #[arg(short, long, value_parser = parse_wait_seconds)]
        wait: Option<f64>,
    },

    /// Compare stored word frequencies with a reference language
    AnalyzeRelativeWordFrequency {
        /// Which side ranks the listed words
        #[arg(long, value_enum)]
        mode: FrequencyMode,

        /// Number of words to list
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// JSON file mapping language words to frequencies (bundled English
        /// table when omitted)
        #[arg(long, value_name = "PATH")]
        reference: Option<PathBuf>,

        /// Save a bar chart of the comparison as SVG
        #[arg(long, value_name = "PATH")]
        chart: Option<PathBuf>,
    },
}

/// Identifies the article a command works on
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ArticleArgs {
    /// Article title, e.g. "Iron Golem"
    phrase: Option<String>,

    /// Explicit article URL
    #[arg(long)]
    url: Option<String>,

    /// Saved article HTML file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl ArticleArgs {
    fn into_source(self) -> PageSource {
        match (self.phrase, self.url, self.file) {
            (_, Some(url), _) => PageSource::Url(url),
            (_, _, Some(file)) => PageSource::File(file),
            (phrase, _, _) => PageSource::Phrase(phrase.unwrap_or_default()),
        }
    }
}

fn parse_wait_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;

    if !(0.0..=MAX_WAIT_SECONDS).contains(&seconds) {
        return Err(format!(
            "must be between 0 and {}, got {}",
            MAX_WAIT_SECONDS, seconds
        ));
    }
    Ok(seconds)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let mut config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(path) = &cli.word_counts {
        config.output.word_counts_path = path.display().to_string();
    }
    tracing::debug!("Using wiki at {}", config.wiki.base_url);

    match cli.command {
        Command::Summary(article) => handle_summary(&config, article.into_source()).await,
        Command::Table {
            article,
            number,
            first_row_is_header,
        } => handle_table(&config, article.into_source(), number, first_row_is_header).await,
        Command::CountWords(article) => handle_count_words(&config, article.into_source()).await,
        Command::AutoCountWords {
            article,
            depth,
            wait,
        } => handle_auto_count_words(config, article.into_source(), depth, wait).await,
        Command::AnalyzeRelativeWordFrequency {
            mode,
            count,
            reference,
            chart,
        } => handle_analyze(&config, mode, count as usize, reference, chart),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wiki_scraper=info,warn"),
            1 => EnvFilter::new("wiki_scraper=debug,info"),
            2 => EnvFilter::new("wiki_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves an article, treating a missing one as an error
async fn fetch_article(config: &Config, source: &PageSource) -> anyhow::Result<WikiPage> {
    let resolver = WikiResolver::from_config(config)?;
    let page = resolver
        .resolve(source)
        .await
        .with_context(|| format!("Failed to fetch '{}'", source))?;

    page.ok_or_else(|| {
        ScraperError::NotFound {
            article: source.to_string(),
        }
        .into()
    })
}

/// Handles `summary`: prints the article's first paragraph
async fn handle_summary(config: &Config, source: PageSource) -> anyhow::Result<()> {
    let page = fetch_article(config, &source).await?;
    let parsed = page.parse();
    let content = parsed
        .content_region()
        .ok_or_else(|| ScraperError::ContentMissing {
            article: page.phrase().to_string(),
        })?;

    match extract_summary(content) {
        Some(summary) => println!("{}", summary),
        None => println!("No summary available for {}", page.phrase()),
    }
    Ok(())
}

/// Handles `table`: exports one table to CSV and prints its value counts
async fn handle_table(
    config: &Config,
    source: PageSource,
    number: u32,
    first_row_is_header: bool,
) -> anyhow::Result<()> {
    let page = fetch_article(config, &source).await?;
    let mut tables = extract_tables(page.raw_markup());

    if tables.is_empty() {
        println!("No tables available for {}", page.phrase());
        return Ok(());
    }

    let requested = number as usize;
    if requested > tables.len() {
        return Err(ScraperError::TableIndex {
            requested,
            available: tables.len(),
        }
        .into());
    }

    let mut table = tables.swap_remove(requested - 1);
    if first_row_is_header {
        table.promote_first_row();
    }

    let path = table_csv_path(Path::new(&config.output.tables_dir), page.phrase());
    write_table_csv(&table, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    print_table(&table);
    print_value_counts(&value_counts(&table));
    println!("\nSaved table to {}", path.display());
    Ok(())
}

/// Handles `count-words`: records a single article into the store
async fn handle_count_words(config: &Config, source: PageSource) -> anyhow::Result<()> {
    let page = fetch_article(config, &source).await?;
    let counts = {
        let parsed = page.parse();
        let content = parsed
            .content_region()
            .ok_or_else(|| ScraperError::ContentMissing {
                article: page.phrase().to_string(),
            })?;
        extract_word_counts(content)
    };

    let mut store = JsonCountStore::new(&config.output.word_counts_path);
    store
        .record(&counts)
        .with_context(|| format!("Failed to update {}", store.path().display()))?;

    println!(
        "Recorded {} words ({} distinct) from {} into {}",
        counts.values().sum::<u64>(),
        counts.len(),
        page.phrase(),
        store.path().display()
    );
    Ok(())
}

/// Handles `auto-count-words`: crawls the link graph from the given article
async fn handle_auto_count_words(
    mut config: Config,
    source: PageSource,
    depth: Option<u32>,
    wait: Option<f64>,
) -> anyhow::Result<()> {
    if let Some(depth) = depth {
        config.crawler.max_depth = depth;
    }
    if let Some(wait) = wait {
        config.crawler.wait_seconds = wait;
    }

    let stats = crawl(&config, &source)
        .await
        .with_context(|| format!("Crawl from '{}' aborted", source))?;

    print_crawl_stats(&stats);
    Ok(())
}

/// Handles `analyze-relative-word-frequency`
fn handle_analyze(
    config: &Config,
    mode: FrequencyMode,
    count: usize,
    reference: Option<PathBuf>,
    chart: Option<PathBuf>,
) -> anyhow::Result<()> {
    let store = JsonCountStore::new(&config.output.word_counts_path);
    let article = normalize_counts(&store.load())?;

    let reference_path = reference
        .or_else(|| config.analysis.reference_path.as_ref().map(PathBuf::from));
    let language = normalize_frequencies(&reference_frequencies(reference_path.as_deref())?);

    let rows = compare_frequencies(&article, &language, mode, count);
    print_frequency_table(&rows);

    if let Some(path) = chart {
        write_frequency_chart(&rows, mode, &path)?;
        println!("\nSaved chart to {}", path.display());
    }
    Ok(())
}
