use clap::Parser;
use http_adapter::HttpListingSource;
use markdown_adapter::MarkdownDigestWriter;
use newscraft_core::application::CrawlServiceImpl;
use newscraft_core::config::{CrawlConfig, DEFAULT_DOMAIN, DEFAULT_MAX_PAGES, DEFAULT_TOP};
use newscraft_core::ports::{ListingSource, PostPublisher};
use newscraft_core::ranking::ShortListPolicy;
use newscraft_core::utils::{parse_day, today_utc};
use std::time::Duration;
use stdout_adapter::StdoutPublisher;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// CLI tool to print the best scored posts of a day's front page listing
#[derive(Parser, Debug)]
#[command(name = "newscraft")]
#[command(about = "Crawls a day's front page listing and prints its top posts by score")]
struct Cli {
    /// Listing day, e.g. 2024-04-30 (defaults to today in UTC)
    #[arg(short = 'd', long = "day")]
    day: Option<String>,

    /// Site to crawl; pages on other hosts are never fetched
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// Number of posts to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Maximum number of listing pages to request
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Print nothing unless more posts than --top were found
    #[arg(long)]
    require_full_list: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Folder where a Markdown digest of the ranking is also written
    #[arg(short = 'o', long = "markdown-dir")]
    markdown_dir: Option<String>,
}

fn main() {
    // Logs go to stderr so stdout only carries the ranking
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let day = match cli.day.as_deref() {
        Some(raw) => parse_day(raw).unwrap_or_else(|| {
            eprintln!("Invalid --day value: {}", raw);
            std::process::exit(1);
        }),
        None => today_utc(),
    };
    info!(day = %day, "listing day");

    let mut config = CrawlConfig::for_day(day);
    config.domain = cli.domain.clone();
    config.top = cli.top;
    config.max_pages = cli.max_pages;
    if cli.require_full_list {
        config.short_list = ShortListPolicy::Suppress;
    }

    // Instantiate concrete implementations of secondary adapters
    let listing_source: Box<dyn ListingSource> =
        match HttpListingSource::new(Duration::from_secs(cli.timeout_secs)) {
            Ok(source) => Box::new(source),
            Err(e) => {
                error!(error = %e, "failed to build HTTP client");
                std::process::exit(1);
            }
        };

    let mut publishers: Vec<Box<dyn PostPublisher>> = vec![Box::new(StdoutPublisher::new())];
    if let Some(dir) = &cli.markdown_dir {
        publishers.push(Box::new(MarkdownDigestWriter::new(dir.clone(), cli.domain.clone())));
    }

    // Instantiate the core business service with dependency injection
    let service = CrawlServiceImpl::new(listing_source, publishers, config);

    // Execute the primary port method
    match service.execute_crawl() {
        Ok(report) => {
            info!(
                pages = report.harvest.pages.len(),
                posts = report.harvest.posts.len(),
                published = report.ranked.len(),
                truncated = report.harvest.truncated,
                "done"
            );
        }
        Err(e) => {
            eprintln!("Error during crawl: {}", e);
            std::process::exit(1);
        }
    }
}
