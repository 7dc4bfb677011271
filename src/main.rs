use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use pagestats::config::Config;
use pagestats::corpus::Corpus;
use pagestats::document::Document;
use pagestats::fetch::http::HttpFetcher;
use pagestats::output::terminal;
use pagestats::report::AnalysisReport;

/// pagestats: term frequency, inverse document frequency and cosine
/// similarity for web pages.
#[derive(Parser)]
#[command(name = "pagestats", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute TF, IDF and cosine similarity across the configured pages
    Analyze {
        /// Page to analyse (repeatable; overrides PAGESTATS_URLS)
        #[arg(long = "url")]
        urls: Vec<String>,

        /// Word to compute TF / IDF for (overrides PAGESTATS_TARGET_WORD)
        #[arg(long)]
        word: Option<String>,

        /// Request timeout in seconds (overrides PAGESTATS_TIMEOUT_SECS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the word occurrences of a single page
    Counts {
        /// Page to analyse
        #[arg(long)]
        url: String,

        /// How many of the most frequent words to show (default: 25)
        #[arg(long, default_value = "25")]
        top: usize,

        /// Request timeout in seconds (overrides PAGESTATS_TIMEOUT_SECS)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pagestats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli.command).await;
    if let Err(ref e) = result {
        error!(error = %e, "Analysis aborted");
    }
    result
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            urls,
            word,
            timeout,
            json,
        } => {
            let config = Config::load()?
                .with_urls(urls)
                .with_target_word(word)
                .with_timeout_secs(timeout)?;
            config.require_comparison()?;

            info!(
                sources = config.urls.len(),
                target_word = %config.target_word,
                "Fetching documents"
            );

            let fetcher = HttpFetcher::new(&config.user_agent, config.timeout)?;
            let corpus = Corpus::fetch_all(&config.urls, &fetcher)
                .await
                .context("Failed to build document set")?;

            let report = AnalysisReport::build(&corpus, &config.target_word)
                .with_context(|| format!("Failed to analyse '{}'", config.target_word))?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Counts { url, top, timeout } => {
            let config = Config::load()?.with_timeout_secs(timeout)?;
            let fetcher = HttpFetcher::new(&config.user_agent, config.timeout)?;
            let doc = Document::fetch(&url, &fetcher)
                .await
                .with_context(|| format!("Failed to analyse {url}"))?;
            terminal::display_word_counts(&doc, top);
        }
    }

    Ok(())
}
