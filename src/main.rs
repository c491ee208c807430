use clap::{Parser, Subcommand, ValueEnum};
use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

mod client;
mod config;
mod extractor;
mod output;
mod present;
mod server;
mod telemetry;

use client::{ScrapeService, Scraped};
use config::SiteConfig;
use extractor::{Extractor, PageKind};

#[derive(Parser)]
#[command(name = "nekoscrape", about = "Listing and detail scraper for nekopoi.care")]
struct Cli {
    /// Site origin; overrides SCRAPE_ORIGIN
    #[arg(global = true, long)]
    origin: Option<String>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve GET /api/scrape
    Serve(server::ServeCmd),
    /// Fetch one page of the home listing
    Home {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Include the list of fields the markup did not provide
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Fetch one page of a genre listing
    Genre {
        slug: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Fetch and extract one detail page
    Detail {
        url: String,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Interactive terminal browser
    Browse(present::BrowseCmd),
    /// Run the extractor over a saved HTML file without any network access
    Parse {
        #[arg(long, value_enum, default_value_t = ParseKind::Listing)]
        kind: ParseKind,
        file: PathBuf,
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ParseKind { Listing, Genre, Detail }

impl From<ParseKind> for PageKind {
    fn from(k: ParseKind) -> Self {
        match k {
            ParseKind::Listing => PageKind::Listing,
            ParseKind::Genre => PageKind::GenreListing,
            ParseKind::Detail => PageKind::Detail,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);
    let t0 = Instant::now();

    // initialize logging/tracing (stderr). Respect RUST_LOG and SCRAPE_LOG_FORMAT
    telemetry::config::init_tracing();

    let origin = cli.origin;
    let service = move || -> Result<ScrapeService> { ScrapeService::from_config(SiteConfig::resolve(origin)?) };

    match cli.command {
        Commands::Serve(args) => server::run(service()?, args).await?,
        Commands::Home { page, strict } => emit("home", service()?.home(page).await?, strict, t0)?,
        Commands::Genre { slug, page, strict } => emit("genre", service()?.genre(&slug, page).await?, strict, t0)?,
        Commands::Detail { url, strict } => emit("detail", service()?.detail(&url).await?, strict, t0)?,
        Commands::Browse(args) => present::run(service()?, args).await?,
        Commands::Parse { kind, file, strict } => parse_file(kind, &file, strict, t0)?,
    }

    Ok(())
}

fn emit<T: Serialize>(op: &'static str, scraped: Scraped<T>, strict: bool, t0: Instant) -> Result<()> {
    let value = scraped.to_value(strict)?;
    telemetry::scrape().result(op, &value, Some(t0.elapsed()))
}

fn parse_file(kind: ParseKind, file: &Path, strict: bool, t0: Instant) -> Result<()> {
    let html = std::fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let extractor = Extractor::with_default_rules()?;
    let log = telemetry::scrape();
    let kind = PageKind::from(kind);
    if strict {
        let report = extractor.extract_report(&html, kind);
        let scraped = Scraped { data: report.record, missing: report.missing };
        log.result("parse", &scraped.to_value(true)?, Some(t0.elapsed()))
    } else {
        log.result("parse", &extractor.extract(&html, kind), Some(t0.elapsed()))
    }
}
