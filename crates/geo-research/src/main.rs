//! geo-research - Entry Point
//!
//! Command-line front end over the discovery service.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use geo_research::{
    Config, DiscoveryService, OpenAlexClient, ResultStore,
    config::api,
    formatters,
    models::{
        AcademicLevel, CitationRange, MethodologyCategory, ResearchFilters, ResponseFormat,
        SortMode, ViewMode, YearRange,
    },
};

#[derive(Parser, Debug)]
#[command(name = "geo-research")]
#[command(about = "Discover and classify geography research papers")]
#[command(version)]
struct Cli {
    /// Contact email for the OpenAlex polite pool (optional, faster limits)
    #[arg(long, env = "OPENALEX_MAILTO")]
    mailto: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Output format
    #[arg(long, default_value = "markdown")]
    format: Format,

    /// Markdown layout
    #[arg(long, default_value = "grid")]
    view: View,

    /// Sort key (relevance, citations, date, title)
    #[arg(long, default_value = "relevance")]
    sort: SortMode,

    /// Sort ascending instead of descending
    #[arg(long)]
    ascending: bool,

    /// Pages of results to show
    #[arg(long, default_value_t = 1)]
    pages: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Free-text search with optional facets
    Search {
        /// Query text
        query: String,

        #[command(flatten)]
        facets: FacetArgs,
    },
    /// Browse a preset category (e.g. "Urban Geography")
    Category {
        /// Category label; unknown labels are searched as typed
        label: String,
    },
    /// Top papers across the trending topics
    Trending,
    /// Search, then recommend papers similar to the top hit
    Recommend {
        /// Query used to find the seed paper
        query: String,
    },
}

#[derive(Args, Debug, Default)]
struct FacetArgs {
    /// Ask the provider for open access papers only
    #[arg(long)]
    open_access: bool,

    /// First publication year
    #[arg(long, requires = "year_end")]
    year_start: Option<i32>,

    /// Last publication year
    #[arg(long, requires = "year_start")]
    year_end: Option<i32>,

    /// Academic level (repeatable)
    #[arg(long = "level")]
    levels: Vec<AcademicLevel>,

    /// Minimum citation count
    #[arg(long)]
    min_citations: Option<u32>,

    /// Maximum citation count
    #[arg(long)]
    max_citations: Option<u32>,

    /// Geography subfield substring (repeatable)
    #[arg(long = "subfield")]
    subfields: Vec<String>,

    /// Methodology category: quantitative, qualitative, mixed, theoretical (repeatable)
    #[arg(long = "methodology")]
    methodologies: Vec<MethodologyCategory>,

    /// Extra topic term appended to the query (repeatable)
    #[arg(long = "topic")]
    topics: Vec<String>,
}

impl FacetArgs {
    fn into_filters(self) -> ResearchFilters {
        let defaults = CitationRange::default();
        ResearchFilters {
            topics: self.topics,
            year_range: self.year_start.zip(self.year_end).map(|(s, e)| YearRange::new(s, e)),
            academic_level: self.levels,
            open_access: self.open_access,
            citation_range: CitationRange {
                min: self.min_citations.unwrap_or(defaults.min),
                max: self.max_citations.unwrap_or(defaults.max),
            },
            methodology: self.methodologies,
            geography_subfields: self.subfields,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Format {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Compact JSON
    Json,
}

impl From<Format> for ResponseFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => Self::Markdown,
            Format::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum View {
    /// One table row per paper
    #[default]
    Grid,
    /// Detailed entries
    List,
}

impl From<View> for ViewMode {
    fn from(view: View) -> Self {
        match view {
            View::Grid => Self::Grid,
            View::List => Self::List,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(mailto) = cli.mailto.clone() {
        config.mailto = Some(mailto);
        config.rate_limit_delay = api::RATE_LIMIT_DELAY_POLITE;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        polite = config.is_polite(),
        base_url = %config.base_url,
        "Starting geo-research"
    );

    let client = OpenAlexClient::new(config.clone())?;
    let service = DiscoveryService::new(Arc::new(client), &config);

    let papers = match cli.command {
        Command::Search { query, facets } => service.search(&query, &facets.into_filters()).await,
        Command::Category { label } => service.by_category(&label).await,
        Command::Trending => service.trending().await,
        Command::Recommend { query } => {
            let hits = service.search(&query, &ResearchFilters::default()).await;
            match hits.first() {
                Some(seed) => {
                    tracing::info!(seed = %seed.id, title = %seed.title, "Recommending from top hit");
                    service.recommendations_for(seed).await
                }
                None => Vec::new(),
            }
        }
    };

    let mut store = ResultStore::new(papers);
    store.set_view_mode(cli.view.into());
    if cli.sort != store.sort_mode() {
        store.select_sort(cli.sort);
    }
    if cli.ascending {
        store.select_sort(cli.sort);
    }
    for _ in 1..cli.pages {
        store.load_more();
    }

    let visible = store.visible();
    println!("{}", formatters::render(&visible, cli.format.into(), store.view_mode()));

    if store.has_more() {
        tracing::info!(
            shown = visible.len(),
            total = store.len(),
            "More results available, rerun with a larger --pages"
        );
    }

    Ok(())
}
