mod duration;
mod run;

use std::sync::Arc;

use clap::Parser;
use metascout_core::ScoutOptions;
use metascout_scraper::{RequestPacer, Scout};
use tracing_subscriber::EnvFilter;

use crate::duration::parse_duration_ms;
use crate::run::Mode;

#[derive(Debug, Parser)]
#[command(name = "metascout")]
#[command(about = "Look up critic and user scores for video games")]
struct Cli {
    /// Game titles to resolve, one record per match.
    #[arg(required_unless_present = "url")]
    queries: Vec<String>,

    /// Maximum candidates per query (at least 1; at most one is returned today).
    #[arg(long, value_parser = parse_at_least_one)]
    limit: Option<usize>,

    /// How many queries to resolve in parallel.
    #[arg(long, value_parser = parse_at_least_one)]
    concurrency: Option<usize>,

    /// Per-request timeout, e.g. `15s`, `1500ms` or plain milliseconds.
    #[arg(long, value_parser = parse_duration_ms)]
    timeout: Option<u64>,

    /// Minimum spacing between requests to the same site, e.g. `1s`.
    #[arg(long, value_parser = parse_duration_ms)]
    delay: Option<u64>,

    /// Fetch each matched product page and include scores, counts and reviews.
    #[arg(long, conflicts_with = "url")]
    reviews: bool,

    /// Extract a known product page URL instead of searching.
    #[arg(long, conflicts_with = "queries")]
    url: Option<String>,
}

impl Cli {
    /// Layers command-line flags over the environment-derived options.
    fn apply_overrides(&self, mut options: ScoutOptions) -> ScoutOptions {
        if let Some(limit) = self.limit {
            options.max_candidates = limit;
        }
        if let Some(concurrency) = self.concurrency {
            options.concurrency = concurrency;
        }
        if let Some(timeout_ms) = self.timeout {
            options.timeout_ms = timeout_ms;
        }
        if let Some(delay_ms) = self.delay {
            options.delay_between_requests_ms = delay_ms;
        }
        options
    }

    fn mode(&self) -> Mode {
        if self.reviews {
            Mode::ResolveAndExtract
        } else {
            Mode::Resolve
        }
    }
}

fn parse_at_least_one(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid number '{raw}': {e}")),
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = metascout_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    let options = cli.apply_overrides(config.options);
    options.validate()?;
    tracing::debug!(?options, "resolved options");

    let pacer = Arc::new(RequestPacer::new(options.delay_between_requests()));
    let scout = Scout::new(&options)?.with_pacer(pacer);

    let records = match &cli.url {
        Some(url) => vec![scout.extract(url).await?],
        None => run::resolve_all(&scout, &cli.queries, cli.mode(), options.concurrency).await?,
    };

    if records.is_empty() {
        tracing::warn!("no query matched a product");
    }
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
