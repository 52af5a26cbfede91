//! BioLeadIQ — reproducible lead-ranking pipeline.
//! Entry point for the `bioleadiq` binary.

mod config;
mod io;

use std::path::PathBuf;

use anyhow::Context;
use bioleadiq_enrichment::{build_resolver, enrich_profiles, FundingLookup};
use bioleadiq_ranker::report::format_for_output;
use bioleadiq_ranker::RankingPipeline;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rank biotech contacts by title seniority, publishing activity,
/// employer funding stage and hub proximity.
#[derive(Parser, Debug)]
#[command(name = "bioleadiq")]
#[command(version)]
#[command(about, long_about = None)]
struct Args {
    /// Profile CSV (name,title,company,person_location,company_hq,linkedin_url)
    #[arg(long, value_name = "CSV")]
    linkedin: Option<PathBuf>,

    /// Funding dataset (JSON array)
    #[arg(long, value_name = "JSON")]
    funding: Option<PathBuf>,

    /// Where to write the ranked CSV
    #[arg(long, value_name = "CSV")]
    out_csv: Option<PathBuf>,

    /// Config file (defaults to BIOLEADIQ_CONFIG or ./bioleadiq.toml)
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Query PubMed live instead of the static publication table
    #[arg(long)]
    live: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bioleadiq=info,warn")),
        )
        .init();

    let args = Args::parse();
    info!("🔬 BioLeadIQ {}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::load(args.config.as_deref())?;
    let output = run(&args, &config, |k| std::env::var(k).ok()).await?;

    println!("CSV written to: {}", output.display());
    Ok(())
}

async fn run<F>(args: &Args, config: &config::Config, env: F) -> anyhow::Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let linkedin = args.linkedin.clone().unwrap_or_else(|| config.paths.linkedin.clone());
    let funding_path = args.funding.clone().unwrap_or_else(|| config.paths.funding.clone());
    let out_csv = args.out_csv.clone().unwrap_or_else(|| config.paths.out_csv.clone());

    // Fatal input errors surface before any enrichment starts.
    let profiles = io::read_profiles(&linkedin)?;
    let funding = FundingLookup::load(&funding_path)
        .with_context(|| format!("Failed to load funding dataset {}", funding_path.display()))?;

    let mut intent_config = config.intent_config(env);
    if args.live {
        intent_config.live_lookup = true;
    }
    let resolver = build_resolver(intent_config)?;

    let enriched = enrich_profiles(profiles, &funding, resolver.as_ref()).await;
    let ranked = RankingPipeline::new(config.scoring.weights).rank(enriched);
    let rows = format_for_output(&ranked);

    let written = io::write_output(&out_csv, &rows)?;
    info!(rows = rows.len(), path = %written.display(), "✅ Ranked output written");
    Ok(written)
}
