use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_matcher::{DocumentStore, MatchScorer, MatcherConfig};

/// Score a resume against a job description.
#[derive(Debug, Parser)]
#[command(name = "match-report", version)]
struct Args {
    /// Resume file (.pdf or plain text)
    resume: PathBuf,
    /// Job description file (.pdf or plain text)
    job: PathBuf,
    /// Print a text table instead of JSON
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = MatcherConfig::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_matcher={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting match-report v{}", env!("CARGO_PKG_VERSION"));

    let store = DocumentStore::from_config(&config).context("failed to build document store")?;
    store
        .ingest_file(&args.resume, Some("resume"))
        .with_context(|| format!("failed to load resume {}", args.resume.display()))?;
    store
        .ingest_file(&args.job, Some("job"))
        .with_context(|| format!("failed to load job description {}", args.job.display()))?;

    let report = MatchScorer::from_config(&store, &config).report(
        "resume",
        "job",
        Some(&config.weights),
    )?;
    info!(
        total = report.result.rounded_total(),
        level = %report.result.match_level,
        "match computed"
    );

    if args.text {
        print!("{report}");
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
