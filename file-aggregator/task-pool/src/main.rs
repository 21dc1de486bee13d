// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::{Context, Result};
use clap::Parser;
use file_aggregator_task_pool::{aggregate_file_list, AggregatorConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Count lines and words of the files named in a list file, concurrently,
/// with a per-file timeout. Prints a JSON array in list order.
#[derive(Debug, Parser)]
#[command(name = "file-aggregator", version)]
struct Args {
    /// File with one path per line, relative to the list file's directory
    list: PathBuf,

    /// Number of concurrent workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Per-file timeout in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// JSON config file with `workers` and `timeout_ms`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let start_time = Instant::now();

    let config = AggregatorConfig::resolve(args.config.as_deref())
        .with_overrides(args.workers, args.timeout_ms);
    tracing::info!(
        workers = config.workers,
        timeout_ms = config.timeout_ms,
        list = %args.list.display(),
        "configuration loaded"
    );

    let reports = aggregate_file_list(&args.list, config.pool_config()?).await?;
    let json = serde_json::to_string_pretty(&reports)?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write report to '{}'", path.display()))?,
        None => println!("{json}"),
    }

    tracing::info!(
        files = reports.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}
