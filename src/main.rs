use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_scout::batch::run_batch;
use release_scout::fetcher::Fetcher;
use release_scout::release::github::GitHubReleases;

#[derive(Parser)]
#[command(name = "release-scout")]
#[command(version, about = "Reports the latest release per minor version line")]
struct Cli {
    /// File of `owner/repo,min-version` lines, one repository per line
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(&cli.input))
}

/// Processes the input file line by line, one repository at a time.
///
/// Per-line failures are printed by the batch loop and the run continues;
/// only a missing or unreadable input file aborts it.
async fn run(input: &Path) -> anyhow::Result<()> {
    let file = File::open(input)
        .map_err(|e| anyhow::anyhow!("failed to open {}: {}", input.display(), e))?;

    let fetcher = Fetcher::new(GitHubReleases::default());
    let mut stdout = std::io::stdout().lock();
    run_batch(&fetcher, BufReader::new(file), &mut stdout).await?;

    Ok(())
}
