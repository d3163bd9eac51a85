use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dirhash_rs::logging;
use dirhash_rs::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "dirhash_rs")]
#[command(about = "Hash every file in a directory, or compare two directories by hash", long_about = None)]
struct Cli {
    /// Directory path to scan (left side when comparing)
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Compare against this directory instead of listing hashes
    #[arg(short, long, value_name = "RIGHT", num_args = 0..=1, default_missing_value = ".")]
    compare: Option<PathBuf>,

    /// Use SHA512 instead of SHA256
    #[arg(short, long)]
    sha512: bool,

    /// Also write a report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the report as JSON (requires --output)
    #[arg(long, requires = "output")]
    json: bool,

    /// Verbose output; lists differing files when comparing
    #[arg(short, long)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run in batch mode (no progress bar)
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::level_filter(cli.verbose, cli.quiet))
        .context("Failed to initialize logger")?;
    debug!("Command line arguments: {:?}", cli);

    let config = ScanConfig::new(HashAlgorithm::from_sha512_flag(cli.sha512));

    match &cli.compare {
        Some(right) => run_compare(&cli, config, right),
        None => run_listing(&cli, config),
    }
}

fn run_listing(cli: &Cli, config: ScanConfig) -> Result<()> {
    let hashes = scan_with_progress(&cli.dir, config, cli.batch)
        .with_context(|| format!("Error reading directory '{}'", cli.dir.display()))?;

    let mut stdout = io::stdout().lock();
    write_hash_listing(&mut stdout, config.algorithm, &hashes)?;
    stdout.flush()?;

    if let Some(output) = &cli.output {
        write_hash_report(output, config.algorithm, &hashes, cli.json)
            .with_context(|| format!("Failed to write report '{}'", output.display()))?;
        info!("Report saved to '{}'", output.display());
    }

    Ok(())
}

fn run_compare(cli: &Cli, config: ScanConfig, right_dir: &Path) -> Result<()> {
    let progress = new_progress(cli.batch)?;
    let comparison = compare_directories_with_progress(&cli.dir, right_dir, config, &progress);
    progress.finish_and_clear();
    let comparison = comparison.with_context(|| {
        format!(
            "Error comparing '{}' with '{}'",
            cli.dir.display(),
            right_dir.display()
        )
    })?;

    let mut stdout = io::stdout().lock();
    write_comparison_summary(&mut stdout, &comparison, cli.verbose)?;
    stdout.flush()?;

    if let Some(output) = &cli.output {
        write_comparison_report(
            output,
            config.algorithm,
            &cli.dir,
            right_dir,
            &comparison,
            cli.json,
        )
        .with_context(|| format!("Failed to write report '{}'", output.display()))?;
        info!("Report saved to '{}'", output.display());
    }

    Ok(())
}

/// Scan one directory, showing a spinner unless running in batch mode
fn scan_with_progress(dir: &Path, config: ScanConfig, batch: bool) -> Result<FileHashList> {
    let progress = new_progress(batch)?;
    let result = scan_directory_with_progress(dir, config, &progress);
    progress.finish_and_clear();
    Ok(result?)
}

fn new_progress(batch: bool) -> Result<ProgressBar> {
    if batch {
        return Ok(ProgressBar::hidden());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} file(s) hashed {msg}")?,
    );
    Ok(pb)
}
