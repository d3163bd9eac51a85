//! Report writing functionality

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::HashAlgorithm;
use crate::scanner::comparator::{Comparison, FileStatus};
use crate::scanner::directory_scanner::FileHashList;

/// Write the hash listing of one directory
///
/// Same layout as the console listing: a header naming the algorithm,
/// a separator, then one `name: hash` line per file.
pub fn write_hash_listing<W: Write>(
    out: &mut W,
    algorithm: HashAlgorithm,
    hashes: &FileHashList,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "File Hashes ({}):", algorithm)?;
    writeln!(out, "----------------------------------------")?;
    for file_hash in hashes {
        writeln!(out, "{}: {}", file_hash.display_name(), file_hash.hash)?;
    }
    Ok(())
}

/// Write the four comparison counts, optionally followed by per-file details
///
/// # Arguments
/// * `out` - Destination
/// * `comparison` - Comparison to summarize
/// * `details` - List every name that is not identical on both sides
pub fn write_comparison_summary<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    details: bool,
) -> Result<()> {
    let summary = comparison.summary();
    writeln!(out, "Identical files: {}", summary.identical)?;
    writeln!(out, "Different files: {}", summary.different)?;
    writeln!(out, "Only in left: {}", summary.left_only)?;
    writeln!(out, "Only in right: {}", summary.right_only)?;

    if details {
        for status in [FileStatus::Different, FileStatus::LeftOnly, FileStatus::RightOnly] {
            let mut names = comparison.names_with(status).peekable();
            if names.peek().is_none() {
                continue;
            }
            writeln!(out)?;
            writeln!(out, "{}:", capitalize(status.label()))?;
            for name in names {
                writeln!(out, "  {}", name.to_string_lossy())?;
            }
        }
    }
    Ok(())
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Serialize)]
struct HashReport<'a> {
    algorithm: HashAlgorithm,
    files: &'a FileHashList,
}

#[derive(Serialize)]
struct ComparisonReport<'a> {
    algorithm: HashAlgorithm,
    left: &'a Path,
    right: &'a Path,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

/// Write a directory hash report file
///
/// # Arguments
/// * `output_path` - Path to output file
/// * `algorithm` - Algorithm the hashes were computed with
/// * `hashes` - Scan result
/// * `json` - Write JSON instead of the text listing
pub fn write_hash_report(
    output_path: &Path,
    algorithm: HashAlgorithm,
    hashes: &FileHashList,
    json: bool,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(output_path)?);

    if json {
        let report = HashReport {
            algorithm,
            files: hashes,
        };
        serde_json::to_writer_pretty(&mut file, &report)?;
        writeln!(file)?;
    } else {
        write_hash_listing(&mut file, algorithm, hashes)?;
    }

    file.flush()?;
    Ok(())
}

/// Write a directory comparison report file
///
/// The text form always includes per-file details.
pub fn write_comparison_report(
    output_path: &Path,
    algorithm: HashAlgorithm,
    left: &Path,
    right: &Path,
    comparison: &Comparison,
    json: bool,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(output_path)?);

    if json {
        let report = ComparisonReport {
            algorithm,
            left,
            right,
            comparison,
        };
        serde_json::to_writer_pretty(&mut file, &report)?;
        writeln!(file)?;
    } else {
        writeln!(file, "Directory Comparison Report ({})", algorithm)?;
        writeln!(file, "==============================")?;
        writeln!(file, "Left:  {}", left.display())?;
        writeln!(file, "Right: {}", right.display())?;
        writeln!(file)?;
        write_comparison_summary(&mut file, comparison, true)?;
    }

    file.flush()?;
    Ok(())
}
