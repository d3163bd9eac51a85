//! Hash-based comparison of two directory snapshots

use indicatif::ProgressBar;
use log::info;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use super::directory_scanner::{scan_directory_with_progress, serialize_name, FileHashList};
use crate::core::{ScanConfig, ScanError};

/// Classification of one file name across the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Identical,
    Different,
    LeftOnly,
    RightOnly,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Identical => "identical",
            FileStatus::Different => "different",
            FileStatus::LeftOnly => "left only",
            FileStatus::RightOnly => "right only",
        }
    }
}

/// Per-file comparison outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileComparison {
    #[serde(serialize_with = "serialize_name")]
    pub name: OsString,
    pub status: FileStatus,
}

impl FileComparison {
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Aggregate counts of a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub identical: usize,
    pub different: usize,
    pub left_only: usize,
    pub right_only: usize,
}

impl ComparisonResult {
    fn record(&mut self, status: FileStatus) {
        match status {
            FileStatus::Identical => self.identical += 1,
            FileStatus::Different => self.different += 1,
            FileStatus::LeftOnly => self.left_only += 1,
            FileStatus::RightOnly => self.right_only += 1,
        }
    }

    /// Number of distinct names across both sides
    pub fn total(&self) -> usize {
        self.identical + self.different + self.left_only + self.right_only
    }

    pub fn is_identical(&self) -> bool {
        self.different == 0 && self.left_only == 0 && self.right_only == 0
    }
}

/// Full comparison: every name in the union of both sides, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    entries: Vec<FileComparison>,
    summary: ComparisonResult,
}

impl Comparison {
    pub fn summary(&self) -> ComparisonResult {
        self.summary
    }

    pub fn entries(&self) -> &[FileComparison] {
        &self.entries
    }

    /// Names classified as `status`, in name order
    pub fn names_with(&self, status: FileStatus) -> impl Iterator<Item = &OsStr> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.status == status)
            .map(|e| e.name.as_os_str())
    }

    fn push(&mut self, name: &OsStr, status: FileStatus) {
        self.summary.record(status);
        self.entries.push(FileComparison {
            name: name.to_os_string(),
            status,
        });
    }
}

/// Classify every file name of `left` and `right`
///
/// Names are matched on their raw OS form, so neither side's ordering
/// matters. Hashes are compared as exact strings.
pub fn compare(left: &FileHashList, right: &FileHashList) -> Comparison {
    let left_map: HashMap<&OsStr, &str> = left
        .iter()
        .map(|f| (f.name.as_os_str(), f.hash.as_str()))
        .collect();
    let right_map: HashMap<&OsStr, &str> = right
        .iter()
        .map(|f| (f.name.as_os_str(), f.hash.as_str()))
        .collect();

    let mut comparison = Comparison::default();

    for (&name, &left_hash) in &left_map {
        let status = match right_map.get(name) {
            Some(&right_hash) if right_hash == left_hash => FileStatus::Identical,
            Some(_) => FileStatus::Different,
            None => FileStatus::LeftOnly,
        };
        comparison.push(name, status);
    }

    for &name in right_map.keys() {
        if !left_map.contains_key(name) {
            comparison.push(name, FileStatus::RightOnly);
        }
    }

    comparison
        .entries
        .sort_by(|a, b| a.name.cmp(&b.name));
    comparison
}

/// Scan both directories with the same settings and compare them
///
/// The left side is scanned first; an error on either side is returned as is.
pub fn compare_directories(
    left_dir: &Path,
    right_dir: &Path,
    config: ScanConfig,
) -> Result<Comparison, ScanError> {
    compare_directories_with_progress(left_dir, right_dir, config, &ProgressBar::hidden())
}

/// Same as [`compare_directories`], advancing `progress` once per hashed file
/// on either side
pub fn compare_directories_with_progress(
    left_dir: &Path,
    right_dir: &Path,
    config: ScanConfig,
    progress: &ProgressBar,
) -> Result<Comparison, ScanError> {
    let left = scan_directory_with_progress(left_dir, config, progress)?;
    let right = scan_directory_with_progress(right_dir, config, progress)?;
    let comparison = compare(&left, &right);

    let summary = comparison.summary();
    info!(
        "Compared '{}' with '{}': {} identical, {} different, {} left only, {} right only",
        left_dir.display(),
        right_dir.display(),
        summary.identical,
        summary.different,
        summary.left_only,
        summary.right_only
    );
    Ok(comparison)
}
