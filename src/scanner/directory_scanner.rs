//! Directory enumeration and per-file hashing

use indicatif::ProgressBar;
use log::{debug, info};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::{compute_hash, ScanConfig, ScanError};

/// Hash of a single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHash {
    /// Base name of the entry exactly as the OS returned it
    #[serde(serialize_with = "serialize_name")]
    pub name: OsString,
    /// Lowercase hex digest
    pub hash: String,
}

impl FileHash {
    pub fn new(name: impl Into<OsString>, hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hash: hash.into(),
        }
    }

    /// Name for printing; non-UTF-8 bytes become U+FFFD
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

pub(crate) fn serialize_name<S: Serializer>(
    name: &OsString,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&name.to_string_lossy())
}

/// File hashes of one directory, ordered by raw name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileHashList {
    entries: Vec<FileHash>,
}

impl FileHashList {
    /// Build a list from entries in any order
    pub fn new(mut entries: Vec<FileHash>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileHash> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FileHash] {
        &self.entries
    }

    /// Look up the hash recorded for `name`
    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&str> {
        let name = name.as_ref();
        self.entries
            .binary_search_by(|e| e.name.as_os_str().cmp(name))
            .ok()
            .map(|idx| self.entries[idx].hash.as_str())
    }
}

impl FromIterator<FileHash> for FileHashList {
    fn from_iter<I: IntoIterator<Item = FileHash>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileHashList {
    type Item = &'a FileHash;
    type IntoIter = std::slice::Iter<'a, FileHash>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Hash every non-directory entry directly inside `dir`
///
/// Subdirectories are skipped and never descended into. Any other entry
/// (symlink, device, FIFO) is opened like a regular file.
///
/// # Arguments
/// * `dir` - Directory to scan
/// * `config` - Scan settings
///
/// # Returns
/// Name-sorted list of file hashes. The first file that cannot be hashed
/// aborts the scan with [`ScanError::FileRead`].
pub fn scan_directory(dir: &Path, config: ScanConfig) -> Result<FileHashList, ScanError> {
    scan_directory_with_progress(dir, config, &ProgressBar::hidden())
}

/// Same as [`scan_directory`], advancing `progress` once per hashed file
pub fn scan_directory_with_progress(
    dir: &Path,
    config: ScanConfig,
    progress: &ProgressBar,
) -> Result<FileHashList, ScanError> {
    let metadata = fs::metadata(dir).map_err(|e| ScanError::directory(dir, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::directory(
            dir,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    info!("Scanning '{}' using {}", dir.display(), config.algorithm);

    let mut entries = Vec::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|e| ScanError::directory(dir, e.into()))?;

        if entry.file_type().is_dir() {
            debug!("Skipping subdirectory '{}'", entry.path().display());
            continue;
        }

        let hash = compute_hash(entry.path(), config.algorithm)?;
        let file_hash = FileHash::new(entry.file_name(), hash);
        debug!("{}: {}", file_hash.display_name(), file_hash.hash);

        progress.inc(1);
        progress.set_message(file_hash.display_name().into_owned());
        entries.push(file_hash);
    }

    let list = FileHashList::new(entries);
    info!("Hashed {} file(s) in '{}'", list.len(), dir.display());
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HashAlgorithm;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(content).unwrap();
    }

    #[test]
    fn test_scan_sorts_by_name() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "zeta", b"z");
        write_file(temp_dir.path(), "Alpha", b"A");
        write_file(temp_dir.path(), "beta", b"b");

        let list = scan_directory(temp_dir.path(), ScanConfig::default()).unwrap();
        let names: Vec<_> = list.iter().map(|f| f.name.as_os_str()).collect();
        // Byte order puts uppercase first
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        write_file(temp_dir.path(), "top.txt", b"top");
        write_file(&temp_dir.path().join("nested"), "inner.txt", b"inner");

        let list = scan_directory(temp_dir.path(), ScanConfig::default()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].name, "top.txt");
    }

    #[test]
    fn test_scan_uses_configured_algorithm() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "data.bin", b"payload");

        let config = ScanConfig::new(HashAlgorithm::Sha512);
        let list = scan_directory(temp_dir.path(), config).unwrap();
        assert_eq!(list.get("data.bin").unwrap().len(), 128);
    }

    #[test]
    fn test_progress_counts_hashed_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("skip")).unwrap();
        write_file(temp_dir.path(), "a", b"1");
        write_file(temp_dir.path(), "b", b"2");

        let progress = ProgressBar::hidden();
        scan_directory_with_progress(temp_dir.path(), ScanConfig::default(), &progress).unwrap();
        assert_eq!(progress.position(), 2);
    }

    #[test]
    fn test_file_path_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "plain.txt", b"x");

        let err = scan_directory(&temp_dir.path().join("plain.txt"), ScanConfig::default())
            .unwrap_err();
        assert!(err.is_directory_error());
    }

    #[test]
    fn test_list_lookup_and_ordering() {
        let list: FileHashList = vec![FileHash::new("b", "02"), FileHash::new("a", "01")]
            .into_iter()
            .collect();
        assert_eq!(list.as_slice()[0].name, "a");
        assert_eq!(list.get("b"), Some("02"));
        assert_eq!(list.get("c"), None);
    }

    #[test]
    fn test_display_name_of_utf8_name() {
        let file_hash = FileHash::new("r\u{e9}sum\u{e9}.txt", "00");
        assert_eq!(file_hash.display_name(), "r\u{e9}sum\u{e9}.txt");
    }
}
