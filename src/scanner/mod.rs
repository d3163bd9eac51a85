//! Directory scanning and comparison functionality

pub mod comparator;
pub mod directory_scanner;

pub use comparator::{
    compare, compare_directories, compare_directories_with_progress, Comparison,
    ComparisonResult, FileComparison, FileStatus,
};
pub use directory_scanner::{scan_directory, scan_directory_with_progress, FileHash, FileHashList};
