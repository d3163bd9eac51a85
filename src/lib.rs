//! Directory Hashing Library
//!
//! SHA-256 / SHA-512 content hashes for the files of a directory, and
//! hash-based comparison of two directories.

pub mod core;
pub mod logging;
pub mod reporting;
pub mod scanner;

pub use crate::core::hasher;
pub use crate::reporting::report_writer;
pub use crate::scanner::{comparator, directory_scanner};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::{compute_hash, HashAlgorithm, ScanConfig, ScanError};
    pub use crate::reporting::report_writer::{
        write_comparison_report, write_comparison_summary, write_hash_listing, write_hash_report,
    };
    pub use crate::scanner::comparator::{
        compare, compare_directories, compare_directories_with_progress, Comparison,
        ComparisonResult, FileComparison, FileStatus,
    };
    pub use crate::scanner::directory_scanner::{
        scan_directory, scan_directory_with_progress, FileHash, FileHashList,
    };
}
