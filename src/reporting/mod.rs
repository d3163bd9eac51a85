//! Console and report file output

pub mod report_writer;

pub use report_writer::{
    write_comparison_report, write_comparison_summary, write_hash_listing, write_hash_report,
};
