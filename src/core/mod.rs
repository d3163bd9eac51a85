//! Hash computation and shared configuration

pub mod error;
pub mod hasher;

pub use error::ScanError;
pub use hasher::{compute_hash, HashAlgorithm};

/// Settings for a scan, passed explicitly to every scan call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub algorithm: HashAlgorithm,
}

impl ScanConfig {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }
}
