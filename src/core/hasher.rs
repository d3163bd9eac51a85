//! File content hashing with SHA-256 or SHA-512

use serde::{Deserialize, Serialize};
use sha2::digest::Output;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::error::ScanError;

const BUFFER_SIZE: usize = 8192;

/// Digest algorithm used for file hashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Map the `--sha512` command line switch to an algorithm
    pub fn from_sha512_flag(use_sha512: bool) -> Self {
        if use_sha512 {
            HashAlgorithm::Sha512
        } else {
            HashAlgorithm::Sha256
        }
    }

    /// Label used in output headers
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }

    /// Length of a hex-encoded digest
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }

    /// Stream everything from `reader` through this digest
    ///
    /// # Returns
    /// Lowercase hex digest with no separators
    pub fn digest_reader<R: Read>(self, reader: &mut R) -> io::Result<String> {
        match self {
            HashAlgorithm::Sha256 => stream_digest::<Sha256, R>(reader),
            HashAlgorithm::Sha512 => stream_digest::<Sha512, R>(reader),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn stream_digest<D, R>(reader: &mut R) -> io::Result<String>
where
    D: Digest,
    R: Read,
    Output<D>: fmt::LowerHex,
{
    let mut hasher = D::new();
    let mut buffer = [0u8; BUFFER_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compute the hash of a file
///
/// # Arguments
/// * `path` - Path to the file
/// * `algorithm` - Digest to apply
///
/// # Returns
/// Hex-encoded digest, 64 characters for SHA-256 and 128 for SHA-512
pub fn compute_hash(path: &Path, algorithm: HashAlgorithm) -> Result<String, ScanError> {
    let mut file = File::open(path).map_err(|e| ScanError::file(path, e))?;
    algorithm
        .digest_reader(&mut file)
        .map_err(|e| ScanError::file(path, e))
}
