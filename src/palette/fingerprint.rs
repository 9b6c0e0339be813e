//! Content hashing of tile files

use crate::io::configuration::HASH_CHUNK_SIZE;
use crate::io::error::{Result, io_error};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Length of a fingerprint digest in bytes
pub const FINGERPRINT_LEN: usize = 32;

/// SHA-256 digest of a tile file's bytes
///
/// Independent of file name and metadata: two files with identical
/// content share a fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TileFingerprint([u8; FINGERPRINT_LEN]);

impl TileFingerprint {
    /// Fingerprint of an in-memory byte buffer
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    /// Lowercase hexadecimal form used by the cache file
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for TileFingerprint {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut digest = [0u8; FINGERPRINT_LEN];
        hex::decode_to_slice(s, &mut digest)?;
        Ok(Self(digest))
    }
}

/// Hash a file by streaming it in fixed-size chunks
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read
pub fn fingerprint_file(path: &Path) -> Result<TileFingerprint> {
    let mut file = File::open(path).map_err(|e| io_error(path, "open", e))?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; HASH_CHUNK_SIZE];

    loop {
        let read = file
            .read(&mut buffer)
            .map_err(|e| io_error(path, "read", e))?;
        if read == 0 {
            break;
        }
        hasher.update(buffer.get(..read).unwrap_or_default());
    }

    Ok(TileFingerprint(hasher.finalize().into()))
}
