//! Non-cryptographic and cryptographic hashes.
//!
//! CRC-32 (IEEE 802.3) comes from `crc32fast` and fits in a `u32`.
//! SHA-256 produces 32 bytes, so it is handed back as a hex string.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("hashing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Streaming CRC-32. Implements `Write` so `io::copy` can feed it.
#[derive(Debug, Clone)]
pub struct Crc32 {
    inner: crc32fast::Hasher,
}

impl Crc32 {
    pub fn new() -> Self {
        Crc32 {
            inner: crc32fast::Hasher::new(),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Checksum of everything written so far. The hasher stays usable.
    pub fn sum32(&self) -> u32 {
        self.inner.clone().finalize()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for Crc32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// CRC-32 of a file's contents, streamed rather than read whole.
pub fn file_crc32(path: impl AsRef<Path>) -> Result<u32, HashError> {
    let path = path.as_ref();
    let wrap = |source: io::Error| HashError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(wrap)?;
    let mut hasher = Crc32::new();
    let copied = io::copy(&mut file, &mut hasher).map_err(wrap)?;
    debug!(path = %path.display(), bytes = copied, "checksummed file");
    Ok(hasher.sum32())
}

/// Whether two files have the same CRC-32.
pub fn files_match(a: impl AsRef<Path>, b: impl AsRef<Path>) -> Result<bool, HashError> {
    Ok(file_crc32(a)? == file_crc32(b)?)
}

pub fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn crc32_known_values() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(crc32(b"test"), 3_632_233_996);
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn crc32_is_deterministic() {
        assert_eq!(crc32(b"test"), crc32(b"test"));
        assert_ne!(crc32(b"test"), crc32(b"Test"));
    }

    #[test]
    fn incremental_matches_one_shot() {
        let mut hasher = Crc32::new();
        hasher.update(b"hello ");
        assert_eq!(hasher.sum32(), crc32(b"hello "));
        hasher.update(b"world");
        assert_eq!(hasher.sum32(), crc32(b"hello world"));
    }

    #[test]
    fn write_impl_feeds_hasher() {
        let mut hasher = Crc32::default();
        let mut reader: &[u8] = b"123456789";
        io::copy(&mut reader, &mut hasher).unwrap();
        assert_eq!(hasher.sum32(), 0xCBF4_3926);
    }

    #[test]
    fn comparing_files() {
        let dir = tempdir().unwrap();
        let one = dir.path().join("test1.txt");
        let two = dir.path().join("test2.txt");
        let three = dir.path().join("test3.txt");
        std::fs::write(&one, "same content").unwrap();
        std::fs::write(&two, "same content").unwrap();
        std::fs::write(&three, "other content").unwrap();

        assert_eq!(file_crc32(&one).unwrap(), crc32(b"same content"));
        assert!(files_match(&one, &two).unwrap());
        assert!(!files_match(&one, &three).unwrap());
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = file_crc32(dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn sha256_of_test() {
        assert_eq!(
            sha256_hex(b"test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
        assert_eq!(sha256_hex(b"test").len(), 64);
    }
}
