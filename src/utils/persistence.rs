//! Checksummed save files under ~/.letter-runner/.
//!
//! File layout:
//! - Version magic (8 bytes, little endian)
//! - Payload length (4 bytes, little endian)
//! - Payload (variable length)
//! - SHA256 checksum over the three fields above (32 bytes)

use crate::core::constants::{DATA_DIR_ENV, DATA_DIR_NAME};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("Unsupported save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    UnsupportedVersion { expected: u64, found: u64 },

    #[error("Save file is truncated")]
    Truncated,

    #[error("Checksum verification failed")]
    ChecksumMismatch,
}

/// The data directory, creating it if needed. `LETTER_RUNNER_HOME`
/// overrides the default of `~/.letter-runner`.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::home_dir()
            .ok_or(PersistenceError::NoHomeDir)?
            .join(DATA_DIR_NAME),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in the data directory.
pub fn save_path(filename: &str) -> Result<PathBuf, PersistenceError> {
    Ok(data_dir()?.join(filename))
}

fn checksum(magic: &[u8], length: &[u8], payload: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(magic);
    hasher.update(length);
    hasher.update(payload);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Write `payload` framed with `magic` and a checksum.
pub fn write_checksummed(path: &Path, magic: u64, payload: &[u8]) -> Result<(), PersistenceError> {
    let magic_bytes = magic.to_le_bytes();
    let length_bytes = (payload.len() as u32).to_le_bytes();
    let digest = checksum(&magic_bytes, &length_bytes, payload);

    let mut bytes = Vec::with_capacity(8 + 4 + payload.len() + 32);
    bytes.extend_from_slice(&magic_bytes);
    bytes.extend_from_slice(&length_bytes);
    bytes.extend_from_slice(payload);
    bytes.extend_from_slice(&digest);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Read back a payload written by [`write_checksummed`], verifying the
/// magic and the checksum.
pub fn read_checksummed(path: &Path, magic: u64) -> Result<Vec<u8>, PersistenceError> {
    let bytes = fs::read(path)?;
    if bytes.len() < 8 + 4 + 32 {
        return Err(PersistenceError::Truncated);
    }

    let (magic_bytes, rest) = bytes.split_at(8);
    let mut magic_array = [0u8; 8];
    magic_array.copy_from_slice(magic_bytes);
    let found = u64::from_le_bytes(magic_array);
    if found != magic {
        return Err(PersistenceError::UnsupportedVersion {
            expected: magic,
            found,
        });
    }

    let (length_bytes, rest) = rest.split_at(4);
    let mut length_array = [0u8; 4];
    length_array.copy_from_slice(length_bytes);
    let length = u32::from_le_bytes(length_array) as usize;
    if rest.len() != length + 32 {
        return Err(PersistenceError::Truncated);
    }

    let (payload, stored) = rest.split_at(length);
    if checksum(magic_bytes, length_bytes, payload).as_slice() != stored {
        return Err(PersistenceError::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}
