#![forbid(unsafe_code)]

//! CRC sidecar maintenance
//!
//! Every MMKV store has a `<store>.crc` sidecar. The consuming application
//! verifies the digest on load, so it must be refreshed after every write or
//! the app may treat the store as damaged. Layout of the sidecar:
//!
//! - bytes 0..4: CRC-32 of the payload (little-endian)
//! - bytes 4..8: meta format version
//! - bytes 8..12: sequence number, bumped by the app on full rewrites
//! - bytes 12..16: payload size, present when version >= 2
//!
//! Only the digest and the size field are rewritten; everything else is
//! preserved byte for byte.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Meta version from which the sidecar duplicates the payload size
const VERSION_WITH_ACTUAL_SIZE: u32 = 2;

/// Sidecar path for a store file (`wetype.settings` -> `wetype.settings.crc`)
pub fn meta_path(store_path: &Path) -> PathBuf {
    let mut name = store_path.as_os_str().to_os_string();
    name.push(".crc");
    PathBuf::from(name)
}

/// CRC-32 digest of the payload bytes
pub fn digest(payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

/// Rewrite the sidecar digest (and size field, when present) for `payload`
///
/// A missing sidecar is created with just the digest; an existing one keeps
/// its version and sequence fields untouched.
pub fn refresh(store_path: &Path, payload: &[u8]) -> io::Result<()> {
    let path = meta_path(store_path);
    let mut bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(e),
    };
    if bytes.len() < 4 {
        bytes.resize(4, 0);
    }

    let crc = digest(payload);
    bytes[0..4].copy_from_slice(&crc.to_le_bytes());

    if bytes.len() >= 16 {
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if version >= VERSION_WITH_ACTUAL_SIZE {
            let size = payload.len() as u32;
            bytes[12..16].copy_from_slice(&size.to_le_bytes());
        }
    }

    fs::write(&path, bytes)
}
