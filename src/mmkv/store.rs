#![forbid(unsafe_code)]

//! Append-only log reader/writer
//!
//! An MMKV store file starts with a 4-byte little-endian payload size; the
//! payload itself is a flat sequence of items, each a length-delimited key
//! followed by a length-delimited value buffer. Setting a key appends a new
//! item rather than rewriting the old one, so the same key can appear many
//! times: replay order decides the live value (last occurrence wins), and an
//! item with an empty value buffer is a tombstone that removes the key.
//!
//! Files are zero-padded to a multiple of the 4 KiB page size because the
//! consuming application memory-maps them. Bytes past the recorded payload
//! size are stale and ignored on load.

use crate::error::Error;
use crate::mmkv::{meta, varint};
use std::fs;
use std::path::{Path, PathBuf};

/// MMKV files are sized in whole pages
pub const PAGE_SIZE: usize = 4096;

/// Size of the payload-length header at the front of the file
const HEADER_SIZE: usize = 4;

/// An opened MMKV store
///
/// Holds the raw payload (for appending) and the replayed live entries in
/// order of first appearance.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    payload: Vec<u8>,
    entries: Vec<(String, Vec<u8>)>,
    file_len: usize,
}

impl Store {
    /// Open an existing store file and replay its log
    pub fn open(path: &Path) -> Result<Store, Error> {
        if !path.exists() {
            return Err(Error::StoreNotFound(path.to_path_buf()));
        }
        let data = fs::read(path)?;
        if data.len() < HEADER_SIZE {
            return Err(Error::corrupt("file shorter than the size header"));
        }
        let actual_size = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        let payload = data
            .get(HEADER_SIZE..HEADER_SIZE + actual_size)
            .ok_or_else(|| Error::corrupt("size header exceeds the file length"))?
            .to_vec();

        let entries = replay(&payload)?;

        Ok(Store {
            path: path.to_path_buf(),
            payload,
            entries,
            file_len: data.len(),
        })
    }

    /// Create a new, empty store file (and its CRC sidecar) at `path`
    pub fn create(path: &Path) -> Result<Store, Error> {
        let mut store = Store {
            path: path.to_path_buf(),
            payload: Vec::new(),
            entries: Vec::new(),
            file_len: PAGE_SIZE,
        };
        store.flush()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Live keys, in order of first appearance in the log
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Raw value buffer for a key, if the key is live
    pub fn get_raw(&self, key: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_slice())
    }

    /// Decode the live value for `key` as a string
    pub fn get_string(&self, key: &str) -> Result<String, Error> {
        let raw = self
            .get_raw(key)
            .ok_or_else(|| Error::KeyMissing(key.to_string()))?;
        decode_string(raw)
    }

    /// Append a string value for `key` and write the file back
    ///
    /// All other keys keep their live values: the append leaves every earlier
    /// item in place, and the new item shadows only prior occurrences of
    /// `key`. The CRC sidecar is refreshed as part of the write.
    pub fn set_string(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let value_buf = encode_string(value);

        let mut item = Vec::new();
        varint::encode_u32(key.len() as u32, &mut item);
        item.extend_from_slice(key.as_bytes());
        varint::encode_u32(value_buf.len() as u32, &mut item);
        item.extend_from_slice(&value_buf);

        let old_len = self.payload.len();
        self.payload.extend_from_slice(&item);
        if let Err(e) = self.flush() {
            // The file still holds the old payload; keep memory matching it
            self.payload.truncate(old_len);
            return Err(e);
        }

        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value_buf,
            None => self.entries.push((key.to_string(), value_buf)),
        }
        Ok(())
    }

    /// Write header, payload, and page padding, then refresh the sidecar
    fn flush(&mut self) -> Result<(), Error> {
        let needed = HEADER_SIZE + self.payload.len();
        self.file_len = self.file_len.max(round_to_page(needed));

        let mut bytes = vec![0u8; self.file_len];
        let actual_size = self.payload.len() as u32;
        bytes[0..HEADER_SIZE].copy_from_slice(&actual_size.to_le_bytes());
        bytes[HEADER_SIZE..needed].copy_from_slice(&self.payload);

        fs::write(&self.path, &bytes)?;
        meta::refresh(&self.path, &self.payload)?;
        Ok(())
    }
}

/// Replay the log into live entries, last occurrence winning
fn replay(payload: &[u8]) -> Result<Vec<(String, Vec<u8>)>, Error> {
    let mut entries: Vec<(String, Vec<u8>)> = Vec::new();
    let mut pos = 0;

    while pos < payload.len() {
        let (key, value, next) = read_item(payload, pos)?;
        pos = next;

        if value.is_empty() {
            // Tombstone
            entries.retain(|(k, _)| k != &key);
        } else {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
    }

    Ok(entries)
}

/// Read one key/value item starting at `pos`, returning the next offset
fn read_item(payload: &[u8], pos: usize) -> Result<(String, Vec<u8>, usize), Error> {
    let (key_len, consumed) = varint::decode_u32(&payload[pos..])?;
    let key_start = pos + consumed;
    let key_end = key_start + key_len as usize;
    let key_bytes = payload
        .get(key_start..key_end)
        .ok_or_else(|| Error::corrupt("key overruns the payload"))?;
    let key = std::str::from_utf8(key_bytes)
        .map_err(|_| Error::corrupt("key is not valid UTF-8"))?
        .to_string();

    let (value_len, consumed) = varint::decode_u32(&payload[key_end..])?;
    let value_start = key_end + consumed;
    let value_end = value_start + value_len as usize;
    let value = payload
        .get(value_start..value_end)
        .ok_or_else(|| Error::corrupt("value overruns the payload"))?
        .to_vec();

    Ok((key, value, value_end))
}

/// Encode a string as an MMKV value buffer (varint length + UTF-8 bytes)
pub fn encode_string(value: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(value.len() + varint::MAX_VARINT32_LEN);
    varint::encode_u32(value.len() as u32, &mut buf);
    buf.extend_from_slice(value.as_bytes());
    buf
}

/// Decode an MMKV value buffer holding a string
///
/// Strict: the declared length must consume the whole buffer, which weeds
/// out values of other types (bools and integers are bare varints).
pub fn decode_string(buf: &[u8]) -> Result<String, Error> {
    let (len, consumed) = varint::decode_u32(buf)?;
    let bytes = buf
        .get(consumed..consumed + len as usize)
        .ok_or_else(|| Error::corrupt("string value overruns its buffer"))?;
    if consumed + len as usize != buf.len() {
        return Err(Error::corrupt("value buffer is not a string"));
    }
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::corrupt("string value is not valid UTF-8"))
}

fn round_to_page(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE) * PAGE_SIZE
}
