//! Minimal MMKV container format support
//!
//! MMKV is the append-only binary key-value log that WeType uses for its
//! settings. Only the subset needed to round-trip string values is
//! implemented: log replay with last-write-wins semantics, string
//! encode/decode, appending writes, and the CRC sidecar refresh.

pub mod meta;
pub mod store;
pub mod varint;

pub use store::Store;
