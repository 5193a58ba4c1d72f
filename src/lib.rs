#![forbid(unsafe_code)]

//! hotwordctl: read and edit WeType text-expansion hotwords
//!
//! WeType persists user-defined text-expansion shortcuts ("hotwords") as a
//! JSON array under a single key inside an MMKV settings file. This crate
//! implements just enough of the MMKV append-only container format to locate
//! the live value for that key and to write a new value back without
//! disturbing the rest of the file.

pub mod cli;
pub mod config;
pub mod error;
pub mod hotwords;
pub mod mmkv;
pub mod output;
pub mod restart;

pub use error::Error;
