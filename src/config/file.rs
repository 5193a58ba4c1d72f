#![forbid(unsafe_code)]

//! Optional TOML config file
//!
//! `<config_dir>/hotwordctl/config.toml` can pin down where the store lives
//! and which process to restart after a write. Every field is optional; a
//! missing file means all defaults. Example:
//!
//! ```toml
//! mmkv_dir = "/Users/ada/Library/Application Support/WeType/mmkv"
//! store_id = "wetype.settings"
//! process_name = "WeType"
//! restart = true
//! ```

use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Parsed config file contents
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory holding the MMKV store files
    pub mmkv_dir: Option<PathBuf>,
    /// Store file name within `mmkv_dir`
    pub store_id: Option<String>,
    /// Process killed after writes so the app reloads the store
    pub process_name: Option<String>,
    /// Whether to restart the process at all
    pub restart: Option<bool>,
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hotwordctl").join("config.toml"))
}

/// Load the config file from its default location; absent file means defaults
pub fn load_default() -> Result<FileConfig, Error> {
    let Some(path) = config_path() else {
        return Ok(FileConfig::default());
    };
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    parse(&content)
}

/// Parse config file contents
pub fn parse(content: &str) -> Result<FileConfig, Error> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}
