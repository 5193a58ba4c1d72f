#![forbid(unsafe_code)]

//! Resolved runtime settings
//!
//! Precedence: CLI flags, then the config file, then built-in defaults.

use crate::cli::args::Cli;
use crate::config::FileConfig;
use crate::error::Error;
use std::path::PathBuf;

/// Store file name WeType writes its settings to
pub const DEFAULT_STORE_ID: &str = "wetype.settings";

/// Process name of the consuming input method
pub const DEFAULT_PROCESS_NAME: &str = "WeType";

/// Everything a command needs to know about its environment
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub store_path: PathBuf,
    pub process_name: String,
    pub restart: bool,
}

impl Settings {
    /// Resolve settings from CLI flags and the config file
    pub fn resolve(cli: &Cli, config: &FileConfig) -> Result<Settings, Error> {
        let store_path = match &cli.file {
            Some(path) => path.clone(),
            None => {
                let dir = config
                    .mmkv_dir
                    .clone()
                    .or_else(default_mmkv_dir)
                    .ok_or_else(|| {
                        Error::Config(
                            "cannot determine the MMKV directory; \
                             set mmkv_dir in the config file or pass --file"
                                .to_string(),
                        )
                    })?;
                let store_id = config
                    .store_id
                    .clone()
                    .unwrap_or_else(|| DEFAULT_STORE_ID.to_string());
                dir.join(store_id)
            }
        };

        let process_name = config
            .process_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PROCESS_NAME.to_string());

        let restart = !cli.no_restart && config.restart.unwrap_or(true);

        Ok(Settings {
            store_path,
            process_name,
            restart,
        })
    }
}

/// `<data_dir>/WeType/mmkv`, the app's per-user store directory
fn default_mmkv_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("WeType").join("mmkv"))
}
