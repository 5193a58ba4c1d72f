#![forbid(unsafe_code)]

//! Hotword model and list operations
//!
//! WeType keeps the whole hotword list as a JSON array under the single
//! container key `hotWordList`. Field names follow the app's wire format:
//! `hw_id`, `key` (trigger), `text` (expansion). Fields this tool does not
//! know about (for example `timestamp`) are carried through a read/modify/
//! write cycle unchanged.

use crate::error::Error;
use crate::mmkv::Store;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Container key the hotword list lives under
pub const HOTWORD_KEY: &str = "hotWordList";

/// Preview length for one-line renderings of the expansion text
pub const PREVIEW_CHARS: usize = 80;

/// One trigger/expansion pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotword {
    /// App-assigned id, milliseconds since the epoch at creation
    #[serde(default)]
    pub hw_id: String,
    /// Trigger string typed by the user
    #[serde(default)]
    pub key: String,
    /// Expansion text inserted in its place
    #[serde(default)]
    pub text: String,
    /// Fields the app wrote that this tool does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Hotword {
    /// Create a hotword with a fresh id
    pub fn new(trigger: &str, expansion: &str) -> Hotword {
        Hotword {
            hw_id: next_id(),
            key: trigger.to_string(),
            text: expansion.to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// Trigger with surrounding whitespace stripped
    pub fn trigger(&self) -> &str {
        self.key.trim()
    }

    /// One-line preview of the expansion: text truncated at
    /// [`PREVIEW_CHARS`] characters, then newlines escaped
    pub fn preview(&self) -> String {
        let truncated: String = self.text.chars().take(PREVIEW_CHARS).collect();
        let mut out = truncated.replace('\n', "\\n");
        if self.text.chars().count() > PREVIEW_CHARS {
            out.push_str("...");
        }
        out
    }
}

/// Milliseconds since the epoch, as the app formats hotword ids
fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    millis.to_string()
}

/// Hotword view over an MMKV store
pub struct HotwordStore {
    store: Store,
}

impl HotwordStore {
    /// Open the store file holding the hotword list
    pub fn open(path: &Path) -> Result<HotwordStore, Error> {
        Ok(HotwordStore {
            store: Store::open(path)?,
        })
    }

    /// Load the hotword list; `KeyMissing` when the app never wrote one
    pub fn load(&self) -> Result<Vec<Hotword>, Error> {
        let json = self.store.get_string(HOTWORD_KEY)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load the hotword list, treating an absent key as an empty list
    pub fn load_or_default(&self) -> Result<Vec<Hotword>, Error> {
        match self.load() {
            Err(Error::KeyMissing(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    /// Serialize and persist the list, leaving all other keys untouched
    pub fn save(&mut self, list: &[Hotword]) -> Result<(), Error> {
        let json = serde_json::to_string(list)?;
        self.store.set_string(HOTWORD_KEY, &json)
    }
}

/// Add a hotword at the front of the list
///
/// Duplicate triggers resolve last-write-wins: any existing entry with the
/// same trimmed trigger is removed first.
pub fn add(list: &mut Vec<Hotword>, trigger: &str, expansion: &str) -> Hotword {
    let trimmed = trigger.trim();
    list.retain(|hw| hw.trigger() != trimmed);
    let hotword = Hotword::new(trigger, expansion);
    list.insert(0, hotword.clone());
    hotword
}

/// Remove every entry whose trimmed trigger matches; returns how many
pub fn delete(list: &mut Vec<Hotword>, trigger: &str) -> usize {
    let trimmed = trigger.trim();
    let before = list.len();
    list.retain(|hw| hw.trigger() != trimmed);
    before - list.len()
}

/// Case-insensitive substring search over triggers and expansions
pub fn search<'a>(list: &'a [Hotword], term: &str) -> Vec<&'a Hotword> {
    let needle = term.to_lowercase();
    list.iter()
        .filter(|hw| {
            hw.key.to_lowercase().contains(&needle) || hw.text.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Export document written by the `export` command
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Seconds since the epoch at export time
    pub exported_at: u64,
    pub count: usize,
    pub hotwords: Vec<Hotword>,
}

impl ExportDocument {
    pub fn new(hotwords: Vec<Hotword>) -> ExportDocument {
        let exported_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        ExportDocument {
            exported_at,
            count: hotwords.len(),
            hotwords,
        }
    }
}

/// Parse an import file: either an [`ExportDocument`] or a bare JSON array
pub fn parse_import(content: &str) -> Result<Vec<Hotword>, Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let list_value = match value {
        serde_json::Value::Object(mut map) => map
            .remove("hotwords")
            .ok_or_else(|| Error::InvalidImport("missing 'hotwords' array".to_string()))?,
        array @ serde_json::Value::Array(_) => array,
        _ => {
            return Err(Error::InvalidImport(
                "expected a JSON array or an export document".to_string(),
            ));
        }
    };
    serde_json::from_value(list_value).map_err(|e| Error::InvalidImport(e.to_string()))
}
