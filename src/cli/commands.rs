#![forbid(unsafe_code)]

//! Command execution
//!
//! Every subcommand resolves settings the same way, then does a read (and
//! for mutations a write followed by a restart of the consuming app) against
//! the store.

use crate::cli::args::{Cli, Command};
use crate::config::{self, Settings};
use crate::error::Error;
use crate::hotwords::{self, ExportDocument, HotwordStore};
use crate::mmkv::Store;
use crate::output::{HumanFormatter, json};
use crate::restart;
use std::fs;

/// Run the parsed command to completion
pub fn run(cli: Cli) -> Result<(), Error> {
    let file_config = config::file::load_default()?;
    let settings = Settings::resolve(&cli, &file_config)?;
    let formatter = HumanFormatter::new(cli.color.to_color_choice());

    match &cli.command {
        Command::List => {
            let list = HotwordStore::open(&settings.store_path)?.load_or_default()?;
            formatter.write_list("Hotwords", &list)?;
        }

        Command::Search { term } => {
            let list = HotwordStore::open(&settings.store_path)?.load_or_default()?;
            let matches: Vec<_> = hotwords::search(&list, term).into_iter().cloned().collect();
            if matches.is_empty() {
                println!("No hotwords matching '{}'", term);
            } else {
                formatter.write_list(&format!("Matches for '{}'", term), &matches)?;
            }
        }

        Command::Add { trigger, expansion } => {
            let mut store = HotwordStore::open(&settings.store_path)?;
            let mut list = store.load_or_default()?;
            let added = hotwords::add(&mut list, trigger, expansion);
            store.save(&list)?;
            println!("Added '{}' ({})", added.trigger(), entry_count(list.len()));
            maybe_restart(&settings);
        }

        Command::Delete { trigger } => {
            let mut store = HotwordStore::open(&settings.store_path)?;
            let mut list = store.load_or_default()?;
            let removed = hotwords::delete(&mut list, trigger);
            if removed == 0 {
                return Err(Error::HotwordNotFound(trigger.clone()));
            }
            store.save(&list)?;
            println!("Deleted {} ({} left)", entry_count(removed), list.len());
            maybe_restart(&settings);
        }

        Command::Export { path } => {
            let list = HotwordStore::open(&settings.store_path)?.load_or_default()?;
            let document = ExportDocument::new(list);
            fs::write(path, json::export_json(&document)?)?;
            println!(
                "Exported {} to {}",
                entry_count(document.count),
                path.display()
            );
        }

        Command::Import { path } => {
            let content = fs::read_to_string(path)?;
            let list = hotwords::parse_import(&content)?;
            let mut store = HotwordStore::open(&settings.store_path)?;
            store.save(&list)?;
            println!("Imported {}", entry_count(list.len()));
            maybe_restart(&settings);
        }

        Command::Json => {
            let list = HotwordStore::open(&settings.store_path)?.load_or_default()?;
            println!("{}", json::hotwords_json(&list)?);
        }

        Command::Keys => {
            let store = Store::open(&settings.store_path)?;
            let mut keys: Vec<&str> = store.keys().collect();
            keys.sort_unstable();
            println!("{} keys in {}", keys.len(), settings.store_path.display());
            for key in keys {
                println!("  {}", key);
            }
        }

        Command::Get { key } => {
            let store = Store::open(&settings.store_path)?;
            match store.get_string(key) {
                Ok(value) => println!("{}", value),
                Err(Error::Corrupt { .. }) => {
                    // Not a string value; show the raw bytes instead
                    if let Some(raw) = store.get_raw(key) {
                        println!("{}", hex(raw));
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}

/// Restart the consumer after a write; failure is a warning, not an error
fn maybe_restart(settings: &Settings) {
    if !settings.restart {
        return;
    }
    match restart::restart(&settings.process_name) {
        Ok(()) => println!("Restarted {}", settings.process_name),
        Err(e) => {
            eprintln!(
                "warning: could not restart {}: {}",
                settings.process_name, e
            );
            eprintln!("         toggle the input method off and on to pick up the change");
        }
    }
}

fn entry_count(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rendering() {
        assert_eq!(hex(&[0x00, 0xab, 0x01]), "00ab01");
        assert_eq!(hex(&[]), "");
    }

    #[test]
    fn test_entry_count_pluralization() {
        assert_eq!(entry_count(0), "0 entries");
        assert_eq!(entry_count(1), "1 entry");
        assert_eq!(entry_count(2), "2 entries");
    }
}
