#![forbid(unsafe_code)]

//! Restarting the consuming application
//!
//! The input method keeps the store memory-mapped, so it will not notice an
//! on-disk change until it reloads. Killing the process is enough: the OS
//! relaunches registered input methods automatically. This is a liveness
//! workaround, not a locking protocol, and failure is recoverable by the
//! user toggling the input method off and on.

use std::io;
use std::process::Command;

/// Kill `process_name` so it relaunches and rereads the store
///
/// A non-zero exit from `killall` means the process was not running, which
/// counts as success. Only a spawn failure is an error.
pub fn restart(process_name: &str) -> io::Result<()> {
    Command::new("killall").arg(process_name).output()?;
    Ok(())
}
