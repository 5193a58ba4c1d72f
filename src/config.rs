//! Configuration file parsing and path resolution

pub mod file;
pub mod settings;

pub use file::FileConfig;
pub use settings::Settings;
