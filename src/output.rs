//! Output formatting

pub mod human;
pub mod json;

pub use human::HumanFormatter;
