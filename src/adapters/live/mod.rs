//! Live adapters for real external interactions.

pub mod console;
pub mod filesystem;
