//! Adapter implementations of the port traits.
//!
//! `live` talks to the real terminal and disk. `recording` wraps or replaces
//! them so tests can script operator input and inspect filesystem calls.

pub mod live;
pub mod recording;
