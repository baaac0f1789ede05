//! Configuration types
//!
//! Board-agnostic configuration structures. The host binary fills them from
//! an optional TOML file and command-line overrides.

pub mod types;

pub use types::*;
