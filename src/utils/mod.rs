//! Utility modules.
//!
//! - [`path`]: forward-slash path joining and normalization
//! - [`plural`]: log message pluralization

pub mod path;
pub mod plural;

pub use plural::plural_s;
