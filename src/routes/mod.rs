//! Route tables built from many resolved permalinks.
//!
//! - [`content_map`]: serverless url pattern -> input path
//! - [`conflict`]: output paths claimed by more than one input

pub mod conflict;
pub mod content_map;

pub use conflict::{OutputConflict, detect_output_conflicts, print_output_conflicts};
pub use content_map::{ContentMap, PatternConflict};

use crate::permalink::Permalink;

/// A page's input path together with its resolved permalink.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub input_path: String,
    pub permalink: Permalink,
}

impl RouteEntry {
    pub fn new(input_path: impl Into<String>, permalink: Permalink) -> Self {
        Self {
            input_path: input_path.into(),
            permalink,
        }
    }
}
