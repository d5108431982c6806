//! Listing configuration types

use std::str::FromStr;

use crate::error::LsError;
use crate::tree::Node;

/// Restrict a listing to one kind of entry (`--filter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    /// Non-directories only
    File,
    /// Directories only
    Dir,
}

impl EntryFilter {
    /// Whether the given node survives this filter.
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            EntryFilter::File => !node.is_dir(),
            EntryFilter::Dir => node.is_dir(),
        }
    }
}

impl FromStr for EntryFilter {
    type Err = LsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "file" => Ok(EntryFilter::File),
            "dir" => Ok(EntryFilter::Dir),
            _ => Err(LsError::InvalidFilter {
                value: value.to_string(),
            }),
        }
    }
}

/// Options for one listing run, built from the CLI and never mutated.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Slash-separated path to resolve inside the tree
    pub path: String,
    /// Include entries whose names start with a dot (-A)
    pub show_hidden: bool,
    /// Long/detail format (-l)
    pub long_format: bool,
    /// Reverse the final order (-r)
    pub reverse_order: bool,
    /// Stable sort by modification time, oldest first (-t)
    pub sort_by_time: bool,
    /// Abbreviate sizes in the long format (-h)
    pub human_readable: bool,
    /// Restrict the listing to files or directories (--filter)
    pub filter: Option<EntryFilter>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            show_hidden: false,
            long_format: false,
            reverse_order: false,
            sort_by_time: false,
            human_readable: false,
            filter: None,
        }
    }
}
