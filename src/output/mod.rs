//! Listing options and rendering
//!
//! This module turns a resolved node into the final listing text:
//!
//! - `config` - per-run options and the `--filter` kind
//! - `format` - size and time field helpers for the long format
//! - `list` - the filter -> sort -> reverse -> render pipeline

mod config;
mod format;
mod list;

// Re-export public types and functions
pub use config::{EntryFilter, ListOptions};
pub use format::{format_size, format_time};
pub use list::ListFormatter;
