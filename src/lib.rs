//! jls - ls for directory trees described by a JSON document

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{LsError, LsResult};
pub use output::{EntryFilter, ListFormatter, ListOptions, format_size, format_time};
pub use tree::{Node, resolve};
