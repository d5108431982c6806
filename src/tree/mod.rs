//! Node model and path resolution for the JSON directory tree
//!
//! A tree arrives as one JSON document: a recursive object where an entry
//! is a directory exactly when it carries a `contents` array. This module
//! owns the typed form of that document and the lookup of a
//! slash-separated path within it. Nothing here renders output and
//! nothing here mutates the tree; both halves borrow it read-only.

mod node;
mod resolve;

// Re-export public types
pub use node::Node;
pub use resolve::resolve;
