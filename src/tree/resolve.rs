//! Path resolution within the JSON tree

use crate::error::{LsError, LsResult};
use crate::tree::Node;

/// Resolve a slash-separated path to a node in the tree.
///
/// Empty and `.` segments are discarded, so `.`, `./` and `a//b` behave
/// like their cleaned forms. A leading segment equal to the root's own
/// name is an alias for the root itself, which makes `root`, `root/dir1`
/// and plain `dir1` all valid spellings of the same lookups. Every other
/// segment must name an immediate child of the node reached so far; the
/// first segment that does not (including any segment applied to a file)
/// fails the whole resolution with the original path in the error.
///
/// Resolution never backtracks and never follows `..`; names compare
/// byte-for-byte, so it is case-sensitive.
pub fn resolve<'a>(root: &'a Node, path: &str) -> LsResult<&'a Node> {
    let mut segments = path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .peekable();

    if segments.peek() == Some(&root.name()) {
        segments.next();
    }

    let mut current = root;
    for segment in segments {
        current = child_named(current, segment).ok_or_else(|| LsError::PathNotFound {
            path: path.to_string(),
        })?;
    }
    Ok(current)
}

/// Find an immediate child by name. Files have no children, so any
/// lookup against a file comes back `None`.
fn child_named<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    node.children()?.iter().find(|child| child.name() == name)
}
