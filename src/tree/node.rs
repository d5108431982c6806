//! Typed node model for the JSON directory tree

use serde::Deserialize;

/// A single entry in the tree: a file, or a directory with children.
///
/// The input JSON carries no explicit type tag; an object is a directory
/// exactly when it has a `contents` array, and that presence is mapped
/// onto the variant during deserialization. Everything else about an
/// entry (`permissions` in particular) is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    File {
        name: String,
        size: u64,
        time_modified: i64,
        permissions: String,
    },
    Dir {
        name: String,
        size: u64,
        time_modified: i64,
        permissions: String,
        children: Vec<Node>,
    },
}

/// Wire shape of one entry, straight from the JSON document.
#[derive(Debug, Deserialize)]
struct RawNode {
    name: String,
    size: u64,
    time_modified: i64,
    permissions: String,
    #[serde(default)]
    contents: Option<Vec<RawNode>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw.contents {
            Some(contents) => Node::Dir {
                name: raw.name,
                size: raw.size,
                time_modified: raw.time_modified,
                permissions: raw.permissions,
                children: contents.into_iter().map(Node::from).collect(),
            },
            None => Node::File {
                name: raw.name,
                size: raw.size,
                time_modified: raw.time_modified,
                permissions: raw.permissions,
            },
        }
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Dir { name, .. } => name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } => *size,
            Node::Dir { size, .. } => *size,
        }
    }

    pub fn time_modified(&self) -> i64 {
        match self {
            Node::File { time_modified, .. } => *time_modified,
            Node::Dir { time_modified, .. } => *time_modified,
        }
    }

    pub fn permissions(&self) -> &str {
        match self {
            Node::File { permissions, .. } => permissions,
            Node::Dir { permissions, .. } => permissions,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir { .. })
    }

    /// Immediate children for a directory, `None` for a file.
    /// An empty directory is `Some(&[])`, not `None`.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Dir { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Entries whose names start with `.` are skipped unless `-A` is given.
    pub fn is_hidden(&self) -> bool {
        self.name().starts_with('.')
    }
}
