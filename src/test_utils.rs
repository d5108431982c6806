//! Test utilities: node builders and a shared sample tree.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::tree::Node;

/// Build a file node with the default `-rw-r--r--` permissions.
pub fn file(name: &str, size: u64, time_modified: i64) -> Node {
    Node::File {
        name: name.to_string(),
        size,
        time_modified,
        permissions: "-rw-r--r--".to_string(),
    }
}

/// Build a directory node with the default `drwxr-xr-x` permissions.
pub fn dir(name: &str, size: u64, time_modified: i64, children: Vec<Node>) -> Node {
    Node::Dir {
        name: name.to_string(),
        size,
        time_modified,
        permissions: "drwxr-xr-x".to_string(),
        children,
    }
}

/// The canonical input document used across unit tests, integration
/// tests and benchmarks: a small interpreter project with two hidden
/// entries, one nested subdirectory and distinct modification times.
pub const SAMPLE_JSON: &str = r#"{
  "name": "interpreter",
  "size": 4096,
  "time_modified": 1699957865,
  "permissions": "drwxr-xr-x",
  "contents": [
    {"name": ".config", "size": 4096, "time_modified": 1699941437, "permissions": "drwxr-xr-x", "contents": []},
    {"name": ".gitignore", "size": 30, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
    {"name": "LICENSE", "size": 1071, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
    {"name": "README.md", "size": 83, "time_modified": 1699941437, "permissions": "-rw-r--r--"},
    {"name": "ast", "size": 4096, "time_modified": 1699957739, "permissions": "drwxr-xr-x", "contents": [
      {"name": "go.py", "size": 533, "time_modified": 1699957780, "permissions": "-rw-r--r--"},
      {"name": "unique.py", "size": 1356, "time_modified": 1699957754, "permissions": "-rw-r--r--"}
    ]},
    {"name": "interpreter.py", "size": 4204, "time_modified": 1699957865, "permissions": "-rw-r--r--"},
    {"name": "lexer.py", "size": 2953, "time_modified": 1699955487, "permissions": "-rw-r--r--"},
    {"name": "main.py", "size": 74, "time_modified": 1699957722, "permissions": "-rw-r--r--"},
    {"name": "parser.py", "size": 1410, "time_modified": 1699957763, "permissions": "-rw-r--r--"},
    {"name": "token_types.py", "size": 421, "time_modified": 1699954587, "permissions": "-rw-r--r--"}
  ]
}"#;

/// The sample document as a typed tree.
pub fn sample_tree() -> Node {
    serde_json::from_str(SAMPLE_JSON).expect("sample tree should parse")
}

/// A temporary directory holding an input document for binary tests.
///
/// Cleaned up on drop. `new` seeds the default `structure.json` with
/// the sample tree; `write_structure` replaces or adds documents.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let this = Self::empty();
        this.write_structure("structure.json", SAMPLE_JSON);
        this
    }

    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_structure(&self, name: &str, json: &str) {
        fs::write(self.dir.path().join(name), json).expect("Failed to write structure");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
