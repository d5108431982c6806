//! Error types for jls
//!
//! Both variants are user-input errors. They travel up as `Result` values
//! and are printed verbatim at the CLI boundary; the library never prints
//! and never exits.

use thiserror::Error;

/// Result type alias for jls operations
pub type LsResult<T> = Result<T, LsError>;

/// Errors produced while validating options or resolving a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LsError {
    /// `--filter` was given a value other than `file` or `dir`
    #[error("error: {value} is not a valid filter criteria. Available filters are 'file' or 'dir'.")]
    InvalidFilter { value: String },

    /// No entry in the tree matched the requested path
    #[error("cannot access {path}: No such file or directory")]
    PathNotFound { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_display() {
        let err = LsError::InvalidFilter {
            value: "files".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "error: files is not a valid filter criteria. Available filters are 'file' or 'dir'."
        );
    }

    #[test]
    fn test_path_not_found_display() {
        let err = LsError::PathNotFound {
            path: "dir4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot access dir4: No such file or directory"
        );
    }

    #[test]
    fn test_path_not_found_keeps_full_path() {
        let err = LsError::PathNotFound {
            path: "root/dir1/fake".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot access root/dir1/fake: No such file or directory"
        );
    }
}
