//! Error types for Folio core operations.
//!
//! This module defines well-structured error types using `thiserror` for
//! library-level errors, while higher-level code can use `anyhow` for
//! convenient error handling.

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Core error types for Folio operations.
///
/// Filtering itself is total and never fails; errors only arise at the
/// edges (catalog validation, slug lookup, configuration).
#[derive(Error, Debug)]
pub enum FolioError {
    // === Catalog Errors ===
    /// Two records in the same set share an identifier
    #[error("duplicate record id: {id}")]
    DuplicateId { id: String },

    /// Two blog posts share a slug
    #[error("duplicate blog slug: {slug}")]
    DuplicateSlug { slug: String },

    /// No blog post exists for the requested slug
    #[error("no blog post with slug '{slug}'")]
    PostNotFound { slug: String },

    // === Configuration Errors ===
    /// Configuration file parsing failed
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    // === I/O Errors ===
    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FolioError {
    /// Returns true if this error means the built-in content is invalid
    /// (a defect in the content module, not in caller input).
    pub fn is_content_defect(&self) -> bool {
        matches!(
            self,
            FolioError::DuplicateId { .. } | FolioError::DuplicateSlug { .. }
        )
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        FolioError::ConfigError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_content_defect() {
        let err = FolioError::DuplicateSlug {
            slug: "building-scalable-apis-nodejs".to_string(),
        };
        assert!(err.is_content_defect());

        let err = FolioError::PostNotFound {
            slug: "missing".to_string(),
        };
        assert!(!err.is_content_defect());
    }
}
