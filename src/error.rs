//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`CatalogError`](crate::catalog::CatalogError),
//!   [`ArtworkError`](crate::artwork::ArtworkError)) for detailed handling
//!
//! Artwork failures never reach the user: they degrade to a placeholder.
//! Only startup failures (catalog loading) surface through [`Error`].

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be loaded or is inconsistent
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::catalog::CatalogError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Catalog(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use std::path::PathBuf;

    #[test]
    fn test_io_error_with_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "catalog.json missing",
        ));
        let msg = result.with_context("while loading settings").unwrap_err().to_string();
        assert!(msg.contains("while loading settings"));
        assert!(msg.contains("catalog.json missing"));
    }

    #[test]
    fn test_nested_context() {
        let err = Error::Io(std::io::Error::other("disk")).context("inner").context("outer");
        assert!(err.to_string().starts_with("outer"));
    }

    #[test]
    fn test_catalog_error_converts() {
        let err: Error = CatalogError::UnsupportedFormat(PathBuf::from("catalog.xml")).into();
        assert!(err.to_string().contains("catalog.xml"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), CatalogError> =
            Err(CatalogError::UnsupportedFormat(PathBuf::from("c.yaml")));
        let with_ctx = result.with_context("starting up");
        assert!(with_ctx.unwrap_err().to_string().contains("starting up"));
    }
}
