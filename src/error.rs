//! Error types surfaced while loading asset graphs and assembling bundles.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while resolving an asset graph or assembling the bundled document.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The entry page or a directly requested file does not exist.
    #[error("no such file: `{0}`")]
    NotFound(PathBuf),

    /// An asset references one of its own ancestors in the dependency tree.
    #[error("circular asset reference involving `{0}`")]
    CircularReference(PathBuf),

    /// The entry document lacks an element required for block insertion.
    #[error("document has no `<{0}>` element")]
    MissingElement(&'static str),

    /// The directory that should receive the bundled file does not exist.
    #[error("output directory does not exist: `{0}`")]
    InvalidOutputTarget(PathBuf),

    /// Reading or writing a file failed.
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Result alias used across the crate.
pub type BundleResult<T> = Result<T, BundleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paths_in_messages() {
        let err = BundleError::NotFound(PathBuf::from("site/index.html"));
        assert!(format!("{err}").contains("site/index.html"));

        let err = BundleError::MissingElement("head");
        assert_eq!(format!("{err}"), "document has no `<head>` element");
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BundleError::Io(PathBuf::from("out.html"), inner);
        assert!(err.source().is_some());
    }
}
