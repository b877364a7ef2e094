//! Error types for the catalog.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while building or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0} is not a known application with a tree.")]
    TreeNotFound(String),

    #[error("{0} is not a known application with data.")]
    DataNotFound(String),

    #[error("Invalid catalog for {application}: {message}")]
    InvalidCatalog { application: String, message: String },

    #[error("YAML error in {source_name}: {error}")]
    Yaml {
        source_name: String,
        #[source]
        error: serde_yaml::Error,
    },
}

impl CatalogError {
    pub fn invalid(application: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::InvalidCatalog {
            application: application.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a failed lookup of an application key.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::TreeNotFound(_) | CatalogError::DataNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = CatalogError::TreeNotFound("unknown_app".to_string());
        assert_eq!(
            err.to_string(),
            "unknown_app is not a known application with a tree."
        );
        assert!(err.is_not_found());

        let err = CatalogError::DataNotFound("unknown_app".to_string());
        assert_eq!(
            err.to_string(),
            "unknown_app is not a known application with data."
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_is_not_lookup_failure() {
        let err = CatalogError::invalid("vasp", "bad result key");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Invalid catalog for vasp: bad result key");
    }
}
