//! Error types for artifact resolution and relocation.

use thiserror::Error;

/// Errors that can occur while resolving or relocating artifact resources.
///
/// Every variant aborts the current invocation; nothing is retried
/// internally. `NotFound` and `MemberNotFound` together form the
/// unresolved-resource class: the referenced artifact archive exists on the
/// job but the store object or zip member behind it does not.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The job's user-parameters string could not be decoded into a
    /// put configuration.
    #[error("Invalid job configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A source path did not match the `<artifact>::<file>` grammar.
    #[error("Invalid artifact reference '{reference}': expected '<artifact>::<file>'")]
    InvalidReference { reference: String },

    /// The referenced artifact is not among the job's input artifacts.
    #[error("Artifact '{name}' is not an input artifact of this job")]
    UnresolvedArtifact { name: String },

    /// The store has no object at the given location.
    #[error("Object not found at '{bucket}/{key}'")]
    NotFound { bucket: String, key: String },

    /// The artifact archive does not contain the named file.
    #[error("File '{file}' not found in artifact archive")]
    MemberNotFound { file: String },

    /// The fetched object could not be opened as a zip archive.
    #[error("Artifact archive is not a readable zip: {message}")]
    BadArchive { message: String },

    /// An extracted member that should be text was not valid UTF-8.
    #[error("File '{file}' is not valid UTF-8 text")]
    BadEncoding { file: String },

    /// An extracted member referenced with a field name could not be
    /// decoded as a JSON document.
    #[error("File '{file}' is not a valid JSON document: {message}")]
    BadDocument { file: String, message: String },

    /// A referenced JSON field is absent from the decoded file, or holds a
    /// falsy value (`null`, `false`, `0`, `""`).
    #[error("Field '{field}' is missing or empty in '{file}'")]
    MissingField { field: String, file: String },

    /// Writing the destination object failed.
    #[error("Failed to write object to '{bucket}/{key}': {message}")]
    WriteFailed {
        bucket: String,
        key: String,
        message: String,
    },

    /// A store operation failed for a reason other than absence.
    #[error("Object store error: {message}")]
    Store { message: String },

    /// Reporting the job result back to the pipeline failed.
    #[error("Failed to report job result: {message}")]
    Report { message: String },
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offending_names() {
        let err = RelayError::UnresolvedArtifact {
            name: "BuildOutput".to_string(),
        };
        assert!(err.to_string().contains("BuildOutput"));

        let err = RelayError::MissingField {
            field: "version".to_string(),
            file: "manifest.json".to_string(),
        };
        assert!(err.to_string().contains("version"));
        assert!(err.to_string().contains("manifest.json"));
    }
}
