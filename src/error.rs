use thiserror::Error;

/// Unified error type for buildver operations
#[derive(Error, Debug)]
pub enum BuildVerError {
    #[error("Git query failed for '{rev}': {source}")]
    Query {
        rev: String,
        #[source]
        source: git2::Error,
    },

    #[error("Descriptor parsing error: '{0}' is not of the form <tag>-<count>-<hash>")]
    Parse(String),

    #[error("Commit count error: {field} '{value}' is not an integer")]
    Numeric { field: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in buildver
pub type Result<T> = std::result::Result<T, BuildVerError>;

impl BuildVerError {
    /// Create a query error naming the revision that failed
    pub fn query(rev: impl Into<String>, source: git2::Error) -> Self {
        BuildVerError::Query {
            rev: rev.into(),
            source,
        }
    }

    /// Create a parse error carrying the offending descriptor
    pub fn parse(descriptor: impl Into<String>) -> Self {
        BuildVerError::Parse(descriptor.into())
    }

    /// Create a numeric error for a field that did not parse as an integer
    pub fn numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        BuildVerError::Numeric {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BuildVerError::Config(msg.into())
    }
}
