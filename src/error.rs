use std::path::PathBuf;
use thiserror::Error;

/// Every way a generator run can fail. All of them are fatal.
#[derive(Error, Debug)]
pub enum GenError {
    /// The document is not valid JSON.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// A section or field is missing, unexpected, or of the wrong kind.
    #[error("schema error in {context}: {message}")]
    Schema { context: String, message: String },

    /// A well-formed record breaks one of its range invariants.
    #[error("Failed to validate {name}: {message}\n  record: {dump}")]
    Validation {
        name: String,
        message: String,
        dump: String,
    },

    #[error("IO error with {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub fn schema(context: impl Into<String>, message: impl Into<String>) -> Self {
        GenError::Schema {
            context: context.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::Parse {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
