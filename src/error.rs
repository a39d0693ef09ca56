use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON (de)serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid {field} on {entity}: {reason}")]
    Validation {
        entity: String,
        field: &'static str,
        reason: String,
    },

    #[error("Library file parsing error: {0}")]
    ParseError(String),
}

impl Error {
    pub(crate) fn validation(
        entity: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Error::Validation {
            entity: entity.into(),
            field,
            reason: reason.into(),
        }
    }

    /// Prefixes the entity of a [`Error::Validation`] with its enclosing entity.
    /// Other variants pass through untouched.
    pub(crate) fn within(self, outer: &str) -> Self {
        match self {
            Error::Validation {
                entity,
                field,
                reason,
            } => Error::Validation {
                entity: format!("{} / {}", outer, entity),
                field,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
