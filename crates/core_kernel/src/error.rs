//! Core error types used across the system

use std::fmt;

use thiserror::Error;

/// Errors raised by the kernel's identifier types and lookups built on them
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid {kind} identifier '{value}': {source}")]
    InvalidIdentifier {
        kind: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
