//! Cross-cutting error types for Colab.
//!
//! `CoreError` covers the domain failures any crate can raise. Store failures
//! live in `colab-db` (`DatabaseError`) and are folded into the same
//! [`ErrorKind`] categories by `ServiceError::kind`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Domain errors raised by validation, authorization, and workflow rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or out-of-range input. Always caller-fixable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No authenticated identity, or the identity has no account.
    #[error("Authentication required")]
    Unauthorized,

    /// Authenticated, but not permitted to act on this resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// The write would break a uniqueness or membership invariant.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },
}

impl CoreError {
    pub fn not_found(entity_type: &str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict(_) | Self::InvalidTransition { .. } => ErrorKind::Conflict,
        }
    }
}

/// Stable, externally observable error category.
///
/// Clients branch on this rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Store,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_is_a_conflict() {
        let err = CoreError::InvalidTransition {
            entity_type: "invitation".into(),
            id: "7".into(),
            from: "accepted".into(),
            to: "rejected".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(
            err.to_string(),
            "Invalid state transition: invitation 7 from accepted to rejected"
        );
    }

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = CoreError::not_found("project", 42);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Entity not found: project 42");
    }

    #[test]
    fn kinds_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorKind::NotFound).unwrap(),
            "\"not_found\""
        );
        assert_eq!(ErrorKind::Store.to_string(), "store");
    }
}
