use thiserror::Error;

use crate::model::{Bytes32, Role};

/// Result type alias using ConsulError
pub type Result<T> = std::result::Result<T, ConsulError>;

/// Error taxonomy of the registry core
///
/// Every failure aborts the whole call with zero state mutation; nothing is
/// retried or recovered internally. The `Display` renderings of the first
/// three variants are the caller-visible revert reasons and are stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsulError {
    /// Caller lacks the role gating the operation
    #[error("Address does not have {role} permission")]
    PermissionDenied { role: Role },

    /// Praetor index at or beyond the current roster length
    #[error("Praetor index out of range: {index} (roster length {len})")]
    PraetorIndexOutOfRange { index: usize, len: usize },

    /// Payload id already present; payloads are write-once until removed
    #[error("Payload already exists")]
    PayloadExists { id: Bytes32 },

    /// Input string is not valid hex of the expected width
    #[error("Invalid hex for {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    /// Role name outside the hierarchy
    #[error("Unknown role: {name}")]
    UnknownRole { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_reason_strings() {
        let owner = ConsulError::PermissionDenied { role: Role::Owner };
        assert_eq!(owner.to_string(), "Address does not have owner permission");

        let controller = ConsulError::PermissionDenied {
            role: Role::Controller,
        };
        assert_eq!(
            controller.to_string(),
            "Address does not have controller permission"
        );
    }

    #[test]
    fn test_payload_exists_reason_string() {
        let err = ConsulError::PayloadExists {
            id: Bytes32::hash_of(b"payload"),
        };
        assert_eq!(err.to_string(), "Payload already exists");
    }
}
