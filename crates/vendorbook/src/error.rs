//! Error types for vendor directory operations

use thiserror::Error;

use crate::record::VendorId;

/// Errors raised by [`VendorDirectory`](crate::VendorDirectory) operations.
///
/// Every variant is raised before the directory is touched, so a failed
/// operation always leaves the directory unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Input fails a record invariant
    #[error("Validation error: {field} {message}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// No record with this id exists
    #[error("Vendor not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: VendorId,
    },

    /// The id counter has no values left
    #[error("Vendor ids exhausted: no id left after {last}")]
    IdsExhausted {
        /// The last id handed out
        last: VendorId,
    },
}

impl DirectoryError {
    /// Build a validation error for `field`.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns true for [`DirectoryError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true for [`DirectoryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
