//! Error types for the pwallet CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::copy::CopyError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for wallet operations.
///
/// Each variant maps to a specific process exit code.
#[derive(Error, Debug)]
pub enum WalletError {
    /// User provided invalid arguments or input that fails validation.
    #[error("{0}")]
    UserError(String),

    /// No prompt with the given id exists in the collection.
    #[error("prompt #{0} does not exist or has been deleted")]
    NotFound(i64),

    /// Reading or writing persisted data failed.
    #[error("Storage failure: {0}")]
    StorageError(String),

    /// The copy action refused or failed to write the clipboard.
    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl WalletError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WalletError::UserError(_) => exit_codes::USER_ERROR,
            WalletError::NotFound(_) => exit_codes::NOT_FOUND,
            WalletError::StorageError(_) => exit_codes::STORAGE_FAILURE,
            WalletError::Copy(CopyError::Rejected { .. }) => exit_codes::COPY_REJECTED,
            WalletError::Copy(CopyError::Backend(_)) => exit_codes::CLIPBOARD_FAILURE,
        }
    }
}

/// Result type alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
