//! Error types for the Pix transaction ledger
//!
//! Errors are split by the layer that raises them:
//!
//! - **[`TransactionError`]**: a transaction violates a business rule, or a
//!   status transition is not allowed
//! - **[`RepositoryError`]**: the persistence boundary rejects a write or
//!   cannot find a transaction
//! - **[`LedgerError`]**: everything the ledger engine and its I/O can report,
//!   wrapping the two above

use super::account::AccountId;
use super::transaction::{TransactionId, TransactionRef, TransactionStatus};
use rust_decimal::Decimal;
use thiserror::Error;

/// Validation and lifecycle errors raised by the transaction entity
///
/// Every failing operation reports exactly one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionError {
    /// A required field or reference is absent
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// Amount is zero or negative
    #[error("The amount must be greater than 0, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Status value outside the lifecycle
    #[error("Invalid status '{status}' for this transaction")]
    InvalidStatus {
        /// The rejected status value
        status: String,
    },

    /// Source and destination resolve to the same account
    #[error("The source and destination account must not be the same: {account}")]
    SameAccount {
        /// The account on both sides of the transfer
        account: AccountId,
    },

    /// The lifecycle does not allow moving between these statuses
    #[error("Transaction {id} cannot move from {from} to {to}")]
    InvalidTransition {
        /// Transaction identifier
        id: TransactionId,
        /// Current status
        from: TransactionStatus,
        /// Requested status
        to: TransactionStatus,
    },
}

impl TransactionError {
    /// Create a MissingField error
    pub fn missing_field(field: &'static str) -> Self {
        TransactionError::MissingField { field }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        TransactionError::InvalidAmount { amount }
    }

    /// Create an InvalidStatus error
    pub fn invalid_status(status: &str) -> Self {
        TransactionError::InvalidStatus {
            status: status.to_string(),
        }
    }

    /// Create a SameAccount error
    pub fn same_account(account: &str) -> Self {
        TransactionError::SameAccount {
            account: account.to_string(),
        }
    }

    /// Create an InvalidTransition error
    pub fn invalid_transition(
        id: TransactionId,
        from: TransactionStatus,
        to: TransactionStatus,
    ) -> Self {
        TransactionError::InvalidTransition { id, from, to }
    }
}

/// Errors raised by transaction repositories
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// A transaction with this identifier is already registered
    #[error("Transaction {id} already exists")]
    AlreadyExists {
        /// Transaction identifier
        id: TransactionId,
    },

    /// No transaction with this identifier
    #[error("Transaction {id} not found")]
    NotFound {
        /// Transaction identifier
        id: TransactionId,
    },

    /// The backing store rejected the operation
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the failure
        message: String,
    },
}

impl RepositoryError {
    /// Create an AlreadyExists error
    pub fn already_exists(id: TransactionId) -> Self {
        RepositoryError::AlreadyExists { id }
    }

    /// Create a NotFound error
    pub fn not_found(id: TransactionId) -> Self {
        RepositoryError::NotFound { id }
    }
}

/// Main error type for the ledger engine and its I/O
///
/// Per-record errors (everything except file and output failures) are
/// recoverable: the record is skipped and processing continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed input record
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A command references a transaction that was never registered
    #[error("Unknown transaction reference {tx} for {operation}")]
    UnknownReference {
        /// Caller-side reference
        tx: TransactionRef,
        /// Operation that failed
        operation: String,
    },

    /// A register command reuses a reference
    #[error("Duplicate transaction reference {tx}")]
    DuplicateReference {
        /// Caller-side reference
        tx: TransactionRef,
    },

    /// The transaction rejected the command
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// The repository rejected the command
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an UnknownReference error
    pub fn unknown_reference(tx: TransactionRef, operation: &str) -> Self {
        LedgerError::UnknownReference {
            tx,
            operation: operation.to_string(),
        }
    }

    /// Create a DuplicateReference error
    pub fn duplicate_reference(tx: TransactionRef) -> Self {
        LedgerError::DuplicateReference { tx }
    }

    /// Create a ParseError without line information
    pub fn parse(message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line: None,
            message: message.into(),
        }
    }
}
