//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `base`: Identity and audit timestamps shared by entities
//! - `account`: Account and Pix key references
//! - `transaction`: The transaction entity and its status lifecycle
//! - `command`: Ledger commands read from input files
//! - `error`: Error types for the ledger

pub mod account;
pub mod base;
pub mod command;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId, PixKey, PixKeyId};
pub use base::Base;
pub use command::{Command, CommandKind, CommandRecord};
pub use error::{LedgerError, RepositoryError, TransactionError};
pub use transaction::{
    PixKeyRef, Transaction, TransactionId, TransactionRef, TransactionStatus,
};
