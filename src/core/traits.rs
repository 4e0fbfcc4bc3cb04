//! Persistence boundary for transactions
//!
//! The transaction entity never talks to storage itself. Orchestration code
//! (the ledger engines) persists transactions through this trait, so the
//! in-memory and concurrent stores can be used interchangeably.

use crate::types::{RepositoryError, Transaction, TransactionId};

/// Storage contract for transactions
///
/// Implementations decide how transactions are stored; callers only rely on
/// the outcomes documented below.
pub trait TransactionRepository {
    /// Persist a newly created transaction
    ///
    /// Fails with `RepositoryError::AlreadyExists` if the identifier is
    /// already stored.
    fn register(&mut self, transaction: &Transaction) -> Result<(), RepositoryError>;

    /// Persist an update of a stored transaction
    ///
    /// Fails with `RepositoryError::NotFound` if the identifier is unknown.
    fn save(&mut self, transaction: &Transaction) -> Result<(), RepositoryError>;

    /// Retrieve a copy of a stored transaction
    ///
    /// Fails with `RepositoryError::NotFound` if the identifier is unknown.
    fn find(&self, id: TransactionId) -> Result<Transaction, RepositoryError>;
}
