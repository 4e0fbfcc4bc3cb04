//! In-memory transaction repository
//!
//! This module provides the `InMemoryTransactionRepository`, a single-threaded
//! implementation of the [`TransactionRepository`] contract backed by a
//! HashMap. It is what the synchronous ledger engine persists to.
//!
//! # Copies
//!
//! The repository stores its own copy of every transaction. Mutating a
//! transaction returned by `find` has no effect until it is passed to `save`.

use crate::core::traits::TransactionRepository;
use crate::types::{RepositoryError, Transaction, TransactionId};
use std::collections::HashMap;

/// HashMap-backed transaction repository
#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    /// Map of transaction ID to the last persisted state
    transactions: HashMap<TransactionId, Transaction>,
}

impl InMemoryTransactionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        InMemoryTransactionRepository {
            transactions: HashMap::new(),
        }
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Snapshot of every stored transaction, in no particular order
    pub fn all(&self) -> Vec<Transaction> {
        self.transactions.values().cloned().collect()
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn register(&mut self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let id = transaction.id();
        if self.transactions.contains_key(&id) {
            return Err(RepositoryError::already_exists(id));
        }

        self.transactions.insert(id, transaction.clone());
        Ok(())
    }

    fn save(&mut self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let id = transaction.id();
        let stored = self
            .transactions
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        *stored = transaction.clone();
        Ok(())
    }

    fn find(&self, id: TransactionId) -> Result<Transaction, RepositoryError> {
        self.transactions
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }
}
