//! Thread-safe transaction repository for async batch processing
//!
//! This module provides the `ConcurrentTransactionRepository`, which stores
//! transactions in a `DashMap` so that many tasks can register, save and find
//! transactions at the same time.
//!
//! # Design
//!
//! DashMap shards its entries and locks per shard. Operations on different
//! transactions proceed in parallel, operations on the same transaction are
//! serialized. Registration is atomic: when two tasks register the same
//! identifier concurrently exactly one succeeds.
//!
//! The repository also implements [`TransactionRepository`], so the
//! synchronous `LedgerEngine` can run on top of it.

use crate::core::traits::TransactionRepository;
use crate::types::{RepositoryError, Transaction, TransactionId};
use dashmap::DashMap;

/// DashMap-backed transaction repository
#[derive(Debug, Default)]
pub struct ConcurrentTransactionRepository {
    /// Last persisted state of every transaction, by identifier
    transactions: DashMap<TransactionId, Transaction>,
}

impl ConcurrentTransactionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            transactions: DashMap::new(),
        }
    }

    /// Persist a newly created transaction (thread-safe)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The transaction was stored
    /// * `Err(RepositoryError::AlreadyExists)` - The identifier is taken; the
    ///   stored transaction is left as it was
    pub fn register(&self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let id = transaction.id();
        let mut inserted = false;

        // First writer wins; the shard lock makes check and insert atomic.
        self.transactions.entry(id).or_insert_with(|| {
            inserted = true;
            transaction.clone()
        });

        if inserted {
            Ok(())
        } else {
            Err(RepositoryError::already_exists(id))
        }
    }

    /// Persist an update of a stored transaction (thread-safe)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The stored copy was replaced
    /// * `Err(RepositoryError::NotFound)` - The identifier is unknown
    pub fn save(&self, transaction: &Transaction) -> Result<(), RepositoryError> {
        let id = transaction.id();
        match self.transactions.get_mut(&id) {
            Some(mut entry) => {
                *entry.value_mut() = transaction.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found(id)),
        }
    }

    /// Retrieve a copy of a stored transaction (thread-safe)
    ///
    /// The copy is taken under the shard lock and returned without holding it.
    pub fn find(&self, id: TransactionId) -> Result<Transaction, RepositoryError> {
        self.transactions
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RepositoryError::not_found(id))
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
        self.transactions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl TransactionRepository for ConcurrentTransactionRepository {
    fn register(&mut self, transaction: &Transaction) -> Result<(), RepositoryError> {
        ConcurrentTransactionRepository::register(self, transaction)
    }

    fn save(&mut self, transaction: &Transaction) -> Result<(), RepositoryError> {
        ConcurrentTransactionRepository::save(self, transaction)
    }

    fn find(&self, id: TransactionId) -> Result<Transaction, RepositoryError> {
        ConcurrentTransactionRepository::find(self, id)
    }
}
