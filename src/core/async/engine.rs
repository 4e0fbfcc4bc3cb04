//! Ledger orchestration for async batch processing
//!
//! This module provides the `AsyncLedgerEngine`, the thread-safe counterpart
//! of `LedgerEngine`. It shares a `ConcurrentTransactionRepository` and a
//! reference index between all clones, so it can be handed to many tokio
//! tasks at once.
//!
//! # Architecture
//!
//! ```text
//! AsyncLedgerEngine
//!     ├── Arc<ConcurrentTransactionRepository>   (transactions by id)
//!     └── Arc<DashMap<TransactionRef, TransactionId>> (reference index)
//! ```
//!
//! # Ordering
//!
//! The engine does not order commands itself. Callers must not run two
//! commands for the same reference at the same time; `BatchProcessor`
//! guarantees this by partitioning on the reference.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::ConcurrentTransactionRepository;
use crate::types::{
    Command, CommandKind, CommandRecord, LedgerError, Transaction, TransactionError,
    TransactionId, TransactionRef,
};

/// Thread-safe ledger orchestrator
#[derive(Debug, Clone)]
pub struct AsyncLedgerEngine {
    /// Shared transaction storage
    repository: Arc<ConcurrentTransactionRepository>,

    /// Caller-side reference to transaction identifier
    references: Arc<DashMap<TransactionRef, TransactionId>>,
}

impl AsyncLedgerEngine {
    /// Create a new AsyncLedgerEngine over a shared repository
    pub fn new(repository: Arc<ConcurrentTransactionRepository>) -> Self {
        Self {
            repository,
            references: Arc::new(DashMap::new()),
        }
    }

    /// Process a single command (thread-safe)
    ///
    /// Same outcomes as `LedgerEngine::process`.
    pub fn process_command(&self, record: CommandRecord) -> Result<(), LedgerError> {
        let tx_ref = record.tx;

        match record.command {
            Command::Register {
                account_from,
                pix_key,
                amount,
                description,
            } => {
                if self.references.contains_key(&tx_ref) {
                    return Err(LedgerError::duplicate_reference(tx_ref));
                }

                let transaction = Transaction::new(&account_from, amount, &pix_key, description)?;
                self.claim_reference(tx_ref, transaction.id())?;

                if let Err(e) = self.repository.register(&transaction) {
                    self.references.remove(&tx_ref);
                    return Err(e.into());
                }

                debug!(tx = tx_ref, id = %transaction.id(), "transaction registered");
                Ok(())
            }
            Command::Complete => {
                self.process_transition(tx_ref, CommandKind::Complete, |tx| tx.complete())
            }
            Command::Confirm => {
                self.process_transition(tx_ref, CommandKind::Confirm, |tx| tx.confirm())
            }
            Command::Cancel { reason } => {
                self.process_transition(tx_ref, CommandKind::Cancel, move |tx| tx.cancel(reason))
            }
        }
    }

    /// Bind a reference to an identifier unless another task got there first
    fn claim_reference(&self, tx_ref: TransactionRef, id: TransactionId) -> Result<(), LedgerError> {
        let mut claimed = false;
        self.references.entry(tx_ref).or_insert_with(|| {
            claimed = true;
            id
        });

        if claimed {
            Ok(())
        } else {
            Err(LedgerError::duplicate_reference(tx_ref))
        }
    }

    fn process_transition<F>(
        &self,
        tx_ref: TransactionRef,
        kind: CommandKind,
        transition: F,
    ) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut Transaction) -> Result<(), TransactionError>,
    {
        let id = self
            .references
            .get(&tx_ref)
            .map(|entry| *entry.value())
            .ok_or_else(|| LedgerError::unknown_reference(tx_ref, kind.as_str()))?;

        let mut transaction = self.repository.find(id)?;
        transition(&mut transaction)?;
        self.repository.save(&transaction)?;

        debug!(tx = tx_ref, %id, status = %transaction.status, "transaction {}", kind);
        Ok(())
    }

    /// Every registered transaction with its reference, sorted by reference
    pub fn transactions(&self) -> Result<Vec<(TransactionRef, Transaction)>, LedgerError> {
        let index: Vec<(TransactionRef, TransactionId)> = self
            .references
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect();

        let mut rows = index
            .into_iter()
            .map(|(tx_ref, id)| -> Result<_, LedgerError> {
                Ok((tx_ref, self.repository.find(id)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.sort_by_key(|(tx_ref, _)| *tx_ref);
        Ok(rows)
    }
}
