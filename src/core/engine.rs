//! Ledger engine
//!
//! This module provides the `LedgerEngine`, which drives transactions through
//! their lifecycle by coordinating the transaction entity with a
//! [`TransactionRepository`].
//!
//! For every command the engine:
//! - resolves the caller-side reference to a transaction identifier
//! - loads the transaction from the repository
//! - applies the requested operation on the entity
//! - persists the result, but only when the entity accepted the operation
//!
//! A transition that fails validation may already have changed the status of
//! the loaded copy, so that copy is dropped instead of being saved.

use crate::core::traits::TransactionRepository;
use crate::core::transaction_store::InMemoryTransactionRepository;
use crate::types::{
    Command, CommandKind, CommandRecord, LedgerError, Transaction, TransactionError,
    TransactionId, TransactionRef,
};
use std::collections::HashMap;
use tracing::debug;

/// Single-threaded ledger over any repository
pub struct LedgerEngine<R = InMemoryTransactionRepository> {
    repository: R,
    /// Caller-side reference to transaction identifier
    references: HashMap<TransactionRef, TransactionId>,
}

impl LedgerEngine<InMemoryTransactionRepository> {
    /// Create a ledger backed by an empty in-memory repository
    pub fn new() -> Self {
        Self::with_repository(InMemoryTransactionRepository::new())
    }
}

impl Default for LedgerEngine<InMemoryTransactionRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TransactionRepository> LedgerEngine<R> {
    /// Create a ledger persisting to `repository`
    pub fn with_repository(repository: R) -> Self {
        LedgerEngine {
            repository,
            references: HashMap::new(),
        }
    }

    /// Process a single command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a register command reuses a reference
    /// - a transition command references an unknown transaction
    /// - the transaction rejects the operation (validation or lifecycle)
    /// - the repository rejects the write
    pub fn process(&mut self, record: CommandRecord) -> Result<(), LedgerError> {
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
                self.repository.register(&transaction)?;
                self.references.insert(tx_ref, transaction.id());

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

    /// Load, transition and save one transaction
    fn process_transition<F>(
        &mut self,
        tx_ref: TransactionRef,
        kind: CommandKind,
        transition: F,
    ) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut Transaction) -> Result<(), TransactionError>,
    {
        let id = *self
            .references
            .get(&tx_ref)
            .ok_or_else(|| LedgerError::unknown_reference(tx_ref, kind.as_str()))?;

        let mut transaction = self.repository.find(id)?;
        transition(&mut transaction)?;
        self.repository.save(&transaction)?;

        debug!(tx = tx_ref, %id, status = %transaction.status, "transaction {}", kind);
        Ok(())
    }

    /// Look up the transaction registered under a reference
    pub fn find(&self, tx_ref: TransactionRef) -> Result<Transaction, LedgerError> {
        let id = self
            .references
            .get(&tx_ref)
            .ok_or_else(|| LedgerError::unknown_reference(tx_ref, "find"))?;

        Ok(self.repository.find(*id)?)
    }

    /// Every registered transaction with its reference, sorted by reference
    pub fn transactions(&self) -> Result<Vec<(TransactionRef, Transaction)>, LedgerError> {
        let mut rows = self
            .references
            .iter()
            .map(|(tx_ref, id)| -> Result<_, LedgerError> {
                Ok((*tx_ref, self.repository.find(*id)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.sort_by_key(|(tx_ref, _)| *tx_ref);
        Ok(rows)
    }

    /// The underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }
}
