//! Batch processing with reference-based partitioning
//!
//! This module provides the `BatchProcessor`, which runs a batch of commands
//! concurrently while keeping every transaction's commands in input order.
//!
//! # Design
//!
//! A batch is split into one sub-batch per transaction reference. Each
//! sub-batch runs as its own tokio task and applies its commands one after
//! another, so at most one mutation per transaction is in flight while
//! different transactions progress in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, warn};

use super::AsyncLedgerEngine;
use crate::types::{CommandRecord, LedgerError, TransactionRef};

/// Result of processing a single command
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The command that was processed
    pub record: CommandRecord,

    /// The result of processing (success or error)
    pub result: Result<(), LedgerError>,
}

/// Batch processor with reference-based partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Thread-safe ledger engine shared by every task
    engine: Arc<AsyncLedgerEngine>,
}

impl BatchProcessor {
    /// Create a new BatchProcessor
    pub fn new(engine: Arc<AsyncLedgerEngine>) -> Self {
        Self { engine }
    }

    /// Partition a batch of commands by transaction reference
    ///
    /// Every command lands in exactly one sub-batch, and each sub-batch keeps
    /// the original relative order of its commands.
    pub fn partition_by_reference(
        &self,
        batch: Vec<CommandRecord>,
    ) -> HashMap<TransactionRef, Vec<CommandRecord>> {
        let mut partitions: HashMap<TransactionRef, Vec<CommandRecord>> = HashMap::new();

        for record in batch {
            partitions.entry(record.tx).or_default().push(record);
        }

        partitions
    }

    /// Apply all commands of one transaction sequentially
    ///
    /// Failed commands are logged and recorded; the remaining commands still run.
    pub async fn process_transaction_commands(
        &self,
        commands: Vec<CommandRecord>,
    ) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(commands.len());

        for record in commands {
            let result = self.engine.process_command(record.clone());
            if let Err(e) = &result {
                warn!(tx = record.tx, command = %record.kind(), "command rejected: {}", e);
            }
            results.push(ProcessingResult { record, result });
        }

        results
    }

    /// Process a batch of commands with reference-based partitioning
    ///
    /// Spawns one tokio task per transaction reference and waits for all of
    /// them. Results are grouped per reference; the order between references
    /// is unspecified.
    pub async fn process_batch(&self, batch: Vec<CommandRecord>) -> Vec<ProcessingResult> {
        let partitions = self.partition_by_reference(batch);

        let mut tasks = Vec::with_capacity(partitions.len());
        for (_tx_ref, commands) in partitions {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_transaction_commands(commands).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(transaction_results) => results.extend(transaction_results),
                Err(e) => error!("batch task panicked: {:?}", e),
            }
        }

        results
    }
}
