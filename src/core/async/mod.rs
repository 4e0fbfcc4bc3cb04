//! Asynchronous implementations of core components
//!
//! This module provides thread-safe, concurrent implementations of the core
//! ledger components using DashMap for locking.
//!
//! # Architecture
//!
//! - **ConcurrentTransactionRepository**: Thread-safe transaction storage using DashMap
//! - **AsyncLedgerEngine**: Orchestrates commands over the shared repository
//! - **BatchProcessor**: Runs batches of commands on tokio tasks, one task per transaction
//!
//! # Thread Safety
//!
//! - Operations on different transactions proceed in parallel
//! - Operations on the same transaction are serialized by the batch partitioning
//! - No global locks - fine-grained locking per shard

pub mod batch_processor;
pub mod engine;
pub mod transaction_store;

pub use batch_processor::{BatchProcessor, ProcessingResult};
pub use engine::AsyncLedgerEngine;
pub use transaction_store::ConcurrentTransactionRepository;
