//! Core business logic module
//!
//! This module contains the ledger components built around the transaction entity:
//! - `traits` - The transaction repository contract
//! - `transaction_store` - In-memory repository
//! - `engine` - Lifecycle orchestration over a repository
//! - `async` - Thread-safe repository, engine and batch processor

pub mod r#async;
pub mod engine;
pub mod traits;
pub mod transaction_store;

pub use engine::LedgerEngine;
pub use r#async::{AsyncLedgerEngine, BatchProcessor, ConcurrentTransactionRepository};
pub use traits::TransactionRepository;
pub use transaction_store::InMemoryTransactionRepository;
