//! Pix Transactions Library
//! # Overview
//!
//! A Pix transfer ledger: a transaction entity with validation and a status
//! lifecycle, a repository contract for persisting it, and streaming CSV
//! pipelines (sync and async) that apply command files to a ledger.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, Base, Account, PixKey, errors)
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The `TransactionRepository` contract
//!   - [`core::transaction_store`] - In-memory repository
//!   - [`core::engine`] - Command orchestration over a repository
//!   - [`core::r#async`] - Thread-safe repository, engine and batch processor
//! - [`io`] - CSV command input, CSV and JSON-lines output
//! - [`strategy`] - Sync and async processing pipelines
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - tracing subscriber setup
//!
//! # Transaction Lifecycle
//!
//! Every transaction starts `pending`:
//!
//! - **confirm**: `pending` → `confirmed`
//! - **complete**: `pending` or `confirmed` → `completed`
//! - **cancel**: any non-error status → `error`, recording the reason
//!
//! Repeating the current status is a no-op; `error` is terminal. Every
//! transition re-validates the transaction (positive amount, present
//! references, distinct source and destination accounts).

pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{
    AsyncLedgerEngine, ConcurrentTransactionRepository, InMemoryTransactionRepository,
    LedgerEngine, TransactionRepository,
};
pub use io::write_transactions;
pub use types::{
    Account, Base, LedgerError, PixKey, RepositoryError, Transaction, TransactionError,
    TransactionId, TransactionRef, TransactionStatus,
};
