//! Processing strategy module
//!
//! A strategy is a complete pipeline: read command records from CSV, apply
//! them to a ledger engine and write the final transactions. The synchronous
//! and batched implementations are selected at runtime and produce identical
//! output for the same input.

use crate::cli::{OutputFormat, StrategyType};
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Complete command processing pipeline
pub trait ProcessingStrategy: Send + Sync {
    /// Process commands from `input_path` and write the final transactions
    ///
    /// Rejected commands and malformed rows are logged and skipped. Only
    /// fatal errors are returned: the input cannot be opened, or the output
    /// cannot be written.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Create a processing strategy
///
/// `config` only applies to the async strategy; `None` uses the defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
    format: OutputFormat,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(format)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, format))
        }
    }
}

/// Per-run counters reported when a strategy finishes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub applied: usize,
    pub rejected: usize,
    pub skipped: usize,
}
