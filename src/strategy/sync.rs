//! Synchronous processing strategy
//!
//! Single-threaded pipeline: `SyncReader` streams command records, a
//! `LedgerEngine` applies them one by one, and the final transactions are
//! written with `io::write_transactions`.
//!
//! Memory usage is O(transactions); the input itself is never held in full.

use crate::cli::OutputFormat;
use crate::core::LedgerEngine;
use crate::io::sync_reader::SyncReader;
use crate::io::write_transactions;
use crate::strategy::{ProcessingStrategy, RunSummary};
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// ```no_run
/// use pix_transactions::cli::OutputFormat;
/// use pix_transactions::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
///
/// let strategy = SyncProcessingStrategy::new(OutputFormat::Csv);
/// let mut output = std::io::stdout();
/// strategy.process(Path::new("commands.csv"), &mut output).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    format: OutputFormat,
}

impl SyncProcessingStrategy {
    /// Create a synchronous strategy writing `format`
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let mut engine = LedgerEngine::new();
        let reader = SyncReader::new(input_path)?;
        let mut summary = RunSummary::default();

        for result in reader {
            match result {
                Ok(record) => {
                    let (tx, kind) = (record.tx, record.kind());
                    match engine.process(record) {
                        Ok(()) => summary.applied += 1,
                        Err(e) => {
                            summary.rejected += 1;
                            warn!(tx, command = %kind, "command rejected: {}", e);
                        }
                    }
                }
                Err(e) => {
                    summary.skipped += 1;
                    warn!("skipping record: {}", e);
                }
            }
        }

        let rows = engine.transactions()?;
        info!(
            applied = summary.applied,
            rejected = summary.rejected,
            skipped = summary.skipped,
            transactions = rows.len(),
            "sync run finished"
        );

        write_transactions(&rows, self.format, output)
    }
}
