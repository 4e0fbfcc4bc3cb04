//! I/O module
//!
//! Handles command parsing and transaction output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, CSV output)
//! - `json_format` - JSON-lines output
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod json_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, write_transactions_csv, CsvRecord};
pub use json_format::write_transactions_json;
pub use sync_reader::SyncReader;

use crate::cli::OutputFormat;
use crate::types::{LedgerError, Transaction, TransactionRef};
use std::io::Write;

/// Write the final transaction rows in the requested format
pub fn write_transactions(
    rows: &[(TransactionRef, Transaction)],
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match format {
        OutputFormat::Csv => write_transactions_csv(rows, output),
        OutputFormat::Json => write_transactions_json(rows, output),
    }
}
