//! JSON-lines output for transactions
//!
//! One object per line: the caller reference under `tx`, followed by the
//! serialized transaction (base fields, amount, status and descriptions).

use crate::types::{LedgerError, Transaction, TransactionRef};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TransactionLine<'a> {
    tx: TransactionRef,
    #[serde(flatten)]
    transaction: &'a Transaction,
}

/// Write transactions as JSON lines, sorted by reference
pub fn write_transactions_json(
    rows: &[(TransactionRef, Transaction)],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut sorted: Vec<&(TransactionRef, Transaction)> = rows.iter().collect();
    sorted.sort_by_key(|(tx_ref, _)| *tx_ref);

    for (tx_ref, transaction) in sorted {
        let line = TransactionLine {
            tx: *tx_ref,
            transaction,
        };

        serde_json::to_writer(&mut *output, &line).map_err(|e| LedgerError::IoError {
            message: format!("Failed to write transaction {}: {}", tx_ref, e),
        })?;
        writeln!(output)?;
    }

    output.flush()?;
    Ok(())
}
