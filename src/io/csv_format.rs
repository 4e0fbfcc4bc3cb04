//! CSV format handling for ledger commands and transaction output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to ledger commands
//! - Transaction output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{
    Account, Command, CommandRecord, LedgerError, PixKey, Transaction, TransactionRef,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns:
/// type, tx, account_from, pix_key, account_to, amount, description
///
/// Only `register` rows need the account, key and amount columns; `cancel`
/// rows carry their reason in `description`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub tx: TransactionRef,
    pub account_from: Option<String>,
    pub pix_key: Option<String>,
    pub account_to: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

/// Convert a CsvRecord to a CommandRecord
///
/// This function:
/// - Parses the command type (case-insensitive)
/// - Checks that register rows carry both accounts, the Pix key and an amount
/// - Parses the amount into a Decimal, rejecting fractions of a centavo
///
/// Business rules (positive amount, distinct accounts) are left to the
/// transaction itself.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<CommandRecord, LedgerError> {
    let tx = csv_record.tx;
    let description = csv_record.description.unwrap_or_default();

    let command = match csv_record.kind.trim().to_lowercase().as_str() {
        "register" => {
            let account_from = required(csv_record.account_from, "account_from", tx)?;
            let pix_key = required(csv_record.pix_key, "pix_key", tx)?;
            let account_to = required(csv_record.account_to, "account_to", tx)?;
            let amount_str = required(csv_record.amount, "amount", tx)?;

            let amount = Decimal::from_str(&amount_str).map_err(|_| {
                LedgerError::parse(format!("Invalid amount '{}' for tx {}", amount_str, tx))
            })?;

            if amount.normalize().scale() > 2 {
                return Err(LedgerError::parse(format!(
                    "Amount '{}' for tx {} has more than two decimal places",
                    amount_str, tx
                )));
            }

            Command::Register {
                account_from: Account::new(account_from),
                pix_key: PixKey::new(pix_key, account_to),
                amount,
                description,
            }
        }
        "complete" => Command::Complete,
        "confirm" => Command::Confirm,
        "cancel" => Command::Cancel {
            reason: description,
        },
        other => {
            return Err(LedgerError::parse(format!(
                "Invalid command type: '{}' for tx {}",
                other, tx
            )))
        }
    };

    Ok(CommandRecord { tx, command })
}

fn required(value: Option<String>, column: &str, tx: TransactionRef) -> Result<String, LedgerError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(LedgerError::parse(format!(
            "register command for tx {} requires {}",
            tx, column
        ))),
    }
}

/// Write transactions in CSV format
///
/// Columns: tx, amount, status, description, cancel_description.
/// Rows are sorted by reference for deterministic output; amounts are
/// written with two decimal places, or more when the value needs them.
pub fn write_transactions_csv(
    rows: &[(TransactionRef, Transaction)],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["tx", "amount", "status", "description", "cancel_description"])
        .map_err(|e| io_error("Failed to write CSV header", e))?;

    let mut sorted: Vec<&(TransactionRef, Transaction)> = rows.iter().collect();
    sorted.sort_by_key(|(tx_ref, _)| *tx_ref);

    for (tx_ref, transaction) in sorted {
        writer
            .write_record(&[
                tx_ref.to_string(),
                format_amount(transaction.amount),
                transaction.status.to_string(),
                transaction.description.clone(),
                transaction.cancel_description.clone().unwrap_or_default(),
            ])
            .map_err(|e| io_error("Failed to write transaction record", e))?;
    }

    writer
        .flush()
        .map_err(|e| io_error("Failed to flush output", e))?;

    Ok(())
}

fn format_amount(amount: Decimal) -> String {
    let exact = amount.normalize();
    if exact.scale() > 2 {
        exact.to_string()
    } else {
        format!("{:.2}", exact)
    }
}

fn io_error(context: &str, error: impl std::fmt::Display) -> LedgerError {
    LedgerError::IoError {
        message: format!("{}: {}", context, error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommandKind;
    use rstest::rstest;

    fn csv_record(kind: &str) -> CsvRecord {
        CsvRecord {
            kind: kind.to_string(),
            tx: 1,
            ..CsvRecord::default()
        }
    }

    fn register_record(amount: Option<&str>) -> CsvRecord {
        CsvRecord {
            account_from: Some("acc-1".to_string()),
            pix_key: Some("bob@pix".to_string()),
            account_to: Some("acc-2".to_string()),
            amount: amount.map(|s| s.to_string()),
            description: Some("lunch".to_string()),
            ..csv_record("register")
        }
    }

    fn transaction(amount: Decimal, description: &str) -> Transaction {
        Transaction::new(
            &Account::new("acc-1"),
            amount,
            &PixKey::new("bob@pix", "acc-2"),
            description,
        )
        .unwrap()
    }

    #[test]
    fn test_convert_register_record() {
        let record = convert_csv_record(register_record(Some("12.50"))).unwrap();

        assert_eq!(record.tx, 1);
        assert_eq!(
            record.command,
            Command::Register {
                account_from: Account::new("acc-1"),
                pix_key: PixKey::new("bob@pix", "acc-2"),
                amount: Decimal::new(1250, 2),
                description: "lunch".to_string(),
            }
        );
    }

    #[rstest]
    #[case("complete", CommandKind::Complete)]
    #[case("confirm", CommandKind::Confirm)]
    #[case("cancel", CommandKind::Cancel)]
    #[case("COMPLETE", CommandKind::Complete)] // case insensitive
    #[case("Register", CommandKind::Register)]
    fn test_convert_command_kinds(#[case] kind: &str, #[case] expected: CommandKind) {
        let record = CsvRecord {
            kind: kind.to_string(),
            ..register_record(Some("1"))
        };

        assert_eq!(convert_csv_record(record).unwrap().kind(), expected);
    }

    #[test]
    fn test_convert_cancel_uses_description_as_reason() {
        let record = CsvRecord {
            description: Some("insufficient funds".to_string()),
            ..csv_record("cancel")
        };

        assert_eq!(
            convert_csv_record(record).unwrap().command,
            Command::Cancel {
                reason: "insufficient funds".to_string()
            }
        );
    }

    #[test]
    fn test_convert_transition_ignores_payload() {
        let record = CsvRecord {
            amount: Some("not a number".to_string()),
            ..csv_record("confirm")
        };

        assert_eq!(convert_csv_record(record).unwrap().command, Command::Confirm);
    }

    #[rstest]
    #[case::invalid_type(CsvRecord { kind: "refund".to_string(), ..register_record(Some("1")) }, "Invalid command type")]
    #[case::missing_amount(register_record(None), "requires amount")]
    #[case::blank_amount(register_record(Some("  ")), "requires amount")]
    #[case::invalid_amount(register_record(Some("ten")), "Invalid amount 'ten'")]
    #[case::tenth_of_centavo(register_record(Some("0.001")), "more than two decimal places")]
    #[case::half_centavo(register_record(Some("10.005")), "more than two decimal places")]
    #[case::sub_centavo(register_record(Some("10.019")), "more than two decimal places")]
    #[case::missing_source(CsvRecord { account_from: None, ..register_record(Some("1")) }, "requires account_from")]
    #[case::missing_key(CsvRecord { pix_key: Some(String::new()), ..register_record(Some("1")) }, "requires pix_key")]
    #[case::missing_destination(CsvRecord { account_to: None, ..register_record(Some("1")) }, "requires account_to")]
    fn test_convert_csv_record_errors(#[case] record: CsvRecord, #[case] expected_error: &str) {
        let error = convert_csv_record(record).unwrap_err();
        assert!(matches!(error, LedgerError::ParseError { .. }));
        assert!(
            error.to_string().contains(expected_error),
            "unexpected error: {}",
            error
        );
    }

    #[rstest]
    #[case("1.250", Decimal::new(125, 2))]
    #[case("7.000", Decimal::new(7, 0))]
    #[case("0.01", Decimal::new(1, 2))]
    fn test_convert_accepts_centavo_amounts(#[case] input: &str, #[case] expected: Decimal) {
        let record = convert_csv_record(register_record(Some(input))).unwrap();
        assert!(matches!(
            record.command,
            Command::Register { amount, .. } if amount == expected
        ));
    }

    #[test]
    fn test_non_positive_amount_is_left_to_transaction() {
        let record = convert_csv_record(register_record(Some("-3"))).unwrap();
        assert!(matches!(
            record.command,
            Command::Register { amount, .. } if amount == Decimal::new(-3, 0)
        ));
    }

    #[test]
    fn test_write_transactions_csv_sorted_with_two_decimals() {
        let mut cancelled = transaction(Decimal::new(5, 1), "coffee");
        cancelled.cancel("duplicate").unwrap();
        let pending = transaction(Decimal::new(10000, 2), "rent");

        let rows = vec![(2, cancelled), (1, pending)];
        let mut output = Vec::new();
        write_transactions_csv(&rows, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "tx,amount,status,description,cancel_description\n\
             1,100.00,pending,rent,\n\
             2,0.50,error,coffee,duplicate\n"
        );
    }

    #[test]
    fn test_write_transactions_csv_quotes_commas() {
        let mut tx = transaction(Decimal::ONE, "rent, march");
        tx.complete().unwrap();

        let mut output = Vec::new();
        write_transactions_csv(&[(1, tx)], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "tx,amount,status,description,cancel_description\n1,1.00,completed,\"rent, march\",\n"
        );
    }

    #[rstest]
    #[case(Decimal::new(1, 3), "0.001")]
    #[case(Decimal::new(10005, 3), "10.005")]
    #[case(Decimal::new(1250, 3), "1.25")]
    #[case(Decimal::new(7, 0), "7.00")]
    fn test_write_transactions_csv_keeps_exact_amount(
        #[case] amount: Decimal,
        #[case] expected: &str,
    ) {
        let mut output = Vec::new();
        write_transactions_csv(&[(1, transaction(amount, "x"))], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!(
                "tx,amount,status,description,cancel_description\n1,{},pending,x,\n",
                expected
            )
        );
    }

    #[test]
    fn test_write_empty_transactions_csv() {
        let mut output = Vec::new();
        write_transactions_csv(&[], &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "tx,amount,status,description,cancel_description\n"
        );
    }
}
