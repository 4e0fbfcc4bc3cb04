//! Ledger commands
//!
//! A command asks the ledger to register a transaction or to move an
//! existing one through its lifecycle. Commands address transactions by a
//! caller-side reference, since the transaction identifier only exists once
//! the ledger has built the transaction.

use super::account::{Account, PixKey};
use super::transaction::TransactionRef;
use rust_decimal::Decimal;
use std::fmt;

/// Kinds of commands the ledger understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Build a new transaction and register it
    Register,

    /// Move the transaction to `completed`
    Complete,

    /// Move the transaction to `confirmed`
    Confirm,

    /// Move the transaction to `error`, recording a reason
    Cancel,
}

impl CommandKind {
    /// Lowercase name, as used in input files and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Register => "register",
            CommandKind::Complete => "complete",
            CommandKind::Confirm => "confirm",
            CommandKind::Cancel => "cancel",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command payload
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Transfer `amount` from `account_from` to the owner of `pix_key`
    Register {
        account_from: Account,
        pix_key: PixKey,
        amount: Decimal,
        description: String,
    },
    Complete,
    Confirm,
    Cancel {
        reason: String,
    },
}

/// A single command read from the input
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    /// Caller-side reference of the transaction the command applies to
    pub tx: TransactionRef,

    /// What to do
    pub command: Command,
}

impl CommandRecord {
    /// Kind of the wrapped command
    pub fn kind(&self) -> CommandKind {
        match self.command {
            Command::Register { .. } => CommandKind::Register,
            Command::Complete => CommandKind::Complete,
            Command::Confirm => CommandKind::Confirm,
            Command::Cancel { .. } => CommandKind::Cancel,
        }
    }
}
