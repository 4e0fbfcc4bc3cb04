//! Transaction entity for the Pix ledger
//!
//! This module defines the transfer entity, its status lifecycle and the
//! validation rules every transaction must satisfy before the rest of the
//! payment system may use it.
//!
//! # Lifecycle
//!
//! ```text
//!            ┌────────────► completed ──┐
//!  pending ──┤                  ▲       ├──► error
//!            └──► confirmed ────┘───────┘
//! ```
//!
//! Re-applying the current status is accepted. `error` is terminal.

use super::account::{Account, AccountId, PixKey, PixKeyId};
use super::base::Base;
use super::error::TransactionError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Transaction identifier (assigned by the entity itself)
pub type TransactionId = Uuid;

/// Caller-side transaction reference used by command files
pub type TransactionRef = u32;

/// Lifecycle stage of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Created and validated, waiting for the recipient
    Pending,

    /// Acknowledged by the recipient side
    Confirmed,

    /// Transfer finished
    Completed,

    /// Cancelled; the reason is kept in `cancel_description`
    Error,
}

impl TransactionStatus {
    /// Every status a valid transaction may hold
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Pending,
        TransactionStatus::Confirmed,
        TransactionStatus::Completed,
        TransactionStatus::Error,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Confirmed => "confirmed",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Error => "error",
        }
    }

    /// Whether no other status can follow this one
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Error)
    }

    /// Transition table of the lifecycle
    ///
    /// Staying in the current status is always allowed.
    pub fn can_transition_to(&self, next: TransactionStatus) -> bool {
        use TransactionStatus::*;

        if *self == next {
            return true;
        }

        matches!(
            (*self, next),
            (Pending, Confirmed | Completed | Error)
                | (Confirmed, Completed | Error)
                | (Completed, Error)
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TransactionStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| TransactionError::invalid_status(s))
    }
}

/// Destination of a transfer, held by identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixKeyRef {
    /// The Pix key identifier
    pub id: PixKeyId,

    /// Account owning the key, resolved when the transaction was built
    pub account_id: AccountId,
}

impl From<&PixKey> for PixKeyRef {
    fn from(pix_key: &PixKey) -> Self {
        PixKeyRef {
            id: pix_key.id.clone(),
            account_id: pix_key.account_id.clone(),
        }
    }
}

/// A transfer between two accounts
///
/// Fields are public; the business rules are checked by [`Transaction::validate`]
/// whenever the transaction is built or changes status, not continuously.
/// Account and Pix key references never leave the process when the
/// transaction is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Identity and audit timestamps
    #[serde(flatten)]
    pub base: Base,

    /// Source account
    #[serde(skip)]
    pub account_from: AccountId,

    /// Transferred amount, strictly positive
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Destination Pix key
    #[serde(skip)]
    pub pix_key_to: PixKeyRef,

    /// Current lifecycle stage
    pub status: TransactionStatus,

    /// Free text supplied by the payer
    pub description: String,

    /// Reason given when the transaction was cancelled
    pub cancel_description: Option<String>,
}

impl Transaction {
    /// Build and validate a new pending transaction
    ///
    /// # Arguments
    ///
    /// * `account_from` - Source account
    /// * `amount` - Amount to transfer
    /// * `pix_key_to` - Recipient Pix key
    /// * `description` - Free text, may be empty
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - A valid transaction in `pending` status
    /// * `Err(TransactionError)` - The first rule the input violates
    pub fn new(
        account_from: &Account,
        amount: Decimal,
        pix_key_to: &PixKey,
        description: impl Into<String>,
    ) -> Result<Self, TransactionError> {
        let transaction = Transaction {
            base: Base::new(),
            account_from: account_from.id.clone(),
            amount,
            pix_key_to: PixKeyRef::from(pix_key_to),
            status: TransactionStatus::Pending,
            description: description.into(),
            cancel_description: None,
        };

        transaction.validate()?;
        Ok(transaction)
    }

    /// Transaction identifier
    pub fn id(&self) -> TransactionId {
        self.base.id
    }

    /// Mark the transfer as finished
    pub fn complete(&mut self) -> Result<(), TransactionError> {
        self.ensure_transition(TransactionStatus::Completed)?;
        self.apply(TransactionStatus::Completed)
    }

    /// Mark the transfer as acknowledged by the recipient
    pub fn confirm(&mut self) -> Result<(), TransactionError> {
        self.ensure_transition(TransactionStatus::Confirmed)?;
        self.apply(TransactionStatus::Confirmed)
    }

    /// Cancel the transfer, recording why
    ///
    /// The payer's `description` is left untouched.
    pub fn cancel(&mut self, reason: impl Into<String>) -> Result<(), TransactionError> {
        self.ensure_transition(TransactionStatus::Error)?;
        self.cancel_description = Some(reason.into());
        self.apply(TransactionStatus::Error)
    }

    /// Check every business rule, reporting the first violation
    ///
    /// Checks run in this order: required references, amount, status,
    /// distinct source and destination.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.base.id.is_nil() {
            return Err(TransactionError::missing_field("id"));
        }
        if self.account_from.trim().is_empty() {
            return Err(TransactionError::missing_field("account_from"));
        }
        if self.pix_key_to.id.trim().is_empty() {
            return Err(TransactionError::missing_field("pix_key_to"));
        }
        if self.pix_key_to.account_id.trim().is_empty() {
            return Err(TransactionError::missing_field("pix_key_to.account_id"));
        }

        if self.amount <= Decimal::ZERO {
            return Err(TransactionError::invalid_amount(self.amount));
        }

        if !TransactionStatus::ALL.contains(&self.status) {
            return Err(TransactionError::invalid_status(self.status.as_str()));
        }

        if self.pix_key_to.account_id == self.account_from {
            return Err(TransactionError::same_account(&self.account_from));
        }

        Ok(())
    }

    fn ensure_transition(&self, next: TransactionStatus) -> Result<(), TransactionError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(TransactionError::invalid_transition(
                self.base.id,
                self.status,
                next,
            ))
        }
    }

    // No rollback: a validation failure leaves the new status in place.
    fn apply(&mut self, next: TransactionStatus) -> Result<(), TransactionError> {
        self.status = next;
        self.base.touch();
        self.validate()
    }
}
