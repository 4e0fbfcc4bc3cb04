//! Account and Pix key references
//!
//! Accounts and Pix keys are owned by other parts of the payment system. This
//! module only models the fields a transaction needs to validate itself: the
//! identifiers used to detect same-account transfers.

/// Account identifier
pub type AccountId = String;

/// Pix key identifier
pub type PixKeyId = String;

/// Source or destination account of a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The account identifier
    pub id: AccountId,
}

impl Account {
    /// Create an account reference from its identifier
    pub fn new(id: impl Into<AccountId>) -> Self {
        Account { id: id.into() }
    }
}

/// Recipient payment key
///
/// A Pix key resolves to exactly one destination account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixKey {
    /// The Pix key identifier
    pub id: PixKeyId,

    /// Identifier of the account that owns this key
    pub account_id: AccountId,
}

impl PixKey {
    /// Create a Pix key reference
    ///
    /// # Arguments
    ///
    /// * `id` - The Pix key identifier (the key value itself for Pix keys
    ///   read from input files)
    /// * `account_id` - The owning account
    pub fn new(id: impl Into<PixKeyId>, account_id: impl Into<AccountId>) -> Self {
        PixKey {
            id: id.into(),
            account_id: account_id.into(),
        }
    }
}
