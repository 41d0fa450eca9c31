//! Finance domain model: transactions, accounts and payment processors.
//!
//! # Responsibility
//! - Define the transaction record stored by the finance ledger.
//! - Apply debits to accounts according to their kind.
//!
//! # Invariants
//! - Amounts are minor currency units (cents) and never floating point.
//! - A savings account balance never goes negative through `apply_transaction`.

use crate::model::entity::{Entity, EntityId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FinanceResult<T> = Result<T, FinanceError>;

/// Account-level failure when applying a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinanceError {
    /// Debit exceeds the available balance of a savings account.
    InsufficientFunds {
        account_number: String,
        balance: i64,
        requested: i64,
    },
}

impl Display for FinanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientFunds {
                account_number,
                balance,
                requested,
            } => write!(
                f,
                "insufficient funds in account {account_number}: balance {}, requested {}",
                format_amount(*balance),
                format_amount(*requested)
            ),
        }
    }
}

impl Error for FinanceError {}

/// One spending record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    pub date: NaiveDate,
    /// Amount in cents.
    pub amount: i64,
    pub category: String,
}

impl Transaction {
    pub fn new(id: EntityId, date: NaiveDate, amount: i64, category: impl Into<String>) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.into(),
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Payment channel used to process a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionProcessor {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl TransactionProcessor {
    /// Human-readable channel label used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::BankTransfer => "bank transfer",
            Self::MobileMoney => "mobile money transfer",
            Self::CryptoWallet => "crypto wallet transfer",
        }
    }

    /// Returns the processing status line for `transaction`.
    pub fn describe(self, transaction: &Transaction) -> String {
        format!(
            "Processing {} of {} for {}",
            self.label(),
            format_amount(transaction.amount),
            transaction.category
        )
    }
}

/// Debit policy of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Debits always apply, the balance may go negative.
    Standard,
    /// Debits larger than the balance are rejected.
    Savings,
}

/// Account that transactions are applied against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    account_number: String,
    balance: i64,
    kind: AccountKind,
}

impl Account {
    pub fn new(account_number: impl Into<String>, initial_balance: i64, kind: AccountKind) -> Self {
        Self {
            account_number: account_number.into(),
            balance: initial_balance,
            kind,
        }
    }

    pub fn savings(account_number: impl Into<String>, initial_balance: i64) -> Self {
        Self::new(account_number, initial_balance, AccountKind::Savings)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Debits `transaction.amount` and returns the new balance.
    ///
    /// # Errors
    /// - `InsufficientFunds` when a savings account cannot cover the amount.
    ///   The balance is left unchanged.
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> FinanceResult<i64> {
        if self.kind == AccountKind::Savings && transaction.amount > self.balance {
            return Err(FinanceError::InsufficientFunds {
                account_number: self.account_number.clone(),
                balance: self.balance,
                requested: transaction.amount,
            });
        }

        self.balance -= transaction.amount;
        Ok(self.balance)
    }
}

/// Formats cents as a decimal string, e.g. `-1050` -> `-10.50`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::{format_amount, Account, AccountKind, FinanceError, Transaction};
    use chrono::NaiveDate;

    fn tx(amount: i64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        Transaction::new(1, date, amount, "Groceries")
    }

    #[test]
    fn format_amount_pads_cents_and_keeps_sign() {
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(20_000), "200.00");
        assert_eq!(format_amount(-1_050), "-10.50");
    }

    #[test]
    fn standard_account_can_go_negative() {
        let mut account = Account::new("1", 100, AccountKind::Standard);
        assert_eq!(account.apply_transaction(&tx(250)).unwrap(), -150);
    }

    #[test]
    fn savings_account_rejects_overdraft_and_keeps_balance() {
        let mut account = Account::savings("123456789", 100);
        let err = account.apply_transaction(&tx(250)).unwrap_err();
        assert!(matches!(
            err,
            FinanceError::InsufficientFunds { balance: 100, requested: 250, .. }
        ));
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn savings_account_allows_exact_balance() {
        let mut account = Account::savings("123456789", 250);
        assert_eq!(account.apply_transaction(&tx(250)).unwrap(), 0);
    }
}
