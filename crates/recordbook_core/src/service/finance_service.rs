//! Finance ledger use-case service.
//!
//! # Responsibility
//! - Route each transaction through its processor and the account.
//! - Keep a keyed record of every accepted transaction.
//!
//! # Invariants
//! - Duplicate transaction ids are rejected before the account is touched.
//! - A debit refused by the account is still recorded; the outcome says so.

use crate::model::entity::EntityId;
use crate::model::finance::{Account, FinanceError, Transaction, TransactionProcessor};
use crate::repo::entity_repo::{EntityRepository, InMemoryRepository, RepoError, RepoResult};
use chrono::NaiveDate;
use log::{info, warn};

/// Result of recording one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Processor status line.
    pub processed: String,
    /// New balance, or the account error when the debit was refused.
    pub applied: Result<i64, FinanceError>,
}

/// Account plus the log of transactions applied to it.
pub struct FinanceLedger {
    account: Account,
    transactions: InMemoryRepository<Transaction>,
}

impl FinanceLedger {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            transactions: InMemoryRepository::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Processes, applies and stores `transaction`.
    ///
    /// # Errors
    /// - `RepoError::DuplicateKey` when a transaction with the same id was
    ///   already recorded; nothing is processed or applied in that case.
    pub fn record(
        &mut self,
        processor: TransactionProcessor,
        transaction: Transaction,
    ) -> RepoResult<RecordOutcome> {
        if self.transactions.contains(transaction.id) {
            return Err(RepoError::DuplicateKey(transaction.id));
        }

        let processed = processor.describe(&transaction);
        let applied = self.account.apply_transaction(&transaction);
        match &applied {
            Ok(balance) => info!(
                "event=transaction_applied module=finance status=ok id={} balance={}",
                transaction.id, balance
            ),
            Err(err) => warn!(
                "event=transaction_applied module=finance status=rejected id={} error={}",
                transaction.id, err
            ),
        }

        self.transactions.add(transaction)?;
        Ok(RecordOutcome { processed, applied })
    }

    pub fn get_transaction(&self, id: EntityId) -> RepoResult<&Transaction> {
        self.transactions.get(id)
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.list_all()
    }
}

/// Sample transactions and the processor each one goes through.
pub fn sample_transactions(today: NaiveDate) -> Vec<(TransactionProcessor, Transaction)> {
    vec![
        (
            TransactionProcessor::MobileMoney,
            Transaction::new(1, today, 20_000, "Groceries"),
        ),
        (
            TransactionProcessor::BankTransfer,
            Transaction::new(2, today, 15_000, "Utilities"),
        ),
        (
            TransactionProcessor::CryptoWallet,
            Transaction::new(3, today, 30_000, "Entertainment"),
        ),
    ]
}

/// Builds the demo ledger: savings account `123456789` with 1000.00.
pub fn demo_ledger() -> FinanceLedger {
    FinanceLedger::new(Account::savings("123456789", 100_000))
}
