use chrono::NaiveDate;
use recordbook_core::service::finance_service::{demo_ledger, sample_transactions};
use recordbook_core::{
    Account, FinanceError, FinanceLedger, RepoError, Transaction, TransactionProcessor,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn sample_flow_debits_savings_account() {
    let mut ledger = demo_ledger();
    let mut lines = Vec::new();
    for (processor, transaction) in sample_transactions(day()) {
        let outcome = ledger.record(processor, transaction).unwrap();
        lines.push(outcome.processed);
        assert!(outcome.applied.is_ok());
    }

    assert_eq!(
        lines,
        vec![
            "Processing mobile money transfer of 200.00 for Groceries",
            "Processing bank transfer of 150.00 for Utilities",
            "Processing crypto wallet transfer of 300.00 for Entertainment",
        ]
    );
    assert_eq!(ledger.account().balance(), 35_000);
    assert_eq!(ledger.transactions().len(), 3);
}

#[test]
fn refused_debit_is_still_recorded() {
    let mut ledger = FinanceLedger::new(Account::savings("42", 10_000));
    let outcome = ledger
        .record(
            TransactionProcessor::BankTransfer,
            Transaction::new(1, day(), 50_000, "Rent"),
        )
        .unwrap();

    assert!(matches!(
        outcome.applied,
        Err(FinanceError::InsufficientFunds { requested: 50_000, .. })
    ));
    let message = outcome.applied.unwrap_err().to_string();
    assert!(message.starts_with("insufficient funds in account 42"));
    assert_eq!(message.to_lowercase().matches("insufficient funds").count(), 1);
    assert_eq!(ledger.account().balance(), 10_000);
    assert_eq!(ledger.get_transaction(1).unwrap().category, "Rent");
}

#[test]
fn duplicate_transaction_id_does_not_touch_account() {
    let mut ledger = demo_ledger();
    ledger
        .record(
            TransactionProcessor::MobileMoney,
            Transaction::new(1, day(), 1_000, "Snacks"),
        )
        .unwrap();

    let err = ledger
        .record(
            TransactionProcessor::MobileMoney,
            Transaction::new(1, day(), 5_000, "Snacks again"),
        )
        .unwrap_err();
    assert_eq!(err, RepoError::DuplicateKey(1));
    assert_eq!(ledger.account().balance(), 99_000);
}
