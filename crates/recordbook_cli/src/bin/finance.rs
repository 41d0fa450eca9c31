//! Finance demo: three transactions through three processors into a
//! savings account.

use recordbook_core::format_amount;
use recordbook_core::service::finance_service::{demo_ledger, sample_transactions};
use recordbook_core::service::today;

fn main() {
    recordbook_cli::bootstrap("finance");

    let mut ledger = demo_ledger();
    for (processor, transaction) in sample_transactions(today()) {
        match ledger.record(processor, transaction) {
            Ok(outcome) => {
                println!("{}", outcome.processed);
                match outcome.applied {
                    Ok(balance) => println!("Updated balance: {}", format_amount(balance)),
                    Err(err) => println!("{err}"),
                }
            }
            Err(err) => println!("Transaction not recorded: {err}"),
        }
    }

    println!(
        "Recorded {} transactions; final balance {}",
        ledger.transactions().len(),
        format_amount(ledger.account().balance())
    );
}
