//! Inventory demo: seed, save, then reload in a fresh session and print.

use recordbook_core::service::inventory_service::INVENTORY_STORE_FILE;
use recordbook_core::service::today;
use recordbook_core::{InventoryItem, InventoryLogger};

fn main() {
    let config = recordbook_cli::bootstrap("inventory");
    let store_path = config.data_path(INVENTORY_STORE_FILE);

    let mut session = InventoryLogger::<InventoryItem>::new(&store_path);
    if let Err(err) = session.seed_sample_data(today()) {
        println!("Seeding failed: {err}");
    }
    match session.save_to_store() {
        Ok(()) => println!("Data saved successfully."),
        Err(err) => println!("{err}"),
    }

    let mut session = InventoryLogger::<InventoryItem>::new(&store_path);
    match session.load_from_store() {
        Ok(_) => println!("Data loaded successfully."),
        Err(err) => println!("{err}"),
    }

    println!("Inventory Items:");
    for item in session.list_all() {
        println!(
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d")
        );
    }
}
