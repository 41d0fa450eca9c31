//! Warehouse demo: list stock, then exercise each repository failure.

use chrono::Duration;
use recordbook_core::service::today;
use recordbook_core::{ItemCategory, WarehouseItem, WarehouseManager};

fn print_all_items(manager: &WarehouseManager, category: ItemCategory) {
    println!("All items:");
    for item in manager.list_items(category) {
        println!("{item}");
    }
}

fn main() {
    recordbook_cli::bootstrap("warehouse");

    let today = today();
    let mut manager = WarehouseManager::new();
    if let Err(err) = manager.seed_data(today) {
        println!("Seeding failed: {err}");
        return;
    }

    println!("Grocery Items:");
    print_all_items(&manager, ItemCategory::Grocery);

    println!("\nElectronic Items:");
    print_all_items(&manager, ItemCategory::Electronic);

    println!("\nTrying to add duplicate item:");
    let duplicate = WarehouseItem::grocery(1, "Duplicate Milk", 10, today + Duration::days(5));
    if let Err(err) = manager.add_item(duplicate) {
        println!("{err}");
    }

    println!("\nTrying to remove non-existent item:");
    if let Err(err) = manager.remove_item(ItemCategory::Electronic, 999) {
        println!("{err}");
    }

    println!("\nTrying to update with invalid quantity:");
    if let Err(err) = manager.increase_stock(ItemCategory::Electronic, 1, -100) {
        println!("{err}");
    }
}
