//! End-to-end receipt parsing tests, including the food-existence filter.

use fridgekeeper_core::{parse_receipt, FakeFoodCheck};

const RECEIPT: &str = "\
GREEN VALLEY GROCERY
123 Main St
11/16/2025 14:02

MILK 16oz $3.99
EGGS x2 $5.49
KALE $2.49
PAPER TOWELS $4.99
SUBTOTAL $16.96
TAX $1.36
TOTAL $18.32
CASH $20.00
CHANGE $1.68
";

#[tokio::test]
async fn test_parse_receipt_with_existence_filter() {
    let checker = FakeFoodCheck::new()
        .with_food("milk")
        .with_food("eggs")
        .with_food("kale");

    let receipt = parse_receipt(RECEIPT, &checker).await;

    assert_eq!(receipt.store.as_deref(), Some("GREEN VALLEY GROCERY"));
    assert_eq!(receipt.date.as_deref(), Some("11/16/2025"));

    // Header junk and "paper towels" fail the existence check; noise
    // lines (total, tax, cash, change) never became items at all.
    let names: Vec<&str> = receipt.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["milk", "eggs", "kale"]);
    assert_eq!(receipt.items[0].quantity, "16oz");
    assert_eq!(receipt.items[1].quantity, "x2");
    assert_eq!(receipt.items[2].quantity, "1");
}

#[tokio::test]
async fn test_unavailable_food_check_fails_open() {
    let checker = FakeFoodCheck::failing();
    let receipt = parse_receipt("STORE\nMILK 16oz $3.99\n", &checker).await;

    // Every parsed item survives, including the store line: an
    // unavailable service must never silently drop groceries.
    let names: Vec<&str> = receipt.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["store", "milk"]);
}

#[tokio::test]
async fn test_non_food_items_dropped_when_service_answers() {
    let checker = FakeFoodCheck::new().with_food("milk");
    let receipt = parse_receipt("STORE\nMILK $3.99\nBATTERIES $7.99\n", &checker).await;

    let names: Vec<&str> = receipt.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["milk"]);
}
