#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

/// Records every outcome it is handed.
struct Collect {
    date: NaiveDate,
    seen: Vec<(String, &'static str, bool)>,
}

impl AvailabilityOperation for Collect {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn handle(&mut self, item: Item<'_>, available: bool) {
        self.seen
            .push((item.name().to_owned(), item.kind_name(), available));
    }
}

fn on(year: i32, month: u32, day: u32) -> Collect {
    Collect {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        seen: Vec::new(),
    }
}

#[test]
fn product_reports_stock() {
    let mut op = on(2024, 1, 8);
    Product::new("Laptop", 1500).accept(&mut op);
    Product::new("Keyboard", 100).out_of_stock().accept(&mut op);
    assert_eq!(
        op.seen,
        vec![
            ("Laptop".to_owned(), "Product", true),
            ("Keyboard".to_owned(), "Product", false),
        ]
    );
}

#[test]
fn service_is_closed_on_weekends() {
    let delivery = Service::new("Delivery");
    // 2024-01-06 is a Saturday.
    for (day, open) in [(5, true), (6, false), (7, false), (8, true)] {
        let mut op = on(2024, 1, day);
        delivery.accept(&mut op);
        assert_eq!(op.seen, vec![("Delivery".to_owned(), "Service", open)], "day {day}");
    }
}

#[test]
fn accept_invokes_exactly_one_handler() {
    let mut op = on(2024, 1, 9);
    let items: [&dyn Availability; 2] = [&Product::new("Mouse", 20), &Service::new("Setup")];
    for item in items {
        item.accept(&mut op);
    }
    assert_eq!(op.seen.len(), 2);
}

#[test]
fn product_accessors() {
    let product = Product::new("Laptop", 1500);
    assert_eq!(product.price(), 1500);
    assert!(product.in_stock());
    assert!(!product.out_of_stock().in_stock());
}

#[test]
fn is_available_matches_what_accept_reports() {
    let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    let laptop = Product::new("Laptop", 1500);
    let keyboard = Product::new("Keyboard", 100).out_of_stock();
    let delivery = Service::new("Delivery");

    assert!(laptop.is_available(saturday));
    assert!(!keyboard.is_available(monday));
    assert!(!delivery.is_available(saturday));
    assert!(delivery.is_available(monday));

    let mut op = on(2024, 1, 6);
    delivery.accept(&mut op);
    assert_eq!(op.seen[0].2, delivery.is_available(saturday));
    assert_eq!(delivery.item(), Item::Service(&delivery));
}
