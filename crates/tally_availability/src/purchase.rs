//! Purchase: keeps what is available.

use chrono::NaiveDate;

use crate::{Availability, AvailabilityOperation, Item, Product, Service};

/// An order assembled from whatever is available on a given date.
///
/// Products out of stock are left out; the delivery service is kept only if
/// it operates on `date`.
#[derive(Debug)]
pub struct Purchase {
    date: NaiveDate,
    items: Vec<Product>,
    delivery: Option<Service>,
    log: Vec<String>,
}

impl Purchase {
    #[tracing::instrument(level = "debug", skip(items, delivery), fields(items = items.len()))]
    pub fn new(items: &[Product], delivery: &Service, date: NaiveDate) -> Self {
        let mut purchase = Purchase {
            date,
            items: Vec::with_capacity(items.len()),
            delivery: None,
            log: Vec::new(),
        };
        for item in items {
            item.accept(&mut purchase);
        }
        delivery.accept(&mut purchase);
        purchase
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn delivery(&self) -> Option<&Service> {
        self.delivery.as_ref()
    }

    /// One status line per checked element, in check order.
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl AvailabilityOperation for Purchase {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn handle(&mut self, item: Item<'_>, available: bool) {
        let status = if available { "available" } else { "not available" };
        let line = format!("{} \"{}\" is {status}", item.kind_name(), item.name());
        tracing::info!("{line}");
        self.log.push(line);

        if !available {
            return;
        }
        match item {
            Item::Product(product) => self.items.push(product.clone()),
            Item::Service(service) => self.delivery = Some(service.clone()),
        }
    }
}
