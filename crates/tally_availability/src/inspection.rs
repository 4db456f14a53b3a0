//! Inspection: reports stock without buying anything.

use chrono::NaiveDate;

use crate::{Availability, AvailabilityOperation, Item, Product};

/// Stock check over a fixed list of products.
#[derive(Debug, Clone)]
pub struct Inspection {
    items: Vec<Product>,
}

impl Inspection {
    pub fn new(items: &[Product]) -> Self {
        Inspection {
            items: items.to_vec(),
        }
    }

    /// Check every product and return one status line each.
    #[tracing::instrument(level = "debug", skip(self), fields(items = self.items.len()))]
    pub fn check(&self, date: NaiveDate) -> Vec<String> {
        let mut report = Report {
            date,
            lines: Vec::with_capacity(self.items.len()),
        };
        for item in &self.items {
            item.accept(&mut report);
        }
        report.lines
    }
}

struct Report {
    date: NaiveDate,
    lines: Vec<String>,
}

impl AvailabilityOperation for Report {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn handle(&mut self, item: Item<'_>, available: bool) {
        let status = match (item, available) {
            (Item::Product(_), true) => "in stock",
            (Item::Product(_), false) => "out of stock",
            (Item::Service(_), true) => "available",
            (Item::Service(_), false) => "not available",
        };
        let line = format!("{} \"{}\" is {status}", item.kind_name(), item.name());
        tracing::info!("{line}");
        self.lines.push(line);
    }
}
