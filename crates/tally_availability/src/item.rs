//! Elements that can report availability.

use chrono::{Datelike, NaiveDate, Weekday};

/// A stocked product.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    name: String,
    price: u64,
    in_stock: bool,
}

impl Product {
    /// A product that is in stock.
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Product {
            name: name.into(),
            price,
            in_stock: true,
        }
    }

    /// Same product, marked out of stock.
    #[must_use]
    pub fn out_of_stock(self) -> Self {
        Product {
            in_stock: false,
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }
}

/// A service that operates Monday through Friday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    name: String,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Service { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

}

/// The element an operation is looking at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Item<'a> {
    Product(&'a Product),
    Service(&'a Service),
}

impl Item<'_> {
    pub fn name(&self) -> &str {
        match self {
            Item::Product(product) => product.name(),
            Item::Service(service) => service.name(),
        }
    }

    /// Human-readable kind, as used in status lines.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Item::Product(_) => "Product",
            Item::Service(_) => "Service",
        }
    }
}

/// Receives exactly one outcome per accepted element.
pub trait AvailabilityOperation {
    /// Date availability is checked for.
    fn date(&self) -> NaiveDate;

    fn handle(&mut self, item: Item<'_>, available: bool);
}

/// An element that can be checked by an [`AvailabilityOperation`].
pub trait Availability {
    /// This element as seen by an operation.
    fn item(&self) -> Item<'_>;

    /// Whether the element can be had on `date`.
    fn is_available(&self, date: NaiveDate) -> bool;

    /// Compute availability and deliver it to `op` with this element.
    fn accept(&self, op: &mut dyn AvailabilityOperation) {
        let available = self.is_available(op.date());
        op.handle(self.item(), available);
    }
}

impl Availability for Product {
    fn item(&self) -> Item<'_> {
        Item::Product(self)
    }

    /// Stock does not depend on the date.
    fn is_available(&self, _date: NaiveDate) -> bool {
        self.in_stock()
    }
}

impl Availability for Service {
    fn item(&self) -> Item<'_> {
        Item::Service(self)
    }

    fn is_available(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
mod tests;
