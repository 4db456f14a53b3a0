//! Availability checks built on the same double dispatch as Tally's tree
//! operations.
//!
//! An element ([`Product`], [`Service`]) exposes `accept`, which computes
//! its availability directly and calls the operation's single handler with
//! the element and that boolean. Operations ([`Purchase`], [`Inspection`])
//! decide what the outcome means to them. The element is identified by the
//! [`Item`] discriminant, never by inspecting type names.

mod inspection;
mod item;
mod purchase;

pub use inspection::Inspection;
pub use item::{Availability, AvailabilityOperation, Item, Product, Service};
pub use purchase::Purchase;
