//! Item and quote value types for the pricing endpoint.

use serde::{Deserialize, Serialize};

/// Status string attached to every quote.
pub const STATUS_PROCESSED: &str = "processed";

/// Request payload for the pricing endpoint.
///
/// Every field is defaulted so a partial body decodes the same way the Go
/// contestant's decoder fills missing fields with zero values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    /// Item name, echoed back in the quote.
    #[serde(default)]
    pub name: String,

    /// Unit price.
    #[serde(default)]
    pub price: f64,

    /// Number of units.
    #[serde(default)]
    pub quantity: i32,
}

/// Reply payload for the pricing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    /// Item name copied from the request.
    pub item_name: String,

    /// Unit price times quantity.
    pub total_price: f64,

    /// Always "processed".
    pub status: &'static str,
}

impl Quote {
    /// Price the given item.
    pub fn for_item(item: Item) -> Self {
        Self {
            total_price: total_price(item.price, item.quantity),
            item_name: item.name,
            status: STATUS_PROCESSED,
        }
    }
}

/// Compute the total price as a plain f64 product.
///
/// The quantity is widened to f64 before multiplying. No rounding or
/// currency-safe decimal handling is applied; every contestant in the
/// benchmark computes the same raw float product.
pub fn total_price(price: f64, quantity: i32) -> f64 {
    price * f64::from(quantity)
}
