//! The persisted document and its record types.
//!
//! One JSON document holds both collections. Field names are camelCase on
//! disk and on the wire, matching what the dashboard frontend expects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payment method for every order. Checkout only supports cash on delivery.
pub const PAYMENT_METHOD: &str = "cash_on_delivery";

/// Status assigned to every newly created order.
pub const INITIAL_ORDER_STATUS: &str = "pending";

/// A catalog product. Products are seeded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    pub description: String,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    /// Absent in hand-edited documents means "not featured".
    #[serde(default)]
    pub featured: bool,
}

/// A customer order. Only `status` is mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Line items are owned by the frontend and not validated here.
    pub items: Vec<Value>,
    /// Caller-supplied, not recomputed from items.
    pub total: f64,
    pub status: String,
    pub customer_details: Map<String, Value>,
    pub payment_method: String,
    /// Calendar date of creation, YYYY-MM-DD.
    pub date: String,
}

/// The whole persisted document: catalog plus order book.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    /// Monotonic order counter. Documents written before this field existed
    /// deserialize as 0; id minting then falls back to the order count.
    #[serde(default)]
    pub order_seq: u64,
}

impl StoreDocument {
    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose category equals `category` exactly (case-sensitive).
    pub fn products_in_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Products flagged as featured.
    pub fn featured_products(&self) -> Vec<Product> {
        self.products.iter().filter(|p| p.featured).cloned().collect()
    }

    /// Look up an order by id.
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Mutable lookup, used by the status update handler.
    pub fn order_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    /// Next value of the order counter.
    ///
    /// Takes the max of the stored counter and the order count so that
    /// legacy documents without `orderSeq` keep minting the ids the old
    /// length-derived rule would have produced.
    pub fn next_order_seq(&self) -> u64 {
        self.order_seq.max(self.orders.len() as u64) + 1
    }

    /// Append `order` and advance the counter to `seq`.
    pub fn push_order(&mut self, order: Order, seq: u64) {
        self.orders.push(order);
        self.order_seq = seq;
    }
}

/// Format an order id from its sequence number: `ord-001`, `ord-002`, ...
pub fn format_order_id(seq: u64) -> String {
    format!("ord-{:03}", seq)
}

/// Round a currency amount to two decimals, half to even.
///
/// Matches the rounding the dashboard has always shown; applied to every
/// derived statistic, never to stored totals.
pub fn round2(value: f64) -> f64 {
    round_half_even(value * 100.0) / 100.0
}

fn round_half_even(value: f64) -> f64 {
    let floor = value.floor();
    let frac = value - floor;
    if frac > 0.5 {
        floor + 1.0
    } else if frac < 0.5 {
        floor
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}
