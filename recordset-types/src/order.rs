use serde::{Deserialize, Serialize};

/// One product entry of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: u64,
    pub quantity: u32,
}

/// A customer order.
///
/// `user_id` and every `product_id` are foreign keys that are never validated
/// against any user or product collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub products: Vec<OrderLine>,
    pub order_date: String,
}

impl Order {
    pub fn new(id: u64, user_id: u64, order_date: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            products: Vec::new(),
            order_date: order_date.into(),
        }
    }

    /// Append a line, keeping insertion order.
    pub fn with_line(mut self, product_id: u64, quantity: u32) -> Self {
        self.products.push(OrderLine {
            product_id,
            quantity,
        });
        self
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.products.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
