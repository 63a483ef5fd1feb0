use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::customer::Customer;
use super::product::Product;

#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: Uuid,
    pub quantity: i32,
    /// Caller-supplied line total. Stored as given, never derived from price.
    pub total: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: Uuid,
    pub lines: Vec<OrderLineInput>,
}

#[derive(Debug, Clone)]
pub struct OrderLine {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total: BigDecimal,
    pub product: Option<Product>,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer: Option<Customer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

/// How much of the aggregate a lookup loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchDepth {
    /// The order row alone: no customer, no lines.
    #[default]
    Shallow,
    /// Customer, lines in their original order, and each line's product.
    Full,
}
