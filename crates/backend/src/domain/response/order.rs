use crate::model::order::Order as OrderModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub total: f64,
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
            total: value.total,
        }
    }
}
