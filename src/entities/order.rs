use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Resource;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Reads a status out of a raw payload value; `None` for anything that is
    /// not one of the four known names.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value.as_str()? {
            "pending" => Some(Self::Pending),
            "preparing" => Some(Self::Preparing),
            "out-for-delivery" => Some(Self::OutForDelivery),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// One line of an order. Any other keys the client sent with the line
/// (`id`, `name`, `price`, ...) are kept in `details` and echoed back as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDish {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    #[serde(deserialize_with = "super::deserialize_whole_number")]
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Caller-supplied order fields. Status is handled separately because
/// creation ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

impl Order {
    pub fn new(id: String, fields: OrderFields) -> Self {
        Self {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            dishes: fields.dishes,
            status: OrderStatus::Pending,
        }
    }

    pub fn overwrite(&mut self, fields: OrderFields, status: OrderStatus) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        self.dishes = fields.dishes;
        self.status = status;
    }
}

impl Resource for Order {
    const LABEL: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }

    fn missing_field(field: &str) -> String {
        format!("Order must include a {field} property.")
    }

    fn not_found(id: &str) -> String {
        format!("No matching order is found for orderId: {id}.")
    }
}
