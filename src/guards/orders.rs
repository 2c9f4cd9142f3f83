//! Order-only guards: the line-item list and the status lifecycle.

use serde_json::Value;

use super::RequestContext;
use crate::entities::order::{Order, OrderStatus};
use crate::entities::whole_number;
use crate::errors::ApiError;

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, or delivered.";
pub const DELIVERED_MESSAGE: &str = "A delivered order cannot be changed.";
pub const NOT_PENDING_MESSAGE: &str = "An order cannot be deleted unless it is pending.";

pub fn body_data_has_dishes_property(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    match ctx.field("dishes") {
        Some(Value::Array(items)) if !items.is_empty() => Ok(()),
        _ => Err(ApiError::BadRequest(
            "Order must include at least one dish.".into(),
        )),
    }
}

/// Reports the first line item whose quantity is missing, below one or not
/// an integer.
pub fn dishes_have_quantity(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    let Some(Value::Array(items)) = ctx.field("dishes") else {
        return Ok(());
    };
    let bad = items.iter().position(|item| {
        item.get("quantity")
            .and_then(whole_number)
            .map_or(true, |q| q < 1)
    });
    match bad {
        Some(index) => Err(ApiError::BadRequest(format!(
            "Dish {index} must have a quantity that is an integer greater than 0."
        ))),
        None => Ok(()),
    }
}

/// Update path: the new status must be a known one and may not be
/// `delivered`.
pub fn body_has_status_property(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    let status = ctx.field("status").and_then(OrderStatus::from_value);
    match status {
        None => Err(ApiError::BadRequest(STATUS_MESSAGE.into())),
        Some(s) if s.is_terminal() => Err(ApiError::BadRequest(DELIVERED_MESSAGE.into())),
        Some(_) => Ok(()),
    }
}

/// Update path: an order that has already been delivered stays as it is.
pub fn order_is_not_delivered(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    match ctx.resolved() {
        Some(order) if order.status.is_terminal() => {
            Err(ApiError::BadRequest(DELIVERED_MESSAGE.into()))
        }
        _ => Ok(()),
    }
}

/// Delete path: only pending orders may be removed.
pub fn order_status_is_pending(ctx: &RequestContext<Order>) -> Result<(), ApiError> {
    match ctx.resolved() {
        Some(order) if order.status == OrderStatus::Pending => Ok(()),
        _ => Err(ApiError::BadRequest(NOT_PENDING_MESSAGE.into())),
    }
}
