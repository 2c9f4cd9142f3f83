use super::RequestContext;
use crate::entities::dish::Dish;
use crate::entities::whole_number;
use crate::errors::ApiError;

const PRICE_MESSAGE: &str = "Dish must include a price and it must be an integer greater than 0.";

/// Price has to be a whole number strictly above zero; `15.0` is fine,
/// fractions, strings and zero are not.
pub fn price_is_valid_number(ctx: &RequestContext<Dish>) -> Result<(), ApiError> {
    match ctx.field("price").and_then(whole_number) {
        Some(price) if price > 0 => Ok(()),
        _ => Err(ApiError::BadRequest(PRICE_MESSAGE.into())),
    }
}
