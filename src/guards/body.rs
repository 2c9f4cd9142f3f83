//! Payload checks shared by every resource.

use serde_json::Value;

use super::RequestContext;
use crate::entities::Resource;
use crate::errors::ApiError;

/// JSON values a client would consider "not provided": null, false, zero,
/// NaN and the empty string. Arrays and objects always count as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Fails with `<Resource> must include a <field>` when the field is absent
/// or falsy.
pub fn body_data_has<E: Resource>(
    field: &'static str,
) -> impl Fn(&RequestContext<E>) -> Result<(), ApiError> + Send + Sync + 'static {
    move |ctx: &RequestContext<E>| match ctx.field(field) {
        Some(value) if is_truthy(value) => Ok(()),
        _ => Err(ApiError::BadRequest(E::missing_field(field))),
    }
}

/// A payload `id`, when given, has to be the route id itself. Omitting it is
/// fine; a non-string id never matches.
pub fn body_id_matches_route_id<E: Resource>(ctx: &RequestContext<E>) -> Result<(), ApiError> {
    let Some(body_id) = ctx.field("id").filter(|v| is_truthy(v)) else {
        return Ok(());
    };
    let route_id = ctx.route_id().unwrap_or_default();
    match body_id {
        Value::String(s) if s == route_id => Ok(()),
        Value::String(s) => Err(ApiError::BadRequest(E::id_mismatch(s, route_id))),
        other => Err(ApiError::BadRequest(E::id_mismatch(&other.to_string(), route_id))),
    }
}
