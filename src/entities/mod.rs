pub mod dish;
pub mod order;

use derive_more::From;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A stored entity addressed by an opaque string id.
///
/// The associated strings are the wording clients see when a guard rejects
/// a request against this kind of resource.
pub trait Resource: Clone + Send + Sync + 'static {
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn missing_field(field: &str) -> String {
        format!("{} must include a {field}", Self::LABEL)
    }

    fn id_mismatch(body_id: &str, route_id: &str) -> String {
        format!(
            "{label} id does not match route id. {label}: {body_id}, Route: {route_id}",
            label = Self::LABEL
        )
    }

    fn not_found(id: &str) -> String;
}

/// `{ "data": ... }` wrapper used by every non-error response.
#[derive(Debug, Clone, Serialize, Deserialize, From)]
pub struct Envelope<T> {
    pub data: T,
}

/// Inbound form of the envelope. `data` stays untyped until the guard chain
/// has accepted it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub data: Value,
}

/// Non-negative whole JSON numbers as `u64`. JSON has no integer type, so
/// `2.0` counts while `2.5` does not.
pub fn whole_number(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64).then_some(f as u64)
}

pub(crate) fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    whole_number(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, found {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_number_accepts_integral_floats() {
        assert_eq!(whole_number(&json!(2)), Some(2));
        assert_eq!(whole_number(&json!(2.0)), Some(2));
        assert_eq!(whole_number(&json!(15.0)), Some(15));
        assert_eq!(whole_number(&json!(2.5)), None);
        assert_eq!(whole_number(&json!(-3)), None);
        assert_eq!(whole_number(&json!(-3.0)), None);
        assert_eq!(whole_number(&json!(1e30)), None);
        assert_eq!(whole_number(&json!("4")), None);
    }
}
