//! Field-by-field merging of configuration tiers.
//!
//! Objects merge key by key; arrays and scalars from the higher tier replace
//! the lower tier's value. An explicit `null` leaves the lower value in place.

use serde_json::Value;

/// Merge `overlay` into `base`, with `overlay` taking precedence.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Merge tiers in order, later tiers winning.
pub fn deep_merge_all(values: impl IntoIterator<Item = Value>) -> Value {
    values.into_iter().fold(Value::Null, |mut acc, value| {
        merge_into(&mut acc, value);
        acc
    })
}
