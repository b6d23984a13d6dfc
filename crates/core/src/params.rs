//! Lenient helpers for reading parameter overrides from a `serde_json::Value`.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.
//! These never fail, so a partially valid override object still applies
//! every field it gets right.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Returns `params[name]` if it is a JSON object.
pub fn param_object<'a>(params: &'a Value, name: &str) -> Option<&'a Value> {
    params.get(name).filter(|v| v.is_object())
}

/// Deep-merges `patch` into `base`. Objects merge key by key; any other
/// value (arrays included) replaces what was there.
pub fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
