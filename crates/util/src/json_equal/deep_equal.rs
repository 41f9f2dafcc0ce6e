use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// - Objects are equal when they hold the same key set and every value is
///   deep-equal; key order is irrelevant.
/// - Arrays are equal when they have the same length and are equal element
///   by element, in order.
/// - Numbers are compared in the `f64` domain, so `1` equals `1.0`.
/// - Values of different kinds are never equal (`0` is not `false`, `""` is
///   not `null`).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_splice_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1.0, 2]})));
/// assert!(!deep_equal(&json!({"a": [1, 2]}), &json!({"a": [2, 1]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        // Arrays
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        // Objects
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }

        _ => false,
    }
}

/// Compares two JSON numbers as `f64`.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}
