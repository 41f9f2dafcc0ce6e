use serde_json::{Map, Value};

/// Creates a deep clone of a JSON value.
///
/// Every nested object and array is rebuilt, so the result shares no
/// container with `value`. Mutating one never shows through the other.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_splice_util::json_clone::clone;
///
/// let original = json!({"foo": [1, 2, 3]});
/// let mut cloned = clone(&original);
/// cloned["foo"].as_array_mut().unwrap().push(json!(4));
///
/// assert_eq!(original, json!({"foo": [1, 2, 3]}));
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            Value::Object(new_obj)
        }
    }
}
