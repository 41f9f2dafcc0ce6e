//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the
//! `{op, path, value?, from?}` wire shape.

use serde_json::{Map, Value};

use crate::json_patch::types::{Operation, PatchError};

fn invalid(msg: &str) -> PatchError {
    PatchError::InvalidOp(msg.to_string())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation.
///
/// The `op` symbol is not checked here; an unknown kind fails when the
/// operation is applied. A `"value": null` member is kept as an explicit
/// null, while `"from": null` counts as absent.
pub fn from_json(v: &Value) -> Result<Operation, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| invalid("operation must be an object"))?;
    let op = obj
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("op must be a string"))?;
    let path = obj
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("path must be a string"))?;
    let from = match obj.get("from") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(invalid("from must be a string")),
    };
    Ok(Operation {
        op: op.to_string(),
        path: path.to_string(),
        value: obj.get("value").cloned(),
        from,
    })
}

/// Deserialize a patch (a JSON array of operations).
pub fn from_json_patch(v: &Value) -> Result<Vec<Operation>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| invalid("patch must be an array"))?;
    arr.iter().map(from_json).collect()
}

/// Parse patch text.
pub fn parse(text: &str) -> Result<Vec<Operation>, PatchError> {
    let raw: Value = serde_json::from_str(text).map_err(|e| PatchError::InvalidOp(e.to_string()))?;
    from_json_patch(&raw)
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an operation, omitting absent `value` and `from`.
pub fn to_json(op: &Operation) -> Value {
    let mut m = Map::new();
    m.insert("op".into(), Value::String(op.op.clone()));
    m.insert("path".into(), Value::String(op.path.clone()));
    if let Some(value) = &op.value {
        m.insert("value".into(), value.clone());
    }
    if let Some(from) = &op.from {
        m.insert("from".into(), Value::String(from.clone()));
    }
    Value::Object(m)
}

/// Serialize a patch.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────
