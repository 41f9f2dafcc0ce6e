//! JSON Patch apply logic.
//!
//! Every applier takes the working document by value together with the
//! operation's [`Command`] and hands back the updated document. The caller's
//! input is never reachable from here: [`apply_patch`] clones it once up
//! front and drops the working copy on the first failure.

use json_splice_pointer::parse_json_pointer;
use json_splice_util::{clone, deep_equal};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::command::{build_command, Command, ParentKind};
use super::rethread::splice_array;
use super::types::{ApplyError, OpKind, Operation, PatchError, PatchOptions};
use super::walk::{follow_mut, parse_index, IndexMode, Step};

// ── Container access ──────────────────────────────────────────────────────

fn object_at<'a>(
    doc: &'a mut Value,
    route: &[Step],
) -> Result<&'a mut Map<String, Value>, PatchError> {
    match follow_mut(doc, route) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(stale_route(route)),
    }
}

fn array_at<'a>(doc: &'a mut Value, route: &[Step]) -> Result<&'a mut Vec<Value>, PatchError> {
    match follow_mut(doc, route) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(stale_route(route)),
    }
}

fn stale_route(route: &[Step]) -> PatchError {
    PatchError::PathNotIndexable {
        step: route.last().map(Step::to_string).unwrap_or_default(),
    }
}

fn required_value(cmd: &mut Command) -> Result<Value, PatchError> {
    cmd.value.take().ok_or(PatchError::MissingValue)
}

// ── Individual operation applicators ─────────────────────────────────────

/// `add`: whole-document replacement at the root, insert-or-overwrite in an
/// object, insert-and-shift in an array.
pub fn apply_add(doc: Value, _op: &Operation, mut cmd: Command) -> Result<Value, PatchError> {
    let value = required_value(&mut cmd)?;
    match cmd.parent {
        ParentKind::Document => Ok(value),
        ParentKind::Object => {
            let mut doc = doc;
            object_at(&mut doc, &cmd.route)?.insert(cmd.key, value);
            Ok(doc)
        }
        ParentKind::Array { len } => {
            let index = parse_index(&cmd.key, len, IndexMode::Insert)?;
            splice_array(doc, &cmd.route, |items| items.insert(index, value))
        }
    }
}

/// `remove`: an absent object key is a no-op; an array index must name an
/// existing element.
pub fn apply_remove(doc: Value, _op: &Operation, cmd: Command) -> Result<Value, PatchError> {
    take_at(doc, cmd).map(|(doc, _)| doc)
}

/// Removes the location addressed by `cmd`, returning the removed value.
fn take_at(doc: Value, cmd: Command) -> Result<(Value, Option<Value>), PatchError> {
    match cmd.parent {
        ParentKind::Document => Err(PatchError::TypeMismatch {
            op: "remove",
            key: cmd.key,
            found: "the document root",
        }),
        ParentKind::Object => {
            let mut doc = doc;
            // Later members keep their order.
            let removed = object_at(&mut doc, &cmd.route)?.shift_remove(&cmd.key);
            Ok((doc, removed))
        }
        ParentKind::Array { len } => {
            let index = parse_index(&cmd.key, len, IndexMode::Existing)?;
            let mut removed = None;
            let doc = splice_array(doc, &cmd.route, |items| {
                removed = Some(items.remove(index));
            })?;
            Ok((doc, removed))
        }
    }
}

/// `replace`: identical to `add` for objects and the root; an array index
/// must name an existing element, which is overwritten in place.
pub fn apply_replace(doc: Value, _op: &Operation, mut cmd: Command) -> Result<Value, PatchError> {
    let value = required_value(&mut cmd)?;
    let mut doc = doc;
    match cmd.parent {
        ParentKind::Document => return Ok(value),
        ParentKind::Object => {
            object_at(&mut doc, &cmd.route)?.insert(cmd.key, value);
        }
        ParentKind::Array { len } => {
            let index = parse_index(&cmd.key, len, IndexMode::Existing)?;
            let items = array_at(&mut doc, &cmd.route)?;
            match items.get_mut(index) {
                Some(slot) => *slot = value,
                None => {
                    return Err(PatchError::IndexOutOfBounds {
                        index: cmd.key,
                        len: items.len(),
                    })
                }
            }
        }
    }
    Ok(doc)
}

/// `move`: removes the value at `from` (addressed by `cmd`), then adds it at
/// `path` against the document as it stands after the removal.
pub fn apply_move(doc: Value, op: &Operation, cmd: Command) -> Result<Value, PatchError> {
    let (doc, moved) = take_at(doc, cmd)?;
    add_at(doc, op, moved.unwrap_or(Value::Null))
}

/// `copy`: reads the value at `from` (addressed by `cmd`) without touching
/// the source, then adds a copy at `path`.
pub fn apply_copy(doc: Value, op: &Operation, cmd: Command) -> Result<Value, PatchError> {
    let copied = cmd.current(&doc).map(clone).unwrap_or(Value::Null);
    add_at(doc, op, copied)
}

fn add_at(doc: Value, op: &Operation, value: Value) -> Result<Value, PatchError> {
    let target = Command::resolve(&doc, parse_json_pointer(&op.path), Some(value))?;
    apply_add(doc, op, target)
}

/// `test`: the value at `path` must deep-equal the operation's value.
/// A missing location reads as `null`, as it does for a `move` or `copy`
/// source.
pub fn apply_test(doc: Value, _op: &Operation, mut cmd: Command) -> Result<Value, PatchError> {
    let expected = required_value(&mut cmd)?;
    let actual = cmd.current(&doc);
    if deep_equal(actual.unwrap_or(&Value::Null), &expected) {
        return Ok(doc);
    }
    Err(PatchError::ValueMismatch {
        actual: actual.cloned(),
        expected,
    })
}

// ── Main apply function ───────────────────────────────────────────────────

/// Apply a single operation to the working document.
///
/// The kind is resolved before anything else, so an unknown kind never
/// walks or mutates the document.
pub fn apply_op(doc: Value, op: &Operation, options: &PatchOptions) -> Result<Value, PatchError> {
    let kind = op.kind()?;
    let cmd = build_command(&doc, kind, op, options)?;
    match kind {
        OpKind::Add => apply_add(doc, op, cmd),
        OpKind::Remove => apply_remove(doc, op, cmd),
        OpKind::Replace => apply_replace(doc, op, cmd),
        OpKind::Move => apply_move(doc, op, cmd),
        OpKind::Copy => apply_copy(doc, op, cmd),
        OpKind::Test => apply_test(doc, op, cmd),
    }
}

/// Apply `ops` in order to a copy of `doc`.
///
/// Returns the fully patched document, or the first failure. `doc` is never
/// modified, whatever the outcome.
pub fn apply_patch(
    doc: &Value,
    ops: &[Operation],
    options: &PatchOptions,
) -> Result<Value, ApplyError> {
    apply_patch_owned(clone(doc), ops, options)
}

/// Apply `ops` in order to a document the caller gives up.
///
/// Skips the up-front copy. On failure the partially patched document is
/// dropped, never returned.
pub fn apply_patch_owned(
    doc: Value,
    ops: &[Operation],
    options: &PatchOptions,
) -> Result<Value, ApplyError> {
    debug!(ops = ops.len(), "applying patch");
    let mut doc = doc;
    for (index, op) in ops.iter().enumerate() {
        trace!(index, op = %op.op, path = %op.path, "applying operation");
        doc = apply_op(doc, op, options).map_err(|kind| {
            debug!(index, op = %op.op, path = %op.path, error = %kind, "patch aborted");
            ApplyError {
                index,
                op: op.op.clone(),
                path: op.path.clone(),
                kind,
            }
        })?;
    }
    Ok(doc)
}

/// [`apply_patch`] with default options.
pub fn patch(doc: &Value, ops: &[Operation]) -> Result<Value, ApplyError> {
    apply_patch(doc, ops, &PatchOptions::default())
}

// ── Tests ─────────────────────────────────────────────────────────────────
