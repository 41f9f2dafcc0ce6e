//! Bottom-up rebuild of the ancestor chain after an array changes length.
//!
//! The document is unzipped along a route: each ancestor container is lifted
//! out with its child taken from the slot on the route, until the focus is the
//! container to edit. After the edit the frames are zipped back from the
//! innermost outwards, each one receiving its rebuilt child, which yields
//! the new root. Cost is linear in the route depth.

use std::mem;

use serde_json::{Map, Value};

use super::types::PatchError;
use super::walk::Step;

/// An ancestor with one empty slot where the route passes through it.
enum Frame {
    Object { map: Map<String, Value>, key: String },
    Array { items: Vec<Value>, index: usize },
}

impl Frame {
    fn fill(self, child: Value) -> Value {
        match self {
            Frame::Object { mut map, key } => {
                map.insert(key, child);
                Value::Object(map)
            }
            Frame::Array { mut items, index } => {
                items[index] = child;
                Value::Array(items)
            }
        }
    }
}

pub(crate) struct Zipper {
    frames: Vec<Frame>,
    focus: Value,
}

impl Zipper {
    /// Detaches every container on `route`, leaving the last one in focus.
    pub(crate) fn unzip(doc: Value, route: &[Step]) -> Result<Self, PatchError> {
        let mut frames = Vec::with_capacity(route.len());
        let mut focus = doc;
        for step in route {
            let (frame, child) = match (focus, step) {
                (Value::Object(mut map), Step::Key(key)) => {
                    let child = map.get_mut(key).map(mem::take);
                    let child = child.ok_or_else(|| not_indexable(step))?;
                    let frame = Frame::Object {
                        map,
                        key: key.clone(),
                    };
                    (frame, child)
                }
                (Value::Array(mut items), Step::Index(index)) => {
                    let child = items.get_mut(*index).map(mem::take);
                    let child = child.ok_or_else(|| not_indexable(step))?;
                    let frame = Frame::Array {
                        items,
                        index: *index,
                    };
                    (frame, child)
                }
                _ => return Err(not_indexable(step)),
            };
            frames.push(frame);
            focus = child;
        }
        Ok(Self { frames, focus })
    }

    /// The array in focus, if the focus is an array.
    pub(crate) fn array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match &mut self.focus {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Writes the focus back into each ancestor, innermost first.
    pub(crate) fn zip(self) -> Value {
        self.frames
            .into_iter()
            .rev()
            .fold(self.focus, |child, frame| frame.fill(child))
    }
}

fn not_indexable(step: &Step) -> PatchError {
    PatchError::PathNotIndexable {
        step: step.to_string(),
    }
}

/// Edits the array at the end of `route` and re-threads it up to the root.
pub(crate) fn splice_array<F>(doc: Value, route: &[Step], edit: F) -> Result<Value, PatchError>
where
    F: FnOnce(&mut Vec<Value>),
{
    let mut zipper = Zipper::unzip(doc, route)?;
    match zipper.array_mut() {
        Some(items) => edit(items),
        None => {
            return Err(PatchError::TypeMismatch {
                op: "splice",
                key: route.last().map(Step::to_string).unwrap_or_default(),
                found: "non-array",
            })
        }
    }
    Ok(zipper.zip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unzip_then_zip_restores_the_document() {
        let doc = json!({"a": [{"b": [1, 2]}, 3], "c": true});
        let route = [Step::Key("a".into()), Step::Index(0), Step::Key("b".into())];
        let zipper = Zipper::unzip(doc.clone(), &route).unwrap();
        assert_eq!(zipper.focus, json!([1, 2]));
        assert_eq!(zipper.zip(), doc);
    }

    #[test]
    fn length_change_reaches_the_root() {
        let doc = json!({"outer": [[1, 2, 3], "x"]});
        let route = [Step::Key("outer".into()), Step::Index(0)];
        let out = splice_array(doc, &route, |items| {
            items.insert(1, json!(9));
        })
        .unwrap();
        assert_eq!(out, json!({"outer": [[1, 9, 2, 3], "x"]}));
    }

    #[test]
    fn root_array_is_its_own_focus() {
        let out = splice_array(json!([1, 2, 3]), &[], |items| {
            items.remove(0);
        })
        .unwrap();
        assert_eq!(out, json!([2, 3]));
    }

    #[test]
    fn non_array_focus_is_rejected() {
        let err = splice_array(json!({"a": 1}), &[], |_| {}).unwrap_err();
        assert_eq!(err.code(), "TYPE_MISMATCH");
    }

    #[test]
    fn stale_route_is_reported() {
        let err = Zipper::unzip(json!({"a": 1}), &[Step::Key("b".into())]).err();
        assert_eq!(err, Some(PatchError::PathNotIndexable { step: "b".into() }));
    }
}
