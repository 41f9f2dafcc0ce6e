//! Path resolution against a document.

use std::fmt;

use json_splice_pointer::APPEND_TOKEN;
use serde_json::Value;

use super::types::PatchError;

/// How an array step is allowed to address the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMode {
    /// `0..=len`; the append token `-` means `len`.
    Insert,
    /// `0..len`; the append token is rejected.
    Existing,
}

/// Parses an array step against an array of length `len`.
pub fn parse_index(step: &str, len: usize, mode: IndexMode) -> Result<usize, PatchError> {
    let out_of_bounds = || PatchError::IndexOutOfBounds {
        index: step.to_string(),
        len,
    };
    if step == APPEND_TOKEN {
        return match mode {
            IndexMode::Insert => Ok(len),
            IndexMode::Existing => Err(out_of_bounds()),
        };
    }
    let index: usize = step.parse().map_err(|_| out_of_bounds())?;
    let in_bounds = match mode {
        IndexMode::Insert => index <= len,
        IndexMode::Existing => index < len,
    };
    if in_bounds {
        Ok(index)
    } else {
        Err(out_of_bounds())
    }
}

/// Resolves `path` against `doc`.
///
/// The result has `path.len() + 1` entries: entry 0 is `doc` itself and
/// entry `i + 1` is what step `i` resolves to from entry `i`. `None` marks a
/// location that does not exist (an absent key, or an array index equal to
/// the length). Stepping into a scalar or a missing location fails with
/// `PathNotIndexable`.
pub fn walk<'a>(doc: &'a Value, path: &[String]) -> Result<Vec<Option<&'a Value>>, PatchError> {
    let mut elements = Vec::with_capacity(path.len() + 1);
    elements.push(Some(doc));
    let mut current = Some(doc);
    for step in path {
        let next = match current {
            Some(Value::Object(map)) => map.get(step),
            Some(Value::Array(items)) => {
                let index = parse_index(step, items.len(), IndexMode::Insert)?;
                items.get(index)
            }
            _ => return Err(PatchError::PathNotIndexable { step: step.clone() }),
        };
        elements.push(next);
        current = next;
    }
    Ok(elements)
}

/// One resolved hop from a container to a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(String),
    Index(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => f.write_str(key),
            Step::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Follows a resolved route from `doc`.
pub fn follow<'a>(doc: &'a Value, route: &[Step]) -> Option<&'a Value> {
    route.iter().try_fold(doc, |node, step| match (node, step) {
        (Value::Object(map), Step::Key(key)) => map.get(key),
        (Value::Array(items), Step::Index(index)) => items.get(*index),
        _ => None,
    })
}

/// Follows a resolved route from `doc`, mutably.
pub fn follow_mut<'a>(doc: &'a mut Value, route: &[Step]) -> Option<&'a mut Value> {
    route.iter().try_fold(doc, |node, step| match (node, step) {
        (Value::Object(map), Step::Key(key)) => map.get_mut(key),
        (Value::Array(items), Step::Index(index)) => items.get_mut(*index),
        _ => None,
    })
}
