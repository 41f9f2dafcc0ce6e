//! Per-operation resolved context.
//!
//! A [`Command`] is built fresh for every operation from the operation, its
//! decoded value and a walk of the document, and is consumed by exactly one
//! applier.

use json_splice_pointer::{is_root, parse_json_pointer, validate_json_pointer, validate_path};
use serde_json::Value;

use super::types::{OpKind, Operation, Path, PatchError, PatchOptions};
use super::walk::{follow, parse_index, walk, IndexMode, Step};

/// The container that holds the addressed location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    /// Empty path: the location is the document itself.
    Document,
    Object,
    Array { len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Unescaped path segments.
    pub path: Path,
    /// Last segment; empty for the document root.
    pub key: String,
    /// Hops from the root down to the parent container. Every hop lands on
    /// an existing container, so this is also the ancestor chain used to
    /// re-thread a rebuilt array.
    pub route: Vec<Step>,
    pub parent: ParentKind,
    /// Whether something currently exists at the full path.
    pub exists: bool,
    /// The operation's decoded value, if it has one.
    pub value: Option<Value>,
}

impl Command {
    /// Resolves `path` against `doc`.
    pub fn resolve(doc: &Value, path: Path, value: Option<Value>) -> Result<Self, PatchError> {
        let elements = walk(doc, &path)?;
        if is_root(&path) {
            return Ok(Self {
                path,
                key: String::new(),
                route: Vec::new(),
                parent: ParentKind::Document,
                exists: true,
                value,
            });
        }

        let depth = path.len() - 1;
        let mut route = Vec::with_capacity(depth);
        for (step, node) in path[..depth].iter().zip(&elements) {
            route.push(match node {
                Some(Value::Array(items)) => {
                    Step::Index(parse_index(step, items.len(), IndexMode::Existing)?)
                }
                _ => Step::Key(step.clone()),
            });
        }

        let parent = match elements[depth] {
            Some(Value::Array(items)) => ParentKind::Array { len: items.len() },
            _ => ParentKind::Object,
        };
        let key = path[depth].clone();
        let exists = elements[depth + 1].is_some();

        Ok(Self {
            path,
            key,
            route,
            parent,
            exists,
            value,
        })
    }

    /// The value currently at the full path.
    pub fn current<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let parent = follow(doc, &self.route)?;
        match (parent, self.parent) {
            (_, ParentKind::Document) => Some(parent),
            (Value::Object(map), ParentKind::Object) => map.get(&self.key),
            (Value::Array(items), ParentKind::Array { len }) => {
                let index = parse_index(&self.key, len, IndexMode::Existing).ok()?;
                items.get(index)
            }
            _ => None,
        }
    }
}

/// Builds the command for `op`.
///
/// Missing `value`/`from` is reported before the document is walked. An
/// empty `from` counts as missing, so the root can never be a source. For
/// `move` and `copy` the command addresses `from`; their `path` is resolved
/// by the applier once the source has been taken.
pub fn build_command(
    doc: &Value,
    kind: OpKind,
    op: &Operation,
    options: &PatchOptions,
) -> Result<Command, PatchError> {
    if kind.requires_value() && op.value.is_none() {
        return Err(PatchError::MissingValue);
    }
    let pointer = if kind.requires_from() {
        let from = op
            .from
            .as_deref()
            .filter(|from| !from.is_empty())
            .ok_or(PatchError::MissingFrom)?;
        if options.strict_paths {
            check_pointer(from)?;
        }
        from
    } else {
        op.path.as_str()
    };
    if options.strict_paths {
        check_pointer(&op.path)?;
    }
    let value = if kind.requires_value() {
        op.value.clone()
    } else {
        None
    };
    Command::resolve(doc, parse_json_pointer(pointer), value)
}

/// Strict-mode pointer check.
pub(crate) fn check_pointer(pointer: &str) -> Result<(), PatchError> {
    let invalid = |source| PatchError::InvalidPath {
        pointer: pointer.to_string(),
        source,
    };
    validate_json_pointer(pointer).map_err(invalid)?;
    validate_path(&parse_json_pointer(pointer)).map_err(invalid)
}
