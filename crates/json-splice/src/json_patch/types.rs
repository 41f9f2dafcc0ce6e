//! Core types for the JSON Patch module.

use std::fmt;

use json_splice_pointer::ValidationError;
use serde_json::Value;
use thiserror::Error;

pub use json_splice_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

/// Why a single operation could not be applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("UNKNOWN_OPERATION: {0:?}")]
    UnknownOperation(String),
    #[error("MISSING_VALUE")]
    MissingValue,
    #[error("MISSING_FROM")]
    MissingFrom,
    #[error("PATH_NOT_INDEXABLE: cannot resolve step {step:?}")]
    PathNotIndexable { step: String },
    #[error("INDEX_OUT_OF_BOUNDS: {index:?} in array of length {len}")]
    IndexOutOfBounds { index: String, len: usize },
    #[error("TYPE_MISMATCH: cannot {op} {key:?} in {found}")]
    TypeMismatch {
        op: &'static str,
        key: String,
        found: &'static str,
    },
    #[error("VALUE_MISMATCH: expected {expected}, found {}", describe(.actual))]
    ValueMismatch {
        expected: Value,
        actual: Option<Value>,
    },
    #[error("INVALID_PATH {pointer:?}: {source}")]
    InvalidPath {
        pointer: String,
        #[source]
        source: ValidationError,
    },
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

fn describe(actual: &Option<Value>) -> String {
    match actual {
        Some(v) => v.to_string(),
        None => "nothing".to_string(),
    }
}

impl PatchError {
    /// Stable identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            PatchError::UnknownOperation(_) => "UNKNOWN_OPERATION",
            PatchError::MissingValue => "MISSING_VALUE",
            PatchError::MissingFrom => "MISSING_FROM",
            PatchError::PathNotIndexable { .. } => "PATH_NOT_INDEXABLE",
            PatchError::IndexOutOfBounds { .. } => "INDEX_OUT_OF_BOUNDS",
            PatchError::TypeMismatch { .. } => "TYPE_MISMATCH",
            PatchError::ValueMismatch { .. } => "VALUE_MISMATCH",
            PatchError::InvalidPath { .. } => "INVALID_PATH",
            PatchError::InvalidOp(_) => "INVALID_OP",
        }
    }
}

/// A failed patch: which operation stopped it and why.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("operation {index} ({op} {path:?}) failed: {kind}")]
pub struct ApplyError {
    /// Position of the failing operation in the patch.
    pub index: usize,
    /// The operation symbol as given, e.g. `"add"`.
    pub op: String,
    /// The operation's `path`.
    pub path: String,
    #[source]
    pub kind: PatchError,
}

// ── Operation kinds ───────────────────────────────────────────────────────

/// The six operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Move => "move",
            OpKind::Copy => "copy",
            OpKind::Test => "test",
        }
    }

    pub fn parse(s: &str) -> Result<Self, PatchError> {
        match s {
            "add" => Ok(OpKind::Add),
            "remove" => Ok(OpKind::Remove),
            "replace" => Ok(OpKind::Replace),
            "move" => Ok(OpKind::Move),
            "copy" => Ok(OpKind::Copy),
            "test" => Ok(OpKind::Test),
            other => Err(PatchError::UnknownOperation(other.to_string())),
        }
    }

    /// Kinds that fail with `MissingValue` when no `value` is given.
    pub fn requires_value(&self) -> bool {
        matches!(self, OpKind::Add | OpKind::Replace | OpKind::Test)
    }

    /// Kinds that fail with `MissingFrom` when no `from` is given.
    pub fn requires_from(&self) -> bool {
        matches!(self, OpKind::Move | OpKind::Copy)
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Operation ─────────────────────────────────────────────────────────────

/// One entry of a patch, in its wire shape.
///
/// `op` is kept as the raw symbol so that an unknown kind is reported when
/// its entry is reached, not when the patch is decoded. `value: Some(Null)`
/// is an explicit `null` and is distinct from an absent value.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub op: String,
    pub path: String,
    pub value: Option<Value>,
    pub from: Option<String>,
}

impl Operation {
    fn new(kind: OpKind, path: impl Into<String>) -> Self {
        Self {
            op: kind.as_str().to_string(),
            path: path.into(),
            value: None,
            from: None,
        }
    }

    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::new(OpKind::Add, path)
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(OpKind::Remove, path)
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::new(OpKind::Replace, path)
        }
    }

    pub fn move_(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::new(OpKind::Move, path)
        }
    }

    pub fn copy(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::new(OpKind::Copy, path)
        }
    }

    pub fn test(path: impl Into<String>, value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::new(OpKind::Test, path)
        }
    }

    /// Resolves the operation symbol.
    pub fn kind(&self) -> Result<OpKind, PatchError> {
        OpKind::parse(&self.op)
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for `apply_patch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Reject malformed `path`/`from` pointers (missing leading `/`, a `~`
    /// not followed by `0` or `1`, over-long pointers) with
    /// [`PatchError::InvalidPath`] instead of parsing them permissively.
    pub strict_paths: bool,
}
