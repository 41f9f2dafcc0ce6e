//! JSON Patch application.
//!
//! # Operations
//!
//! `add`, `remove`, `replace`, `move`, `copy`, `test`.
//!
//! A patch is applied to a private copy of the document, one operation at a
//! time and strictly in order. The first failing operation aborts the whole
//! patch; the caller gets either the fully patched document or an
//! [`ApplyError`], never something in between.
//!
//! # Example
//!
//! ```
//! use json_splice::json_patch::{patch, Operation};
//! use serde_json::json;
//!
//! let doc = json!({"a": 1});
//! let out = patch(&doc, &[Operation::move_("/a", "/b")]).unwrap();
//! assert_eq!(out, json!({"b": 1}));
//! assert_eq!(doc, json!({"a": 1}));
//! ```

pub mod apply;
pub mod codec;
pub mod command;
mod rethread;
pub mod types;
pub mod walk;

pub use apply::{
    apply_add, apply_copy, apply_move, apply_op, apply_patch, apply_patch_owned, apply_remove,
    apply_replace, apply_test, patch,
};
pub use codec::json::{from_json, from_json_patch, parse, to_json, to_json_patch};
pub use command::{build_command, Command, ParentKind};
pub use types::{ApplyError, OpKind, Operation, PatchError, PatchOptions};
pub use walk::{walk, Step};
