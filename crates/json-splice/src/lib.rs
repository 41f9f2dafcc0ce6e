//! json-splice: apply JSON Patch style edits to `serde_json` documents.
//!
//! - [`json_patch`]: the patch engine and the boundary codec for operations.
//! - [`json_cli`]: text-in/text-out helpers used by the `json-splice` binary.
//!
//! Paths are JSON Pointers, handled by `json-splice-pointer`; deep clone and
//! equality come from `json-splice-util`.

pub mod json_cli;
pub mod json_patch;

pub use json_patch::{apply_patch, patch, ApplyError, Operation, PatchError, PatchOptions};
