//! json-splice-util - value utilities shared by the json-splice crates.
//!
//! Deep cloning backs the patch engine's private working copy; deep equality
//! backs the `test` operation.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::clone;
pub use json_equal::{deep_equal, numbers_equal};
