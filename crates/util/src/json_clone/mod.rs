//! JSON cloning utilities.

mod clone;

pub use clone::clone;
