//! JSON equality utilities.
//!
//! Equality here is structural: object key order is ignored and numbers are
//! compared as `f64`.

mod deep_equal;

pub use deep_equal::{deep_equal, numbers_equal};
