//! Boundary codecs for patch operations.

pub mod json;
