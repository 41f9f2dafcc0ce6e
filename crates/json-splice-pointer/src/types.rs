//! Type definitions for JSON Pointer paths.

/// One unescaped step of a JSON Pointer path.
///
/// Steps are always strings. Whether a step names an object key or an
/// array index is decided by the container it is applied to.
pub type PathStep = String;

/// A parsed JSON Pointer path. The empty path denotes the document root.
pub type Path = Vec<PathStep>;

/// The literal step that addresses one past the last element of an array.
pub const APPEND_TOKEN: &str = "-";
