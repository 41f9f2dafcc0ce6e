//! JSON Pointer (RFC 6901) paths for json-splice.
//!
//! A pointer is turned into an ordered list of unescaped steps. Parsing never
//! fails: malformed escapes pass through literally and text before the first
//! `/` is ignored. Callers that want stricter input run
//! [`validate_json_pointer`] first.
//!
//! # Example
//!
//! ```
//! use json_splice_pointer::{format_json_pointer, parse_json_pointer};
//!
//! let path = parse_json_pointer("/foo/a~1b");
//! assert_eq!(path, vec!["foo".to_string(), "a/b".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/a~1b");
//! ```

pub mod types;
pub mod util;
pub mod validate;

pub use types::{Path, PathStep, APPEND_TOKEN};
pub use util::{
    escape_component, format_json_pointer, is_root, parse_json_pointer, unescape_component,
};
pub use validate::{validate_json_pointer, validate_path, ValidationError};
