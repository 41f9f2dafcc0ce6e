//! Validation functions for JSON Pointer.
//!
//! Parsing is permissive on its own; these checks are opt-in for callers
//! that want malformed pointers rejected up front.

use thiserror::Error;

/// Maximum allowed pointer string length.
const MAX_POINTER_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
    #[error("INVALID_ESCAPE at byte {0}")]
    InvalidEscape(usize),
    #[error("Path too long")]
    PathTooLong,
}

/// Validate a JSON Pointer string.
///
/// # Errors
///
/// Returns an error if:
/// - The pointer is non-empty but doesn't start with `/`
/// - The pointer exceeds the maximum length (1024 bytes)
/// - A `~` is not followed by `0` or `1`
///
/// # Example
///
/// ```
/// use json_splice_pointer::validate_json_pointer;
///
/// validate_json_pointer("").unwrap();
/// validate_json_pointer("/foo/a~1b").unwrap();
/// validate_json_pointer("foo").unwrap_err();
/// validate_json_pointer("/a~b").unwrap_err();
/// ```
pub fn validate_json_pointer(pointer: &str) -> Result<(), ValidationError> {
    if pointer.is_empty() {
        return Ok(());
    }
    if !pointer.starts_with('/') {
        return Err(ValidationError::PointerInvalid);
    }
    if pointer.len() > MAX_POINTER_LENGTH {
        return Err(ValidationError::PointerTooLong);
    }
    let bytes = pointer.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'~' && !matches!(bytes.get(i + 1), Some(b'0') | Some(b'1')) {
            return Err(ValidationError::InvalidEscape(i));
        }
    }
    Ok(())
}

/// Validate a parsed path.
///
/// # Errors
///
/// Returns an error if the path exceeds the maximum depth (256 steps).
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_pointer() {
        assert!(validate_json_pointer("").is_ok());
    }

    #[test]
    fn test_validate_absolute_pointer() {
        assert!(validate_json_pointer("/").is_ok());
        assert!(validate_json_pointer("/foo").is_ok());
        assert!(validate_json_pointer("/foo/bar").is_ok());
        assert!(validate_json_pointer("/~0~1").is_ok());
    }

    #[test]
    fn test_validate_relative_pointer() {
        assert_eq!(validate_json_pointer("foo"), Err(ValidationError::PointerInvalid));
        assert!(validate_json_pointer("foo/bar").is_err());
    }

    #[test]
    fn test_validate_long_pointer() {
        let long_pointer = "/".to_string() + &"a".repeat(2000);
        assert_eq!(
            validate_json_pointer(&long_pointer),
            Err(ValidationError::PointerTooLong)
        );
    }

    #[test]
    fn test_validate_malformed_escapes() {
        assert_eq!(validate_json_pointer("/a~"), Err(ValidationError::InvalidEscape(2)));
        assert_eq!(validate_json_pointer("/~2"), Err(ValidationError::InvalidEscape(1)));
        assert_eq!(validate_json_pointer("/ok/~x"), Err(ValidationError::InvalidEscape(4)));
    }

    #[test]
    fn test_validate_long_path() {
        let path: Vec<String> = (0..300).map(|i| i.to_string()).collect();
        assert!(validate_path(&path).is_err());
    }

    #[test]
    fn test_validate_max_length_path() {
        let path: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        assert!(validate_path(&path).is_ok());
    }
}
