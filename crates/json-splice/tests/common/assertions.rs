use serde_json::Value;

use json_splice_util::deep_equal;

/// Structural equality that treats `1` and `1.0` alike and ignores key order.
pub fn assert_json_eq(actual: &Value, expected: &Value, context: &str) {
    assert!(
        deep_equal(actual, expected),
        "{context}: documents differ\n  actual:   {actual}\n  expected: {expected}"
    );
}

