use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// One recorded patch scenario.
///
/// Exactly one of `expected` and `error` is set. `error` holds the
/// `PatchError::code()` the patch must stop with.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchCase {
    pub comment: String,
    #[serde(default = "empty_object")]
    pub doc: Value,
    pub patch: Value,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn load_patch_cases() -> Vec<PatchCase> {
    let path = fixtures_dir().join("patch_cases.json");
    let data = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}
