//! The logic behind the `json-splice` binary.

use serde_json::Value;
use thiserror::Error;

use crate::json_patch::{apply_patch_owned, from_json_patch, ApplyError, PatchError, PatchOptions};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Decode(#[from] PatchError),
    #[error("{0}")]
    Patch(#[from] ApplyError),
    #[error("{0}")]
    Usage(String),
}

/// Apply a patch to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn apply_json_patch(
    doc_json: &str,
    patch_json: &str,
    options: &PatchOptions,
) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops_raw: Value = serde_json::from_str(patch_json)?;
    let ops = from_json_patch(&ops_raw)?;
    // The document was parsed here and nobody else holds it.
    let result = apply_patch_owned(doc, &ops, options)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Command-line arguments of the `json-splice` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub patch: String,
    pub options: PatchOptions,
}

/// Parses `json-splice [--strict-paths] '<patch-array-json>'`.
pub fn parse_args<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = PatchOptions::default();
    let mut patch = None;
    for arg in args {
        if arg == "--strict-paths" {
            options.strict_paths = true;
        } else if arg.starts_with("--") {
            return Err(CliError::Usage(format!("unknown flag: {arg}")));
        } else if patch.is_some() {
            return Err(CliError::Usage("expected a single patch argument".into()));
        } else {
            patch = Some(arg);
        }
    }
    let patch =
        patch.ok_or_else(|| CliError::Usage("First argument must be a JSON patch array.".into()))?;
    Ok(Args { patch, options })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn applies_patch_text() {
        let out = apply_json_patch(
            r#"{"a": 1}"#,
            r#"[{"op": "copy", "from": "/a", "path": "/b"}]"#,
            &PatchOptions::default(),
        )
        .unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({"a": 1, "b": 1}));
    }

    #[test]
    fn reports_each_failure_kind() {
        let options = PatchOptions::default();
        assert!(matches!(
            apply_json_patch("{", "[]", &options),
            Err(CliError::Json(_))
        ));
        assert!(matches!(
            apply_json_patch("{}", r#"[{"op": "add"}]"#, &options),
            Err(CliError::Decode(_))
        ));
        assert!(matches!(
            apply_json_patch("{}", r#"[{"op": "test", "path": "/a", "value": 1}]"#, &options),
            Err(CliError::Patch(_))
        ));
    }

    #[test]
    fn parses_arguments() {
        let parsed = parse_args(args(&["--strict-paths", "[]"])).unwrap();
        assert_eq!(parsed.patch, "[]");
        assert!(parsed.options.strict_paths);

        let parsed = parse_args(args(&["[]"])).unwrap();
        assert!(!parsed.options.strict_paths);

        assert!(matches!(parse_args(args(&[])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(args(&["--nope", "[]"])), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(args(&["[]", "[]"])), Err(CliError::Usage(_))));
    }
}
