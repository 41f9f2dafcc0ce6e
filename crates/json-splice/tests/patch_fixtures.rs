mod common;

use json_splice::json_patch::{apply_patch, from_json_patch, PatchOptions};

use common::assertions::assert_json_eq;
use common::fixtures::{load_patch_cases, PatchCase};

fn run_case(case: &PatchCase) -> Result<(), String> {
    let ops = match from_json_patch(&case.patch) {
        Ok(ops) => ops,
        Err(err) => {
            return match &case.error {
                Some(code) if code == err.code() => Ok(()),
                _ => Err(format!("patch did not decode: {err}")),
            };
        }
    };

    let before = case.doc.clone();
    let result = apply_patch(&case.doc, &ops, &PatchOptions::default());
    assert_eq!(case.doc, before, "{}: input document was modified", case.comment);

    match (result, &case.expected, &case.error) {
        (Ok(out), Some(expected), None) => {
            assert_json_eq(&out, expected, &case.comment);
            Ok(())
        }
        (Err(err), None, Some(code)) if err.kind.code() == code => Ok(()),
        (Err(err), None, Some(code)) => Err(format!("expected {code}, got {err}")),
        (Ok(out), None, Some(code)) => Err(format!("expected {code}, got document {out}")),
        (Err(err), Some(_), None) => Err(format!("unexpected failure: {err}")),
        _ => Err("case must set exactly one of `expected` and `error`".to_string()),
    }
}

#[test]
fn patch_cases_match_recorded_outcomes() {
    let cases = load_patch_cases();
    assert!(!cases.is_empty(), "no patch cases loaded");

    let failures: Vec<String> = cases
        .iter()
        .filter(|case| !case.disabled)
        .filter_map(|case| {
            run_case(case)
                .err()
                .map(|msg| format!("{}: {msg}", case.comment))
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} patch cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn patch_case_comments_are_unique() {
    let cases = load_patch_cases();
    let mut seen = std::collections::BTreeSet::new();
    for case in &cases {
        assert!(seen.insert(case.comment.as_str()), "duplicate case {:?}", case.comment);
    }
}
