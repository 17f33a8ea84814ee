use std::{fs, path::Path};

use funcplot::compile;
use walkdir::WalkDir;

/// Value bound to `x` for every case table.
const X: f64 = 1.5;
const TOLERANCE: f64 = 1e-4;

enum Expected {
    Value(f64),
    Error(String),
}

#[test]
fn case_tables_hold() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let mut count = 0;

    for entry in WalkDir::new(&root).sort_by_file_name()
                                    .into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line, expression, expected) in parse_cases(&content) {
            count += 1;
            check(&expression, &expected)
                .unwrap_or_else(|message| panic!("{path:?}:{line}: '{expression}': {message}"));
        }
    }

    assert!(count > 0, "No cases found in {root:?}");
}

fn parse_cases(content: &str) -> Vec<(usize, String, Expected)> {
    let mut cases = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let (expression, expected) =
            line.split_once("=>")
                .unwrap_or_else(|| panic!("line {} has no '=>': {line}", i + 1));

        let expected = expected.trim();
        let expected = match expected.strip_prefix("error ") {
            Some(kind) => Expected::Error(kind.trim().to_string()),
            None => Expected::Value(expected.parse()
                                            .unwrap_or_else(|e| {
                                                panic!("line {}: bad value '{expected}': {e}", i + 1)
                                            })),
        };

        cases.push((i + 1, expression.trim().to_string(), expected));
    }

    cases
}

fn check(expression: &str, expected: &Expected) -> Result<(), String> {
    match (compile(expression), expected) {
        (Ok(program), Expected::Value(value)) => {
            let result = program.evaluate(X);
            let matches = if value.is_finite() {
                (result - value).abs() < TOLERANCE
            } else {
                result == *value
            };
            if matches {
                Ok(())
            } else {
                Err(format!("evaluated to {result}, expected {value}"))
            }
        },
        (Ok(program), Expected::Error(kind)) => {
            Err(format!("compiled to '{program}', expected error {kind}"))
        },
        (Err(error), Expected::Value(value)) => {
            Err(format!("failed with '{error}', expected {value}"))
        },
        (Err(error), Expected::Error(kind)) => {
            let found = format!("{:?}", error.kind());
            if &found == kind {
                Ok(())
            } else {
                Err(format!("failed with {found}, expected {kind}"))
            }
        },
    }
}
