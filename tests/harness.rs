//! Golden-file test harness for the preparser.
//!
//! Discovers `.input.rb` files under `tests/fixtures/`, runs `preparse` with
//! the builtin vector functions below, and compares the result against the
//! corresponding `.expected.rb` file, or, when preparsing must fail, against
//! the error message in `.expected.err`.
//!
//! Set `SP_UPDATE_FIXTURES=1` to overwrite expected files with actual output.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use sp_preparser::{preparse, PreParseError};
use sp_syntax::VectorFunctionSpec;

const VECTOR_FNS: &[&str] = &[
    "ring", "knit", "range", "line", "spread", "bools", "ramp", "stretch", "halves", "doubles",
];

fn vector_fns() -> Vec<VectorFunctionSpec> {
    VECTOR_FNS.iter().copied().map(VectorFunctionSpec::from).collect()
}

fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/sp_test/, so go up two levels to workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
}

fn collect_input_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir(dir)
        .into_iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(".input.rb"))
        })
        .collect();
    files.sort();
    files
}

fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut result = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                result.extend(walkdir(&path));
            } else {
                result.push(path);
            }
        }
    }
    result
}

fn sibling(input: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(input.to_str().unwrap().replace(".input.rb", suffix))
}

/// Outcome of preparsing a fixture, in the form stored on disk.
enum Outcome {
    Rewritten(String),
    Rejected(PreParseError),
}

fn run(source: &str) -> Outcome {
    match preparse(source, &vector_fns()) {
        Ok(out) => Outcome::Rewritten(out),
        Err(e) => Outcome::Rejected(e),
    }
}

fn check_fixture(input_path: &Path, update_mode: bool) -> Result<()> {
    let source = std::fs::read_to_string(input_path).context("failed to read input")?;

    let (expected_path, actual) = match run(&source) {
        Outcome::Rewritten(out) => (sibling(input_path, ".expected.rb"), out),
        Outcome::Rejected(e) => (sibling(input_path, ".expected.err"), format!("{e}\n")),
    };

    if update_mode {
        std::fs::write(&expected_path, &actual).context("failed to write expected")?;
        return Ok(());
    }

    if !expected_path.exists() {
        bail!(
            "missing expected file: {} (got:\n{actual})",
            expected_path.display()
        );
    }

    let expected = std::fs::read_to_string(&expected_path).context("failed to read expected")?;
    if actual != expected {
        bail!("output mismatch\n--- expected ---\n{expected}\n--- actual ---\n{actual}");
    }
    Ok(())
}

#[test]
fn golden_file_tests() {
    let fixtures = fixtures_dir();
    let input_files = collect_input_files(&fixtures);

    assert!(
        !input_files.is_empty(),
        "No test fixtures found in {}",
        fixtures.display()
    );

    let update_mode = std::env::var("SP_UPDATE_FIXTURES").is_ok();
    let mut failures = Vec::new();

    for input_path in &input_files {
        let test_name = input_path
            .strip_prefix(&fixtures)
            .unwrap()
            .display()
            .to_string();

        if let Err(e) = check_fixture(input_path, update_mode) {
            failures.push(format!("{test_name}: {e:#}"));
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} golden test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}

#[test]
fn expected_outputs_are_fixed_points() {
    let fixtures = fixtures_dir();
    let mut failures = Vec::new();

    for input_path in collect_input_files(&fixtures) {
        let expected_path = sibling(&input_path, ".expected.rb");
        let Ok(expected) = std::fs::read_to_string(&expected_path) else {
            continue;
        };
        let test_name = expected_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();

        match run(&expected) {
            Outcome::Rewritten(again) if again == expected => {}
            Outcome::Rewritten(again) => failures.push(format!(
                "{test_name}: preparsing again changed the text\n--- first ---\n{expected}\n--- second ---\n{again}"
            )),
            Outcome::Rejected(e) => failures.push(format!("{test_name}: rejected on second run: {e}")),
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} idempotence test(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n\n")
        );
    }
}
