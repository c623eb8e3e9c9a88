//! CLI integration tests for ccprobe.
//!
//! Probing runs use trust mode throughout so the tests pass on machines
//! without any C/C++ compiler installed.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the ccprobe binary command.
fn ccprobe() -> Command {
    Command::cargo_bin("ccprobe").unwrap()
}

/// Create a temporary directory for test runs.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

// ============================================================================
// ccprobe generate
// ============================================================================

#[test]
fn test_generate_trusted_writes_both_artifacts() {
    let tmp = temp_dir();

    ccprobe()
        .args(["generate", "--trust-features", "--trust-flags"])
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join("config.h").exists());
    assert!(tmp.path().join("config.mk").exists());
    // Fully trusted runs never touch the scratch directory.
    assert!(!tmp.path().join(".ccprobe-scratch").exists());
}

#[test]
fn test_generate_header_content() {
    let tmp = temp_dir();

    ccprobe()
        .args(["generate", "--trust-features", "--trust-flags"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let header = fs::read_to_string(tmp.path().join("config.h")).unwrap();

    assert!(header.contains("#ifndef INC_CONFIG_GENERATED"));
    assert!(header.contains("#define HAVE_ATTRIBUTE_UNUSED 1"));
    assert!(header.contains("#define HAVE_CXX_BUILTIN_EXPECT 1"));
    assert!(header.contains("#define HAVE_FLAG_WALL 1"));
    // C-scoped flags remain skipped for C++ even under trust mode.
    assert!(header.contains("/* #define HAVE_CXX_FLAG_WSTRICT_PROTOTYPES 1 (skipped) */"));
    assert!(header.trim_end().ends_with("#endif /* INC_CONFIG_GENERATED */"));
}

#[test]
fn test_generate_fragment_content() {
    let tmp = temp_dir();

    ccprobe()
        .args(["generate", "--trust-features", "--trust-flags"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let fragment = fs::read_to_string(tmp.path().join("config.mk")).unwrap();

    assert!(fragment.contains("CFLAGS_STD = -std=c11"));
    assert!(fragment.contains("CXXFLAGS_STD = -std=c++17"));
    assert!(fragment.contains("CFLAGS_WARN = "));
    assert!(fragment.contains("CFLAGS_WERROR = -Werror"));
    assert!(fragment.contains("HAVE_FLAG_WALL = 1"));
    assert!(fragment.contains("HAVE_CXX_FLAG_WSTRICT_PROTOTYPES = 0"));

    // The wrapped warning aggregate stays under the column limit.
    for line in fragment.lines() {
        assert!(line.len() < 80, "overlong line: {:?}", line);
    }
}

#[test]
fn test_generate_honors_preferred_standard() {
    let tmp = temp_dir();

    ccprobe()
        .args([
            "generate",
            "--trust-features",
            "--trust-flags",
            "--std-c",
            "c99",
            "--std-cxx",
            "c++14",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();

    let fragment = fs::read_to_string(tmp.path().join("config.mk")).unwrap();
    assert!(fragment.contains("CFLAGS_STD = -std=c99"));
    assert!(fragment.contains("CXXFLAGS_STD = -std=c++14"));
}

#[test]
fn test_generate_custom_output_paths() {
    let tmp = temp_dir();

    ccprobe()
        .args([
            "generate",
            "--trust-features",
            "--trust-flags",
            "--header",
            "out/feat.h",
            "--fragment",
            "out/feat.mk",
        ])
        .current_dir(tmp.path())
        .assert()
        .success();

    let header = fs::read_to_string(tmp.path().join("out/feat.h")).unwrap();
    assert!(header.contains("#ifndef INC_FEAT_GENERATED"));
    assert!(tmp.path().join("out/feat.mk").exists());
}

#[test]
fn test_generate_header_and_fragment_verdicts_agree() {
    let tmp = temp_dir();

    ccprobe()
        .args(["generate", "--trust-features", "--trust-flags"])
        .current_dir(tmp.path())
        .assert()
        .success();

    let header = fs::read_to_string(tmp.path().join("config.h")).unwrap();
    let fragment = fs::read_to_string(tmp.path().join("config.mk")).unwrap();

    // Every boolean variable in the fragment must agree with the header's
    // verdict for the same name.
    for line in fragment.lines() {
        if let Some((name, value)) = line.split_once(" = ") {
            if !name.starts_with("HAVE_") {
                continue;
            }
            let defined = header.contains(&format!("#define {} 1\n", name));
            match value {
                "1" => assert!(defined, "{} is 1 but not defined in header", name),
                "0" => assert!(!defined, "{} is 0 but defined in header", name),
                _ => {}
            }
        }
    }
}

#[test]
fn test_generate_fails_on_unusable_scratch_dir() {
    let tmp = temp_dir();
    fs::write(tmp.path().join("blocker"), "").unwrap();

    // Flag probes are live, so the scratch root must be claimed; a file in
    // the way is an environment error, reported before any probing starts.
    ccprobe()
        .args([
            "generate",
            "--trust-features",
            "--scratch-dir",
            "blocker/scratch",
        ])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("scratch"));

    assert!(!tmp.path().join("config.h").exists());
}

// ============================================================================
// ccprobe list
// ============================================================================

#[test]
fn test_list_shows_catalogue() {
    ccprobe()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Features:"))
        .stdout(predicate::str::contains("attribute unused"))
        .stdout(predicate::str::contains("builtin expect"))
        .stdout(predicate::str::contains("-Wall (warning)"))
        .stdout(predicate::str::contains("-std=c11 (standard, c only)"))
        .stdout(predicate::str::contains("-Werror (warnings-as-errors)"));
}

// ============================================================================
// ccprobe completions
// ============================================================================

#[test]
fn test_completions_bash() {
    ccprobe()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ccprobe"));
}
