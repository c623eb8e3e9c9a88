//! Environment and toolchain health checks.
//!
//! The `doctor` command verifies that the compilers ccprobe needs are
//! available before a real probing run is attempted.
//!
//! ## Checks Performed
//!
//! - C compiler availability (cc, gcc, clang)
//! - C++ compiler availability (c++, g++, clang++)

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::util::process::{find_executable, ProcessBuilder};

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path to the tool (if applicable)
    pub path: Option<PathBuf>,

    /// Version string (if applicable)
    pub version: Option<String>,

    /// How long the check took
    pub duration: Duration,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            version: None,
            duration: Duration::ZERO,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            path: None,
            version: None,
            duration: Duration::ZERO,
        }
    }

    /// Set the tool path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,

    /// Total time taken
    pub total_duration: Duration,
}

impl DoctorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        DoctorReport::default()
    }

    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if every check passed.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Get the count of passed checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get the count of failed checks.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

/// Run the doctor command.
pub fn doctor() -> DoctorReport {
    let start = Instant::now();
    let mut report = DoctorReport::new();

    report.add(check_compiler(
        "C Compiler",
        "CC",
        &["cc", "gcc", "clang"],
    ));
    report.add(check_compiler(
        "C++ Compiler",
        "CXX",
        &["c++", "g++", "clang++"],
    ));

    report.total_duration = start.elapsed();
    report
}

/// Check for a compiler, honoring the environment override first.
fn check_compiler(name: &str, env_key: &str, candidates: &[&str]) -> CheckResult {
    let start = Instant::now();

    let mut names: Vec<String> = Vec::new();
    if let Ok(from_env) = std::env::var(env_key) {
        names.push(from_env);
    }
    names.extend(candidates.iter().map(|c| c.to_string()));

    for candidate in &names {
        if let Some((path, version)) = try_compiler(candidate) {
            return CheckResult::pass(name, format!("Found {}", candidate))
                .with_path(path)
                .with_version(version)
                .with_duration(start.elapsed());
        }
    }

    CheckResult::fail(
        name,
        format!("no compiler found (tried {})", names.join(", ")),
    )
    .with_duration(start.elapsed())
}

/// Try to run a compiler and get its version line.
fn try_compiler(name: &str) -> Option<(PathBuf, String)> {
    let path = find_executable(name)?;

    if let Ok(output) = ProcessBuilder::new(&path).arg("--version").exec() {
        // Some compilers print the banner to stderr.
        let text = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };

        for line in text.lines() {
            let line = line.trim();
            if !line.is_empty() {
                return Some((path, line.to_string()));
            }
        }
    }

    // Compiler exists but couldn't get version
    Some((path, "unknown version".to_string()))
}

/// Format the doctor report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "ccprobe doctor").unwrap();
    writeln!(output, "==============\n").unwrap();

    writeln!(output, "Checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };

        writeln!(output, "  {} {}", status, check.name).unwrap();

        if verbose {
            writeln!(output, "      {}", check.message).unwrap();
            if let Some(path) = &check.path {
                writeln!(output, "      Path: {}", path.display()).unwrap();
            }
            if let Some(version) = &check.version {
                writeln!(output, "      Version: {}", version).unwrap();
            }
        }
    }

    writeln!(output).unwrap();

    let passed = report.passed_count();
    let failed = report.failed_count();
    writeln!(output, "Summary: {} passed, {} failed", passed, failed).unwrap();

    if failed > 0 {
        writeln!(
            output,
            "\nWarning: {} check(s) failed. Probing will not work without both compilers;\n\
             trust mode (--trust-features --trust-flags) still does.",
            failed
        )
        .unwrap();
    } else {
        writeln!(output, "\nAll checks passed. ccprobe is ready to use.").unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_pass() {
        let result = CheckResult::pass("test", "passed");
        assert!(result.passed);
    }

    #[test]
    fn test_doctor_report_all_passed() {
        let mut report = DoctorReport::new();
        report.add(CheckResult::pass("check1", "ok"));
        report.add(CheckResult::pass("check2", "ok"));

        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_doctor_report_with_failure() {
        let mut report = DoctorReport::new();
        report.add(CheckResult::pass("check1", "ok"));
        report.add(CheckResult::fail("check2", "missing"));

        assert!(!report.all_passed());
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn test_format_report_mentions_failures() {
        let mut report = DoctorReport::new();
        report.add(CheckResult::fail("C Compiler", "no compiler found"));

        let formatted = format_report(&report, false);
        assert!(formatted.contains("[!!] C Compiler"));
        assert!(formatted.contains("1 failed"));
    }
}
