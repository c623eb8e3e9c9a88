//! Probe execution.
//!
//! One compiler invocation per (descriptor, language) pair: compile-only,
//! object output discarded into the fixture directory. Exit status zero is
//! the only success signal; diagnostics are captured and logged, never
//! interpreted.

use std::path::Path;

use anyhow::{Context, Result};

use crate::core::language::Language;
use crate::probe::toolchain::Toolchain;
use crate::util::process::ProcessBuilder;

/// Baseline arguments shared by every probe: compile only, discard output.
const BASELINE_ARGS: [&str; 3] = ["-c", "-o", "probe.o"];

/// Runs probe compilations against a resolved toolchain.
#[derive(Debug)]
pub struct ProbeExecutor {
    toolchain: Toolchain,
}

impl ProbeExecutor {
    /// Create an executor for the given toolchain.
    pub fn new(toolchain: Toolchain) -> Self {
        ProbeExecutor { toolchain }
    }

    /// The resolved toolchain.
    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Compile one probe source.
    ///
    /// Returns `true` iff the compiler exits with status zero. A nonzero or
    /// abnormal exit is a negative capability verdict, not an error; only a
    /// failure to launch the compiler at all is an error.
    ///
    /// The child process runs with `dir` as its working directory; the
    /// parent's working directory is untouched.
    pub fn probe(
        &self,
        lang: Language,
        dir: &Path,
        filename: &str,
        extra_flags: &[String],
    ) -> Result<bool> {
        let compiler = self.toolchain.compiler(lang);
        let builder = ProcessBuilder::new(compiler)
            .args(BASELINE_ARGS)
            .args(extra_flags)
            .arg(filename)
            .cwd(dir);

        tracing::debug!("running {}", builder.display_command());

        let output = builder
            .exec()
            .with_context(|| format!("failed to invoke compiler for {}", lang))?;

        let accepted = output.status.success();
        if !accepted {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(
                "probe rejected ({}): {}",
                output.status,
                stderr.trim().lines().next().unwrap_or("")
            );
        }

        Ok(accepted)
    }
}
