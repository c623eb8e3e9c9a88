//! Implementation of `ccprobe generate`: the probe-and-render pipeline.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::catalogue::Catalogue;
use crate::core::descriptor::Descriptor;
use crate::core::outcome::{LanguageSet, ProbeResults};
use crate::probe::executor::ProbeExecutor;
use crate::probe::fixture::FixtureBuilder;
use crate::probe::toolchain::Toolchain;
use crate::render::fragment::{render_fragment, StandardPrefs};
use crate::render::header::{guard_from_path, render_header};
use crate::util::fs::{remove_dir_all_if_exists, write_string};
use crate::util::shell::{Shell, Status};

/// Options for the generate operation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Output path of the capability header.
    pub header_path: PathBuf,

    /// Output path of the build-flag fragment.
    pub fragment_path: PathBuf,

    /// Explicit C compiler override.
    pub cc: Option<PathBuf>,

    /// Explicit C++ compiler override.
    pub cxx: Option<PathBuf>,

    /// Preferred C standard identifier.
    pub std_c: Option<String>,

    /// Preferred C++ standard identifier.
    pub std_cxx: Option<String>,

    /// Assume every feature probe succeeds without running the compiler.
    pub trust_features: bool,

    /// Assume every flag probe succeeds without running the compiler.
    pub trust_flags: bool,

    /// Scratch root for fixture directories.
    pub scratch_dir: PathBuf,

    /// Keep fixture directories after a successful run.
    pub keep_fixtures: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            header_path: PathBuf::from("config.h"),
            fragment_path: PathBuf::from("config.mk"),
            cc: None,
            cxx: None,
            std_c: None,
            std_cxx: None,
            trust_features: false,
            trust_flags: false,
            scratch_dir: PathBuf::from(".ccprobe-scratch"),
            keep_fixtures: false,
        }
    }
}

/// Run the probe-and-render pipeline.
///
/// Probing is strictly sequential; every descriptor gets its outcome before
/// rendering begins. Probe negatives never abort the run; environment
/// failures (scratch directory, fixture files, artifact writes, compiler
/// spawn) do.
pub fn generate(catalogue: &Catalogue, opts: &GenerateOptions, shell: &Shell) -> Result<()> {
    catalogue.validate()?;

    let needs_probing = catalogue.iter().any(|d| !trusted(d, opts));

    // The scratch root is claimed before compiler resolution so that an
    // unusable scratch path fails the same way on machines with and without
    // a compiler installed.
    let mut probe_env = if needs_probing {
        let builder = FixtureBuilder::new(&opts.scratch_dir)?;
        let toolchain = Toolchain::detect(opts.cc.as_deref(), opts.cxx.as_deref())?;
        Some((builder, ProbeExecutor::new(toolchain)))
    } else {
        None
    };

    let mut results = ProbeResults::with_capacity(catalogue.len());
    let mut trusted_count = 0usize;

    for descriptor in catalogue.iter() {
        if trusted(descriptor, opts) {
            results.record(descriptor.applicable_languages());
            trusted_count += 1;
            continue;
        }

        let (builder, executor) = probe_env.as_mut().expect("probe environment exists");
        let fixture = builder.build(descriptor)?;

        let extra_flags: Vec<String> = match descriptor {
            Descriptor::Flag(flag) => vec![flag.flag.clone()],
            Descriptor::Feature(_) => Vec::new(),
        };

        let mut outcome = LanguageSet::empty();
        for (lang, filename) in &fixture.files {
            let accepted = executor.probe(*lang, &fixture.dir, filename, &extra_flags)?;
            if accepted {
                outcome.insert(*lang);
            }
            shell.status(
                Status::Probing,
                format!(
                    "{} [{}] ... {}",
                    descriptor.display_name(),
                    lang,
                    if accepted { "yes" } else { "no" }
                ),
            );
        }
        results.record(outcome);
    }

    if trusted_count > 0 {
        shell.status(
            Status::Skipped,
            format!("{} probe(s) assumed successful (trust mode)", trusted_count),
        );
    }

    let guard = guard_from_path(&opts.header_path);
    let header = render_header(catalogue, &results, &guard);
    write_string(&opts.header_path, &header)?;
    shell.status(Status::Generated, opts.header_path.display().to_string());

    let prefs = StandardPrefs {
        c: opts.std_c.clone(),
        cxx: opts.std_cxx.clone(),
    };
    let fragment = render_fragment(catalogue, &results, &prefs);
    write_string(&opts.fragment_path, &fragment)?;
    shell.status(Status::Generated, opts.fragment_path.display().to_string());

    if needs_probing && !opts.keep_fixtures {
        remove_dir_all_if_exists(&opts.scratch_dir)?;
        shell.verbose_status(Status::Removed, opts.scratch_dir.display().to_string());
    }

    shell.status(
        Status::Finished,
        format!("{} descriptors, 2 artifacts", catalogue.len()),
    );
    Ok(())
}

fn trusted(descriptor: &Descriptor, opts: &GenerateOptions) -> bool {
    match descriptor {
        Descriptor::Feature(_) => opts.trust_features,
        Descriptor::Flag(_) => opts.trust_flags,
    }
}
