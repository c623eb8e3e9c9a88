//! Capability header rendering.
//!
//! The header is a pure function of the catalogue and the probe outcomes.
//! Every (descriptor, language) pair appears exactly once: as an active
//! `#define`, or as a commented-out placeholder whose annotation tells
//! "skipped" (the descriptor is scoped to a different language) apart from
//! "failed" (the probe genuinely failed). Callers may grep the header to
//! distinguish not-applicable from not-supported.

use std::path::Path;

use crate::core::catalogue::Catalogue;
use crate::core::descriptor::{sanitize, Descriptor};
use crate::core::language::Language;
use crate::core::outcome::ProbeResults;

/// Derive the include-guard name from the output filename stem.
pub fn guard_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    format!("INC_{}_GENERATED", sanitize(&stem).to_ascii_uppercase())
}

/// Render the capability header.
///
/// Ordering is catalogue declaration order, features first, then flags;
/// within a descriptor, languages in declaration order. Deterministic:
/// identical inputs produce byte-identical output.
pub fn render_header(catalogue: &Catalogue, results: &ProbeResults, guard: &str) -> String {
    debug_assert_eq!(catalogue.len(), results.len());

    let mut out = String::new();
    out.push_str("/* Generated by ccprobe. Do not edit. */\n");
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n", guard));

    let sections: [fn(&Descriptor) -> bool; 2] = [descriptor_is_feature, descriptor_is_flag];
    for section in sections {
        let mut section_open = false;
        for (index, descriptor) in catalogue.iter().enumerate() {
            if !section(descriptor) {
                continue;
            }
            if !section_open {
                out.push('\n');
                section_open = true;
            }

            let outcome = results.outcome(index);
            for lang in Language::ALL {
                let name = descriptor.macro_name(lang);
                if outcome.contains(lang) {
                    out.push_str(&format!("#define {} 1\n", name));
                } else if descriptor.scope().is_some_and(|scope| scope != lang) {
                    out.push_str(&format!("/* #define {} 1 (skipped) */\n", name));
                } else {
                    out.push_str(&format!("/* #define {} 1 (failed) */\n", name));
                }
            }
        }
    }

    out.push_str(&format!("\n#endif /* {} */\n", guard));
    out
}

fn descriptor_is_feature(descriptor: &Descriptor) -> bool {
    matches!(descriptor, Descriptor::Feature(_))
}

fn descriptor_is_flag(descriptor: &Descriptor) -> bool {
    matches!(descriptor, Descriptor::Flag(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::Snippet;
    use crate::core::outcome::LanguageSet;
    use std::path::PathBuf;

    fn results_for(catalogue: &Catalogue, outcomes: &[LanguageSet]) -> ProbeResults {
        let mut results = ProbeResults::with_capacity(catalogue.len());
        for outcome in outcomes {
            results.record(*outcome);
        }
        results
    }

    #[test]
    fn test_guard_from_path() {
        assert_eq!(
            guard_from_path(&PathBuf::from("config.h")),
            "INC_CONFIG_GENERATED"
        );
        assert_eq!(
            guard_from_path(&PathBuf::from("out/feat-probe.h")),
            "INC_FEAT_PROBE_GENERATED"
        );
    }

    #[test]
    fn test_header_is_complete_and_guarded() {
        let catalogue = Catalogue::builtin();
        let outcomes: Vec<LanguageSet> = catalogue
            .iter()
            .map(|d| d.applicable_languages())
            .collect();
        let results = results_for(&catalogue, &outcomes);

        let header = render_header(&catalogue, &results, "INC_CONFIG_GENERATED");

        assert!(header.starts_with("/* Generated by ccprobe."));
        assert!(header.contains("#ifndef INC_CONFIG_GENERATED\n"));
        assert!(header.ends_with("#endif /* INC_CONFIG_GENERATED */\n"));

        // Every (descriptor, language) pair appears exactly once.
        for descriptor in catalogue.iter() {
            for lang in Language::ALL {
                let name = descriptor.macro_name(lang);
                let occurrences = header.matches(&name).count();
                assert_eq!(occurrences, 1, "{} appears {} times", name, occurrences);
            }
        }
    }

    #[test]
    fn test_skipped_versus_failed_placeholders() {
        // One unscoped warning and one C-scoped warning, both accepted only
        // for C. For C++ the unscoped flag failed and the scoped flag is
        // merely not applicable; the header must tell those apart.
        let catalogue = Catalogue::new(vec![
            Descriptor::warning("-Wall"),
            Descriptor::warning_scoped("-Wstrict-prototypes", Language::C),
        ]);
        let results = results_for(
            &catalogue,
            &[
                LanguageSet::single(Language::C),
                LanguageSet::single(Language::C),
            ],
        );

        let header = render_header(&catalogue, &results, "INC_CONFIG_GENERATED");

        assert!(header.contains("#define HAVE_FLAG_WALL 1\n"));
        assert!(header.contains("/* #define HAVE_CXX_FLAG_WALL 1 (failed) */\n"));
        assert!(header.contains("#define HAVE_FLAG_WSTRICT_PROTOTYPES 1\n"));
        assert!(header.contains("/* #define HAVE_CXX_FLAG_WSTRICT_PROTOTYPES 1 (skipped) */\n"));
    }

    #[test]
    fn test_failed_feature_placeholder() {
        let catalogue = Catalogue::new(vec![Descriptor::builtin(
            "expect",
            Snippet::statement(&["(void)__builtin_expect(1, 1);"]),
        )]);
        let results = results_for(&catalogue, &[LanguageSet::single(Language::Cxx)]);

        let header = render_header(&catalogue, &results, "INC_CONFIG_GENERATED");

        assert!(header.contains("/* #define HAVE_BUILTIN_EXPECT 1 (failed) */\n"));
        assert!(header.contains("#define HAVE_CXX_BUILTIN_EXPECT 1\n"));
        // Features are never scoped, so no feature placeholder says skipped.
        assert!(!header.contains("skipped"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let catalogue = Catalogue::builtin();
        let outcomes: Vec<LanguageSet> = catalogue
            .iter()
            .map(|_| LanguageSet::single(Language::C))
            .collect();
        let results = results_for(&catalogue, &outcomes);

        let first = render_header(&catalogue, &results, "INC_CONFIG_GENERATED");
        let second = render_header(&catalogue, &results, "INC_CONFIG_GENERATED");
        assert_eq!(first, second);
    }
}
