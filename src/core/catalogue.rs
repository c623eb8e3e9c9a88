//! The probe catalogue.
//!
//! A catalogue is an immutable, ordered list of descriptors passed by value
//! into the pipeline entry point. Declaration order is significant: it is
//! the emission order of both artifacts and the fallback order for standard
//! selection.

use thiserror::Error;

use crate::core::descriptor::{Descriptor, FlagKind, Snippet};
use crate::core::language::Language;

/// A defect in a catalogue, surfaced at pipeline entry.
///
/// The shipped catalogue never triggers these; they guard catalogues
/// constructed in tests or future configuration paths.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The warnings-as-errors flag must apply to every language.
    #[error("warnings-as-errors flag `{0}` must not be language-scoped")]
    ScopedWarningsAsErrors(String),

    /// Two descriptors collapse to the same derived name.
    #[error("duplicate descriptor name `{0}` after sanitization")]
    DuplicateName(String),
}

/// Ordered, immutable list of probe descriptors.
#[derive(Debug, Clone)]
pub struct Catalogue {
    entries: Vec<Descriptor>,
}

impl Catalogue {
    /// Create a catalogue from descriptors in declaration order.
    pub fn new(entries: Vec<Descriptor>) -> Self {
        Catalogue { entries }
    }

    /// The fixed catalogue the tool ships with: features first, then flags.
    pub fn builtin() -> Self {
        let mut entries = Vec::new();

        // Attributes, probed at file scope.
        entries.push(Descriptor::attribute(
            "unused",
            Snippet::declaration(&["static int probe_unused __attribute__((unused));"]),
        ));
        entries.push(Descriptor::attribute(
            "noreturn",
            Snippet::declaration(&[
                "static void probe_noreturn(void) __attribute__((noreturn));",
                "static void probe_noreturn(void) { for (;;) { } }",
            ]),
        ));
        entries.push(Descriptor::attribute(
            "fallthrough",
            Snippet::statement(&[
                "int n = 1;",
                "switch (n) {",
                "case 0:",
                "    n = 2;",
                "    __attribute__((fallthrough));",
                "case 1:",
                "    n = 3;",
                "    break;",
                "default:",
                "    break;",
                "}",
                "(void)n;",
            ]),
        ));
        entries.push(Descriptor::attribute(
            "constructor",
            Snippet::declaration(&[
                "static void probe_constructor(void) __attribute__((constructor));",
                "static void probe_constructor(void) { }",
            ]),
        ));
        entries.push(Descriptor::attribute(
            "packed",
            Snippet::declaration(&[
                "struct probe_packed { char c; int n; } __attribute__((packed));",
            ]),
        ));

        // Builtins, probed as statements.
        entries.push(Descriptor::builtin(
            "expect",
            Snippet::statement(&["(void)__builtin_expect(1, 1);"]),
        ));
        entries.push(Descriptor::builtin(
            "unreachable",
            Snippet::statement(&["if (0) {", "    __builtin_unreachable();", "}"]),
        ));
        entries.push(Descriptor::builtin(
            "trap",
            Snippet::statement(&["if (0) {", "    __builtin_trap();", "}"]),
        ));
        entries.push(Descriptor::builtin(
            "popcount",
            Snippet::statement(&["(void)__builtin_popcount(255);"]),
        ));

        // Language standards. Order within a language is the fallback order
        // when the preferred standard did not probe successfully.
        entries.push(Descriptor::standard("-std=c11", Language::C));
        entries.push(Descriptor::standard("-std=c99", Language::C));
        entries.push(Descriptor::standard("-std=c++17", Language::Cxx));
        entries.push(Descriptor::standard("-std=c++14", Language::Cxx));
        entries.push(Descriptor::standard("-std=c++11", Language::Cxx));

        // Warning switches.
        entries.push(Descriptor::warning("-Wall"));
        entries.push(Descriptor::warning("-Wextra"));
        entries.push(Descriptor::warning("-Wpedantic"));
        entries.push(Descriptor::warning("-Wshadow"));
        entries.push(Descriptor::warning("-Wvla"));
        entries.push(Descriptor::warning("-Wwrite-strings"));
        entries.push(Descriptor::warning("-Wpointer-arith"));
        entries.push(Descriptor::warning_scoped("-Wstrict-prototypes", Language::C));
        entries.push(Descriptor::warning_scoped("-Wmissing-prototypes", Language::C));
        entries.push(Descriptor::warning_scoped(
            "-Wold-style-definition",
            Language::C,
        ));

        entries.push(Descriptor::warnings_as_errors("-Werror"));

        Catalogue::new(entries)
    }

    /// Check catalogue invariants.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        let mut seen = std::collections::HashSet::new();

        for entry in &self.entries {
            if let Descriptor::Flag(flag) = entry {
                if flag.kind == FlagKind::WarningsAsErrors && flag.scope.is_some() {
                    return Err(CatalogueError::ScopedWarningsAsErrors(flag.flag.clone()));
                }
            }

            let stem = entry.file_stem();
            if !seen.insert(stem.clone()) {
                return Err(CatalogueError::DuplicateName(stem));
            }
        }

        Ok(())
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.entries.iter()
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
