//! Probe descriptors.
//!
//! Every entry in the catalogue is one of a closed set of shapes: a source
//! feature (attribute or builtin usage, probed by compiling a snippet) or a
//! command-line flag (standard or warning switch, probed by compiling a
//! trivial program with the flag applied). Consumers match exhaustively on
//! these variants; a malformed entry is unrepresentable.

use crate::core::language::Language;
use crate::core::outcome::LanguageSet;

/// How a snippet body is placed into the compilable scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Body is inserted inside `main` as executable statements.
    Statement,
    /// Body is emitted at file scope, before the `main` stub.
    Declaration,
    /// No body at all; scaffold only. Used for flag probes.
    Trivial,
}

/// A language-agnostic snippet body plus its wrap mode.
///
/// The rendered text is valid in every supported language and is reused
/// byte-for-byte across file extensions.
#[derive(Debug, Clone)]
pub struct Snippet {
    /// Wrap mode for the body.
    pub mode: WrapMode,
    /// Body lines, without indentation or trailing newlines.
    pub lines: Vec<String>,
}

impl Snippet {
    /// A statement-mode snippet.
    pub fn statement(lines: &[&str]) -> Self {
        Snippet {
            mode: WrapMode::Statement,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// A declaration-mode snippet.
    pub fn declaration(lines: &[&str]) -> Self {
        Snippet {
            mode: WrapMode::Declaration,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// The trivial snippet: scaffold only.
    pub fn trivial() -> Self {
        Snippet {
            mode: WrapMode::Trivial,
            lines: Vec::new(),
        }
    }
}

/// Kind of source feature under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// A `__attribute__((...))` annotation.
    Attribute,
    /// A `__builtin_*` intrinsic.
    Builtin,
}

impl FeatureKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Attribute => "attribute",
            FeatureKind::Builtin => "builtin",
        }
    }

    /// Uppercase tag used in derived macro names.
    fn macro_tag(&self) -> &'static str {
        match self {
            FeatureKind::Attribute => "ATTRIBUTE",
            FeatureKind::Builtin => "BUILTIN",
        }
    }
}

/// Kind of compiler flag under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// A language-standard selection flag (`-std=...`).
    Standard,
    /// A warning switch aggregated into the warning variable.
    Warning,
    /// The designated treat-warnings-as-errors flag, rendered on its own.
    WarningsAsErrors,
}

impl FlagKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKind::Standard => "standard",
            FlagKind::Warning => "warning",
            FlagKind::WarningsAsErrors => "warnings-as-errors",
        }
    }
}

/// A source feature probed by compiling a snippet that uses it.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Kind of feature.
    pub kind: FeatureKind,
    /// Feature name (e.g. `unused`, `expect`).
    pub name: String,
    /// Snippet exercising the feature.
    pub snippet: Snippet,
}

/// A compiler flag probed against the trivial fixture.
#[derive(Debug, Clone)]
pub struct Flag {
    /// Kind of flag.
    pub kind: FlagKind,
    /// The literal flag string (e.g. `-Wall`, `-std=c11`).
    pub flag: String,
    /// When set, the flag only applies to this language; its outcome for
    /// every other language is "skipped", distinct from "failed".
    pub scope: Option<Language>,
}

/// One catalogue entry.
#[derive(Debug, Clone)]
pub enum Descriptor {
    /// A source feature probe.
    Feature(Feature),
    /// A compiler flag probe.
    Flag(Flag),
}

impl Descriptor {
    /// An attribute feature.
    pub fn attribute(name: impl Into<String>, snippet: Snippet) -> Self {
        Descriptor::Feature(Feature {
            kind: FeatureKind::Attribute,
            name: name.into(),
            snippet,
        })
    }

    /// A builtin feature.
    pub fn builtin(name: impl Into<String>, snippet: Snippet) -> Self {
        Descriptor::Feature(Feature {
            kind: FeatureKind::Builtin,
            name: name.into(),
            snippet,
        })
    }

    /// A language-standard flag, scoped to its language.
    pub fn standard(flag: impl Into<String>, scope: Language) -> Self {
        Descriptor::Flag(Flag {
            kind: FlagKind::Standard,
            flag: flag.into(),
            scope: Some(scope),
        })
    }

    /// An unscoped warning flag.
    pub fn warning(flag: impl Into<String>) -> Self {
        Descriptor::Flag(Flag {
            kind: FlagKind::Warning,
            flag: flag.into(),
            scope: None,
        })
    }

    /// A warning flag valid for a single language only.
    pub fn warning_scoped(flag: impl Into<String>, scope: Language) -> Self {
        Descriptor::Flag(Flag {
            kind: FlagKind::Warning,
            flag: flag.into(),
            scope: Some(scope),
        })
    }

    /// The treat-warnings-as-errors flag.
    pub fn warnings_as_errors(flag: impl Into<String>) -> Self {
        Descriptor::Flag(Flag {
            kind: FlagKind::WarningsAsErrors,
            flag: flag.into(),
            scope: None,
        })
    }

    /// Languages this descriptor applies to.
    ///
    /// Unscoped descriptors apply to every supported language; a scoped flag
    /// applies to its language alone.
    pub fn applicable_languages(&self) -> LanguageSet {
        match self {
            Descriptor::Feature(_) => LanguageSet::all(),
            Descriptor::Flag(flag) => match flag.scope {
                Some(lang) => LanguageSet::single(lang),
                None => LanguageSet::all(),
            },
        }
    }

    /// Language this descriptor is scoped to, if any.
    pub fn scope(&self) -> Option<Language> {
        match self {
            Descriptor::Feature(_) => None,
            Descriptor::Flag(flag) => flag.scope,
        }
    }

    /// Derived macro name for one language (also the fragment variable name
    /// of the boolean twin).
    pub fn macro_name(&self, lang: Language) -> String {
        let qualifier = lang.macro_qualifier();
        match self {
            Descriptor::Feature(feature) => format!(
                "HAVE_{}{}_{}",
                qualifier,
                feature.kind.macro_tag(),
                sanitize(&feature.name).to_ascii_uppercase()
            ),
            Descriptor::Flag(flag) => format!(
                "HAVE_{}FLAG_{}",
                qualifier,
                sanitize(&flag.flag).to_ascii_uppercase()
            ),
        }
    }

    /// Deterministic file stem for rendered fixture sources.
    pub fn file_stem(&self) -> String {
        match self {
            Descriptor::Feature(feature) => {
                format!("{}_{}", feature.kind.as_str(), sanitize(&feature.name))
            }
            Descriptor::Flag(flag) => sanitize(&flag.flag),
        }
    }

    /// Human-readable name for progress lines and listings.
    pub fn display_name(&self) -> String {
        match self {
            Descriptor::Feature(feature) => {
                format!("{} `{}`", feature.kind.as_str(), feature.name)
            }
            Descriptor::Flag(flag) => format!("flag `{}`", flag.flag),
        }
    }
}

/// Collapse a raw name or flag string into an identifier token.
///
/// A literal `++` is rewritten to `xx` first so C++-standard flags stay
/// distinguishable from C-standard flags after sanitization; then every run
/// of non-alphanumeric characters collapses to a single `_`, with leading
/// and trailing separators stripped. The result is lowercase.
pub fn sanitize(input: &str) -> String {
    let rewritten = input.replace("++", "xx");

    let mut out = String::with_capacity(rewritten.len());
    let mut pending_separator = false;
    for ch in rewritten.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}
