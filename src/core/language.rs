//! Source languages known to the prober.
//!
//! The catalogue, the fixture builder, and both renderers are written
//! against [`Language::ALL`], so the set of supported languages lives in
//! exactly one place.

use serde::{Deserialize, Serialize};

/// Source language a probe can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C language
    C,
    /// C++ language
    #[serde(alias = "cpp", alias = "cxx", alias = "c++")]
    Cxx,
}

impl Language {
    /// Every supported language, in declaration order.
    ///
    /// Declaration order is also the emission order of both generated
    /// artifacts.
    pub const ALL: [Language; 2] = [Language::C, Language::Cxx];

    /// Get the language name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cxx => "c++",
        }
    }

    /// Source file extension for rendered fixtures.
    pub fn source_extension(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cxx => "cc",
        }
    }

    /// Qualifier inserted into macro and variable names.
    ///
    /// C is the unqualified default; C++ names carry a `CXX_` tag.
    pub fn macro_qualifier(&self) -> &'static str {
        match self {
            Language::C => "",
            Language::Cxx => "CXX_",
        }
    }

    /// Variable prefix used in the generated build fragment.
    pub fn fragment_prefix(&self) -> &'static str {
        match self {
            Language::C => "CFLAGS",
            Language::Cxx => "CXXFLAGS",
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Language::C => 0,
            Language::Cxx => 1,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
