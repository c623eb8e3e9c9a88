//! ccprobe - A compiler capability prober for C/C++
//!
//! This crate probes a compiler for source-feature and command-line-flag
//! support, then renders a capability header and a build-flag fragment from
//! the aggregated verdicts.

pub mod core;
pub mod ops;
pub mod probe;
pub mod render;
pub mod util;

pub use crate::core::{
    catalogue::Catalogue, descriptor::Descriptor, language::Language, outcome::LanguageSet,
    outcome::ProbeResults,
};

pub use crate::ops::generate::{generate, GenerateOptions};
pub use crate::render::fragment::StandardPrefs;
