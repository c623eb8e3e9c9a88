//! Artifact renderers.
//!
//! Both renderers are pure functions of the catalogue and the probe
//! outcomes; neither triggers probing or touches the filesystem.

pub mod fragment;
pub mod header;

pub use fragment::{render_fragment, StandardPrefs};
pub use header::{guard_from_path, render_header};
