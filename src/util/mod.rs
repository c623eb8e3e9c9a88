//! Shared utilities

pub mod config;
pub mod fs;
pub mod process;
pub mod shell;

pub use config::ToolchainConfig;
pub use process::ProcessBuilder;
pub use shell::{ColorChoice, Shell, Status, Verbosity};
