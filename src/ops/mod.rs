//! High-level operations.
//!
//! This module contains the implementation of ccprobe commands.

pub mod doctor;
pub mod generate;

pub use doctor::{doctor, format_report, CheckResult, DoctorReport};
pub use generate::{generate, GenerateOptions};
