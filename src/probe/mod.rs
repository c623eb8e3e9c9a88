//! Probe machinery: fixture construction, toolchain resolution, and
//! compiler invocation.

pub mod executor;
pub mod fixture;
pub mod toolchain;

pub use executor::ProbeExecutor;
pub use fixture::{Fixture, FixtureBuilder};
pub use toolchain::Toolchain;
