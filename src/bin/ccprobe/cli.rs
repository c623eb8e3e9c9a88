//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// ccprobe - A compiler capability prober for C/C++
#[derive(Parser)]
#[command(name = "ccprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe the compiler and generate the capability header and build fragment
    Generate(GenerateArgs),

    /// Check that the required compilers are available
    Doctor,

    /// List the builtin probe catalogue
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Output path of the capability header
    #[arg(long, default_value = "config.h")]
    pub header: PathBuf,

    /// Output path of the build-flag fragment
    #[arg(long, default_value = "config.mk")]
    pub fragment: PathBuf,

    /// C compiler to probe (overrides config file and CC)
    #[arg(long)]
    pub cc: Option<PathBuf>,

    /// C++ compiler to probe (overrides config file and CXX)
    #[arg(long)]
    pub cxx: Option<PathBuf>,

    /// Preferred C standard (e.g. c99)
    #[arg(long = "std-c", value_name = "STD")]
    pub std_c: Option<String>,

    /// Preferred C++ standard (e.g. c++17)
    #[arg(long = "std-cxx", value_name = "STD")]
    pub std_cxx: Option<String>,

    /// Assume every feature probe succeeds without invoking the compiler
    #[arg(long)]
    pub trust_features: bool,

    /// Assume every flag probe succeeds without invoking the compiler
    #[arg(long)]
    pub trust_flags: bool,

    /// Scratch directory for probe fixtures
    #[arg(long, default_value = ".ccprobe-scratch")]
    pub scratch_dir: PathBuf,

    /// Keep fixture directories after the run
    #[arg(long)]
    pub keep_fixtures: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
