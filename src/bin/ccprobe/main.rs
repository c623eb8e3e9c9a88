//! ccprobe CLI - A compiler capability prober for C/C++

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ccprobe::util::shell::{ColorChoice, Shell, Verbosity};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("ccprobe=debug")
    } else {
        EnvFilter::new("ccprobe=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let shell = Shell::new(verbosity, color);

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, &shell),
        Commands::Doctor => commands::doctor::execute(cli.verbose),
        Commands::List => commands::list::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
