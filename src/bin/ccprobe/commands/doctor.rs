//! `ccprobe doctor` command

use anyhow::Result;

use ccprobe::ops::{doctor, format_report};

pub fn execute(verbose: bool) -> Result<()> {
    let report = doctor();

    let output = format_report(&report, verbose);
    print!("{}", output);

    // Exit with error code if a check failed
    if !report.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
