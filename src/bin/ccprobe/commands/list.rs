//! `ccprobe list` command
//!
//! Prints the builtin catalogue: what a `generate` run would probe.

use anyhow::Result;

use ccprobe::core::descriptor::Descriptor;
use ccprobe::Catalogue;

pub fn execute() -> Result<()> {
    let catalogue = Catalogue::builtin();

    println!("Features:");
    for descriptor in catalogue.iter() {
        if let Descriptor::Feature(feature) = descriptor {
            println!("  {} {}", feature.kind.as_str(), feature.name);
        }
    }

    println!();
    println!("Flags:");
    for descriptor in catalogue.iter() {
        if let Descriptor::Flag(flag) = descriptor {
            match flag.scope {
                Some(lang) => println!("  {} ({}, {} only)", flag.flag, flag.kind.as_str(), lang),
                None => println!("  {} ({})", flag.flag, flag.kind.as_str()),
            }
        }
    }

    Ok(())
}
