//! `ccprobe generate` command

use anyhow::Result;

use ccprobe::ops::{generate, GenerateOptions};
use ccprobe::util::shell::Shell;
use ccprobe::Catalogue;

use crate::cli::GenerateArgs;

pub fn execute(args: GenerateArgs, shell: &Shell) -> Result<()> {
    let options = GenerateOptions {
        header_path: args.header,
        fragment_path: args.fragment,
        cc: args.cc,
        cxx: args.cxx,
        std_c: args.std_c,
        std_cxx: args.std_cxx,
        trust_features: args.trust_features,
        trust_flags: args.trust_flags,
        scratch_dir: args.scratch_dir,
        keep_fixtures: args.keep_fixtures,
    };

    let catalogue = Catalogue::builtin();
    generate(&catalogue, &options, shell)
}
