//! Compiler resolution.
//!
//! Resolution priority for each compiler:
//! 1. Explicit `--cc`/`--cxx` flag
//! 2. Toolchain config file (`.ccprobe/toolchain.toml` or `~/.ccprobe/toolchain.toml`)
//! 3. Environment variables (CC, CXX)
//! 4. Auto-detection (searching PATH for common compilers)

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::language::Language;
use crate::util::config::{
    global_toolchain_config_path, load_toolchain_config, project_toolchain_config_path,
    ToolchainConfig,
};
use crate::util::process::{find_c_compiler, find_cxx_compiler, find_executable};

/// Resolved compiler paths, one per supported language.
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// C compiler path.
    pub cc: PathBuf,
    /// C++ compiler path.
    pub cxx: PathBuf,
}

impl Toolchain {
    /// Compiler for a language.
    pub fn compiler(&self, lang: Language) -> &Path {
        match lang {
            Language::C => &self.cc,
            Language::Cxx => &self.cxx,
        }
    }

    /// Resolve both compilers, applying the documented priority order.
    pub fn detect(cc_override: Option<&Path>, cxx_override: Option<&Path>) -> Result<Toolchain> {
        let config = load_toolchain_config_from_files();

        let cc = resolve_compiler(
            cc_override,
            config.toolchain.cc.as_deref(),
            "CC",
            find_c_compiler,
        );
        let Some(cc) = cc else {
            bail!(
                "no C compiler found\n\
                 \n\
                 ccprobe requires a C compiler (cc, gcc, or clang).\n\
                 Set the CC environment variable, pass --cc, configure\n\
                 `.ccprobe/toolchain.toml`, or install a compiler."
            );
        };

        let cxx = resolve_compiler(
            cxx_override,
            config.toolchain.cxx.as_deref(),
            "CXX",
            find_cxx_compiler,
        );
        let Some(cxx) = cxx else {
            bail!(
                "no C++ compiler found\n\
                 \n\
                 ccprobe requires a C++ compiler (c++, g++, or clang++).\n\
                 Set the CXX environment variable, pass --cxx, configure\n\
                 `.ccprobe/toolchain.toml`, or install a compiler."
            );
        };

        tracing::debug!(cc = %cc.display(), cxx = %cxx.display(), "resolved toolchain");

        Ok(Toolchain { cc, cxx })
    }
}

/// Load toolchain configuration from config files.
///
/// Searches for config in this order:
/// 1. Project config (`.ccprobe/toolchain.toml` in current dir)
/// 2. Global config (`~/.ccprobe/toolchain.toml`)
fn load_toolchain_config_from_files() -> ToolchainConfig {
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_path = project_toolchain_config_path(&cwd);
    let global_path = global_toolchain_config_path();

    if let Some(ref global) = global_path {
        load_toolchain_config(global, &project_path)
    } else {
        load_toolchain_config(&PathBuf::new(), &project_path)
    }
}

/// Resolve one compiler through the priority chain.
fn resolve_compiler(
    explicit: Option<&Path>,
    configured: Option<&Path>,
    env_key: &str,
    fallback: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return locate(path);
    }

    if let Some(path) = configured {
        if let Some(found) = locate(path) {
            return Some(found);
        }
        tracing::warn!("configured compiler not found: {}", path.display());
    }

    if let Ok(name) = std::env::var(env_key) {
        if let Some(found) = locate(Path::new(&name)) {
            return Some(found);
        }
        tracing::warn!("{} is set but not usable: {}", env_key, name);
    }

    fallback()
}

/// Accept a path that exists, or look a bare name up on PATH.
fn locate(path: &Path) -> Option<PathBuf> {
    if path.components().count() > 1 {
        return path.exists().then(|| path.to_path_buf());
    }
    find_executable(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_per_language() {
        let toolchain = Toolchain {
            cc: PathBuf::from("/usr/bin/cc"),
            cxx: PathBuf::from("/usr/bin/c++"),
        };

        assert_eq!(toolchain.compiler(Language::C), Path::new("/usr/bin/cc"));
        assert_eq!(toolchain.compiler(Language::Cxx), Path::new("/usr/bin/c++"));
    }

    #[test]
    fn test_explicit_override_wins() {
        let tmp = tempfile::TempDir::new().unwrap();
        let fake = tmp.path().join("mycc");
        std::fs::write(&fake, "").unwrap();

        let resolved = resolve_compiler(Some(&fake), None, "CCPROBE_TEST_UNSET", || None);
        assert_eq!(resolved, Some(fake));
    }

    #[test]
    fn test_missing_explicit_override_is_not_substituted() {
        let resolved = resolve_compiler(
            Some(Path::new("/nonexistent/compiler")),
            None,
            "CCPROBE_TEST_UNSET",
            || Some(PathBuf::from("/usr/bin/cc")),
        );
        assert_eq!(resolved, None);
    }

    #[test]
    fn test_fallback_is_used_last() {
        let resolved = resolve_compiler(None, None, "CCPROBE_TEST_UNSET", || {
            Some(PathBuf::from("/usr/bin/cc"))
        });
        assert_eq!(resolved, Some(PathBuf::from("/usr/bin/cc")));
    }
}
