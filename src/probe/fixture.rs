//! Fixture construction.
//!
//! Each probe gets its own uniquely numbered scratch subdirectory holding
//! the rendered source file(s) for that descriptor. The same rendered text
//! is reused byte-for-byte across language file extensions; for most
//! descriptors it is the flags, not the syntax, that differ per language.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::descriptor::{Descriptor, Snippet, WrapMode};
use crate::core::language::Language;
use crate::util::fs::ensure_dir;

/// An ephemeral directory plus the rendered source file per language.
#[derive(Debug)]
pub struct Fixture {
    /// The fixture's scratch subdirectory.
    pub dir: PathBuf,
    /// Rendered filename per applicable language, in declaration order.
    pub files: Vec<(Language, String)>,
}

/// Allocates numbered fixture directories under a scratch root and renders
/// probe sources into them.
#[derive(Debug)]
pub struct FixtureBuilder {
    root: PathBuf,
    counter: u32,
}

impl FixtureBuilder {
    /// Create the scratch root. Failure here aborts the run.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)
            .with_context(|| format!("failed to create scratch root: {}", root.display()))?;

        Ok(FixtureBuilder { root, counter: 0 })
    }

    /// The scratch root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the fixture for one descriptor.
    ///
    /// Allocates the next zero-padded subdirectory and writes one source
    /// file per applicable language.
    pub fn build(&mut self, descriptor: &Descriptor) -> Result<Fixture> {
        self.counter += 1;
        let dir = self.root.join(format!("{:04}", self.counter));
        fs::create_dir(&dir)
            .with_context(|| format!("failed to create fixture directory: {}", dir.display()))?;

        let source = match descriptor {
            Descriptor::Feature(feature) => render_source(&feature.snippet),
            Descriptor::Flag(_) => render_source(&Snippet::trivial()),
        };

        let stem = descriptor.file_stem();
        let mut files = Vec::new();
        for lang in descriptor.applicable_languages().iter() {
            let filename = format!("{}.{}", stem, lang.source_extension());
            let path = dir.join(&filename);
            fs::write(&path, &source)
                .with_context(|| format!("failed to write fixture file: {}", path.display()))?;
            files.push((lang, filename));
        }

        Ok(Fixture { dir, files })
    }
}

/// Render a snippet into a complete compilation unit.
///
/// The scaffold is a pair of standard-library includes and a `main` stub;
/// the output is valid in every supported language.
pub fn render_source(snippet: &Snippet) -> String {
    let mut out = String::new();
    out.push_str("#include <stddef.h>\n");
    out.push_str("#include <stdio.h>\n");

    match snippet.mode {
        WrapMode::Declaration => {
            out.push('\n');
            for line in &snippet.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("\nint main(void) {\n    return 0;\n}\n");
        }
        WrapMode::Statement => {
            out.push_str("\nint main(void) {\n");
            for line in &snippet.lines {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("    return 0;\n}\n");
        }
        WrapMode::Trivial => {
            out.push_str("\nint main(void) {\n    return 0;\n}\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::Catalogue;
    use tempfile::TempDir;

    #[test]
    fn test_render_trivial() {
        let source = render_source(&Snippet::trivial());
        assert!(source.starts_with("#include <stddef.h>\n#include <stdio.h>\n"));
        assert!(source.contains("int main(void)"));
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn test_render_statement_indents_body() {
        let source = render_source(&Snippet::statement(&["(void)__builtin_trap();"]));
        assert!(source.contains("    (void)__builtin_trap();\n"));
        // Body sits inside main, before the return.
        let main_pos = source.find("int main").unwrap();
        let body_pos = source.find("__builtin_trap").unwrap();
        let return_pos = source.find("return 0;").unwrap();
        assert!(main_pos < body_pos && body_pos < return_pos);
    }

    #[test]
    fn test_render_declaration_precedes_main() {
        let source = render_source(&Snippet::declaration(&["static int x __attribute__((unused));"]));
        let decl_pos = source.find("static int x").unwrap();
        let main_pos = source.find("int main").unwrap();
        assert!(decl_pos < main_pos);
    }

    #[test]
    fn test_fixture_directories_are_numbered() {
        let tmp = TempDir::new().unwrap();
        let mut builder = FixtureBuilder::new(tmp.path().join("scratch")).unwrap();
        let catalogue = Catalogue::builtin();

        let first = builder.build(catalogue.iter().next().unwrap()).unwrap();
        let second = builder.build(catalogue.iter().nth(1).unwrap()).unwrap();

        assert!(first.dir.ends_with("0001"));
        assert!(second.dir.ends_with("0002"));
    }

    #[test]
    fn test_fixture_files_share_content_across_languages() {
        let tmp = TempDir::new().unwrap();
        let mut builder = FixtureBuilder::new(tmp.path().join("scratch")).unwrap();

        let descriptor = Descriptor::builtin(
            "expect",
            Snippet::statement(&["(void)__builtin_expect(1, 1);"]),
        );
        let fixture = builder.build(&descriptor).unwrap();

        assert_eq!(fixture.files.len(), Language::ALL.len());
        let contents: Vec<String> = fixture
            .files
            .iter()
            .map(|(_, name)| fs::read_to_string(fixture.dir.join(name)).unwrap())
            .collect();
        assert!(contents.windows(2).all(|w| w[0] == w[1]));

        assert_eq!(fixture.files[0].1, "builtin_expect.c");
        assert_eq!(fixture.files[1].1, "builtin_expect.cc");
    }

    #[test]
    fn test_scoped_flag_renders_one_file() {
        let tmp = TempDir::new().unwrap();
        let mut builder = FixtureBuilder::new(tmp.path().join("scratch")).unwrap();

        let descriptor = Descriptor::warning_scoped("-Wstrict-prototypes", Language::C);
        let fixture = builder.build(&descriptor).unwrap();

        assert_eq!(fixture.files.len(), 1);
        assert_eq!(fixture.files[0].0, Language::C);
        assert_eq!(fixture.files[0].1, "wstrict_prototypes.c");
    }

    #[test]
    fn test_builder_fails_when_root_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        assert!(FixtureBuilder::new(blocker.join("scratch")).is_err());
    }
}
