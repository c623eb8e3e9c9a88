//! Build-fragment rendering.
//!
//! The fragment is make syntax: per language, a selected standard flag, the
//! aggregated warning flags wrapped to a bounded width, and the
//! warnings-as-errors flag, followed by a `0`/`1` boolean variable per
//! (descriptor, language) pair. The boolean section is the machine-readable
//! twin of the header's verdicts and reuses the exact macro names.

use crate::core::catalogue::Catalogue;
use crate::core::descriptor::{Descriptor, FlagKind};
use crate::core::language::Language;
use crate::core::outcome::ProbeResults;

/// Column limit for wrapped warning lines.
const WRAP_WIDTH: usize = 80;

/// Preferred standard identifier per language.
///
/// Accepts either the bare identifier (`c99`) or the full flag
/// (`-std=c99`).
#[derive(Debug, Clone, Default)]
pub struct StandardPrefs {
    /// Preferred C standard.
    pub c: Option<String>,
    /// Preferred C++ standard.
    pub cxx: Option<String>,
}

impl StandardPrefs {
    /// Preference for a language.
    pub fn preferred(&self, lang: Language) -> Option<&str> {
        match lang {
            Language::C => self.c.as_deref(),
            Language::Cxx => self.cxx.as_deref(),
        }
    }
}

/// Render the build fragment.
pub fn render_fragment(
    catalogue: &Catalogue,
    results: &ProbeResults,
    prefs: &StandardPrefs,
) -> String {
    debug_assert_eq!(catalogue.len(), results.len());

    let mut out = String::new();
    out.push_str("# Generated by ccprobe. Do not edit.\n");

    for lang in Language::ALL {
        out.push('\n');
        let prefix = lang.fragment_prefix();

        // Standard selection. An empty value is valid: the compiler simply
        // has no usable standard flag.
        let standard = select_standard(catalogue, results, lang, prefs.preferred(lang));
        match standard {
            Some(flag) => out.push_str(&format!("{}_STD = {}\n", prefix, flag)),
            None => out.push_str(&format!("{}_STD =\n", prefix)),
        }

        // Warning aggregation with bounded-width packing.
        let warnings = collect_warnings(catalogue, results, lang);
        for line in pack_lines(&format!("{}_WARN", prefix), &warnings, WRAP_WIDTH) {
            out.push_str(&line);
            out.push('\n');
        }

        // The warnings-as-errors flag stands alone, never wrapped, never
        // merged into the aggregate.
        let werror = catalogue.iter().enumerate().find_map(|(index, descriptor)| {
            match descriptor {
                Descriptor::Flag(flag) if flag.kind == FlagKind::WarningsAsErrors => {
                    Some((index, flag.flag.as_str()))
                }
                _ => None,
            }
        });
        match werror {
            Some((index, flag)) if results.outcome(index).contains(lang) => {
                out.push_str(&format!("{}_WERROR = {}\n", prefix, flag));
            }
            Some(_) => out.push_str(&format!("{}_WERROR =\n", prefix)),
            None => {}
        }
    }

    // Boolean twins: features first, then flags, catalogue order.
    out.push('\n');
    let sections: [fn(&Descriptor) -> bool; 2] = [
        |d| matches!(d, Descriptor::Feature(_)),
        |d| matches!(d, Descriptor::Flag(_)),
    ];
    for section in sections {
        for (index, descriptor) in catalogue.iter().enumerate() {
            if !section(descriptor) {
                continue;
            }
            let outcome = results.outcome(index);
            for lang in Language::ALL {
                let value = if outcome.contains(lang) { 1 } else { 0 };
                out.push_str(&format!("{} = {}\n", descriptor.macro_name(lang), value));
            }
        }
    }

    out
}

/// Select the standard flag for a language.
///
/// Candidates are the standard-kind flags whose outcome includes `lang`, in
/// catalogue order. The preferred identifier wins when present; otherwise
/// the first candidate is taken. Pure list-order fallback, never "highest".
pub fn select_standard<'a>(
    catalogue: &'a Catalogue,
    results: &ProbeResults,
    lang: Language,
    preferred: Option<&str>,
) -> Option<&'a str> {
    let candidates: Vec<&str> = catalogue
        .iter()
        .enumerate()
        .filter_map(|(index, descriptor)| match descriptor {
            Descriptor::Flag(flag)
                if flag.kind == FlagKind::Standard && results.outcome(index).contains(lang) =>
            {
                Some(flag.flag.as_str())
            }
            _ => None,
        })
        .collect();

    if let Some(preferred) = preferred {
        if let Some(found) = candidates
            .iter()
            .copied()
            .find(|flag| *flag == preferred || standard_id(flag) == preferred)
        {
            return Some(found);
        }
    }

    candidates.first().copied()
}

/// The bare identifier of a standard flag (`-std=c11` -> `c11`).
fn standard_id(flag: &str) -> &str {
    flag.rsplit('=').next().unwrap_or(flag)
}

/// Warning flags applicable and accepted for a language, catalogue order.
///
/// The warnings-as-errors flag is never part of the aggregate.
fn collect_warnings<'a>(
    catalogue: &'a Catalogue,
    results: &ProbeResults,
    lang: Language,
) -> Vec<&'a str> {
    catalogue
        .iter()
        .enumerate()
        .filter_map(|(index, descriptor)| match descriptor {
            Descriptor::Flag(flag)
                if flag.kind == FlagKind::Warning && results.outcome(index).contains(lang) =>
            {
                Some(flag.flag.as_str())
            }
            _ => None,
        })
        .collect()
}

/// Greedily pack flags into assignment lines bounded by `width`.
///
/// The first line uses `NAME = `, continuations use `NAME += `. A flag is
/// appended only while the line stays under the width; a flag that would
/// make the line reach or exceed it starts a continuation instead. No flags
/// means no lines. Given the same input, output is byte-identical.
pub fn pack_lines(var: &str, flags: &[&str], width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for flag in flags {
        match current.as_mut() {
            None => {
                current = Some(format!("{} = {}", var, flag));
            }
            Some(line) => {
                if line.len() + 1 + flag.len() >= width {
                    lines.push(current.take().unwrap());
                    current = Some(format!("{} += {}", var, flag));
                } else {
                    line.push(' ');
                    line.push_str(flag);
                }
            }
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}
