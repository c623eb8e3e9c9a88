//! Probe outcomes.
//!
//! The result model is a table parallel to the catalogue: one write-once
//! language set per descriptor. Rendering consumes the table and never
//! triggers probing.

use crate::core::language::Language;

/// Ordered set of languages, iterated in [`Language::ALL`] order regardless
/// of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSet {
    members: [bool; Language::ALL.len()],
}

impl LanguageSet {
    /// The empty set.
    pub fn empty() -> Self {
        LanguageSet::default()
    }

    /// The set of every supported language.
    pub fn all() -> Self {
        let mut set = LanguageSet::default();
        for lang in Language::ALL {
            set.insert(lang);
        }
        set
    }

    /// A one-element set.
    pub fn single(lang: Language) -> Self {
        let mut set = LanguageSet::default();
        set.insert(lang);
        set
    }

    /// Add a language to the set.
    pub fn insert(&mut self, lang: Language) {
        self.members[lang.index()] = true;
    }

    /// Whether the set contains a language.
    pub fn contains(&self, lang: Language) -> bool {
        self.members[lang.index()]
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.iter().all(|m| !m)
    }

    /// Number of languages in the set.
    pub fn len(&self) -> usize {
        self.members.iter().filter(|m| **m).count()
    }

    /// Iterate members in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL.into_iter().filter(|lang| self.contains(*lang))
    }
}

/// Table of probe outcomes, one entry per catalogue descriptor, recorded in
/// catalogue order.
#[derive(Debug, Clone, Default)]
pub struct ProbeResults {
    outcomes: Vec<LanguageSet>,
}

impl ProbeResults {
    /// Create an empty table with room for `capacity` outcomes.
    pub fn with_capacity(capacity: usize) -> Self {
        ProbeResults {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    /// Record the outcome for the next descriptor in catalogue order.
    pub fn record(&mut self, outcome: LanguageSet) {
        self.outcomes.push(outcome);
    }

    /// Outcome for the descriptor at `index` in the catalogue.
    ///
    /// # Panics
    ///
    /// Panics if no outcome was recorded for `index`; rendering must not
    /// begin before every descriptor has an outcome.
    pub fn outcome(&self, index: usize) -> LanguageSet {
        self.outcomes[index]
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
