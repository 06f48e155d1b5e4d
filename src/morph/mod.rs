/*! Morphological analysis.

Lemmatization and tagging are delegated to external analyzers sitting behind
the [Morphology] trait. Two adapters ship with the crate: [Mystem] produces
the primary (single) tag set, [Pymorphy] the secondary (multiple) one. Both
shell out to an analyzer process and parse its JSON output; dictionaries and
disambiguation stay inside the analyzer.
!*/
use crate::error::Error;

mod mystem;
mod pymorphy;

pub use mystem::Mystem;
pub use pymorphy::Pymorphy;

/// Tag set produced by the primary analyzer.
pub const POS_TAGS: [&str; 14] = [
    "A", "ADV", "ADVPRO", "ANUM", "APRO", "COM", "CONJ", "INTJ", "NUM", "PART", "PR", "S", "SPRO",
    "V",
];

/// Lemma and grammatical tags for a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub lemma: String,
    pub tags: String,
}

/// Seam to an external morphological analyzer.
///
/// `analyze` returns one entry per input word, `None` where the analyzer has
/// nothing to say about a word (numbers, foreign spellings, garbage).
pub trait Morphology {
    fn analyze(&self, words: &[String]) -> Result<Vec<Option<Analysis>>, Error>;
}

/// Language parameters collected for one processed word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MorphologicalToken {
    original: String,
    normalized: String,
    tags_single: String,
    tags_multiple: String,
}

impl MorphologicalToken {
    pub fn new(original: &str) -> Self {
        Self {
            original: original.to_string(),
            ..Self::default()
        }
    }

    pub fn set_normalized(&mut self, normalized: &str) {
        self.normalized = normalized.to_string();
    }

    pub fn set_tags_single(&mut self, tags: &str) {
        self.tags_single = tags.to_string();
    }

    pub fn set_tags_multiple(&mut self, tags: &str) {
        self.tags_multiple = tags.to_string();
    }

    /// Lowercased original form.
    pub fn cleaned(&self) -> String {
        self.original.to_lowercase()
    }

    /// `lemma<tags>` with the primary analyzer tags.
    pub fn single_tagged(&self) -> String {
        format!("{}<{}>", self.normalized, self.tags_single)
    }

    /// `lemma<tags>(tags)` with both analyzers' tags.
    pub fn multiple_tagged(&self) -> String {
        format!(
            "{}<{}>({})",
            self.normalized, self.tags_single, self.tags_multiple
        )
    }

    /// Whether the primary analyzer produced a lemma and tags.
    pub fn has_single_analysis(&self) -> bool {
        !self.normalized.is_empty() && !self.tags_single.is_empty()
    }

    /// Whether both analyzers produced tags.
    pub fn has_full_analysis(&self) -> bool {
        self.has_single_analysis() && !self.tags_multiple.is_empty()
    }
}
