//! Compound word segmentation.
//!
//! German builds compounds freely (`Haustür`, `Arbeitszimmer`) and most of
//! them have no dictionary entry of their own. The segmenter indexes every
//! known dictionary key into an Aho-Corasick automaton and dissects an
//! unknown word into maximal known sub-words via leftmost-longest matching
//! over the whole automaton, not naive prefix matching.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::utils::is_alphabetic_word;

/// A compound segmenter built from the known dictionary keys.
///
/// Built once per run from the loaded word map and read-only afterwards.
pub struct CompoundSegmenter {
    automaton: Option<AhoCorasick>,
    /// Whether the original form of each indexed pattern was capitalized,
    /// parallel to the automaton's pattern ids.
    capitalized: Vec<bool>,
    min_part_len: usize,
}

impl CompoundSegmenter {
    /// Index every known word of at least `min_part_len` characters.
    /// Shorter keys are excluded as too ambiguous to act as compound
    /// parts. Building from an empty word set yields a segmenter whose
    /// `split` always returns `None`.
    pub fn build<I, S>(known_words: I, min_part_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        let mut capitalized = Vec::new();

        for word in known_words {
            let word = word.as_ref();
            let normalized = word.trim().to_lowercase();
            if normalized.chars().count() < min_part_len {
                continue;
            }
            capitalized.push(word.chars().next().is_some_and(char::is_uppercase));
            patterns.push(normalized);
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .build(&patterns)
                .ok()
        };

        Self {
            automaton,
            capitalized,
            min_part_len,
        }
    }

    /// Number of indexed patterns.
    pub fn pattern_count(&self) -> usize {
        self.capitalized.len()
    }

    /// Dissect `word` into two or more known sub-words.
    ///
    /// Matching runs over the lowercased word with non-overlapping
    /// leftmost-longest semantics. Parts that are non-alphabetic or
    /// shorter than the minimum are filtered out afterwards; unless at
    /// least two parts survive, the split fails and `None` is returned.
    pub fn split(&self, word: &str) -> Option<Vec<String>> {
        let automaton = self.automaton.as_ref()?;
        if word.is_empty() {
            return None;
        }

        let normalized = word.to_lowercase();
        let mut parts: Vec<String> = automaton
            .find_iter(&normalized)
            .map(|m| normalized[m.start()..m.end()].to_string())
            .collect();

        if parts.len() < 2 {
            return None;
        }

        parts.retain(|part| {
            is_alphabetic_word(part) && part.chars().count() >= self.min_part_len
        });

        if parts.len() < 2 {
            return None;
        }

        Some(parts)
    }
}
