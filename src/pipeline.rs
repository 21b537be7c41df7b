//! Lemma discovery and the resolution fallback chain.
//!
//! This module coordinates the two phases of vocabulary extraction:
//! 1. **Discovery**: collect the unique content-word lemmas from the
//!    annotated sentences, including reconstructed separable verbs
//! 2. **Resolution**: for each lemma, run the ordered fallback chain
//!    against the dictionary until one step yields translations
//!
//! The chain is strictly ordered and stops at the first success: direct
//! lookup, infinitive-marker normalization, participle candidates, then
//! compound segmentation. A lemma no step can resolve gets an explicit
//! empty translation list; resolution never errors.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::annotation::Sentence;
use crate::compound::CompoundSegmenter;
use crate::dictionary::DictionaryStore;
use crate::morphology::{normalize_infinitive, participle_candidates, reconstruct_separable_verbs};
use crate::profile::LanguageProfile;

/// How many translations a compound part contributes to the synthesized
/// list.
const COMPOUND_PART_PREVIEW: usize = 2;

/// One resolved vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    pub lemma: String,
    /// Translations in dictionary order; empty means "not found".
    pub translations: Vec<String>,
    /// Set when the translations were synthesized from compound parts
    /// rather than found under a single key.
    pub from_compound: bool,
}

impl VocabEntry {
    fn found(lemma: &str, translations: Vec<String>) -> Self {
        Self {
            lemma: lemma.to_string(),
            translations,
            from_compound: false,
        }
    }

    fn not_found(lemma: &str) -> Self {
        Self {
            lemma: lemma.to_string(),
            translations: Vec::new(),
            from_compound: false,
        }
    }
}

/// Phase 1: collect unique lemmas from annotated sentences.
///
/// Content-word lemmas (per the profile's POS filter) are lowercased and
/// collected; separable verb reconstruction adds its candidates to the
/// same set. The returned set iterates in sorted order, which is what
/// makes a run's output deterministic.
pub fn discover_lemmas(sentences: &[Sentence], profile: &LanguageProfile) -> BTreeSet<String> {
    let mut lemmas = BTreeSet::new();

    for sentence in sentences {
        for token in sentence {
            if !profile.is_content_pos(token.pos) {
                continue;
            }
            let lemma = token.lemma.to_lowercase();
            if !lemma.is_empty() {
                lemmas.insert(lemma);
            }
        }
        lemmas.extend(reconstruct_separable_verbs(sentence, profile));
    }

    lemmas
}

/// Phase 2: resolve every lemma through the fallback chain, in sorted
/// order.
pub fn resolve_lemmas(
    lemmas: &BTreeSet<String>,
    dictionary: &DictionaryStore,
    segmenter: &CompoundSegmenter,
    profile: &LanguageProfile,
) -> Vec<VocabEntry> {
    lemmas
        .iter()
        .map(|lemma| resolve_lemma(lemma, dictionary, segmenter, profile))
        .collect()
}

/// Resolve one lemma. Steps are attempted in strict order; the first step
/// that yields a non-empty translation list wins.
pub fn resolve_lemma(
    lemma: &str,
    dictionary: &DictionaryStore,
    segmenter: &CompoundSegmenter,
    profile: &LanguageProfile,
) -> VocabEntry {
    let direct = dictionary.lookup(lemma);
    if !direct.is_empty() {
        return VocabEntry::found(lemma, direct.to_vec());
    }

    if let Some(normalized) = normalize_infinitive(lemma, profile)
        && normalized != lemma
    {
        let translations = dictionary.lookup(&normalized);
        if !translations.is_empty() {
            return VocabEntry::found(lemma, translations.to_vec());
        }
    }

    for candidate in participle_candidates(lemma, profile) {
        let translations = dictionary.lookup(&candidate);
        if !translations.is_empty() {
            return VocabEntry::found(lemma, translations.to_vec());
        }
    }

    if let Some(translations) = resolve_compound(lemma, dictionary, segmenter) {
        return VocabEntry {
            lemma: lemma.to_string(),
            translations,
            from_compound: true,
        };
    }

    VocabEntry::not_found(lemma)
}

/// The compound branch: split the lemma and synthesize a translation list
/// from its parts. The branch only succeeds if EVERY part resolves; one
/// unknown part voids the whole split.
fn resolve_compound(
    lemma: &str,
    dictionary: &DictionaryStore,
    segmenter: &CompoundSegmenter,
) -> Option<Vec<String>> {
    let parts = segmenter.split(lemma)?;

    let mut lines = Vec::with_capacity(parts.len() + 1);
    lines.push(parts.join(" + "));

    for part in &parts {
        let translations = dictionary.lookup(part);
        if translations.is_empty() {
            return None;
        }
        let preview = translations
            .iter()
            .take(COMPOUND_PART_PREVIEW)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("{part}: {preview}"));
    }

    Some(lines)
}

/// Run the full pipeline: discover lemmas, build the segmenter from the
/// dictionary's keys, and resolve everything.
pub fn run(
    sentences: &[Sentence],
    dictionary: &DictionaryStore,
    profile: &LanguageProfile,
) -> Vec<VocabEntry> {
    let lemmas = discover_lemmas(sentences, profile);
    let segmenter = CompoundSegmenter::build(dictionary.known_words(), profile.min_stem_len);
    resolve_lemmas(&lemmas, dictionary, &segmenter, profile)
}
