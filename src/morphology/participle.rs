//! Participle-prefix normalization.
//!
//! Annotators sometimes leave past participles unlemmatized: `aufgemacht`
//! instead of `aufmachen`, `gemacht` instead of `machen`. The participle
//! marker `ge` sits between the separable prefix (if any) and the stem.
//! Stripping it yields the bare stem; for regular verbs the stem's final
//! `t` additionally regularizes to the infinitive ending `en`.

use crate::profile::LanguageProfile;
use crate::utils::{dedup_preserving_first, is_alphabetic_word};

/// Minimum lemma length: the marker plus a three-character stem.
const MIN_LEMMA_LEN: usize = 5;

/// Suffix of a regular (weak) participle stem.
const REGULAR_PARTICIPLE_SUFFIX: char = 't';

/// Ending substituted for the regular suffix to form the infinitive.
const INFINITIVE_ENDING: &str = "en";

/// Generate lookup candidates for a participle-shaped lemma, most specific
/// first.
///
/// Every known prefix is tried longest-first; each successful
/// `prefix + marker` strip emits the bare stem and, for stems ending in
/// the regular suffix, a regularized infinitive. The zero-prefix variant
/// (lemma begins with the marker directly) is tried last. Duplicates are
/// removed, first occurrence kept.
pub fn participle_candidates(lemma: &str, profile: &LanguageProfile) -> Vec<String> {
    if lemma.chars().count() < MIN_LEMMA_LEN || !lemma.contains(profile.participle_marker) {
        return Vec::new();
    }

    let mut candidates = Vec::new();

    for prefix in &profile.separable_prefixes {
        if let Some(rest) = lemma.strip_prefix(prefix)
            && let Some(stem) = rest.strip_prefix(profile.participle_marker)
        {
            push_stem_candidates(stem, profile, &mut candidates);
        }
    }

    if let Some(stem) = lemma.strip_prefix(profile.participle_marker) {
        push_stem_candidates(stem, profile, &mut candidates);
    }

    dedup_preserving_first(candidates)
}

fn push_stem_candidates(stem: &str, profile: &LanguageProfile, candidates: &mut Vec<String>) {
    if stem.chars().count() < profile.min_stem_len || !is_alphabetic_word(stem) {
        return;
    }

    candidates.push(stem.to_string());

    if let Some(base) = stem.strip_suffix(REGULAR_PARTICIPLE_SUFFIX) {
        candidates.push(format!("{base}{INFINITIVE_ENDING}"));
    }
}
