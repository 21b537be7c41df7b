//! Infinitive-marker normalization.
//!
//! German fuses the infinitive marker `zu` between a separable prefix and
//! the verb stem: `aufzumachen` is the `zu`-infinitive of `aufmachen`.
//! Dictionaries key the plain infinitive, so the fused form must be
//! rewritten to `prefix + stem` before lookup.

use crate::profile::LanguageProfile;
use crate::utils::is_alphabetic_word;

/// Minimum lemma length for the rewrite to be worth attempting: the
/// shortest valid shape is a two-character prefix, the marker, and a
/// two-character stem is already below the stem minimum.
const MIN_LEMMA_LEN: usize = 6;

/// Rewrite `prefix + marker + stem` to `prefix + stem`, trying each known
/// prefix longest-first. The first prefix whose remainder starts with the
/// marker and leaves a valid stem wins.
///
/// Returns `None` if the lemma is too short, lacks the marker substring,
/// or no prefix matches.
pub fn normalize_infinitive(lemma: &str, profile: &LanguageProfile) -> Option<String> {
    if lemma.chars().count() < MIN_LEMMA_LEN || !lemma.contains(profile.infinitive_marker) {
        return None;
    }

    for prefix in &profile.separable_prefixes {
        let Some(rest) = lemma.strip_prefix(prefix) else {
            continue;
        };
        let Some(stem) = rest.strip_prefix(profile.infinitive_marker) else {
            continue;
        };
        if stem.chars().count() >= profile.min_stem_len && is_alphabetic_word(stem) {
            return Some(format!("{prefix}{stem}"));
        }
    }

    None
}
