//! Per-language closed sets driving lemma normalization.
//!
//! Every morphological rule in this crate is parameterized by a
//! [`LanguageProfile`]: the separable prefix particles, the contracted
//! infinitive marker, the participle marker, and the minimum stem/part
//! length. Only a German profile ships today; supporting another language
//! with separable morphology means providing another profile, not new code.

use crate::annotation::Pos;

/// Separable verb prefixes recognized by the German profile.
///
/// The order here is not significant; [`LanguageProfile::german`] sorts the
/// set longest-first so that a short prefix never matches inside a longer
/// one (e.g. `her` inside `heraus`).
const GERMAN_SEPARABLE_PREFIXES: [&str; 50] = [
    "ab",
    "an",
    "auf",
    "aus",
    "bei",
    "dar",
    "durch",
    "ein",
    "empor",
    "entgegen",
    "entlang",
    "fest",
    "fort",
    "gegenüber",
    "heim",
    "her",
    "herab",
    "heran",
    "herauf",
    "heraus",
    "herbei",
    "herein",
    "herum",
    "herunter",
    "herüber",
    "hin",
    "hinab",
    "hinauf",
    "hinaus",
    "hinein",
    "hinunter",
    "hinüber",
    "hinzu",
    "los",
    "mit",
    "nach",
    "nieder",
    "statt",
    "teil",
    "um",
    "vor",
    "voraus",
    "vorbei",
    "weg",
    "weiter",
    "wieder",
    "zu",
    "zurück",
    "zusammen",
    "über",
];

/// Fixed closed sets for one source language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Separable prefix particles, sorted longest-first.
    pub separable_prefixes: Vec<&'static str>,
    /// Contracted infinitive marker fused between prefix and stem
    /// (German `zu`, as in `aufzumachen`).
    pub infinitive_marker: &'static str,
    /// Participle marker fused after the prefix (German `ge`, as in
    /// `aufgemacht`).
    pub participle_marker: &'static str,
    /// Minimum length for normalized stems and compound parts.
    pub min_stem_len: usize,
}

impl LanguageProfile {
    pub fn german() -> Self {
        let mut separable_prefixes = GERMAN_SEPARABLE_PREFIXES.to_vec();
        separable_prefixes.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Self {
            separable_prefixes,
            infinitive_marker: "zu",
            participle_marker: "ge",
            min_stem_len: 3,
        }
    }

    /// Whether tokens with this POS contribute vocabulary entries.
    pub fn is_content_pos(&self, pos: Pos) -> bool {
        matches!(pos, Pos::Noun | Pos::Verb | Pos::Adj | Pos::Adv)
    }

    /// Whether `form` is a known separable prefix usable as a stranded
    /// particle. The infinitive marker is excluded even though it doubles
    /// as a prefix: a sentence-final `zu` is far more likely to be the
    /// marker itself.
    pub fn is_stranded_particle_form(&self, form: &str) -> bool {
        form != self.infinitive_marker && self.separable_prefixes.iter().any(|p| *p == form)
    }
}
