//! Separable verb reconstruction.
//!
//! In a finite clause the particle of a separable verb detaches from its
//! stem: "Ich gehe um acht zurück" carries the verb `zurückgehen`, but the
//! annotator lemmatizes the pieces as `gehen` and `zurück`. This module
//! reattaches them, producing additional candidate lemmas during lemma
//! discovery. It is a discovery step: the reconstructed lemma still has to
//! resolve through the ordinary fallback chain like any other lemma.

use crate::annotation::{Pos, Sentence, Token};
use crate::profile::LanguageProfile;
use crate::utils::{dedup_preserving_first, is_alphabetic_word};

/// Reconstruct `prefix + verbLemma` candidates from one annotated sentence.
///
/// Two detection paths:
///
/// 1. Any token whose dependency role marks it as a separable particle and
///    whose syntactic head is a verb. Fires per token.
/// 2. A sentence-final token that is alphabetic, is a known separable
///    prefix form (the infinitive marker excluded), and is tagged as
///    adposition, adverb, or particle, combined with the sentence's main
///    verb. Annotators regularly miss the particle role for these, so the
///    positional heuristic catches what path 1 does not.
///
/// Non-alphabetic concatenations are discarded; duplicates are removed
/// with first occurrence kept.
pub fn reconstruct_separable_verbs(sentence: &Sentence, profile: &LanguageProfile) -> Vec<String> {
    let mut candidates = Vec::new();

    for token in sentence {
        if !token.is_separable_particle() {
            continue;
        }
        let Some(head) = sentence.get(token.head) else {
            continue;
        };
        if !head.is_verb() {
            continue;
        }
        push_reconstruction(&token.lemma, &head.lemma, &mut candidates);
    }

    if let Some(last) = sentence.last()
        && is_alphabetic_word(&last.surface)
        && matches!(last.pos, Pos::Adp | Pos::Adv | Pos::Part)
    {
        let form = last.surface.to_lowercase();
        if profile.is_stranded_particle_form(&form)
            && let Some(verb) = main_verb(sentence)
        {
            push_reconstruction(&form, &verb.lemma, &mut candidates);
        }
    }

    dedup_preserving_first(candidates)
}

fn push_reconstruction(prefix: &str, verb_lemma: &str, candidates: &mut Vec<String>) {
    let reconstructed = format!("{}{}", prefix.to_lowercase(), verb_lemma.to_lowercase());
    if is_alphabetic_word(&reconstructed) {
        candidates.push(reconstructed);
    }
}

/// The sentence's main verb: the dependency root if it is a verb, else the
/// first verb token.
fn main_verb(sentence: &Sentence) -> Option<&Token> {
    sentence
        .iter()
        .find(|token| token.is_root() && token.is_verb())
        .or_else(|| sentence.iter().find(|token| token.is_verb()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(surface: &str, lemma: &str, pos: Pos, dep: &str, head: usize) -> Token {
        Token {
            surface: surface.to_string(),
            lemma: lemma.to_string(),
            pos,
            dep: dep.to_string(),
            head,
        }
    }

    #[test]
    fn test_particle_with_verb_head() {
        let profile = LanguageProfile::german();
        let sentence = vec![
            token("gehe", "gehen", Pos::Verb, "ROOT", 0),
            token("zurück", "zurück", Pos::Part, "svp", 0),
        ];

        assert_eq!(
            reconstruct_separable_verbs(&sentence, &profile),
            vec!["zurückgehen"]
        );
    }

    #[test]
    fn test_particle_with_non_verb_head_ignored() {
        let profile = LanguageProfile::german();
        let sentence = vec![
            token("Tür", "Tür", Pos::Noun, "ROOT", 0),
            token("zu", "zu", Pos::Part, "svp", 0),
        ];

        assert!(reconstruct_separable_verbs(&sentence, &profile).is_empty());
    }

    #[test]
    fn test_sentence_final_prefix_with_root_verb() {
        let profile = LanguageProfile::german();
        // "macht die Tür auf" without particle annotation.
        let sentence = vec![
            token("macht", "machen", Pos::Verb, "ROOT", 0),
            token("die", "der", Pos::Other, "nk", 2),
            token("Tür", "Tür", Pos::Noun, "oa", 0),
            token("auf", "auf", Pos::Adp, "mo", 0),
        ];

        assert_eq!(
            reconstruct_separable_verbs(&sentence, &profile),
            vec!["aufmachen"]
        );
    }

    #[test]
    fn test_sentence_final_infinitive_marker_excluded() {
        let profile = LanguageProfile::german();
        let sentence = vec![
            token("fängt", "fangen", Pos::Verb, "ROOT", 0),
            token("zu", "zu", Pos::Part, "mo", 0),
        ];

        assert!(reconstruct_separable_verbs(&sentence, &profile).is_empty());
    }

    #[test]
    fn test_sentence_final_punctuation_blocks_positional_path() {
        let profile = LanguageProfile::german();
        let sentence = vec![
            token("macht", "machen", Pos::Verb, "ROOT", 0),
            token("auf", "auf", Pos::Adp, "mo", 0),
            token(".", ".", Pos::Other, "punct", 0),
        ];

        assert!(reconstruct_separable_verbs(&sentence, &profile).is_empty());
    }

    #[test]
    fn test_first_verb_used_when_root_is_not_a_verb() {
        let profile = LanguageProfile::german();
        let sentence = vec![
            token("Plan", "Plan", Pos::Noun, "ROOT", 0),
            token("kommt", "kommen", Pos::Verb, "rc", 0),
            token("mit", "mit", Pos::Adp, "mo", 1),
        ];

        assert_eq!(
            reconstruct_separable_verbs(&sentence, &profile),
            vec!["mitkommen"]
        );
    }

    #[test]
    fn test_both_paths_deduplicated() {
        let profile = LanguageProfile::german();
        // Particle annotated AND sentence-final: one candidate, not two.
        let sentence = vec![
            token("gehe", "gehen", Pos::Verb, "ROOT", 0),
            token("zurück", "zurück", Pos::Part, "svp", 0),
        ];

        assert_eq!(
            reconstruct_separable_verbs(&sentence, &profile),
            vec!["zurückgehen"]
        );
    }

    #[test]
    fn test_non_alphabetic_reconstruction_discarded() {
        let profile = LanguageProfile::german();
        let sentence = vec![
            token("geht's", "geht's", Pos::Verb, "ROOT", 0),
            token("los", "los", Pos::Part, "svp", 0),
        ];

        assert!(reconstruct_separable_verbs(&sentence, &profile).is_empty());
    }

    #[test]
    fn test_empty_sentence() {
        let profile = LanguageProfile::german();
        assert!(reconstruct_separable_verbs(&Vec::new(), &profile).is_empty());
    }
}
