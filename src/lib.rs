//! Wortschatz - offline vocabulary extraction and dictionary resolution
//!
//! Wortschatz is a CLI tool and library that takes linguistically annotated
//! text (tokens with lemmas, POS tags, and dependency links) and resolves
//! each unique lemma to translations held in an offline term-bank dictionary.
//! Surface lemmas frequently do not match dictionary keys directly, so
//! resolution runs a deterministic fallback chain: direct lookup, infinitive
//! marker normalization, participle normalization, and compound segmentation.
//!
//! ## Module Structure
//!
//! - `annotation`: Token records at the external annotator boundary
//! - `cli`: Command-line interface layer (arguments, run loop, report)
//! - `compound`: Automaton-based compound word segmentation
//! - `dictionary`: Term-bank loading and structured-content gloss extraction
//! - `morphology`: Lemma candidate generators (separable, infinitive, participle)
//! - `pipeline`: Lemma discovery and the resolution fallback chain
//! - `profile`: Per-language closed sets (prefixes, markers, length limits)
//! - `utils`: Shared utility functions

pub mod annotation;
pub mod cli;
pub mod compound;
pub mod dictionary;
pub mod morphology;
pub mod pipeline;
pub mod profile;
pub mod utils;
