//! Morphological candidate generation.
//!
//! Inflected or recombined surface lemmas often do not match dictionary
//! keys directly. Each submodule here addresses one known transformation
//! and produces alternative lookup keys:
//!
//! - `separable`: reconstruct separable verbs whose particle is detached
//!   in the sentence (runs during lemma discovery, not per lookup)
//! - `infinitive`: strip the contracted infinitive marker fused between a
//!   prefix and its stem
//! - `participle`: strip the participle marker and regularize the stem
//!   back to an infinitive
//!
//! Generators never fail; invalid or inapplicable input yields `None` or
//! an empty candidate list.

pub mod infinitive;
pub mod participle;
pub mod separable;

pub use infinitive::normalize_infinitive;
pub use participle::participle_candidates;
pub use separable::reconstruct_separable_verbs;
