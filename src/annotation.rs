//! Token records at the external annotator boundary.
//!
//! Wortschatz does not segment or tag text itself; a linguistic annotator
//! (spaCy, UDPipe, or similar) runs upstream and dumps its output as JSON:
//! an array of sentences, each an array of token objects. This module
//! defines the fixed shape of those records and the loader for the dump.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag, following the Universal Dependencies tag set
/// that common annotators emit. Tags outside the ones the pipeline inspects
/// collapse into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
    Adp,
    Part,
    Pron,
    #[serde(other)]
    Other,
}

/// Dependency roles that mark a separable verb particle.
///
/// spaCy's German models emit `svp`; UD-style annotators emit `prt`.
pub const SEPARABLE_PARTICLE_DEPS: [&str; 2] = ["svp", "prt"];

/// Dependency role of the sentence root.
pub const ROOT_DEP: &str = "ROOT";

/// One annotated token.
///
/// `head` is the index of the token's syntactic head within its sentence;
/// the sentence root points at itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
    pub pos: Pos,
    #[serde(default)]
    pub dep: String,
    #[serde(default)]
    pub head: usize,
}

/// One sentence of annotated tokens, in document order.
pub type Sentence = Vec<Token>;

impl Token {
    pub fn is_verb(&self) -> bool {
        self.pos == Pos::Verb
    }

    pub fn is_separable_particle(&self) -> bool {
        SEPARABLE_PARTICLE_DEPS.contains(&self.dep.as_str())
    }

    pub fn is_root(&self) -> bool {
        self.dep == ROOT_DEP
    }
}

/// Load an annotator dump: a JSON array of sentences, each an array of
/// token objects.
pub fn load_annotations(path: impl AsRef<Path>) -> Result<Vec<Sentence>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read annotations file: {:?}", path))?;

    let sentences: Vec<Sentence> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse annotations file: {:?}", path))?;

    Ok(sentences)
}
