//! Term-bank dictionary loading and lookup.
//!
//! A dictionary directory holds one or more `term_bank_*.json` files. Each
//! file is a JSON array of entry tuples; field 0 is the source word and
//! field 5 the definition list. Only definitions typed `structured-content`
//! are used; their content trees are flattened to gloss strings by the
//! `content` module. The result is a single word map from lowercased source
//! word to its glosses, built once per run and immutable afterwards.

mod content;

pub use content::{ContentElement, ContentNode, ElementData, extract_glosses};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use thiserror::Error;

/// Recognized bank files start with this prefix and end in `.json`.
pub const BANK_FILE_PREFIX: &str = "term_bank_";

/// Index of the source word within an entry tuple.
const WORD_FIELD: usize = 0;
/// Index of the definition list within an entry tuple.
const DEFINITIONS_FIELD: usize = 5;
/// Minimum number of positional fields for an entry to be considered.
const MIN_ENTRY_FIELDS: usize = 6;

/// Fatal dictionary loading failures. Per-file parse faults are not fatal;
/// they are recorded as warnings on the loaded store instead.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("dictionary directory '{0}' does not exist")]
    MissingDirectory(PathBuf),
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),
    #[error("no term bank files ({BANK_FILE_PREFIX}*.json) found in '{0}'")]
    NoBankFiles(PathBuf),
    #[error("failed to read dictionary directory")]
    Io(#[from] std::io::Error),
}

/// Mapping from lowercased source word to its glosses, in document order.
pub type WordMap = HashMap<String, Vec<String>>;

/// A loaded dictionary: the word map plus any per-file warnings gathered
/// during loading.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    word_map: WordMap,
    warnings: Vec<String>,
}

impl DictionaryStore {
    /// Load every recognized bank file in `directory`, sorted by file name.
    ///
    /// A malformed bank file aborts loading of that file only: a warning is
    /// recorded and the remaining files still load. An unreadable directory
    /// or a directory without a single recognized bank file is fatal.
    pub fn load(directory: impl AsRef<Path>) -> Result<Self, DictionaryLoadError> {
        let directory = directory.as_ref();

        if !directory.exists() {
            return Err(DictionaryLoadError::MissingDirectory(
                directory.to_path_buf(),
            ));
        }
        if !directory.is_dir() {
            return Err(DictionaryLoadError::NotADirectory(directory.to_path_buf()));
        }

        let mut bank_files = Vec::new();
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();
            if is_bank_file(&path) {
                bank_files.push(path);
            }
        }

        if bank_files.is_empty() {
            return Err(DictionaryLoadError::NoBankFiles(directory.to_path_buf()));
        }

        // File name order determines gloss order across banks.
        bank_files.sort();

        let mut store = Self::default();
        for path in &bank_files {
            if let Err(err) = store.load_bank_file(path) {
                store
                    .warnings
                    .push(format!("Skipped {}: {:#}", path.display(), err));
            }
        }

        Ok(store)
    }

    fn load_bank_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bank file: {:?}", path))?;

        let entries: Vec<Value> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse bank file: {:?}", path))?;

        for entry in &entries {
            self.load_entry(entry);
        }
        Ok(())
    }

    /// Load one entry tuple. Entries that are not arrays, are too short, or
    /// yield no glosses are skipped silently; they are valid bank content
    /// that simply carries nothing for us.
    fn load_entry(&mut self, entry: &Value) {
        let Some(fields) = entry.as_array() else {
            return;
        };
        if fields.len() < MIN_ENTRY_FIELDS {
            return;
        }
        let Some(word) = fields[WORD_FIELD].as_str() else {
            return;
        };
        let Some(definitions) = fields[DEFINITIONS_FIELD].as_array() else {
            return;
        };

        let mut glosses = Vec::new();
        for definition in definitions {
            if definition.get("type").and_then(Value::as_str) != Some("structured-content") {
                continue;
            }
            let Some(content) = definition.get("content") else {
                continue;
            };
            let Ok(root) = serde_json::from_value::<ContentNode>(content.clone()) else {
                continue;
            };
            glosses.extend(extract_glosses(&root));
        }

        if word.is_empty() || glosses.is_empty() {
            return;
        }

        // Duplicate glosses across banks are preserved, not deduplicated.
        self.word_map
            .entry(word.to_lowercase())
            .or_default()
            .extend(glosses);
    }

    /// Case-insensitive lookup. Unknown keys yield an empty slice, not an
    /// error.
    pub fn lookup(&self, key: &str) -> &[String] {
        self.word_map
            .get(&key.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All normalized keys, for building the compound segmenter.
    pub fn known_words(&self) -> impl Iterator<Item = &str> {
        self.word_map.keys().map(String::as_str)
    }

    /// Number of distinct headwords.
    pub fn len(&self) -> usize {
        self.word_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_map.is_empty()
    }

    /// Per-file warnings gathered during loading.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn is_bank_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(BANK_FILE_PREFIX))
}
