//! Report formatting and printing utilities.
//!
//! Separate from the pipeline so the library can be used without printing
//! side effects.

use colored::Colorize;

use crate::pipeline::VocabEntry;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// How many translations the text report shows per lemma.
const TRANSLATION_PREVIEW: usize = 3;

/// Render the vocabulary report: one line per lemma, then a summary with
/// the translation rate.
pub fn render_report(entries: &[VocabEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);

    for entry in entries {
        if entry.translations.is_empty() {
            lines.push(format!(
                "{}: {}",
                entry.lemma,
                "[no translation found]".dimmed()
            ));
        } else {
            let preview = entry
                .translations
                .iter()
                .take(TRANSLATION_PREVIEW)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("{}: {}", entry.lemma.bold(), preview));
        }
    }

    let translated = entries.iter().filter(|e| !e.translations.is_empty()).count();
    let rate = if entries.is_empty() {
        0.0
    } else {
        translated as f64 / entries.len() as f64 * 100.0
    };
    lines.push(String::new());
    lines.push(format!(
        "{} Processed {} unique lemmas. Found translations for {} ({:.1}%).",
        SUCCESS_MARK.green(),
        entries.len(),
        translated,
        rate
    ));

    lines.join("\n")
}
