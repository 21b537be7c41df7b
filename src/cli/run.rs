//! Main entry point for the wortschatz CLI.

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use super::report::render_report;
use crate::annotation::load_annotations;
use crate::dictionary::DictionaryStore;
use crate::pipeline;
use crate::profile::LanguageProfile;

/// Load inputs, run the pipeline, and print the result.
pub fn run_cli(args: Arguments) -> Result<()> {
    let sentences = load_annotations(&args.annotations)?;

    let dictionary = DictionaryStore::load(&args.dictionary_dir).with_context(|| {
        format!(
            "Failed to load dictionary from {:?}",
            args.dictionary_dir
        )
    })?;

    if args.verbose {
        eprintln!(
            "Loaded {} headwords from {:?}",
            dictionary.len(),
            args.dictionary_dir
        );
        for warning in dictionary.warnings() {
            eprintln!("{}: {}", "warning".bold().yellow(), warning);
        }
    }

    let profile = LanguageProfile::german();
    let entries = pipeline::run(&sentences, &dictionary, &profile);

    if args.json {
        let json = serde_json::to_string_pretty(&entries)?;
        println!("{json}");
    } else {
        println!("{}", render_report(&entries));
    }

    Ok(())
}
