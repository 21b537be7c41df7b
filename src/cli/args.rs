//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Annotator dump: a JSON array of sentences, each an array of token
    /// objects {surface, lemma, pos, dep, head}
    pub annotations: PathBuf,

    /// Dictionary directory containing term_bank_*.json files
    pub dictionary_dir: PathBuf,

    /// Emit the resolved vocabulary as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (dictionary size, load warnings)
    #[arg(short, long)]
    pub verbose: bool,
}
