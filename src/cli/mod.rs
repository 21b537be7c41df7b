//! Command-line interface layer.
//!
//! The CLI is glue only: it loads an annotator dump and a dictionary
//! directory, hands both to the pipeline, and renders the result. No
//! linguistic processing happens here.

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::run_cli;
