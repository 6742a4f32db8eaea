//! CLI support for esfilter
//!
//! Provides programmatic access to the `esfilter` command so other tools can
//! embed the same translate/check/docs behavior.

mod docs;
mod translate;

pub use docs::{DocTopic, get_doc_topic, get_docs_overview};
pub use translate::{TranslateOptions, TranslateResult, execute_translate};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Filter could not be translated
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// Reading the filter from stdin failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No filter given as argument or on stdin
    #[error("No filter provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'esfilter docs' to see available topics.")]
    UnknownTopic(String),
}
