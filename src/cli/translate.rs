//! Translate or validate filters from the command line

use super::CliError;
use crate::{Diagnostics, output};

/// Options for the translate and check commands
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// The filter expression; `None` when neither argument nor stdin had one
    pub filter: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate, don't print the document
    pub syntax_only: bool,
}

/// Result of a translate operation
#[derive(Debug, PartialEq)]
pub enum TranslateResult {
    /// The filter parsed successfully
    Valid,
    /// Serialized query document
    Document(String),
}

/// Execute a translate (or check, with `syntax_only`) operation
pub fn execute_translate(
    options: &TranslateOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<TranslateResult, CliError> {
    let filter = options
        .filter
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or(CliError::NoInput)?;

    let doc = crate::parse_document_with(filter, diagnostics)?;

    if options.syntax_only {
        return Ok(TranslateResult::Valid);
    }

    let json = if options.pretty {
        output::to_json_pretty(&doc)
    } else {
        output::to_json(&doc)
    };

    Ok(TranslateResult::Document(json))
}
