//! # esfilter
//!
//! Translates filter expressions such as
//!
//! ```text
//! name eq 'John' and (age gt 30 or city eq 'New York')
//! ```
//!
//! into search-engine boolean query DSL documents built from `match_phrase`,
//! `range`, `bool.must`, `bool.should` and `bool.must_not`.
//!
//! ```
//! let dsl = esfilter::parse("name eq 'John' and age gt 30").unwrap();
//! assert_eq!(
//!     dsl,
//!     r#"{"bool":{"must":[{"match_phrase":{"name":"John"}},{"range":{"age":{"gt":30}}}]}}"#
//! );
//! ```
pub mod cli;
pub mod diagnostics;
pub mod lexer;
pub mod operator;
pub mod output;
pub mod parser;
pub mod query;
pub mod token;
pub mod value;

pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use lexer::Lexer;
pub use operator::CompareOp;
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use token::Token;
pub use value::Value;

/// Parses a filter into a query document without serializing it.
pub fn parse_document(filter: &str) -> Result<serde_json::Value, ParseError> {
    Parser::new(Lexer::new(filter)).parse()
}

/// Parses a filter and returns the compact JSON query document.
pub fn parse(filter: &str) -> Result<String, ParseError> {
    parse_with(filter, &NoopDiagnostics)
}

/// Like [`parse_document`], reporting the input and outcome to `diagnostics`.
///
/// On success the compact serialization is reported, whatever format the
/// caller later renders.
pub fn parse_document_with(
    filter: &str,
    diagnostics: &dyn Diagnostics,
) -> Result<serde_json::Value, ParseError> {
    diagnostics.parsing(filter);

    match parse_document(filter) {
        Ok(doc) => {
            diagnostics.parsed(&to_json(&doc));
            Ok(doc)
        }
        Err(e) => {
            diagnostics.failed(filter, &e);
            Err(e)
        }
    }
}

/// Like [`parse`], reporting the input and outcome to `diagnostics`.
pub fn parse_with(filter: &str, diagnostics: &dyn Diagnostics) -> Result<String, ParseError> {
    parse_document_with(filter, diagnostics).map(|doc| to_json(&doc))
}
