//! JSON output for query documents.
//!
//! Object keys are written in the order the parser inserted them, not sorted.
//!
//! # Examples
//!
//! ```
//! use esfilter::output::{to_json, to_json_pretty};
//!
//! let doc = esfilter::parse_document("name eq 'John'").unwrap();
//!
//! assert_eq!(to_json(&doc), r#"{"match_phrase":{"name":"John"}}"#);
//! assert_eq!(
//!     to_json_pretty(&doc),
//!     "{\n  \"match_phrase\": {\n    \"name\": \"John\"\n  }\n}"
//! );
//! ```

use serde_json::Value as Json;

/// Compact JSON with no extra whitespace.
pub fn to_json(doc: &Json) -> String {
    doc.to_string()
}

/// JSON with 2-space indentation, one member per line.
pub fn to_json_pretty(doc: &Json) -> String {
    // Serializing a Value with string keys never fails.
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string())
}
