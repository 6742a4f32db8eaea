//! Reference text for `esfilter docs`

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Grammar,
    Operators,
    Values,
    Errors,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grammar" | "syntax" => Some(Self::Grammar),
            "operators" | "ops" => Some(Self::Operators),
            "values" | "value" | "literals" => Some(Self::Values),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"ESFILTER DOCUMENTATION

esfilter translates filter expressions into boolean query DSL documents.

  name eq 'John' and (age gt 30 or city eq 'New York')

TOPICS

  grammar           Comparisons, connectives, grouping and precedence
  operators         The six comparison operators and their DSL output
  values            How quoted and unquoted values are interpreted
  errors            When a filter is rejected

Run 'esfilter docs <topic>' for details.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Grammar) => Ok(GRAMMAR_DOC),
        Some(DocTopic::Operators) => Ok(OPERATORS_DOC),
        Some(DocTopic::Values) => Ok(VALUES_DOC),
        Some(DocTopic::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const GRAMMAR_DOC: &str = r#"GRAMMAR

  or_expr    := and_expr ("or" and_expr)*
  and_expr   := comparison ("and" comparison)*
  comparison := "(" or_expr ")" | FIELD OPERATOR VALUE

PRECEDENCE
  'and' binds tighter than 'or'. Parentheses regroup.

    a eq 1 or b eq 2 and c eq 3      a OR (b AND c)
    (a eq 1 or b eq 2) and c eq 3    (a OR b) AND c

  Several 'and' operands become {"bool":{"must":[...]}}.
  Several 'or' operands become {"bool":{"should":[...]}}.
  A single operand is never wrapped.

CASE
  Keywords and operators ignore case: AND, Or, EQ all work.
  Field names and values are kept as written.

PARENTHESES
  A missing closing ')' is accepted.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

  eq    {"match_phrase":{FIELD:VALUE}}
  ne    {"bool":{"must_not":{"match_phrase":{FIELD:VALUE}}}}
  gt    {"range":{FIELD:{"gt":VALUE}}}
  ge    {"range":{FIELD:{"gte":VALUE}}}
  lt    {"range":{FIELD:{"lt":VALUE}}}
  le    {"range":{FIELD:{"lte":VALUE}}}

Example:
  Filter: age ge 18
  Output: {"range":{"age":{"gte":18}}}
"#;

const VALUES_DOC: &str = r#"VALUES

QUOTED
  'text'
    Always a string, quotes removed, even when the content is numeric.
    Whitespace and parentheses inside quotes are kept. There are no escapes.

    age eq '30'       {"match_phrase":{"age":"30"}}

UNQUOTED
  Parsed as a decimal number when possible, otherwise kept as a string.

    age gt 30         {"range":{"age":{"gt":30}}}
    price lt 9.99     {"range":{"price":{"lt":9.99}}}
    status eq open    {"match_phrase":{"status":"open"}}
"#;

const ERRORS_DOC: &str = r#"ERRORS

  Unexpected end of input
    The filter stopped before a comparison was complete, or was empty.

      name eq
      name eq 'x' and

  Unsupported comparison operator
    The word after the field is not eq, ne, gt, ge, lt or le.

      name like 'x'

Nothing else is validated.
"#;
