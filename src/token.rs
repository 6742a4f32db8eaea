use std::fmt;

/// A lexical unit of a filter expression.
///
/// Tokens carry no kind tag. Whether a token is a keyword, punctuation, a
/// field name or a literal is decided by the parser at the point where it
/// consumes it.
///
/// # Examples
/// ```text
/// name        // field
/// eq          // operator
/// 'New York'  // quoted literal, quotes kept
/// (           // punctuation
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Case-insensitive comparison used for keywords and punctuation.
    pub fn matches(&self, keyword: &str) -> bool {
        self.0.eq_ignore_ascii_case(keyword)
    }

    /// Returns the content between the surrounding single quotes, if the token
    /// is a quoted literal.
    ///
    /// A lone `'` is not a quoted literal.
    pub fn quoted_content(&self) -> Option<&str> {
        if self.0.len() >= 2 && self.0.starts_with('\'') && self.0.ends_with('\'') {
            Some(&self.0[1..self.0.len() - 1])
        } else {
            None
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::new(s)
    }
}

#[test]
fn test_quoted_content() {
    assert_eq!(Token::from("'John'").quoted_content(), Some("John"));
    assert_eq!(Token::from("''").quoted_content(), Some(""));
    assert_eq!(Token::from("'").quoted_content(), None);
    assert_eq!(Token::from("'open").quoted_content(), None);
    assert_eq!(Token::from("30").quoted_content(), None);
}

#[test]
fn test_matches_ignores_case() {
    assert!(Token::from("AND").matches("and"));
    assert!(Token::from("Or").matches("or"));
    assert!(!Token::from("andy").matches("and"));
}
