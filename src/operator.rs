use crate::token::Token;

/// Comparison operators of the filter language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (`eq`)
    Equal,
    /// Not equal (`ne`)
    NotEqual,
    /// Greater than (`gt`)
    GreaterThan,
    /// Greater than or equal (`ge`)
    GreaterEqual,
    /// Less than (`lt`)
    LessThan,
    /// Less than or equal (`le`)
    LessEqual,
}

impl CompareOp {
    pub const ALL: [CompareOp; 6] = [
        CompareOp::Equal,
        CompareOp::NotEqual,
        CompareOp::GreaterThan,
        CompareOp::GreaterEqual,
        CompareOp::LessThan,
        CompareOp::LessEqual,
    ];

    /// Recognizes an operator token regardless of letter case.
    pub fn from_token(token: &Token) -> Option<Self> {
        Self::ALL.into_iter().find(|op| token.matches(op.keyword()))
    }

    /// The keyword as written in a filter expression.
    pub fn keyword(self) -> &'static str {
        match self {
            CompareOp::Equal => "eq",
            CompareOp::NotEqual => "ne",
            CompareOp::GreaterThan => "gt",
            CompareOp::GreaterEqual => "ge",
            CompareOp::LessThan => "lt",
            CompareOp::LessEqual => "le",
        }
    }

    /// Bound name inside a `range` clause, `None` for the phrase operators.
    pub fn range_bound(self) -> Option<&'static str> {
        match self {
            CompareOp::GreaterThan => Some("gt"),
            CompareOp::GreaterEqual => Some("gte"),
            CompareOp::LessThan => Some("lt"),
            CompareOp::LessEqual => Some("lte"),
            CompareOp::Equal | CompareOp::NotEqual => None,
        }
    }
}

#[test]
fn test_from_token() {
    assert_eq!(CompareOp::from_token(&Token::from("eq")), Some(CompareOp::Equal));
    assert_eq!(CompareOp::from_token(&Token::from("GE")), Some(CompareOp::GreaterEqual));
    assert_eq!(CompareOp::from_token(&Token::from("Le")), Some(CompareOp::LessEqual));
    assert_eq!(CompareOp::from_token(&Token::from("==")), None);
    assert_eq!(CompareOp::from_token(&Token::from("gte")), None);
}

#[test]
fn test_range_bounds() {
    assert_eq!(CompareOp::GreaterEqual.range_bound(), Some("gte"));
    assert_eq!(CompareOp::LessEqual.range_bound(), Some("lte"));
    assert_eq!(CompareOp::Equal.range_bound(), None);
}
