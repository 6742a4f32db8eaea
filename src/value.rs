use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::token::Token;

/// The right-hand side of a comparison.
///
/// # Interpretation
///
/// - A token wrapped in single quotes is always a string, quotes stripped,
///   even when the content looks numeric (`'30'` stays `"30"`).
/// - Anything else is parsed as a floating-point number.
/// - When that parse fails, or yields a value JSON cannot hold (`NaN`,
///   infinities), the raw token is kept as a string.
///
/// # Examples
///
/// ```
/// use esfilter::{Token, Value};
///
/// assert_eq!(Value::from_token(Token::from("'John'")), Value::String("John".into()));
/// assert_eq!(Value::from_token(Token::from("30")), Value::Number(30.0));
/// assert_eq!(Value::from_token(Token::from("abc")), Value::String("abc".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string
    String(String),

    /// Decimal number, always `f64` regardless of how it was written
    Number(f64),
}

impl Value {
    pub fn from_token(token: Token) -> Self {
        if let Some(content) = token.quoted_content() {
            return Value::String(content.to_string());
        }

        match token.as_str().parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::String(token.into_string()),
        }
    }

    /// Converts to a JSON value.
    ///
    /// Whole numbers that fit in an `i64` are written without a fractional
    /// part (`30`, not `30.0`). The check runs on the exact binary value, so
    /// `2.0000000000000004` stays a float.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => {
                if n.fract() == 0.0
                    && let Some(d) = Decimal::from_f64_retain(*n)
                    && let Some(i) = d.to_i64()
                {
                    return serde_json::Value::Number(i.into());
                }
                serde_json::Number::from_f64(*n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

#[test]
fn test_quoted_numeric_stays_string() {
    assert_eq!(
        Value::from_token(Token::from("'30'")),
        Value::String("30".into())
    );
}

#[test]
fn test_numeric_forms() {
    assert_eq!(Value::from_token(Token::from("30")), Value::Number(30.0));
    assert_eq!(Value::from_token(Token::from("-2.5")), Value::Number(-2.5));
    assert_eq!(Value::from_token(Token::from("1e3")), Value::Number(1000.0));
}

#[test]
fn test_non_finite_falls_back_to_string() {
    assert_eq!(
        Value::from_token(Token::from("NaN")),
        Value::String("NaN".into())
    );
    assert_eq!(
        Value::from_token(Token::from("inf")),
        Value::String("inf".into())
    );
}

#[test]
fn test_whole_numbers_render_as_integers() {
    assert_eq!(Value::Number(30.0).to_json().to_string(), "30");
    assert_eq!(Value::Number(-4.0).to_json().to_string(), "-4");
    assert_eq!(Value::Number(2.5).to_json().to_string(), "2.5");
}

#[test]
fn test_near_whole_numbers_keep_fraction() {
    let near_two = Value::from_token(Token::from("2.0000000000000004"));
    assert_eq!(near_two.to_json().to_string(), "2.0000000000000004");

    let above_2_52 = Value::from_token(Token::from("4503599627370496.5"));
    assert_eq!(above_2_52.to_json().to_string(), "4503599627370496.5");

    let tiny = Value::from_token(Token::from("1e-30"));
    assert_eq!(tiny.to_json().to_string(), "1e-30");
}

#[test]
fn test_large_whole_number_stays_integer() {
    assert_eq!(
        Value::Number(4503599627370496.0).to_json().to_string(),
        "4503599627370496"
    );
}
