// tests/parser_tests.rs

use esfilter::lexer::Lexer;
use esfilter::parser::{ParseError, Parser};
use serde_json::{Value, json};

fn parse(input: &str) -> Result<Value, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse()
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_all_operators() {
    let test_cases = vec![
        ("name eq 'x'", json!({"match_phrase": {"name": "x"}})),
        (
            "name ne 'x'",
            json!({"bool": {"must_not": {"match_phrase": {"name": "x"}}}}),
        ),
        ("age gt 5", json!({"range": {"age": {"gt": 5}}})),
        ("age ge 5", json!({"range": {"age": {"gte": 5}}})),
        ("age lt 5", json!({"range": {"age": {"lt": 5}}})),
        ("age le 5", json!({"range": {"age": {"lte": 5}}})),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse(input).unwrap(), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_range_with_string_value() {
    assert_eq!(
        parse("created ge '2024-01-01'").unwrap(),
        json!({"range": {"created": {"gte": "2024-01-01"}}})
    );
}

#[test]
fn test_quoted_number_is_string() {
    assert_eq!(
        parse("age eq '30'").unwrap(),
        json!({"match_phrase": {"age": "30"}})
    );
}

#[test]
fn test_unquoted_number_is_number() {
    let doc = parse("age eq 30").unwrap();
    assert!(doc["match_phrase"]["age"].is_number());
    assert_eq!(doc["match_phrase"]["age"].as_f64(), Some(30.0));
}

#[test]
fn test_fractional_number() {
    assert_eq!(
        parse("price lt 9.99").unwrap(),
        json!({"range": {"price": {"lt": 9.99}}})
    );
}

#[test]
fn test_unquoted_word_is_string() {
    assert_eq!(
        parse("status eq open").unwrap(),
        json!({"match_phrase": {"status": "open"}})
    );
}

#[test]
fn test_empty_quoted_string() {
    assert_eq!(
        parse("name eq ''").unwrap(),
        json!({"match_phrase": {"name": ""}})
    );
}

#[test]
fn test_field_and_value_keep_case() {
    assert_eq!(
        parse("NAME EQ 'JoHn'").unwrap(),
        json!({"match_phrase": {"NAME": "JoHn"}})
    );
}

#[test]
fn test_lone_quote_value_is_string() {
    assert_eq!(
        parse("name eq '").unwrap(),
        json!({"match_phrase": {"name": "'"}})
    );
}

#[test]
fn test_unbalanced_quote_value_keeps_quote() {
    assert_eq!(
        parse("name eq 'abc").unwrap(),
        json!({"match_phrase": {"name": "'abc"}})
    );
}

#[test]
fn test_near_whole_number_is_not_rounded() {
    assert_eq!(
        parse("a gt 2.0000000000000004").unwrap(),
        json!({"range": {"a": {"gt": 2.0000000000000004}}})
    );
}

// ============================================================================
// Connectives and precedence
// ============================================================================

#[test]
fn test_and_chain() {
    assert_eq!(
        parse("a eq 1 and b eq 2 and c eq 3").unwrap(),
        json!({"bool": {"must": [
            {"match_phrase": {"a": 1}},
            {"match_phrase": {"b": 2}},
            {"match_phrase": {"c": 3}}
        ]}})
    );
}

#[test]
fn test_or_chain() {
    assert_eq!(
        parse("a eq 1 or b eq 2 or c eq 3").unwrap(),
        json!({"bool": {"should": [
            {"match_phrase": {"a": 1}},
            {"match_phrase": {"b": 2}},
            {"match_phrase": {"c": 3}}
        ]}})
    );
}

#[test]
fn test_and_binds_tighter_than_or() {
    // a OR (b AND c)
    let doc = parse("a eq '1' or b eq '2' and c eq '3'").unwrap();
    assert_eq!(
        doc,
        json!({"bool": {"should": [
            {"match_phrase": {"a": "1"}},
            {"bool": {"must": [
                {"match_phrase": {"b": "2"}},
                {"match_phrase": {"c": "3"}}
            ]}}
        ]}})
    );
}

#[test]
fn test_and_binds_tighter_on_the_left() {
    // (a AND b) OR c
    let doc = parse("a eq '1' and b eq '2' or c eq '3'").unwrap();
    let should = doc["bool"]["should"].as_array().unwrap();
    assert_eq!(should.len(), 2);
    assert_eq!(should[0]["bool"]["must"].as_array().unwrap().len(), 2);
    assert_eq!(should[1], json!({"match_phrase": {"c": "3"}}));
}

#[test]
fn test_parentheses_override_precedence() {
    // (a OR b) AND c
    let doc = parse("(a eq '1' or b eq '2') and c eq '3'").unwrap();
    assert_eq!(
        doc,
        json!({"bool": {"must": [
            {"bool": {"should": [
                {"match_phrase": {"a": "1"}},
                {"match_phrase": {"b": "2"}}
            ]}},
            {"match_phrase": {"c": "3"}}
        ]}})
    );
}

#[test]
fn test_connectives_ignore_case() {
    assert_eq!(
        parse("a EQ 1 AND b Gt 2 Or c lE 3").unwrap(),
        parse("a eq 1 and b gt 2 or c le 3").unwrap()
    );
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_singleton_group_is_not_wrapped() {
    assert_eq!(
        parse("(name eq 'x')").unwrap(),
        json!({"match_phrase": {"name": "x"}})
    );
}

#[test]
fn test_redundant_nesting_collapses() {
    assert_eq!(
        parse("(((age gt 1)))").unwrap(),
        json!({"range": {"age": {"gt": 1}}})
    );
}

#[test]
fn test_deep_nesting() {
    let doc = parse("a eq 1 and (b eq 2 or (c eq 3 and d eq 4))").unwrap();
    let inner = &doc["bool"]["must"][1]["bool"]["should"][1]["bool"]["must"];
    assert_eq!(inner.as_array().unwrap().len(), 2);
    assert_eq!(inner[1], json!({"match_phrase": {"d": 4}}));
}

#[test]
fn test_missing_close_paren_is_tolerated() {
    assert_eq!(
        parse("(a eq 1 or b eq 2").unwrap(),
        parse("(a eq 1 or b eq 2)").unwrap()
    );
}

#[test]
fn test_missing_close_paren_then_and_continues_group() {
    // Without ')', the 'and' stays inside the group.
    let doc = parse("(a eq 1 or b eq 2 and c eq 3").unwrap();
    assert!(doc["bool"]["should"].is_array());
}

#[test]
fn test_trailing_tokens_are_ignored() {
    assert_eq!(
        parse("a eq 1 b").unwrap(),
        json!({"match_phrase": {"a": 1}})
    );
    assert_eq!(
        parse("a eq 1)").unwrap(),
        json!({"match_phrase": {"a": 1}})
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse("   "), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn test_incomplete_comparisons() {
    for input in ["name", "name eq", "a eq 1 and", "a eq 1 or b", "(", "()"] {
        assert_eq!(
            parse(input),
            Err(ParseError::UnexpectedEndOfInput),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_unsupported_operator() {
    assert_eq!(
        parse("name foo 'x'"),
        Err(ParseError::UnsupportedOperator("foo".into()))
    );
}

#[test]
fn test_symbolic_operator_is_unsupported() {
    assert_eq!(
        parse("age >= 3"),
        Err(ParseError::UnsupportedOperator(">=".into()))
    );
}

#[test]
fn test_unsupported_operator_keeps_case() {
    assert_eq!(
        parse("name LIKE 'x'"),
        Err(ParseError::UnsupportedOperator("LIKE".into()))
    );
}

#[test]
fn test_missing_value_wins_over_bad_operator() {
    // The value is read before the operator is checked.
    assert_eq!(parse("name foo"), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn test_error_in_second_operand_aborts() {
    assert_eq!(
        parse("a eq 1 and b zz 2"),
        Err(ParseError::UnsupportedOperator("zz".into()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ParseError::UnexpectedEndOfInput.to_string(),
        "Unexpected end of input"
    );
    assert_eq!(
        ParseError::UnsupportedOperator("foo".into()).to_string(),
        "Unsupported comparison operator: foo"
    );
}
