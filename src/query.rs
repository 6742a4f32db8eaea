//! Builders for the boolean query DSL documents produced by the parser.
//!
//! Every builder returns a fresh `serde_json::Value`. Maps keep insertion
//! order, so serialized keys come out in the order they are added here.

use serde_json::{Map, Value as Json};

use crate::{operator::CompareOp, value::Value};

fn object(key: &str, value: Json) -> Json {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Json::Object(map)
}

/// `{"match_phrase": {field: value}}`
pub fn match_phrase(field: &str, value: &Value) -> Json {
    object("match_phrase", object(field, value.to_json()))
}

/// `{"range": {field: {bound: value}}}`
pub fn range(field: &str, bound: &str, value: &Value) -> Json {
    object("range", object(field, object(bound, value.to_json())))
}

/// `{"bool": {"must_not": clause}}`
pub fn must_not(clause: Json) -> Json {
    object("bool", object("must_not", clause))
}

/// `{"bool": {"must": [..]}}`
pub fn must(clauses: Vec<Json>) -> Json {
    object("bool", object("must", Json::Array(clauses)))
}

/// `{"bool": {"should": [..]}}`
pub fn should(clauses: Vec<Json>) -> Json {
    object("bool", object("should", Json::Array(clauses)))
}

/// Translates a single `field op value` comparison.
pub fn comparison(field: &str, op: CompareOp, value: &Value) -> Json {
    match (op, op.range_bound()) {
        (_, Some(bound)) => range(field, bound, value),
        (CompareOp::NotEqual, None) => must_not(match_phrase(field, value)),
        _ => match_phrase(field, value),
    }
}
