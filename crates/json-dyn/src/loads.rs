//! Text parsing with defensive input validation.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::LoadError;
use crate::value::{Json, Node};

// Digit-leading input must be a plain decimal number: one integer part, at
// most one fractional part, no exponent.
static NUMBER_GUARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("number guard pattern should compile")
});

/// Parse JSON text into a tree, `None` on any failure.
///
/// Failures are empty input, text the decoder rejects, digit-leading text
/// that is not a plain decimal number, and integer tokens that overflow
/// `i64`. Failure is atomic: no partial tree is ever produced. Use
/// [`try_loads`] when the failure class matters.
///
/// # Examples
///
/// ```
/// use json_dyn::loads;
///
/// let doc = loads(r#"{"a":1}"#).unwrap();
/// assert_eq!(doc.get("a").as_i64(), Some(1));
/// assert!(loads("1.2.3").is_none());
/// ```
pub fn loads(text: &str) -> Option<Json> {
    try_loads(text).ok()
}

/// [`loads`] with the failure class attached.
pub fn try_loads(text: &str) -> Result<Json, LoadError> {
    if text.is_empty() {
        return Err(LoadError::Empty);
    }
    if text.as_bytes()[0].is_ascii_digit() && !NUMBER_GUARD.is_match(text) {
        return Err(LoadError::InvalidNumber);
    }
    let decoded: serde_json::Value = serde_json::from_str(text)?;
    convert(decoded)
}

fn convert(value: serde_json::Value) -> Result<Json, LoadError> {
    let node = match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => classify_number(&n)?,
        serde_json::Value::String(s) => Node::Str(s),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(convert(item)?);
            }
            Node::Array(out)
        }
        serde_json::Value::Object(map) => {
            let mut out = HashMap::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k, convert(v)?);
            }
            Node::Object(out)
        }
    };
    Ok(Json::from_node(node))
}

// Classification is textual, over the token preserved by the decoder's
// arbitrary_precision mode: fractional syntax (., e, E) makes a Float,
// anything else must fit i64 or the whole load fails.
fn classify_number(n: &serde_json::Number) -> Result<Node, LoadError> {
    let token = n.to_string();
    if token.contains('.') || token.contains('e') || token.contains('E') {
        match token.parse::<f64>() {
            Ok(f) => Ok(Node::Float(f)),
            Err(_) => Err(LoadError::InvalidNumber),
        }
    } else {
        match token.parse::<i64>() {
            Ok(i) => Ok(Node::Int(i)),
            Err(_) => Err(LoadError::IntOutOfRange(token)),
        }
    }
}

impl FromStr for Json {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Json, LoadError> {
        try_loads(s)
    }
}
