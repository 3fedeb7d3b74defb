//! Canonical text serialization.

use std::fmt;

use crate::value::{Json, Node};

/// Serialize a tree to its canonical text.
///
/// Object keys are sorted bytewise before emission, so structurally equal
/// trees produce byte-identical text at the cost of insertion order. No
/// whitespace is inserted. Numbers use shortest round-trip decimal text
/// (`1.0` serializes as `1`, never exponent notation). String escaping is
/// deliberately narrow: only `"` is escaped, while backslashes, control
/// characters, and non-ASCII pass through verbatim. Keys are emitted
/// verbatim between their quotes.
///
/// # Examples
///
/// ```
/// use json_dyn::{dumps, Json};
///
/// let obj = Json::new_object();
/// obj.set("b", Json::from(1.0));
/// obj.set("a", Json::from("A"));
/// assert_eq!(dumps(&obj), r#"{"a":"A","b":1}"#);
/// ```
pub fn dumps(value: &Json) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Json) {
    match &*value.0.borrow() {
        Node::Null => out.push_str("null"),
        Node::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Node::Int(i) => out.push_str(&i.to_string()),
        Node::Float(f) => out.push_str(&f.to_string()),
        Node::Str(s) => {
            out.push('"');
            out.push_str(&s.replace('"', "\\\""));
            out.push('"');
        }
        Node::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Node::Object(map) => {
            let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
            keys.sort_unstable();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                write_value(out, &map[key]);
            }
            out.push('}');
        }
    }
}

/// Canonical text via [`dumps`].
impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dumps(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_forms() {
        assert_eq!(dumps(&Json::null()), "null");
        assert_eq!(dumps(&Json::from(true)), "true");
        assert_eq!(dumps(&Json::from(false)), "false");
        assert_eq!(dumps(&Json::from(-42)), "-42");
        assert_eq!(dumps(&Json::from("hi")), "\"hi\"");
    }

    #[test]
    fn float_text_is_shortest_round_trip() {
        assert_eq!(dumps(&Json::from(1.0)), "1");
        assert_eq!(dumps(&Json::from(1.23456)), "1.23456");
        assert_eq!(dumps(&Json::from(-0.5)), "-0.5");
        assert_eq!(dumps(&Json::from(100000.0)), "100000");
    }

    #[test]
    fn only_double_quotes_are_escaped() {
        assert_eq!(dumps(&Json::from("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(dumps(&Json::from("back\\slash")), "\"back\\slash\"");
        assert_eq!(dumps(&Json::from("tab\there")), "\"tab\there\"");
    }

    #[test]
    fn object_keys_sorted_bytewise() {
        let obj = Json::new_object();
        obj.set("b", Json::from(2));
        obj.set("a", Json::from(1));
        obj.set("c", Json::from(3));
        assert_eq!(dumps(&obj), r#"{"a":1,"b":2,"c":3}"#);
    }

    #[test]
    fn containers_nest_without_whitespace() {
        let obj = Json::new_object();
        obj.set("list", Json::from(vec![1, 2]));
        obj.set("empty", Json::new_array());
        obj.set("inner", Json::new_object());
        assert_eq!(dumps(&obj), r#"{"empty":[],"inner":{},"list":[1,2]}"#);
    }

    #[test]
    fn display_matches_dumps() {
        let arr = Json::from(vec![1, 2]);
        assert_eq!(format!("{arr}"), dumps(&arr));
    }
}
