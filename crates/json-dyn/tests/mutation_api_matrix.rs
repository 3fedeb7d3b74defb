//! Mutation API matrix tests covering object and array operations, index
//! boundary quirks, and wrong-variant no-ops, driven through parsed
//! documents and verified against canonical text.

use json_dyn::{dumps, loads, Json};

// ---------------------------------------------------------------------------
// Object operations
// ---------------------------------------------------------------------------

#[test]
fn set_chain_builds_document() {
    let obj = Json::new_object();
    obj.set("name", Json::from("ada"))
        .set("age", Json::from(36))
        .set("admin", Json::from(true));
    assert_eq!(dumps(&obj), r#"{"admin":true,"age":36,"name":"ada"}"#);
}

#[test]
fn set_overwrites_existing_key() {
    let doc = loads(r#"{"k":1}"#).unwrap();
    doc.set("k", Json::from("replaced"));
    assert_eq!(dumps(&doc), r#"{"k":"replaced"}"#);
}

#[test]
fn get_miss_returns_detached_null() {
    let doc = loads(r#"{"a":1}"#).unwrap();
    let miss = doc.get("nope");
    assert!(miss.is_null());
    // Mutating the miss handle never writes back into the document.
    miss.swap(&Json::from(99));
    assert_eq!(dumps(&doc), r#"{"a":1}"#);
}

#[test]
fn pop_removes_only_the_named_key() {
    let doc = loads(r#"{"a":1,"b":2}"#).unwrap();
    doc.pop("a");
    doc.pop("missing");
    assert_eq!(dumps(&doc), r#"{"b":2}"#);
}

#[test]
fn set_default_only_fills_gaps() {
    let doc = loads(r#"{"present":1}"#).unwrap();
    doc.set_default("present", Json::from(9));
    doc.set_default("absent", Json::from(2));
    assert_eq!(dumps(&doc), r#"{"absent":2,"present":1}"#);
}

#[test]
fn update_merges_and_overwrites_collisions() {
    let a = loads(r#"{"both":1,"keep":1}"#).unwrap();
    let b = loads(r#"{"both":2,"new":3}"#).unwrap();
    a.update(&b);
    assert_eq!(dumps(&a), r#"{"both":2,"keep":1,"new":3}"#);
    assert_eq!(dumps(&b), r#"{"both":2,"new":3}"#);
}

#[test]
fn keys_and_values_reflect_live_state() {
    let doc = loads(r#"{"a":1,"b":2}"#).unwrap();
    doc.pop("b");
    doc.set("c", Json::from(3));
    let mut keys = doc.keys();
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "c".to_string()]);
    let mut got: Vec<i64> = doc.values().iter().filter_map(Json::as_i64).collect();
    got.sort();
    assert_eq!(got, vec![1, 3]);
}

#[test]
fn contains_key_checks_object_membership() {
    let doc = loads(r#"{"a":null}"#).unwrap();
    assert!(doc.contains("a"));
    assert!(!doc.contains("b"));
}

// ---------------------------------------------------------------------------
// Array operations
// ---------------------------------------------------------------------------

#[test]
fn insert_shifts_later_elements_right() {
    let arr = loads("[1,2]").unwrap();
    arr.insert(0, Json::from(0));
    assert_eq!(dumps(&arr), "[0,1,2]");
    arr.insert(1, Json::from("mid"));
    assert_eq!(dumps(&arr), r#"[0,"mid",1,2]"#);
}

#[test]
fn remove_shifts_later_elements_left() {
    let arr = loads("[1,2,3]").unwrap();
    arr.remove(&Json::from(2));
    assert_eq!(dumps(&arr), "[1,3]");
}

#[test]
fn remove_of_absent_value_is_noop() {
    let arr = loads("[1,2]").unwrap();
    arr.remove(&Json::from(9));
    assert_eq!(dumps(&arr), "[1,2]");
}

#[test]
fn pop_removes_at_index() {
    let arr = loads("[1,2]").unwrap();
    arr.pop(0);
    assert_eq!(dumps(&arr), "[2]");
}

#[test]
fn append_and_extend_grow_the_array() {
    let arr = loads("[]").unwrap();
    arr.append(Json::from(1));
    arr.extend(&loads("[2,3]").unwrap());
    assert_eq!(dumps(&arr), "[1,2,3]");
}

#[test]
fn reverse_in_place() {
    let arr = loads(r#"[1,"two",3.5,null]"#).unwrap();
    arr.reverse();
    assert_eq!(dumps(&arr), r#"[null,3.5,"two",1]"#);
}

#[test]
fn set_overwrites_in_bounds() {
    let arr = loads("[1,2,3]").unwrap();
    arr.set(1, Json::from("x"));
    assert_eq!(dumps(&arr), r#"[1,"x",3]"#);
}

#[test]
fn index_of_and_contains_use_float_tolerance() {
    let arr = loads("[1.5,2.5]").unwrap();
    assert_eq!(arr.index_of(&Json::from(2.500001)), Some(1));
    assert!(arr.contains(Json::from(1.500001)));
    assert_eq!(arr.index_of(&Json::from(2)), None);
}

#[test]
fn clear_keeps_the_variant() {
    let arr = loads("[1,2]").unwrap();
    arr.clear();
    assert_eq!(dumps(&arr), "[]");
    let obj = loads(r#"{"a":1}"#).unwrap();
    obj.clear();
    assert_eq!(dumps(&obj), "{}");
}

// ---------------------------------------------------------------------------
// Index boundary quirks
// ---------------------------------------------------------------------------

#[test]
fn insert_at_len_is_not_append() {
    let arr = loads("[1,2]").unwrap();
    arr.insert(2, Json::from(3));
    assert_eq!(dumps(&arr), "[1,2]");
}

#[test]
fn set_out_of_range_is_noop() {
    let arr = loads("[1,2]").unwrap();
    arr.set(2, Json::from(9));
    arr.set(10, Json::from(9));
    assert_eq!(dumps(&arr), "[1,2]");
}

#[test]
fn negative_index_is_out_of_range() {
    let arr = loads("[1,2]").unwrap();
    assert!(arr.get(-1).is_null());
    arr.set(-1, Json::from(9));
    arr.pop(-2);
    assert_eq!(dumps(&arr), "[1,2]");
}

#[test]
fn any_integer_width_addresses_an_array() {
    let arr = loads("[10,20,30]").unwrap();
    assert_eq!(arr.get(0u8).as_i64(), Some(10));
    assert_eq!(arr.get(1u64).as_i64(), Some(20));
    assert_eq!(arr.get(2usize).as_i64(), Some(30));
    assert!(arr.get(u64::MAX).is_null());
}

// ---------------------------------------------------------------------------
// Wrong-variant no-ops
// ---------------------------------------------------------------------------

#[test]
fn scalar_receivers_ignore_every_mutation() {
    let n = loads("3").unwrap();
    n.set("k", Json::from(1));
    n.append(Json::from(1));
    n.insert(0, Json::from(1));
    n.clear();
    n.reverse();
    n.update(&loads(r#"{"k":1}"#).unwrap());
    n.extend(&loads("[1]").unwrap());
    assert_eq!(dumps(&n), "3");
}

#[test]
fn object_receiver_ignores_array_ops() {
    let obj = loads(r#"{"a":1}"#).unwrap();
    obj.append(Json::from(2));
    obj.reverse();
    obj.remove(&Json::from(1));
    assert_eq!(obj.index_of(&Json::from(1)), None);
    assert_eq!(dumps(&obj), r#"{"a":1}"#);
}

#[test]
fn array_receiver_ignores_object_ops() {
    let arr = loads("[1]").unwrap();
    arr.set_default("k", Json::from(2));
    arr.update(&loads(r#"{"k":2}"#).unwrap());
    assert!(arr.keys().is_empty());
    assert!(arr.values().is_empty());
    assert_eq!(dumps(&arr), "[1]");
}
