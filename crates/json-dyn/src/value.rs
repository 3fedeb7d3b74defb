//! Core value handle and tagged-union node.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Tag identifying which variant a [`Json`] node currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
}

/// The tagged union behind every handle. Kept private so the discriminant
/// can never disagree with the payload.
#[derive(Debug)]
pub(crate) enum Node {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Json>),
    Object(HashMap<String, Json>),
}

/// A handle to a dynamically typed JSON value.
///
/// `Json` is a cheap reference-counted handle, not an owned tree: `Clone`
/// clones the handle and both copies observe (and mutate) the same node.
/// Containers store child handles, so [`Json::get`] returns a live view into
/// the tree and [`Json::set`] stores its argument by handle rather than
/// copying it. Two handles referencing the same subtree is shared-mutable by
/// design, not an ownership bug; use [`Json::deep_copy`] when an independent
/// tree is needed.
///
/// Aliasing a node into its own ancestor chain creates a cycle. The recursive
/// operations (equality, serialization, deep copy, debug formatting) do not
/// guard against cycles; keeping trees acyclic is the caller's
/// responsibility.
///
/// `Rc`/`RefCell` make the type `!Send`/`!Sync`: trees are single-threaded
/// and every operation is a plain synchronous tree edit or traversal.
///
/// # Examples
///
/// ```
/// use json_dyn::Json;
///
/// let obj = Json::new_object();
/// obj.set("answer", Json::from(42));
/// assert_eq!(obj.get("answer").as_i64(), Some(42));
/// assert!(obj.get("missing").is_null());
/// ```
#[derive(Clone)]
pub struct Json(pub(crate) Rc<RefCell<Node>>);

impl Json {
    pub(crate) fn from_node(node: Node) -> Json {
        Json(Rc::new(RefCell::new(node)))
    }

    /// Create a `Null` value.
    pub fn null() -> Json {
        Json::from_node(Node::Null)
    }

    /// Create an empty `Object`.
    pub fn new_object() -> Json {
        Json::from_node(Node::Object(HashMap::new()))
    }

    /// Create an empty `Array`.
    pub fn new_array() -> Json {
        Json::from_node(Node::Array(Vec::new()))
    }

    /// Current variant tag.
    pub fn json_type(&self) -> JsonType {
        match &*self.0.borrow() {
            Node::Null => JsonType::Null,
            Node::Bool(_) => JsonType::Bool,
            Node::Int(_) => JsonType::Int,
            Node::Float(_) => JsonType::Float,
            Node::Str(_) => JsonType::String,
            Node::Array(_) => JsonType::Array,
            Node::Object(_) => JsonType::Object,
        }
    }

    /// Lowercase variant name, for messages.
    pub fn type_name(&self) -> &'static str {
        match self.json_type() {
            JsonType::Null => "null",
            JsonType::Bool => "bool",
            JsonType::Int => "int",
            JsonType::Float => "float",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(&*self.0.borrow(), Node::Object(_))
    }

    /// Payload of a `Bool`, `None` for any other variant.
    pub fn as_bool(&self) -> Option<bool> {
        match &*self.0.borrow() {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Payload of an `Int`, `None` for any other variant (including `Float`).
    pub fn as_i64(&self) -> Option<i64> {
        match &*self.0.borrow() {
            Node::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Payload of a `Float`, `None` for any other variant (including `Int`).
    pub fn as_f64(&self) -> Option<f64> {
        match &*self.0.borrow() {
            Node::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Owned copy of a `String` payload, `None` for any other variant.
    pub fn as_string(&self) -> Option<String> {
        match &*self.0.borrow() {
            Node::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Snapshot of an `Array`'s elements, `None` for any other variant.
    ///
    /// The returned handles are live: mutating an element mutates the tree.
    /// Only the membership is a snapshot.
    pub fn as_vec(&self) -> Option<Vec<Json>> {
        match &*self.0.borrow() {
            Node::Array(items) => Some(items.clone()),
            _ => None,
        }
    }

    /// Snapshot of an `Object`'s entries, `None` for any other variant.
    ///
    /// Like [`Json::as_vec`], the values are live handles into the tree.
    pub fn as_map(&self) -> Option<HashMap<String, Json>> {
        match &*self.0.borrow() {
            Node::Object(map) => Some(map.clone()),
            _ => None,
        }
    }

    /// Fully independent deep copy of this tree.
    ///
    /// No node of the result aliases the source, at any depth; mutating one
    /// tree never affects the other.
    pub fn deep_copy(&self) -> Json {
        let node = match &*self.0.borrow() {
            Node::Null => Node::Null,
            Node::Bool(b) => Node::Bool(*b),
            Node::Int(i) => Node::Int(*i),
            Node::Float(f) => Node::Float(*f),
            Node::Str(s) => Node::Str(s.clone()),
            Node::Array(items) => Node::Array(items.iter().map(Json::deep_copy).collect()),
            Node::Object(map) => {
                Node::Object(map.iter().map(|(k, v)| (k.clone(), v.deep_copy())).collect())
            }
        };
        Json::from_node(node)
    }

    /// Exchange tag and payload with `other` in constant time.
    ///
    /// This mutates both nodes in place, so every other handle aliasing
    /// either node observes the new variant; containers holding the nodes are
    /// untouched. Swapping a handle with an alias of itself is a no-op.
    pub fn swap(&self, other: &Json) {
        if Rc::ptr_eq(&self.0, &other.0) {
            return;
        }
        self.0.swap(&other.0);
    }
}

impl Default for Json {
    fn default() -> Json {
        Json::null()
    }
}

impl fmt::Debug for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

impl From<bool> for Json {
    fn from(value: bool) -> Json {
        Json::from_node(Node::Bool(value))
    }
}

impl From<i32> for Json {
    fn from(value: i32) -> Json {
        Json::from_node(Node::Int(i64::from(value)))
    }
}

impl From<i64> for Json {
    fn from(value: i64) -> Json {
        Json::from_node(Node::Int(value))
    }
}

impl From<f64> for Json {
    fn from(value: f64) -> Json {
        Json::from_node(Node::Float(value))
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Json {
        Json::from_node(Node::Str(value.to_string()))
    }
}

impl From<String> for Json {
    fn from(value: String) -> Json {
        Json::from_node(Node::Str(value))
    }
}

/// Builds an `Array`, converting every element.
impl<T: Into<Json>> From<Vec<T>> for Json {
    fn from(value: Vec<T>) -> Json {
        Json::from_node(Node::Array(value.into_iter().map(Into::into).collect()))
    }
}

/// Builds an `Object`, converting every value.
impl<T: Into<Json>> From<HashMap<String, T>> for Json {
    fn from(value: HashMap<String, T>) -> Json {
        Json::from_node(Node::Object(
            value.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

/// `None` converts to `Null`; conversion never fails.
impl<T: Into<Json>> From<Option<T>> for Json {
    fn from(value: Option<T>) -> Json {
        match value {
            Some(v) => v.into(),
            None => Json::null(),
        }
    }
}

/// Aliases the handle: the result shares tag and payload with `value`.
impl From<&Json> for Json {
    fn from(value: &Json) -> Json {
        value.clone()
    }
}

/// Recursive conversion from a generic decoded tree.
///
/// Numbers probe `as_i64` first, then `as_f64`; anything unclassifiable
/// degrades to `Null` rather than failing.
impl From<serde_json::Value> for Json {
    fn from(value: serde_json::Value) -> Json {
        match value {
            serde_json::Value::Null => Json::null(),
            serde_json::Value::Bool(b) => Json::from(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Json::from(i)
                } else if let Some(f) = n.as_f64() {
                    Json::from(f)
                } else {
                    Json::null()
                }
            }
            serde_json::Value::String(s) => Json::from(s),
            serde_json::Value::Array(items) => {
                Json::from_node(Node::Array(items.into_iter().map(Json::from).collect()))
            }
            serde_json::Value::Object(map) => Json::from_node(Node::Object(
                map.into_iter().map(|(k, v)| (k, Json::from(v))).collect(),
            )),
        }
    }
}

impl From<&serde_json::Value> for Json {
    fn from(value: &serde_json::Value) -> Json {
        Json::from(value.clone())
    }
}
