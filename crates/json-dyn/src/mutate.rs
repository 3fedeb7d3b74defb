//! Dict-style accessors and mutators for object and array nodes.
//!
//! Every operation takes `&self` (handles mutate through interior
//! mutability) and acts only when the receiver variant matches: object
//! operations on objects, array operations on arrays. A mismatch is a silent
//! no-op or a fresh `Null`, never an error and never a panic.

use crate::equal::deep_equal;
use crate::key::{KeyOrIndex, KeyOrValue};
use crate::value::{Json, Node};

impl Json {
    /// Child at `key`: a string key addresses an object, an integer index an
    /// array.
    ///
    /// A hit returns a live handle into the container, so mutating the
    /// result mutates the tree. A missing key, an out-of-range index, or a
    /// receiver of the wrong variant returns a new detached `Null`; check a
    /// type predicate before trusting the result.
    pub fn get(&self, key: impl Into<KeyOrIndex>) -> Json {
        let found = match (&*self.0.borrow(), key.into()) {
            (Node::Object(map), KeyOrIndex::Key(k)) => map.get(&k).cloned(),
            (Node::Array(items), KeyOrIndex::Index(i)) => {
                usize::try_from(i).ok().and_then(|i| items.get(i)).cloned()
            }
            _ => None,
        };
        found.unwrap_or_else(Json::null)
    }

    /// Store `value` at `key`, by handle.
    ///
    /// Objects insert or overwrite. Arrays overwrite only when the index is
    /// in bounds; there is no auto-growth. The stored handle aliases
    /// `value`, it is not a copy. Returns the receiver for chaining.
    pub fn set(&self, key: impl Into<KeyOrIndex>, value: Json) -> &Json {
        match (&mut *self.0.borrow_mut(), key.into()) {
            (Node::Object(map), KeyOrIndex::Key(k)) => {
                map.insert(k, value);
            }
            (Node::Array(items), KeyOrIndex::Index(i)) => {
                if let Some(slot) = usize::try_from(i).ok().and_then(|i| items.get_mut(i)) {
                    *slot = value;
                }
            }
            _ => {}
        }
        self
    }

    /// Insert `value` under `key` only if the key is absent. Objects only.
    pub fn set_default(&self, key: impl Into<String>, value: Json) {
        if let Node::Object(map) = &mut *self.0.borrow_mut() {
            map.entry(key.into()).or_insert(value);
        }
    }

    /// Snapshot of an object's keys, in unspecified order. Empty for any
    /// other variant.
    pub fn keys(&self) -> Vec<String> {
        match &*self.0.borrow() {
            Node::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Snapshot of an object's values, in unspecified order. The elements
    /// are live handles. Empty for any other variant.
    pub fn values(&self) -> Vec<Json> {
        match &*self.0.borrow() {
            Node::Object(map) => map.values().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Membership test: a string probe checks an object for the key, a value
    /// probe scans an array for a structurally equal element. `false` on a
    /// variant mismatch.
    pub fn contains(&self, probe: impl Into<KeyOrValue>) -> bool {
        match probe.into() {
            KeyOrValue::Key(k) => match &*self.0.borrow() {
                Node::Object(map) => map.contains_key(&k),
                _ => false,
            },
            KeyOrValue::Value(v) => match &*self.0.borrow() {
                Node::Array(items) => items.iter().any(|item| deep_equal(item, &v)),
                _ => false,
            },
        }
    }

    /// Empty an object or array in place. No-op on scalars.
    pub fn clear(&self) {
        match &mut *self.0.borrow_mut() {
            Node::Array(items) => items.clear(),
            Node::Object(map) => map.clear(),
            _ => {}
        }
    }

    /// Shallow merge: every key of `other` is set on `self`, aliasing
    /// `other`'s child handles. No-op unless both sides are objects.
    pub fn update(&self, other: &Json) {
        // Snapshot first so updating an object with an alias of itself
        // cannot hold two borrows of one node.
        let entries: Vec<(String, Json)> = match &*other.0.borrow() {
            Node::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            _ => return,
        };
        if let Node::Object(map) = &mut *self.0.borrow_mut() {
            for (k, v) in entries {
                map.insert(k, v);
            }
        }
    }

    /// Remove the child at `key`: objects remove the entry, arrays remove at
    /// the index and shift later elements left. Missing key, out-of-range
    /// index, or variant mismatch is a no-op.
    pub fn pop(&self, key: impl Into<KeyOrIndex>) {
        match (&mut *self.0.borrow_mut(), key.into()) {
            (Node::Object(map), KeyOrIndex::Key(k)) => {
                map.remove(&k);
            }
            (Node::Array(items), KeyOrIndex::Index(i)) => {
                if let Some(i) = usize::try_from(i).ok().filter(|&i| i < items.len()) {
                    items.remove(i);
                }
            }
            _ => {}
        }
    }

    /// Insert `value` before position `index`, shifting later elements
    /// right. Arrays only.
    ///
    /// An `index` at or past the current length is a no-op, not an append;
    /// only [`Json::append`] extends an array.
    pub fn insert(&self, index: usize, value: Json) {
        if let Node::Array(items) = &mut *self.0.borrow_mut() {
            if index < items.len() {
                items.insert(index, value);
            }
        }
    }

    /// Push `value` onto the end of an array, by handle.
    pub fn append(&self, value: Json) {
        if let Node::Array(items) = &mut *self.0.borrow_mut() {
            items.push(value);
        }
    }

    /// Append every element of `other` in order, by handle. No-op unless
    /// both sides are arrays. Extending an array with itself doubles it.
    pub fn extend(&self, other: &Json) {
        // Element snapshot keeps self-extension borrow-safe.
        let incoming = match &*other.0.borrow() {
            Node::Array(items) => items.clone(),
            _ => return,
        };
        if let Node::Array(items) = &mut *self.0.borrow_mut() {
            items.extend(incoming);
        }
    }

    /// Reverse an array in place.
    pub fn reverse(&self) {
        if let Node::Array(items) = &mut *self.0.borrow_mut() {
            items.reverse();
        }
    }

    /// Remove the first element structurally equal to `value`, shifting
    /// later elements left. No-op if absent or the receiver is not an array.
    pub fn remove(&self, value: &Json) {
        if let Some(i) = self.index_of(value) {
            if let Node::Array(items) = &mut *self.0.borrow_mut() {
                if i < items.len() {
                    items.remove(i);
                }
            }
        }
    }

    /// Position of the first element structurally equal to `value`, or
    /// `None` if absent or the receiver is not an array.
    pub fn index_of(&self, value: &Json) -> Option<usize> {
        match &*self.0.borrow() {
            Node::Array(items) => items.iter().position(|item| deep_equal(item, value)),
            _ => None,
        }
    }
}
