//! Recursive structural equality with float tolerance.

use crate::value::{Json, Node};

/// Absolute tolerance for `Float` comparison: two floats are equal when
/// their difference lies strictly inside `(-EPSILON, EPSILON)`.
pub const EPSILON: f64 = 1e-5;

/// Performs a deep structural equality check between two values.
///
/// Comparison is type-strict: an `Int` never equals a `Float`, whatever the
/// numeric values. Floats compare with the [`EPSILON`] tolerance, so `NaN`
/// is unequal to everything, itself included. Arrays compare positionally;
/// objects compare by key set, ignoring order.
///
/// # Examples
///
/// ```
/// use json_dyn::{deep_equal, Json};
///
/// let a = Json::from(1.0);
/// assert!(deep_equal(&a, &Json::from(1.000001)));
/// assert!(!deep_equal(&a, &Json::from(1)));
/// ```
pub fn deep_equal(a: &Json, b: &Json) -> bool {
    let a = a.0.borrow();
    let b = b.0.borrow();

    match (&*a, &*b) {
        (Node::Null, Node::Null) => true,
        (Node::Bool(a), Node::Bool(b)) => a == b,
        (Node::Int(a), Node::Int(b)) => a == b,
        (Node::Float(a), Node::Float(b)) => float_equal(*a, *b),
        (Node::Str(a), Node::Str(b)) => a == b,

        (Node::Array(arr_a), Node::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            for i in 0..arr_a.len() {
                if !deep_equal(&arr_a[i], &arr_b[i]) {
                    return false;
                }
            }
            true
        }

        (Node::Object(obj_a), Node::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different types are never equal
        _ => false,
    }
}

fn float_equal(a: f64, b: f64) -> bool {
    let diff = a - b;
    -EPSILON < diff && diff < EPSILON
}

/// Structural equality via [`deep_equal`]. No `Eq` impl: the float tolerance
/// and `NaN` break reflexivity.
impl PartialEq for Json {
    fn eq(&self, other: &Json) -> bool {
        deep_equal(self, other)
    }
}
