//! json-dyn - Dynamically typed JSON document trees.
//!
//! A [`Json`] value is a cheap handle onto a tagged-union node: `Clone`
//! aliases the node, containers hold child handles, and every mutation goes
//! through `&self` dict/list-style operations ([`Json::get`], [`Json::set`],
//! [`Json::append`], ...). Equality is recursive, type-strict, and
//! float-tolerant ([`deep_equal`], [`EPSILON`]); [`dumps`] emits canonical
//! sorted-key text and [`loads`] parses text back with defensive input
//! validation.
//!
//! ```
//! use json_dyn::{dumps, loads, Json};
//!
//! let doc = loads(r#"{"user":{"name":"ada"},"tags":[]}"#).unwrap();
//! doc.get("tags").append(Json::from("admin"));
//! doc.get("user").set("active", Json::from(true));
//! assert_eq!(
//!     dumps(&doc),
//!     r#"{"tags":["admin"],"user":{"active":true,"name":"ada"}}"#
//! );
//! ```

mod dumps;
mod equal;
mod error;
mod key;
mod loads;
mod mutate;
mod value;

pub use dumps::dumps;
pub use equal::{deep_equal, EPSILON};
pub use error::LoadError;
pub use key::{KeyOrIndex, KeyOrValue};
pub use loads::{loads, try_loads};
pub use value::{Json, JsonType};
