//! The JSON document model.
//!
//! [`Value`] is a sum type over the six JSON value kinds. A value of kind
//! array, object or string exclusively owns its payload: cloning a value
//! deep-copies it, [`Value::take`] transfers ownership and leaves `Null`
//! behind, and dropping a value recursively drops everything it owns.
//! Ownership is strictly tree-shaped, so cycles cannot be built through this
//! API.
//!
//! Using a payload accessor on the wrong kind is a contract violation and
//! panics; it is never reported through an error channel.

use alloc::{
    collections::{BTreeMap, btree_map},
    string::String,
    vec::Vec,
};
use core::{fmt, hash::BuildHasher, ops};

use ahash::RandomState;

/// The element storage of a [`Value::Array`].
pub type Array = Vec<Value>;

/// The shared null returned by read-only lookups that miss.
static NULL: Value = Value::Null;

/// The kind of a [`Value`], as reported by [`Value::kind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// `null`
    Null,
    /// `true` or `false`
    Bool,
    /// An integer or floating-point number.
    Number,
    /// A string.
    String,
    /// An ordered sequence of values.
    Array,
    /// A mapping from string keys to values.
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        })
    }
}

/// The numeric payload of a [`Value::Number`].
///
/// A number is always exactly one of the two kinds. Reading it as the other
/// kind converts the value (widening `i64 -> f64`, truncating `f64 -> i64`),
/// it never reinterprets the stored bits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// A signed 64-bit integer.
    Natural(i64),
    /// A double-precision float.
    Real(f64),
}

impl Number {
    /// Returns `true` for the integer kind.
    #[must_use]
    pub fn is_natural(self) -> bool {
        matches!(self, Number::Natural(_))
    }

    /// Returns `true` for the floating-point kind.
    #[must_use]
    pub fn is_real(self) -> bool {
        matches!(self, Number::Real(_))
    }

    /// The value as an integer, truncating a float.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_natural(self) -> i64 {
        match self {
            Number::Natural(n) => n,
            Number::Real(r) => r as i64,
        }
    }

    /// The value as a float, widening an integer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Number::Natural(n) => n as f64,
            Number::Real(r) => r,
        }
    }
}

/// An object member name together with its cached hash.
///
/// The hash is computed once, when the key is built, and reused for every
/// comparison afterwards: keys order by hash first, breaking ties
/// lexicographically, which keeps member iteration deterministic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key {
    // Field order matters: deriving Ord gives hash-first comparison.
    hash: u64,
    text: String,
}

impl Key {
    /// Builds a key, hashing the member name.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let hash = hash_member_name(&text);
        Self { hash, text }
    }

    /// The member name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The cached hash of the member name.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// Fixed seeds keep key order stable across processes.
fn hash_member_name(text: &str) -> u64 {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
    .hash_one(text)
}

/// The member storage of a [`Value::Object`]: an owned mapping from string
/// keys to values, ordered by cached hash with a lexicographic tie-break.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    members: BTreeMap<Key, Value>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Inserts a member, returning the previous value of the name if any.
    ///
    /// Inserting over an existing name overwrites the value in place; the
    /// duplicate key is discarded. Last write wins.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.members.insert(Key::new(name), value)
    }

    /// Looks up a member without creating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(&Key::new(name))
    }

    /// Looks up a member mutably without creating it.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.members.get_mut(&Key::new(name))
    }

    /// Returns the member for `name`, inserting `Null` first if absent.
    pub fn entry(&mut self, name: &str) -> &mut Value {
        self.members.entry(Key::new(name)).or_insert(Value::Null)
    }

    /// Returns `true` if a member with this name exists.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.members.contains_key(&Key::new(name))
    }

    /// Iterates over members in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type IntoIter = btree_map::Iter<'a, Key, Value>;
    type Item = (&'a Key, &'a Value);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A JSON value as defined by [RFC 8259], minus string escape decoding.
///
/// # Examples
///
/// Building a document with the mutable indexing operators:
///
/// ```rust
/// use jsondom::Value;
///
/// let mut doc = Value::Null;
/// doc["name"] = Value::from("jsondom");
/// doc["tags"].push(Value::from(1));
/// doc["tags"].push(Value::from(2));
/// assert_eq!(doc["tags"].len(), 2);
/// ```
///
/// Note that mutable indexing has an observable side effect: a missing
/// member is created as `Null` on first access. Read-only probes must use
/// [`Value::member`] or the `Index` operator on a shared reference, which
/// return the shared null on a miss.
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`. The default.
    #[default]
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number, integer or floating-point.
    Number(Number),
    /// A string. The payload is the raw, undecoded text.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A mapping from string keys to values.
    Object(Object),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` if the value is `Null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The element or member count.
    ///
    /// Defined for arrays, objects and `Null` (which has length zero).
    ///
    /// # Panics
    ///
    /// Panics on any other kind.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Array(elements) => elements.len(),
            Value::Object(object) => object.len(),
            other => panic!("len() on a {} value", other.kind()),
        }
    }

    /// Returns `true` if [`len`](Value::len) is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element, returning a reference to it in place.
    ///
    /// A `Null` value promotes itself to an empty array first.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither `Null` nor an array.
    pub fn push(&mut self, value: Value) -> &mut Value {
        if self.is_null() {
            *self = Value::Array(Array::new());
        }
        match self {
            Value::Array(elements) => {
                let index = elements.len();
                elements.push(value);
                &mut elements[index]
            }
            other => panic!("push() on a {} value", other.kind()),
        }
    }

    /// Inserts an object member. Last write wins on duplicate names.
    ///
    /// A `Null` value promotes itself to an empty object first.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither `Null` nor an object.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        if self.is_null() {
            *self = Value::Object(Object::new());
        }
        match self {
            Value::Object(object) => {
                object.insert(name, value);
            }
            other => panic!("insert() on a {} value", other.kind()),
        }
    }

    /// Looks up an array element, `None` when out of range or not an array.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Looks up an object member without creating it.
    ///
    /// Returns `None` on a miss and for non-object values.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(object) => object.get(name),
            _ => None,
        }
    }

    /// Returns the member for `name`, inserting `Null` first if absent.
    ///
    /// This is the explicit get-or-insert operation backing `IndexMut`.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither `Null` nor an object.
    pub fn entry(&mut self, name: &str) -> &mut Value {
        if self.is_null() {
            *self = Value::Object(Object::new());
        }
        match self {
            Value::Object(object) => object.entry(name),
            other => panic!("entry() on a {} value", other.kind()),
        }
    }

    /// Moves the value out, leaving `Null` behind.
    ///
    /// ```rust
    /// use jsondom::Value;
    ///
    /// let mut v = Value::from("text");
    /// let moved = v.take();
    /// assert!(v.is_null());
    /// assert_eq!(moved.as_str(), "text");
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Resets the value to `Null`, releasing any owned payload.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// The boolean payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            other => panic!("as_bool() on a {} value", other.kind()),
        }
    }

    /// The string payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => panic!("as_str() on a {} value", other.kind()),
        }
    }

    /// The numeric payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is a number.
    #[must_use]
    pub fn as_number(&self) -> Number {
        match self {
            Value::Number(n) => *n,
            other => panic!("as_number() on a {} value", other.kind()),
        }
    }

    /// The number as an integer, truncating a float payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is a number.
    #[must_use]
    pub fn as_natural(&self) -> i64 {
        self.as_number().as_natural()
    }

    /// The number as a float, widening an integer payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is a number.
    #[must_use]
    pub fn as_real(&self) -> f64 {
        self.as_number().as_real()
    }

    /// The array payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is an array.
    #[must_use]
    pub fn as_array(&self) -> &Array {
        match self {
            Value::Array(elements) => elements,
            other => panic!("as_array() on a {} value", other.kind()),
        }
    }

    /// The array payload, mutably.
    ///
    /// # Panics
    ///
    /// Panics unless the value is an array.
    pub fn as_array_mut(&mut self) -> &mut Array {
        match self {
            Value::Array(elements) => elements,
            other => panic!("as_array_mut() on a {} value", other.kind()),
        }
    }

    /// The object payload.
    ///
    /// # Panics
    ///
    /// Panics unless the value is an object.
    #[must_use]
    pub fn as_object(&self) -> &Object {
        match self {
            Value::Object(object) => object,
            other => panic!("as_object() on a {} value", other.kind()),
        }
    }

    /// The object payload, mutably.
    ///
    /// # Panics
    ///
    /// Panics unless the value is an object.
    pub fn as_object_mut(&mut self) -> &mut Object {
        match self {
            Value::Object(object) => object,
            other => panic!("as_object_mut() on a {} value", other.kind()),
        }
    }
}

impl ops::Index<usize> for Value {
    type Output = Value;

    /// Bounds-checked array indexing.
    ///
    /// # Panics
    ///
    /// Panics when the value is not an array or the index is out of range.
    fn index(&self, index: usize) -> &Value {
        let elements = self.as_array();
        let len = elements.len();
        elements
            .get(index)
            .unwrap_or_else(|| panic!("index {index} out of range for array of length {len}"))
    }
}

impl ops::IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        let elements = self.as_array_mut();
        let len = elements.len();
        elements
            .get_mut(index)
            .unwrap_or_else(|| panic!("index {index} out of range for array of length {len}"))
    }
}

impl ops::Index<&str> for Value {
    type Output = Value;

    /// Object member lookup. A miss, or indexing into `Null`, returns the
    /// shared null; it is never a newly created member.
    ///
    /// # Panics
    ///
    /// Panics when the value is neither `Null` nor an object.
    fn index(&self, name: &str) -> &Value {
        match self {
            Value::Null => &NULL,
            Value::Object(object) => object.get(name).unwrap_or(&NULL),
            other => panic!("cannot index a {} value with a member name", other.kind()),
        }
    }
}

impl ops::IndexMut<&str> for Value {
    /// Object member lookup with auto-creation: a `Null` value becomes an
    /// object, and a missing member is inserted as `Null`.
    fn index_mut(&mut self, name: &str) -> &mut Value {
        self.entry(name)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(Number::Natural(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(Number::Natural(v.into()))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::Real(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Value::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Object(v)
    }
}
