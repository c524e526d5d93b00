//! Caller-supplied arguments for compiled operations.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PreconditionError;

/// An insertion-ordered map of argument names to JSON values.
///
/// A `null` value counts as absent. Keys the operation does not declare are
/// ignored, except for body-carrying operations with no payload list, which
/// send every leftover key in the order it was inserted.
///
/// # Example
///
/// ```rust
/// use pact_api::rest::RequestArguments;
/// use serde_json::json;
///
/// let args = RequestArguments::new()
///     .with("id", 7)
///     .with("state", "active")
///     .with("note", json!(null));
///
/// assert_eq!(args.value("id"), Some(&json!(7)));
/// assert_eq!(args.value("note"), None);
/// assert!(args.get("note").is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestArguments {
    entries: Vec<(String, Value)>,
}

impl RequestArguments {
    /// Creates an empty argument set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds arguments from any value that serializes to a JSON object.
    ///
    /// Field order follows serialization order.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::InvalidArgument`] if `value` fails to
    /// serialize or does not serialize to an object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, PreconditionError> {
        let value = serde_json::to_value(value).map_err(|e| PreconditionError::InvalidArgument {
            operation: "arguments".to_string(),
            message: e.to_string(),
        })?;
        Self::try_from(value)
    }

    /// Adds an argument, returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets an argument. An existing key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the raw value for `name`, `null` included.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the value for `name` unless it is missing or `null`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).filter(|value| !value.is_null())
    }

    /// Returns `true` if `name` is present with a non-null value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Iterates over all arguments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of arguments, `null` values included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Value> for RequestArguments {
    type Error = PreconditionError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(PreconditionError::InvalidArgument {
                operation: "arguments".to_string(),
                message: format!("Arguments must be a JSON object. You passed {other}."),
            }),
        }
    }
}

impl From<Map<String, Value>> for RequestArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}
