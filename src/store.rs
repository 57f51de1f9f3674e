use crate::errors::Result;
use crate::value::ClassValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// External key/value store holding a component's declared attributes.
///
/// The crate only ever reads the `modifier`, `modifiers` and `class` keys
/// and writes `class` back; any ordered map with these operations works.
/// An absent key is treated as an empty value, never as an error.
pub trait AttributeStore {
    /// Look up a raw attribute value by key.
    fn get(&self, key: &str) -> Option<&ClassValue>;

    /// Whether the store currently holds the given key.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Write (or overwrite) an attribute value.
    fn set(&mut self, key: &str, value: ClassValue);

    /// Remove a key, returning its value if it was present.
    fn remove(&mut self, key: &str) -> Option<ClassValue>;
}

/// Insertion-ordered attribute bag, the crate's stock [`AttributeStore`].
///
/// Serializes transparently as a JSON object, which is the shape template
/// engines hand attribute sets around in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    attributes: IndexMap<String, ClassValue>,
}

impl AttributeBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for test and glue-code ergonomics.
    pub fn with(mut self, key: &str, value: impl Into<ClassValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassValue)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a bag from a JSON object, coercing scalar values.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self {
            attributes: raw
                .into_iter()
                .map(|(key, value)| (key, ClassValue::from(value)))
                .collect(),
        })
    }

    /// Serialize the bag back to a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl AttributeStore for AttributeBag {
    fn get(&self, key: &str) -> Option<&ClassValue> {
        self.attributes.get(key)
    }

    fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    fn set(&mut self, key: &str, value: ClassValue) {
        self.attributes.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<ClassValue> {
        self.attributes.shift_remove(key)
    }
}

impl<K: Into<String>, V: Into<ClassValue>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
