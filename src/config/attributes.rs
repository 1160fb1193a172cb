//! Open-ended parameter sets.

use std::collections::BTreeMap;

use crate::config::Value;
use crate::config::write_parameter;

/// A set of named parameters.
///
/// Keys are unique. Parameters are rendered in key order so that the output
/// does not depend on the order in which they were set. An unset parameter
/// is simply absent: setting a parameter to [`None`] removes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, Value>);

impl Attributes {
    /// Creates an empty set of attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns whether a parameter is set.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Sets a parameter, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Sets a parameter when `value` is [`Some`] and removes it otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::Attributes;
    ///
    /// let mut attributes = Attributes::new();
    /// attributes.set_optional("fill_color", Some("red"));
    /// assert_eq!(attributes.to_string(), "fill_color = red\n");
    ///
    /// attributes.set_optional("fill_color", None::<&str>);
    /// assert!(attributes.is_empty());
    /// ```
    pub fn set_optional<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        let key = key.into();

        match value {
            Some(value) => {
                self.0.insert(key, value.into());
            }
            None => {
                self.0.remove(&key);
            }
        }
    }

    /// Removes a parameter, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Gets an iterator over the parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Gets the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in self.iter() {
            write_parameter(f, key, value)?;
        }

        Ok(())
    }
}
