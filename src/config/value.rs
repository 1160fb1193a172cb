//! Parameter values.

use std::borrow::Cow;

/// The rendering of a true boolean.
const YES: &str = "yes";

/// The rendering of a false boolean.
const NO: &str = "no";

/// The value of a configuration parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean, rendered as `yes` or `no`.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// Free-form text such as a color name or a unit-suffixed length.
    Text(Cow<'static, str>),
}

impl Value {
    /// Creates a text value from a static string.
    pub const fn text(value: &'static str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }

    /// Returns the value as a number, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::Value;
    ///
    /// assert_eq!(Value::from(3).as_f64(), Some(3.0));
    /// assert_eq!(Value::from(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Value::from("red").as_f64(), None);
    /// ```
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns whether the value is numeric.
    pub fn is_number(&self) -> bool {
        self.as_f64().is_some()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "{YES}"),
            Value::Bool(false) => write!(f, "{NO}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(Cow::Owned(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(true).to_string(), "yes");
        assert_eq!(Value::from(false).to_string(), "no");
        assert_eq!(Value::from(10).to_string(), "10");
        assert_eq!(Value::from(0.85).to_string(), "0.85");
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::text("1u").to_string(), "1u");
        assert_eq!(Value::from(String::from("vgrey")).to_string(), "vgrey");
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from(2).as_i64(), Some(2));
        assert_eq!(Value::from(2.5).as_i64(), None);
        assert_eq!(Value::from("out").as_str(), Some("out"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert!(Value::from(2.5).is_number());
        assert!(!Value::from("2.5").is_number());
    }
}
