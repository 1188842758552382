use std::fmt;

use crate::error::InterpResult;

/// Marshal-to-text capability for resolver values
pub trait TextMarshal {
    /// Produce the textual form of the value, or fail.
    ///
    /// A failure here aborts the interpolation that requested it.
    fn marshal_text(&self) -> InterpResult<String>;
}

/// A value produced by a [`Resolver`](crate::Resolver).
///
/// Stringification follows a fixed priority: raw text is used directly,
/// [`Display`](fmt::Display) values are formatted, [`TextMarshal`] values are
/// marshalled (propagating failure), and anything else falls back to `Debug`
/// formatting.
pub enum Value {
    /// Raw text, used as-is
    Text(String),

    /// A value with a textual representation
    Display(Box<dyn fmt::Display>),

    /// A value marshalled to text, possibly failing
    Marshal(Box<dyn TextMarshal>),

    /// Any other value, rendered with `Debug` formatting
    Other(Box<dyn fmt::Debug>),
}

impl Value {
    /// Wrap a value that has a textual representation
    pub fn display(value: impl fmt::Display + 'static) -> Self {
        Value::Display(Box::new(value))
    }

    /// Wrap a value that marshals itself to text
    pub fn marshal(value: impl TextMarshal + 'static) -> Self {
        Value::Marshal(Box::new(value))
    }

    /// Wrap any other value, rendered with `Debug` formatting
    pub fn other(value: impl fmt::Debug + 'static) -> Self {
        Value::Other(Box::new(value))
    }

    /// Convert the value into replacement text
    pub fn into_text(self) -> InterpResult<String> {
        match self {
            Value::Text(text) => Ok(text),
            Value::Display(value) => Ok(value.to_string()),
            Value::Marshal(value) => value.marshal_text(),
            Value::Other(value) => Ok(format!("{:?}", value)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Display(value) => write!(f, "Display({})", value),
            Value::Marshal(_) => f.write_str("Marshal(..)"),
            Value::Other(value) => write!(f, "Other({:?})", value),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::display(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::display(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::display(value)
    }
}
