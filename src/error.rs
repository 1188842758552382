use std::fmt;

/// Result type alias for interpolation operations
pub type InterpResult<T> = Result<T, InterpError>;

/// Errors that can occur during variable interpolation
#[derive(Debug, Clone)]
pub enum InterpError {
    /// No value is known for a variable name
    UnknownVariable { name: String },

    /// The resolver failed while producing a value
    ResolveError { name: String, message: String },

    /// A value could not be marshalled to text
    MarshalError { message: String },

    /// Input bytes were not valid UTF-8
    InvalidUtf8 { message: String },

    /// Custom error with message
    Custom { message: String },
}

impl InterpError {
    /// Create an unknown variable error
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        InterpError::UnknownVariable { name: name.into() }
    }

    /// Create a resolver failure error
    pub fn resolve(name: impl Into<String>, message: impl Into<String>) -> Self {
        InterpError::ResolveError {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a marshalling error
    pub fn marshal(message: impl Into<String>) -> Self {
        InterpError::MarshalError {
            message: message.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        InterpError::Custom {
            message: message.into(),
        }
    }
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::UnknownVariable { name } => {
                write!(f, "Variable '{}' not found", name)
            }
            InterpError::ResolveError { name, message } => {
                write!(f, "Failed to resolve '{}': {}", name, message)
            }
            InterpError::MarshalError { message } => {
                write!(f, "Failed to marshal value to text: {}", message)
            }
            InterpError::InvalidUtf8 { message } => {
                write!(f, "Input is not valid UTF-8: {}", message)
            }
            InterpError::Custom { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for InterpError {}

impl From<std::str::Utf8Error> for InterpError {
    fn from(err: std::str::Utf8Error) -> Self {
        InterpError::InvalidUtf8 {
            message: err.to_string(),
        }
    }
}
