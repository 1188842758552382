//! # varsub
//!
//! A variable interpolation engine with configurable delimiters, escape-aware
//! scanning and pluggable value resolution.
//!
//! Text is scanned for variable expressions of the form `${name}` (the
//! delimiters and escape byte are configurable). On every round the innermost
//! complete expression is located, its name is resolved through a [`Resolver`]
//! and the expression is replaced by the resolved value; the process repeats
//! until no expression remains. Because the innermost expression resolves
//! first, the value of one variable may form part of another variable's name.
//!
//! Delimiters preceded by the escape byte are literal text, so `\${name}`
//! survives interpolation as `${name}`.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use varsub::Interpolator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut vars = HashMap::new();
//! vars.insert("subject".to_string(), "world".to_string());
//!
//! let interp = Interpolator::new(vars);
//! assert_eq!(interp.interpolate("hello, ${subject}!")?, "hello, world!");
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom formats
//!
//! ```rust
//! use std::collections::HashMap;
//! use varsub::{Interpolator, VarFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut vars = HashMap::new();
//! vars.insert("host".to_string(), "example.com".to_string());
//!
//! let interp = Interpolator::with_format(vars, VarFormat::new("%(", ")", b'\\'));
//! assert_eq!(interp.interpolate("https://%(host)/")?, "https://example.com/");
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolvers
//!
//! Any type implementing [`Resolver`] can back an interpolator. The crate
//! ships three: `HashMap<String, String>` for fixed lookup tables,
//! [`FunctionResolver`] for closures, and [`EnvResolver`] for process
//! environment variables. Resolvers return a [`Value`], which stringifies by
//! priority: raw text is used directly, `Display` values are formatted,
//! [`TextMarshal`] values are marshalled (propagating failure) and anything
//! else falls back to `Debug` formatting.

// Module declarations
mod error;
mod format;
mod interpolator;
mod resolver;
mod scanner;
mod value;

// Public API exports
pub use error::{InterpError, InterpResult};
pub use format::{Category, VarFormat};
pub use interpolator::Interpolator;
pub use resolver::{EnvResolver, FunctionResolver, Resolver};
pub use scanner::{Scanner, Token};
pub use value::{TextMarshal, Value};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars() -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("greeting".to_string(), "hello".to_string());
        vars
    }

    #[test]
    fn test_basic_interpolation() {
        let interp = Interpolator::new(vars());
        assert_eq!(interp.interpolate("${greeting}!").unwrap(), "hello!");
    }

    #[test]
    fn test_escaped_reference_is_literal() {
        let interp = Interpolator::new(vars());
        assert_eq!(
            interp.interpolate(r"\${greeting}!").unwrap(),
            r"\${greeting}!"
        );
    }

    #[test]
    fn test_scanner_exported() {
        let token = Scanner::new(VarFormat::standard(), "${greeting}")
            .next_token()
            .unwrap();
        assert_eq!(token.name(), "greeting");
    }
}
