use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{InterpError, InterpResult};
use crate::value::Value;

/// Looks up values for interpolated variables.
pub trait Resolver {
    /// Return the value associated with the given variable name.
    ///
    /// Any error returned here is surfaced verbatim by
    /// [`Interpolator::interpolate`](crate::Interpolator::interpolate),
    /// aborting the interpolation with no partial result.
    fn resolve(&self, name: &str) -> InterpResult<Value>;
}

/// Map-backed resolver; unknown names are an error.
impl Resolver for HashMap<String, String> {
    fn resolve(&self, name: &str) -> InterpResult<Value> {
        match self.get(name) {
            Some(value) => Ok(Value::Text(value.clone())),
            None => Err(InterpError::unknown_variable(name)),
        }
    }
}

/// Function-based resolver wrapper
#[derive(Clone)]
pub struct FunctionResolver {
    resolver: Rc<dyn Fn(&str) -> InterpResult<Value>>,
}

impl FunctionResolver {
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn(&str) -> InterpResult<Value> + 'static,
    {
        Self {
            resolver: Rc::new(resolver),
        }
    }
}

impl Resolver for FunctionResolver {
    fn resolve(&self, name: &str) -> InterpResult<Value> {
        (self.resolver)(name)
    }
}

/// Resolves variables from the process environment.
///
/// Unset variables and variables with non-unicode values resolve to an
/// [`InterpError::UnknownVariable`] error.
pub struct EnvResolver;

impl Resolver for EnvResolver {
    fn resolve(&self, name: &str) -> InterpResult<Value> {
        std::env::var(name)
            .map(Value::Text)
            .map_err(|_| InterpError::unknown_variable(name))
    }
}
