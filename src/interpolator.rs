use crate::error::InterpResult;
use crate::format::VarFormat;
use crate::resolver::Resolver;
use crate::scanner::Scanner;

/// Interpolates variable expressions embedded within a body of text.
///
/// By default variable expressions are of the form `${name}` and use a
/// backslash as an escape character; an alternate format may be supplied
/// with [`Interpolator::with_format`]. For both constructors the caller
/// provides a [`Resolver`] that maps variable names to their values.
///
/// Each call to [`interpolate`](Interpolator::interpolate) finds the
/// innermost remaining variable expression, replaces it with its resolved
/// value, and repeats until no expression remains. Resolved values are free
/// to contain further expressions; a value that re-expands to itself forever
/// is the caller's risk, no guard is applied.
pub struct Interpolator<R> {
    format: VarFormat,
    resolver: R,
}

impl<R: Resolver> Interpolator<R> {
    /// Interpolator for the given resolver using the standard format
    pub fn new(resolver: R) -> Self {
        Self {
            format: VarFormat::standard().clone(),
            resolver,
        }
    }

    /// Interpolator for the given resolver and custom format
    pub fn with_format(resolver: R, format: VarFormat) -> Self {
        Self { format, resolver }
    }

    /// The format this interpolator scans with
    pub fn format(&self) -> &VarFormat {
        &self.format
    }

    /// Repeatedly substitute the innermost variable expression in `input`
    /// until none remains.
    ///
    /// Returns the fully substituted string, or the first error produced by
    /// the resolver or by value stringification; on error no partial result
    /// is returned.
    pub fn interpolate(&self, input: &str) -> InterpResult<String> {
        let mut out = input.to_string();

        loop {
            let replaced = match Scanner::new(&self.format, &out).next_token() {
                None => return Ok(out),
                Some(token) => {
                    let value = self.resolver.resolve(token.name())?;
                    token.replace(&value.into_text()?)
                }
            };

            out = replaced;
        }
    }

    /// Wrapper around [`interpolate`](Interpolator::interpolate) that accepts
    /// and returns byte slices instead of strings.
    ///
    /// Input that is not valid UTF-8 is an error.
    pub fn interpolate_bytes(&self, input: &[u8]) -> InterpResult<Vec<u8>> {
        let text = std::str::from_utf8(input)?;
        Ok(self.interpolate(text)?.into_bytes())
    }
}
