use log::trace;

use crate::format::{Category, VarFormat};

/// A variable reference located by a scan.
///
/// Holds the unescaped variable name together with the byte span it occupies
/// in the scanned string, delimiters included. A token is consumed by exactly
/// one replacement and never outlives the string it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    name: String,
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Token<'a> {
    /// The variable name with all escape bytes stripped
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exact string the token was scanned from
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the first begin-delimiter byte
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the last end-delimiter byte
    pub fn end(&self) -> usize {
        self.end
    }

    /// Splice `value` over the token's span in the source string
    pub fn replace(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + value.len());
        out.push_str(&self.source[..self.start]);
        out.push_str(value);
        out.push_str(&self.source[self.end + 1..]);
        out
    }
}

/// Locates the innermost complete variable reference in a string.
///
/// A single left-to-right pass tracks the most recent unmatched begin
/// delimiter and a count of escaped begins still awaiting a matching end.
/// The first end delimiter seen while that count is zero closes against the
/// most recent begin, which makes the reported reference the innermost one
/// relative to any still-open enclosing reference.
pub struct Scanner<'a> {
    format: &'a VarFormat,
    text: &'a str,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `text` using the given format
    pub fn new(format: &'a VarFormat, text: &'a str) -> Self {
        Self { format, text }
    }

    /// Find the first fully closed variable reference, if any.
    ///
    /// Returns `None` for empty input and for input whose references never
    /// close; an unterminated reference is not an error, it is simply
    /// literal text.
    pub fn next_token(&self) -> Option<Token<'a>> {
        let mut i = 0;
        // Escaped begins seen so far that still need a matching end.
        let mut pending = 0usize;
        // Position of the most recent unmatched begin delimiter.
        let mut open: Option<usize> = None;

        while i < self.text.len() {
            let category = self.format.classify(self.text, i);

            trace!("i={i} category={category} open={open:?} pending={pending}");

            match category {
                Category::Begin => {
                    open = Some(i);
                    if pending > 0 {
                        pending -= 1;
                    }
                }
                Category::EscapedBegin => pending += 1,
                Category::End => {
                    if pending == 0 {
                        if let Some(start) = open {
                            return Some(self.token(start, i));
                        }
                    } else {
                        pending -= 1;
                    }
                }
                Category::Plain | Category::EscapedPlain | Category::EscapedEnd => {}
            }

            i += self.format.width_of(category);
        }

        None
    }

    /// Build the token for a reference whose end delimiter starts at `end_at`
    fn token(&self, start: usize, end_at: usize) -> Token<'a> {
        let name_start = start + self.format.width_of(Category::Begin);
        let name = self.text[name_start..end_at].replace(char::from(self.format.escape), "");

        Token {
            name,
            source: self.text,
            start,
            end: end_at + self.format.end.len() - 1,
        }
    }
}
