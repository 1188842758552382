use std::fmt;
use std::sync::LazyLock;

/// Shared standard format: `${name}` with a backslash escape.
static STANDARD: LazyLock<VarFormat> = LazyLock::new(|| VarFormat::new("${", "}", b'\\'));

/// Classification of a single byte offset within a scanned string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Ordinary text byte
    Plain,

    /// Start of a begin delimiter
    Begin,

    /// Start of an end delimiter
    End,

    /// Escape byte followed by ordinary text
    EscapedPlain,

    /// Escape byte followed by a begin delimiter
    EscapedBegin,

    /// Escape byte followed by an end delimiter
    EscapedEnd,
}

impl Category {
    /// Upgrade to the escaped form of this category when `esc` is set
    pub(crate) fn escaped(self, esc: bool) -> Category {
        if !esc {
            return self;
        }

        match self {
            Category::Begin => Category::EscapedBegin,
            Category::End => Category::EscapedEnd,
            _ => Category::EscapedPlain,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Category::Plain => "nrm",
            Category::Begin => "beg",
            Category::End => "end",
            Category::EscapedPlain => "NRM",
            Category::EscapedBegin => "BEG",
            Category::EscapedEnd => "END",
        };
        f.write_str(tag)
    }
}

/// Defines what a variable expression should look like.
///
/// A format is immutable once constructed and may be shared read-only by any
/// number of scans. The escape byte must be ASCII; begin and end tokens must
/// be non-empty and must not be resolvable ambiguously against the escape
/// byte (caller responsibility).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarFormat {
    /// The token that precedes a variable name
    pub begin: String,

    /// The token that follows a variable name
    pub end: String,

    /// The escape byte used to skip one of the above tokens
    pub escape: u8,
}

impl VarFormat {
    /// Create a format from begin/end tokens and an escape byte
    pub fn new(begin: impl Into<String>, end: impl Into<String>, escape: u8) -> Self {
        let begin = begin.into();
        let end = end.into();
        debug_assert!(!begin.is_empty() && !end.is_empty());
        Self { begin, end, escape }
    }

    /// The standard `${name}` format with backslash escape
    pub fn standard() -> &'static VarFormat {
        &STANDARD
    }

    /// Number of bytes a position of the given category consumes
    pub fn width_of(&self, category: Category) -> usize {
        match category {
            Category::Plain => 1,
            Category::Begin => self.begin.len(),
            Category::End => self.end.len(),
            Category::EscapedPlain => 2,
            Category::EscapedBegin => self.begin.len() + 1,
            Category::EscapedEnd => self.end.len() + 1,
        }
    }

    /// Classify the byte offset `pos` within `text`.
    ///
    /// `pos` must be less than `text.len()`. Comparison is byte-wise, so a
    /// position inside a multi-byte character is simply plain text.
    pub fn classify(&self, text: &str, pos: usize) -> Category {
        let bytes = text.as_bytes();

        let mut p = pos;
        let mut esc = false;
        if bytes[p] == self.escape {
            esc = true;
            p += 1;
        }

        let be = p + self.begin.len();
        let ee = p + self.end.len();

        let category = if be <= bytes.len() && bytes[p..be] == *self.begin.as_bytes() {
            Category::Begin
        } else if ee <= bytes.len() && bytes[p..ee] == *self.end.as_bytes() {
            Category::End
        } else {
            Category::Plain
        };

        category.escaped(esc)
    }
}

impl Default for VarFormat {
    fn default() -> Self {
        STANDARD.clone()
    }
}
