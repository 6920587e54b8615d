//! Error types for inspectxml
//!
//! Every failure belongs to one of two categories: [`SyntaxError`] for markup
//! the tokenizer or tree builder cannot make sense of, and [`ValidationError`]
//! for a well-formed tree that does not follow the inspections schema.

use std::fmt;
use thiserror::Error;

/// Position in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }

    /// Resolve a byte offset into a line/column position (both 1-based)
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut end = offset.min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let before = source.get(..end).unwrap_or_default();
        let line = before.matches('\n').count() + 1;
        let col = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
        Self::new(
            offset,
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(col).unwrap_or(u32::MAX),
        )
    }
}

/// Malformed markup detected while tokenizing or building the element tree
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("'xml' expected")]
    MissingPrologue,
    #[error("'<' expected")]
    NoMarkup,
    #[error("'>' or '/' expected")]
    UnterminatedTag,
    #[error("'>' expected")]
    MissingTagEnd,
    #[error("wrongly formatted CDATA open section, {found} instead of <![CDATA[")]
    MalformedCdataOpen { found: String },
    #[error("CDATA open section <![CDATA[ without close section ]]>")]
    UnterminatedCdata,
    #[error("wrongly formatted xml comment")]
    MalformedComment,
    #[error("root element expected")]
    MissingRoot,
    #[error("No close elem </{name}>")]
    MissingClose { name: String },
    #[error("'\"' open expected for attribute {attribute}")]
    AttributeQuoteOpen { attribute: String },
    #[error("'\"' close expected for attribute {attribute}")]
    AttributeQuoteClose { attribute: String },
    #[error("max depth exceeded: {max}")]
    MaxDepthExceeded { max: u16 },
    #[error("max size exceeded: {max}")]
    MaxSizeExceeded { max: usize },
}

/// A well-formed tree that does not match the inspections schema
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected {} tag but xml element name was {found}", .expected.join(" or "))]
    UnexpectedElement {
        found: String,
        expected: Vec<&'static str>,
    },
    #[error("Expected {} tag but xml attribute name was {found}", .expected.join(" or "))]
    UnexpectedAttribute {
        found: String,
        expected: Vec<&'static str>,
    },
    #[error("Expected an integer value for attribute {attribute}, got instead {value}")]
    InvalidInteger { attribute: String, value: String },
    #[error("Expected at most one child in {element}, found {count}")]
    TooManyChildren { element: String, count: usize },
}

/// Main error type for inspectxml
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("syntax error at {pos}: {kind}")]
    Syntax { kind: SyntaxError, pos: Pos },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Create a syntax error located at `offset` within `source`
    pub fn syntax(kind: SyntaxError, source: &str, offset: usize) -> Self {
        Self::Syntax {
            kind,
            pos: Pos::locate(source, offset),
        }
    }

    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub const fn syntax_kind(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax { kind, .. } => Some(kind),
            Self::Validation(_) => None,
        }
    }

    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Syntax { .. } => None,
        }
    }

    /// Source position, for syntax errors
    pub const fn pos(&self) -> Option<Pos> {
        match self {
            Self::Syntax { pos, .. } => Some(*pos),
            Self::Validation(_) => None,
        }
    }
}

/// Result type alias for inspectxml
pub type Result<T> = std::result::Result<T, Error>;
