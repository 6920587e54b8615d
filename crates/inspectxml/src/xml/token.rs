//! Markup tokens produced by the tokenizer

use std::ops::Range;

/// Markup token kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Open,        // <name ...>
    Close,       // </name>
    SelfClosing, // <name .../>
    Comment,     // <!--...-->
    Cdata,       // <![CDATA[...]]>
}

impl TokenKind {
    /// Get token name for diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open tag",
            Self::Close => "close tag",
            Self::SelfClosing => "self-closing tag",
            Self::Comment => "comment",
            Self::Cdata => "CDATA section",
        }
    }
}

/// A recognized markup unit with its span in the source text.
///
/// For tags the span starts just after `<` (after `</` for close tags) and
/// runs up to and including the final `>`. For CDATA sections it covers the
/// interior text only, without the `<![CDATA[` and `]]>` markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub start: usize,
    pub len: usize,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(kind: TokenKind, name: impl Into<String>, start: usize, len: usize) -> Self {
        Self {
            name: name.into(),
            start,
            len,
            kind,
        }
    }

    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    pub const fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Slice of `source` covered by this token
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span()).unwrap_or_default()
    }
}
