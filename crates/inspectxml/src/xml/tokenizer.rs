//! First pass: scan raw text into a flat list of markup tokens
//!
//! Scanning starts at the first occurrence of `xml` (the prologue marker) and
//! repeatedly jumps to the next `<`. The kind of each tag is decided by the
//! first `>` or `/` found outside a double-quoted attribute value, so values
//! such as `Id="a/b>c"` do not end the tag early. Comments are checked and
//! dropped; they never reach the tree builder.

use tracing::{debug, instrument};

use super::find_from;
use super::token::{Token, TokenKind};
use crate::config::Config;
use crate::error::{Error, Result, SyntaxError};

const PROLOGUE_MARKER: &str = "xml";
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Tokenize a document with the default [`Config`]
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    tokenize_with_config(source, Config::default())
}

/// Tokenize a document, enforcing the size limit of `config`
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with_config(source: &str, config: Config) -> Result<Vec<Token>> {
    if config.exceeds_size(source.len()) {
        return Err(Error::syntax(
            SyntaxError::MaxSizeExceeded {
                max: config.max_size,
            },
            source,
            0,
        ));
    }

    let Some(mut index) = source.find(PROLOGUE_MARKER) else {
        return Err(Error::syntax(SyntaxError::MissingPrologue, source, 0));
    };

    let mut tokens = Vec::new();
    let mut comments = 0usize;
    while let Some(open) = find_from(source, index, "<") {
        let (token, next) = scan_markup(source, open)?;
        match token {
            Some(token) => tokens.push(token),
            None => comments += 1,
        }
        index = next;
    }

    if tokens.is_empty() {
        return Err(Error::syntax(SyntaxError::NoMarkup, source, source.len()));
    }

    debug!(tokens = tokens.len(), comments, "tokenized document");
    Ok(tokens)
}

/// Scan the markup starting at the `<` at `open`.
///
/// Returns the token (`None` for comments) and the offset to resume from.
fn scan_markup(source: &str, open: usize) -> Result<(Option<Token>, usize)> {
    let bytes = source.as_bytes();
    let after = open + 1;

    if bytes.get(after) == Some(&b'!') {
        if bytes.get(after + 1) == Some(&b'[') {
            let token = scan_cdata(source, open)?;
            let next = token.end();
            return Ok((Some(token), next));
        }
        let next = scan_comment(source, open)?;
        return Ok((None, next));
    }

    let Some(found) = first_unquoted(bytes, after, b">/") else {
        return Err(Error::syntax(SyntaxError::UnterminatedTag, source, open));
    };

    let (kind, start, close) = if bytes.get(found) == Some(&b'>') {
        (TokenKind::Open, after, found)
    } else {
        let close = find_from(source, found + 1, ">")
            .ok_or_else(|| Error::syntax(SyntaxError::MissingTagEnd, source, found))?;
        if found == after {
            (TokenKind::Close, after + 1, close)
        } else {
            (TokenKind::SelfClosing, after, close)
        }
    };

    let end = close + 1;
    let name = tag_name(source.get(start..end).unwrap_or_default());
    Ok((Some(Token::new(kind, name, start, end - start)), end))
}

fn scan_cdata(source: &str, open: usize) -> Result<Token> {
    if source.get(open..open + CDATA_OPEN.len()) != Some(CDATA_OPEN) {
        let found: String = source
            .get(open..)
            .unwrap_or_default()
            .chars()
            .take(CDATA_OPEN.len())
            .collect();
        return Err(Error::syntax(
            SyntaxError::MalformedCdataOpen { found },
            source,
            open,
        ));
    }

    let start = open + CDATA_OPEN.len();
    let close = find_from(source, start, CDATA_CLOSE)
        .ok_or_else(|| Error::syntax(SyntaxError::UnterminatedCdata, source, open))?;
    Ok(Token::new(TokenKind::Cdata, "", start, close - start))
}

/// Validate `<!--...-->` and return the offset just past its `>`
fn scan_comment(source: &str, open: usize) -> Result<usize> {
    let bytes = source.as_bytes();
    let close = first_unquoted(bytes, open + 1, b">")
        .ok_or_else(|| Error::syntax(SyntaxError::UnterminatedTag, source, open))?;

    // close >= open + 2 because bytes[open + 1] is '!'
    let dashes = [open + 2, open + 3, close - 1, close - 2];
    if dashes.iter().all(|&i| bytes.get(i) == Some(&b'-')) {
        Ok(close + 1)
    } else {
        Err(Error::syntax(SyntaxError::MalformedComment, source, open))
    }
}

/// First byte in `targets` at or after `from` that is not inside a `"..."` run
fn first_unquoted(bytes: &[u8], from: usize, targets: &[u8]) -> Option<usize> {
    let mut quoted = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if b == b'"' {
            quoted = !quoted;
        } else if !quoted && targets.contains(&b) {
            return Some(i);
        }
    }
    None
}

/// Tag text with `<`, `>` and `/` removed, trimmed, cut before the attributes
fn tag_name(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '/'))
        .collect();
    stripped
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
