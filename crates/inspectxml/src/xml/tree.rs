//! Second pass: rebuild the element tree from the token list
//!
//! An open tag is paired with the nearest later close tag of the same name,
//! searched in document order without tracking depth. Markup like
//! `<A><A></A></A>` therefore pairs the outer `<A>` with the inner `</A>`.
//! Inspection exports never nest an element inside one of the same name, and
//! documents accepted today must keep parsing the same way, so the pairing is
//! not stack based.

use tracing::{debug, trace};

use super::find_from;
use super::model::{Attribute, Element};
use super::text::normalize_content;
use super::token::{Token, TokenKind};
use crate::config::Config;
use crate::error::{Error, Result, SyntaxError};

/// Build the root element from a token list with the default [`Config`]
pub fn build_tree(tokens: &[Token], source: &str) -> Result<Element> {
    build_tree_with_config(tokens, source, Config::default())
}

/// Build the root element, enforcing the depth limit of `config`
pub fn build_tree_with_config(tokens: &[Token], source: &str, config: Config) -> Result<Element> {
    let builder = Builder {
        tokens,
        source,
        config,
    };
    let (roots, _) = builder.siblings(0, tokens.len(), 1)?;
    debug!(roots = roots.len(), "built element tree");
    roots
        .into_iter()
        .next()
        .ok_or_else(|| Error::syntax(SyntaxError::MissingRoot, source, 0))
}

/// Build the run of sibling elements starting at token `start`.
///
/// Returns the elements and the index of the token that ended the run
/// (a close tag, or the end of the list).
pub fn build_siblings(tokens: &[Token], source: &str, start: usize) -> Result<(Vec<Element>, usize)> {
    build_siblings_with_config(tokens, source, start, Config::default())
}

/// Build the run of sibling elements starting at token `start`, enforcing
/// the depth limit of `config`
pub fn build_siblings_with_config(
    tokens: &[Token],
    source: &str,
    start: usize,
    config: Config,
) -> Result<(Vec<Element>, usize)> {
    let builder = Builder {
        tokens,
        source,
        config,
    };
    builder.siblings(start, tokens.len(), 1)
}

struct Builder<'a> {
    tokens: &'a [Token],
    source: &'a str,
    config: Config,
}

impl Builder<'_> {
    fn siblings(&self, start: usize, end: usize, depth: u16) -> Result<(Vec<Element>, usize)> {
        let mut elements = Vec::new();
        let mut index = start;

        while index < end {
            let Some(token) = self.tokens.get(index) else {
                break;
            };
            match token.kind {
                TokenKind::Close => break,
                TokenKind::SelfClosing => {
                    self.check_depth(token, depth)?;
                    elements.push(Element {
                        name: token.name.clone(),
                        content: None,
                        attributes: parse_attributes(token, self.source)?,
                        children: Vec::new(),
                    });
                    index += 1;
                }
                TokenKind::Open => {
                    let (element, next) = self.element(index, token, depth)?;
                    elements.push(element);
                    index = next;
                }
                TokenKind::Cdata | TokenKind::Comment => {
                    trace!(offset = token.start, "skipping stray {}", token.kind.name());
                    index += 1;
                }
            }
        }

        Ok((elements, index))
    }

    fn element(&self, index: usize, open: &Token, depth: u16) -> Result<(Element, usize)> {
        self.check_depth(open, depth)?;

        let Some((close_index, close)) = self
            .tokens
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, t)| t.kind == TokenKind::Close && t.name == open.name)
        else {
            return Err(Error::syntax(
                SyntaxError::MissingClose {
                    name: open.name.clone(),
                },
                self.source,
                open.start,
            ));
        };

        let attributes = parse_attributes(open, self.source)?;
        let (content, children) = match self.tokens.get(index + 1) {
            _ if close_index == index + 1 => (Some(self.text_between(open, close)), Vec::new()),
            Some(cdata) if close_index == index + 2 && cdata.kind == TokenKind::Cdata => {
                (Some(cdata.text(self.source).to_string()), Vec::new())
            }
            _ => {
                let (children, _) =
                    self.siblings(index + 1, close_index, depth.saturating_add(1))?;
                (None, children)
            }
        };

        let element = Element {
            name: open.name.clone(),
            content,
            attributes,
            children,
        };
        Ok((element, close_index + 1))
    }

    /// Normalized text from the end of `open` up to the `<` of `close`
    fn text_between(&self, open: &Token, close: &Token) -> String {
        let end = self
            .source
            .get(..close.start)
            .and_then(|s| s.rfind('<'))
            .unwrap_or(close.start);
        self.source
            .get(open.end()..end)
            .map(normalize_content)
            .unwrap_or_default()
    }

    fn check_depth(&self, token: &Token, depth: u16) -> Result<()> {
        if self.config.exceeds_depth(depth) {
            return Err(Error::syntax(
                SyntaxError::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                self.source,
                token.start,
            ));
        }
        Ok(())
    }
}

/// Parse `name="value"` pairs from the raw span of an open or self-closing tag.
///
/// Each round finds the next `=`, then the next `"` (value start) and the
/// `"` after it (value end). The name is the trimmed text between the end of
/// the previous value and the `=`. Values are taken verbatim.
pub fn parse_attributes(token: &Token, source: &str) -> Result<Vec<Attribute>> {
    let raw = token.text(source);
    let raw = raw.strip_suffix('>').unwrap_or(raw);
    let body = raw
        .trim_start()
        .strip_prefix(token.name.as_str())
        .unwrap_or(raw);
    let base = token.start + (raw.len() - body.len());

    let mut attributes = Vec::new();
    let mut cursor = 0;
    while let Some(eq) = find_from(body, cursor, "=") {
        let name = body.get(cursor..eq).unwrap_or_default().trim().to_string();

        let Some(quote_open) = find_from(body, eq, "\"") else {
            return Err(Error::syntax(
                SyntaxError::AttributeQuoteOpen { attribute: name },
                source,
                base + eq,
            ));
        };
        let value_start = quote_open + 1;
        let Some(quote_close) = find_from(body, value_start, "\"") else {
            return Err(Error::syntax(
                SyntaxError::AttributeQuoteClose { attribute: name },
                source,
                base + quote_open,
            ));
        };

        let value = body.get(value_start..quote_close).unwrap_or_default();
        attributes.push(Attribute::new(name, value));
        cursor = quote_close + 1;
    }

    Ok(attributes)
}
