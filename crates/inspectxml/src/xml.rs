//! XML front end for inspection exports
//!
//! Only the markup subset the exporting tool writes is supported: open,
//! close and self-closing tags with double-quoted attributes, text content,
//! CDATA sections and comments.

pub mod model;
pub mod text;
pub mod token;
pub mod tokenizer;
pub mod tree;

pub use model::{Attribute, Element};
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, tokenize_with_config};
pub use tree::{build_siblings, build_siblings_with_config, build_tree, build_tree_with_config};

use tracing::instrument;

use crate::config::Config;
use crate::error::Result;

/// Parse a document into its root element
pub fn parse(source: &str) -> Result<Element> {
    parse_with_config(source, Config::default())
}

/// Parse a document into its root element with custom limits
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse_with_config(source: &str, config: Config) -> Result<Element> {
    let tokens = tokenize_with_config(source, config)?;
    build_tree_with_config(&tokens, source, config)
}

/// Byte offset of `needle` in `haystack` at or after `from`
pub(crate) fn find_from(haystack: &str, from: usize, needle: &str) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|i| i + from)
}
