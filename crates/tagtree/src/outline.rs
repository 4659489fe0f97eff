//! Outline frontend
//!
//! Parses a brace-nested text outline into an element tree. The text is
//! tokenized by `proc_macro2` and parsed with `syn`, which gives the runtime
//! parser and the `markup!` macro one shared grammar.
//!
//! # Grammar
//!
//! ```text
//! outline := node
//! node    := name body
//! name    := IDENT ( '-' IDENT )*
//! body    := '{' node* '}' | ';'
//! ```
//!
//! Keywords are accepted as tag names, `r#` prefixes are stripped and
//! `//` comments are ignored.
//!
//! # Example
//!
//! ```
//! let table = tagtree::outline::parse("table { tr { td {} td; } }").unwrap();
//! assert_eq!(table.render(), "<table><tr><td></td><td></td></tr></table>");
//! ```

use std::cell::Cell;

use log::debug;
use proc_macro2::{Span, TokenStream, TokenTree};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream, Parser};
use syn::{braced, Ident, Token};

use crate::builder::{child, create_root};
use crate::element::Element;
use crate::error::{Result, TagTreeError};

/// Default nesting limit for parsed outlines
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Outline parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Maximum nesting depth; the root is at depth 1
    pub max_depth: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl OutlineOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

/// A parsed outline node, before conversion into an [`Element`].
#[derive(Debug, Clone)]
pub struct OutlineNode {
    /// Tag name, with hyphenated parts joined
    pub name: String,

    /// Span of the first identifier of the name
    pub span: Span,

    /// Child nodes in source order
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Build the element tree described by this node.
    pub fn into_element(self) -> Element {
        let OutlineNode { name, children, .. } = self;
        create_root(name, |root| attach(root, children))
    }
}

fn attach(parent: &mut Element, nodes: Vec<OutlineNode>) {
    for OutlineNode { name, children, .. } in nodes {
        child(parent, name, |element| attach(element, children));
    }
}

/// Parses with the default depth limit of [`DEFAULT_MAX_DEPTH`] levels;
/// deeper input fails with a "nesting exceeds the limit" error.
impl Parse for OutlineNode {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let exceeded = Cell::new(false);
        let limits = Limits {
            max_depth: DEFAULT_MAX_DEPTH,
            exceeded: &exceeded,
        };
        parse_node(input, 1, &limits)
    }
}

/// Parse an outline into an element tree with default options.
///
/// # Errors
///
/// See [`parse_outline`].
pub fn parse(source: &str) -> Result<Element> {
    parse_with(source, &OutlineOptions::default())
}

/// Parse an outline into an element tree.
///
/// # Errors
///
/// See [`parse_outline`].
pub fn parse_with(source: &str, options: &OutlineOptions) -> Result<Element> {
    parse_outline(source, options).map(OutlineNode::into_element)
}

/// Parse an outline into its node tree.
///
/// # Errors
///
/// Returns `TagTreeError::DepthLimitExceeded` when nesting goes past
/// `options.max_depth`, and `TagTreeError::Parse` for any syntax error,
/// including trailing input after the root node.
pub fn parse_outline(source: &str, options: &OutlineOptions) -> Result<OutlineNode> {
    let tokens: TokenStream = source
        .parse()
        .map_err(|error| TagTreeError::from_syn(&syn::Error::from(error)))?;
    check_depth(&tokens, options.max_depth)?;

    let exceeded = Cell::new(false);
    let limits = Limits {
        max_depth: options.max_depth,
        exceeded: &exceeded,
    };
    let parser = |input: ParseStream| parse_node(input, 1, &limits);

    let node = parser.parse2(tokens).map_err(|error| {
        if exceeded.get() {
            TagTreeError::DepthLimitExceeded {
                limit: options.max_depth,
            }
        } else {
            locate(&error, source)
        }
    })?;
    debug!("parsed outline rooted at <{}>", node.name);
    Ok(node)
}

/// Reject nesting past `max_depth` without recursing.
///
/// A node at depth `n` has its name inside `n - 1` groups, so any token
/// enclosed by `max_depth` or more groups belongs to a node that is too
/// deep. All delimiters count, since `syn` buffers every group recursively.
fn check_depth(tokens: &TokenStream, max_depth: usize) -> Result<()> {
    let mut pending = vec![(tokens.clone(), 0)];
    while let Some((stream, level)) = pending.pop() {
        for token in stream {
            if level >= max_depth {
                return Err(TagTreeError::DepthLimitExceeded { limit: max_depth });
            }
            if let TokenTree::Group(group) = token {
                pending.push((group.stream(), level + 1));
            }
        }
    }
    Ok(())
}

/// Map a `syn` error to a positioned parse error.
///
/// Running out of tokens at the top level is reported against the call
/// site, which carries no position, so it is pinned to the end of the text.
fn locate(error: &syn::Error, source: &str) -> TagTreeError {
    let span = error.span();
    let message = error.to_string();
    if message.starts_with("unexpected end of input") && span.start() == span.end() {
        let (line, column) = end_position(source);
        return TagTreeError::Parse {
            message,
            line,
            column,
        };
    }
    TagTreeError::from_syn(error)
}

/// Line and column (both 1-indexed) just past the last non-blank character.
fn end_position(source: &str) -> (usize, usize) {
    let text = source.trim_end();
    let line = text.matches('\n').count() + 1;
    let last = text.rsplit('\n').next().unwrap_or_default();
    (line, last.chars().count() + 1)
}

struct Limits<'a> {
    max_depth: usize,
    exceeded: &'a Cell<bool>,
}

fn parse_node(input: ParseStream, depth: usize, limits: &Limits) -> syn::Result<OutlineNode> {
    if depth > limits.max_depth {
        limits.exceeded.set(true);
        return Err(input.error(format!(
            "nesting exceeds the limit of {} levels",
            limits.max_depth
        )));
    }

    let first = input.call(Ident::parse_any)?;
    let span = first.span();
    let mut name = first.unraw().to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let part = input.call(Ident::parse_any)?;
        name.push('-');
        name.push_str(&part.unraw().to_string());
    }

    if input.peek(Token![;]) {
        input.parse::<Token![;]>()?;
        return Ok(OutlineNode {
            name,
            span,
            children: Vec::new(),
        });
    }

    let content;
    braced!(content in input);
    let mut children = Vec::new();
    while !content.is_empty() {
        children.push(parse_node(&content, depth + 1, limits)?);
    }

    Ok(OutlineNode {
        name,
        span,
        children,
    })
}
