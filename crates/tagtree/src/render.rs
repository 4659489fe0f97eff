//! Markup serialization
//!
//! ## Format
//!
//! - Element name → `<name>` / `</name>`
//! - Children → nested tags, in insertion order
//! - No attributes, no text, no escaping
//!
//! Compact output inserts no whitespace at all:
//!
//! ```text
//! <table><tr><td></td></tr></table>
//! ```
//!
//! Pretty output puts every element on its own line:
//!
//! ```text
//! <table>
//!   <tr>
//!     <td></td>
//!   </tr>
//! </table>
//! ```

use std::fmt::{self, Write};

use crate::element::Element;

/// Rendering configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level; `None` renders compactly
    pub indent: Option<usize>,
}

impl RenderOptions {
    /// Compact output with no inserted whitespace.
    pub fn compact() -> Self {
        Self::default()
    }

    /// One element per line, indented by `indent` spaces per level.
    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
        }
    }
}

/// Render `element` to compact markup.
///
/// # Example
///
/// ```
/// use tagtree::{render, Element};
///
/// assert_eq!(render(&Element::new("td")), "<td></td>");
/// ```
pub fn render(element: &Element) -> String {
    render_with(element, &RenderOptions::compact())
}

/// Render `element` using `options`.
pub fn render_with(element: &Element, options: &RenderOptions) -> String {
    Rendered { element, options }.to_string()
}

/// An element paired with its rendering options.
struct Rendered<'a> {
    element: &'a Element,
    options: &'a RenderOptions,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self.element, self.options)
    }
}

/// Write `element` to any formatting sink.
pub fn write_element<W: Write>(
    out: &mut W,
    element: &Element,
    options: &RenderOptions,
) -> fmt::Result {
    match options.indent {
        None => write_compact(out, element),
        Some(width) => write_pretty(out, element, width, 0),
    }
}

fn write_compact<W: Write>(out: &mut W, element: &Element) -> fmt::Result {
    write!(out, "<{}>", element.name())?;
    for child in element.children() {
        write_compact(out, child)?;
    }
    write!(out, "</{}>", element.name())
}

fn write_pretty<W: Write>(
    out: &mut W,
    element: &Element,
    width: usize,
    level: usize,
) -> fmt::Result {
    let pad = width * level;
    if element.is_leaf() {
        return writeln!(out, "{:pad$}<{name}></{name}>", "", name = element.name());
    }

    writeln!(out, "{:pad$}<{}>", "", element.name())?;
    for child in element.children() {
        write_pretty(out, child, width, level + 1)?;
    }
    writeln!(out, "{:pad$}</{}>", "", element.name())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(f, self)
    }
}
