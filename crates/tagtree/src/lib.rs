//! # Tagtree
//!
//! A small declarative builder for nested markup.
//!
//! Trees are built top-down: every tag constructor creates an element,
//! hands it to a configure closure that attaches its children, and only
//! then appends it to the parent. The finished tree renders to plain
//! nested tags.
//!
//! ## Architecture
//!
//! - **Element**: a named node owning an ordered list of children
//! - **Builder**: `create_root` / `child` and their fallible `try_` forms
//! - **Tags**: fixed-name constructors (`table`, `tr`, `td`)
//! - **Render**: compact or indented serialization
//! - **Outline**: a brace-nested text frontend parsed with `syn`
//!
//! ## Example
//!
//! ```
//! use tagtree::{child, create_root};
//!
//! let table = create_root("table", |table| {
//!     child(table, "tr", |tr| {
//!         child(tr, "td", |_| {});
//!     });
//! });
//!
//! assert_eq!(table.render(), "<table><tr><td></td></tr></table>");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod element;
pub mod error;
pub mod outline;
pub mod render;
pub mod tags;

// Re-export main types
pub use builder::{child, create_root, try_child, try_create_root};
pub use element::Element;
pub use error::{Result, TagTreeError};
pub use outline::{OutlineNode, OutlineOptions};
pub use render::{render, render_with, RenderOptions};
pub use tags::{table, td, tr};

/// Tagtree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
