//! Fixed-name tag constructors
//!
//! Shorthands for the table vocabulary:
//!
//! ```
//! use tagtree::{table, td, tr};
//!
//! let grid = table(|t| {
//!     tr(t, |row| {
//!         td(row, |_| {});
//!     });
//!     tr(t, |row| {
//!         td(row, |_| {});
//!     });
//! });
//!
//! assert_eq!(
//!     grid.render(),
//!     "<table><tr><td></td></tr><tr><td></td></tr></table>"
//! );
//! ```

use crate::builder::{child, create_root};
use crate::element::Element;

/// Tag name of [`table`]
pub const TABLE: &str = "table";
/// Tag name of [`tr`]
pub const TR: &str = "tr";
/// Tag name of [`td`]
pub const TD: &str = "td";

/// Build a root `table` element.
pub fn table<F>(configure: F) -> Element
where
    F: FnOnce(&mut Element),
{
    create_root(TABLE, configure)
}

/// Append a `tr` row to `parent`.
pub fn tr<F>(parent: &mut Element, configure: F) -> &mut Element
where
    F: FnOnce(&mut Element),
{
    child(parent, TR, configure)
}

/// Append a `td` cell to `parent`.
pub fn td<F>(parent: &mut Element, configure: F) -> &mut Element
where
    F: FnOnce(&mut Element),
{
    child(parent, TD, configure)
}
