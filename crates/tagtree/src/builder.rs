//! Tag construction through configure closures
//!
//! Every constructor follows the same sequence:
//!
//! ```text
//! new Element → configure(&mut element) → append to parent → return
//! ```
//!
//! The append happens strictly after `configure` returns normally. A
//! closure that fails (an `Err` from the `try_` forms, or a panic) leaves
//! the parent untouched and the failure reaches the caller unchanged.

use log::trace;

use crate::element::Element;

/// Build a root element named `name`, populated by `configure`.
///
/// # Example
///
/// ```
/// use tagtree::{child, create_root};
///
/// let table = create_root("table", |table| {
///     child(table, "tr", |_| {});
/// });
/// assert_eq!(table.render(), "<table><tr></tr></table>");
/// ```
pub fn create_root<F>(name: impl Into<String>, configure: F) -> Element
where
    F: FnOnce(&mut Element),
{
    let mut root = Element::new(name);
    configure(&mut root);
    trace!("built root <{}>", root.name());
    root
}

/// Fallible form of [`create_root`].
///
/// # Errors
///
/// Returns whatever error `configure` returns, unchanged. No element is
/// produced in that case.
///
/// # Example
///
/// ```
/// use tagtree::{try_child, try_create_root};
///
/// let result: Result<_, String> = try_create_root("table", |table| {
///     try_child(table, "tr", |_| Ok::<(), String>(()))?;
///     try_child(table, "tr", |_| Err("bad row".to_string()))?;
///     Ok(())
/// });
/// assert_eq!(result, Err("bad row".to_string()));
/// ```
pub fn try_create_root<F, E>(name: impl Into<String>, configure: F) -> Result<Element, E>
where
    F: FnOnce(&mut Element) -> Result<(), E>,
{
    let mut root = Element::new(name);
    configure(&mut root)?;
    trace!("built root <{}>", root.name());
    Ok(root)
}

/// Build a child named `name`, populate it with `configure`, then append it
/// to `parent`.
///
/// Siblings appear in the order their `child` calls complete, which for
/// sequential calls is call order. Returns the appended element.
pub fn child<'p, F>(
    parent: &'p mut Element,
    name: impl Into<String>,
    configure: F,
) -> &'p mut Element
where
    F: FnOnce(&mut Element),
{
    let mut element = Element::new(name);
    configure(&mut element);
    trace!("attaching <{}> to <{}>", element.name(), parent.name());
    parent.push(element)
}

/// Fallible form of [`child`].
///
/// # Errors
///
/// Returns whatever error `configure` returns, unchanged. Nothing is
/// appended to `parent` in that case.
pub fn try_child<'p, F, E>(
    parent: &'p mut Element,
    name: impl Into<String>,
    configure: F,
) -> Result<&'p mut Element, E>
where
    F: FnOnce(&mut Element) -> Result<(), E>,
{
    let mut element = Element::new(name);
    configure(&mut element)?;
    trace!("attaching <{}> to <{}>", element.name(), parent.name());
    Ok(parent.push(element))
}
