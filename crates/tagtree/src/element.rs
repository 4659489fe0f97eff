//! The element tree

use serde::{Deserialize, Serialize};

/// A named markup node owning an ordered list of children.
///
/// Children are only ever attached once fully built, so every element
/// reachable from a root is complete. Each element exclusively owns its
/// children: the tree has no sharing and no cycles.
///
/// # Example
///
/// ```
/// use tagtree::Element;
///
/// let mut row = Element::new("tr");
/// row.child("td", |_| {});
/// row.child("td", |_| {});
///
/// assert_eq!(row.name(), "tr");
/// assert_eq!(row.children().len(), 2);
/// assert_eq!(row.render(), "<tr><td></td><td></td></tr>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    #[serde(default)]
    children: Vec<Element>,
}

// An element always counts itself, so it is never empty
#[allow(clippy::len_without_is_empty)]
impl Element {
    /// Create an element with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// The tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Whether this element has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the tree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((element, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(element.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Total number of elements in the tree, this one included.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(element) = pending.pop() {
            count += 1;
            pending.extend(element.children.iter());
        }
        count
    }

    /// Append an already built element and return a handle to it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Build a child named `name` with `configure`, then append it.
    ///
    /// See [`crate::builder::child`].
    pub fn child<F>(&mut self, name: impl Into<String>, configure: F) -> &mut Element
    where
        F: FnOnce(&mut Element),
    {
        crate::builder::child(self, name, configure)
    }

    /// Fallible form of [`Element::child`].
    ///
    /// See [`crate::builder::try_child`].
    pub fn try_child<F, E>(
        &mut self,
        name: impl Into<String>,
        configure: F,
    ) -> std::result::Result<&mut Element, E>
    where
        F: FnOnce(&mut Element) -> std::result::Result<(), E>,
    {
        crate::builder::try_child(self, name, configure)
    }

    /// Render to compact markup.
    pub fn render(&self) -> String {
        crate::render::render(self)
    }
}
