//! Selection snapshots.
//!
//! A [`SelectionList`] is an ordered set of element handles. Editors hand one
//! to [`Clipboard::capture`](crate::Clipboard::capture), and paste returns a
//! new one naming the pasted elements.

use indexmap::IndexSet;

use astrolabe_core::identifier::{EdgeId, NodeId};

/// A handle to either kind of diagram element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Node(NodeId),
    Edge(EdgeId),
}

impl From<NodeId> for ElementRef {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<EdgeId> for ElementRef {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

/// Ordered, duplicate-free collection of selected elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
    elements: IndexSet<ElementRef>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element. Returns false if it was already selected.
    pub fn add(&mut self, element: impl Into<ElementRef>) -> bool {
        self.elements.insert(element.into())
    }

    /// Removes an element, keeping the order of the rest.
    pub fn remove(&mut self, element: impl Into<ElementRef>) -> bool {
        self.elements.shift_remove(&element.into())
    }

    pub fn contains(&self, element: impl Into<ElementRef>) -> bool {
        self.elements.contains(&element.into())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.contains(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The most recently added element.
    pub fn last(&self) -> Option<ElementRef> {
        self.elements.last().copied()
    }

    /// Elements in selection order.
    pub fn iter(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.elements.iter().copied()
    }

    /// Selected nodes in selection order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter_map(|element| match element {
            ElementRef::Node(id) => Some(id),
            ElementRef::Edge(_) => None,
        })
    }

    /// Selected edges in selection order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.iter().filter_map(|element| match element {
            ElementRef::Edge(id) => Some(id),
            ElementRef::Node(_) => None,
        })
    }
}

impl<T: Into<ElementRef>> FromIterator<T> for SelectionList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<ElementRef>> Extend<T> for SelectionList {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a ElementRef;
    type IntoIter = indexmap::set::Iter<'a, ElementRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
