use std::iter::FusedIterator;
use std::mem;

use super::budget::NodeBudget;
use super::node::RadixNode;
use super::text::TextBuffer;
use crate::error::Result;

/// The children of a [`RadixNode`], each owned exclusively by its parent.
///
/// Children are kept in insertion order. No two children have labels that
/// start with the same byte, which is what makes branch selection by
/// leading byte unambiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Children {
    nodes: Vec<RadixNode>,
}

impl Children {
    /// Creates an empty collection. Does not allocate.
    pub const fn new() -> Self {
        Children { nodes: Vec::new() }
    }

    /// Creates an empty collection with room for exactly one child,
    /// allocating the slot through `budget`.
    pub(crate) fn reserve_one(budget: &NodeBudget) -> Result<Self> {
        let mut nodes = Vec::new();
        budget.reserve(&mut nodes, 1)?;
        Ok(Children { nodes })
    }

    /// Gets the child at the specified index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&RadixNode> {
        self.nodes.get(index)
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over the children in insertion order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            children: self,
            index: 0,
        }
    }

    /// Index of the child whose label starts with `first`, if any.
    pub(crate) fn position_by_first(&self, text: &TextBuffer, first: u8) -> Option<usize> {
        let bytes = text.as_bytes();
        self.nodes
            .iter()
            .position(|child| bytes[child.span().begin] == first)
    }

    /// The child whose label starts with `first`, if any.
    pub(crate) fn find_by_first_mut(
        &mut self,
        text: &TextBuffer,
        first: u8,
    ) -> Option<&mut RadixNode> {
        let bytes = text.as_bytes();
        self.nodes
            .iter_mut()
            .find(|child| bytes[child.span().begin] == first)
    }

    /// The child whose whole label is a prefix of `key`, if any.
    pub(crate) fn find_prefix_of(&self, text: &TextBuffer, key: &[u8]) -> Option<&RadixNode> {
        self.nodes
            .iter()
            .find(|child| key.starts_with(child.label(text)))
    }

    /// Appends `node`, growing the collection through `budget`.
    ///
    /// On failure the collection is left as it was.
    pub(crate) fn try_push(
        &mut self,
        text: &TextBuffer,
        node: RadixNode,
        budget: &NodeBudget,
    ) -> Result<()> {
        debug_assert!(
            node.label(text)
                .first()
                .is_some_and(|&b| self.position_by_first(text, b).is_none()),
            "try_push: first byte already present"
        );
        budget.reserve(&mut self.nodes, 1)?;
        self.nodes.push(node);
        Ok(())
    }

    /// Appends `node` into a slot obtained from [`reserve_one`](Children::reserve_one).
    ///
    /// Never allocates.
    pub(crate) fn push_reserved(&mut self, node: RadixNode) {
        debug_assert!(self.nodes.len() < self.nodes.capacity());
        self.nodes.push(node);
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, node: RadixNode) {
        self.nodes.push(node);
    }

    /// Moves every child out, leaving this collection empty.
    pub(crate) fn take(&mut self) -> Children {
        mem::take(self)
    }
}

impl<'n> IntoIterator for &'n Children {
    type Item = &'n RadixNode;
    type IntoIter = ChildIter<'n>;

    fn into_iter(self) -> ChildIter<'n> {
        self.iter()
    }
}

/// An iterator over the children of a [`RadixNode`].
#[derive(Clone, Debug)]
pub struct ChildIter<'n> {
    children: &'n Children,
    index: usize,
}

impl<'n> Iterator for ChildIter<'n> {
    type Item = &'n RadixNode;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

impl FusedIterator for ChildIter<'_> {}
