use super::budget::NodeBudget;
use super::children::{ChildIter, Children};
use super::span::Span;
use super::text::TextBuffer;
use crate::error::Result;

/// A node in a compressed prefix tree.
///
/// Each node labels the edge from its parent with a [`Span`] of the shared
/// [`TextBuffer`]. The root carries the empty span and no meaning of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadixNode {
    span: Span,
    is_final: bool,
    children: Children,
}

impl RadixNode {
    /// Creates a node labelled `span` with no children.
    ///
    /// # Arguments
    ///
    /// * `span` - The edge label, as offsets into the text buffer
    /// * `is_final` - Whether the path ending at this node spells a key
    pub const fn new(span: Span, is_final: bool) -> Self {
        RadixNode {
            span,
            is_final,
            children: Children::new(),
        }
    }

    /// Creates an empty, non-final root node.
    pub const fn root() -> Self {
        RadixNode::new(Span::EMPTY, false)
    }

    /// The edge label as offsets into the text buffer.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The edge label bytes.
    #[inline]
    pub fn label<'t>(&self, text: &'t TextBuffer) -> &'t [u8] {
        text.slice(self.span)
    }

    /// True if the path from the root to this node spells an inserted key.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        self.children.iter()
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(RadixNode::node_count).sum::<usize>()
    }

    /// Follows `key` down from this node, consuming one whole edge label at
    /// a time, and returns the node where the key ends.
    ///
    /// Returns `None` if the key runs off the tree or ends in the middle of
    /// an edge label.
    pub fn descend<'n>(&'n self, text: &TextBuffer, key: &[u8]) -> Option<&'n RadixNode> {
        let mut node = self;
        let mut remaining = key;
        while !remaining.is_empty() {
            node = node.children.find_prefix_of(text, remaining)?;
            remaining = &remaining[node.span.len()..];
        }
        Some(node)
    }

    /// Returns true if `key` spells an inserted key below this node.
    #[inline]
    pub fn contains(&self, text: &TextBuffer, key: &[u8]) -> bool {
        self.descend(text, key).is_some_and(RadixNode::is_final)
    }

    /// Inserts `text[span]` as a complete key below this node.
    ///
    /// An empty span marks this node itself as final, which is also what
    /// makes inserting an existing key a no-op.
    pub(crate) fn insert(
        &mut self,
        text: &TextBuffer,
        span: Span,
        budget: &mut NodeBudget,
    ) -> Result<()> {
        if span.is_empty() {
            self.is_final = true;
            return Ok(());
        }

        let first = text.as_bytes()[span.begin];
        if let Some(matching) = self.children.find_by_first_mut(text, first) {
            return matching.branch_insert(text, span, budget);
        }

        budget.check()?;
        self.children
            .try_push(text, RadixNode::new(span, true), budget)?;
        budget.commit();
        Ok(())
    }

    /// Appends `child` without checking the sibling invariant.
    #[cfg(test)]
    pub(crate) fn push_child_unchecked(&mut self, child: RadixNode) {
        self.children.push_unchecked(child);
    }

    /// Inserts `span` below this node, whose label starts with the same byte.
    fn branch_insert(
        &mut self,
        text: &TextBuffer,
        span: Span,
        budget: &mut NodeBudget,
    ) -> Result<()> {
        let common = common_prefix_len(text, self.span, span);
        if common < self.span.len() {
            self.split(common, budget)?;
        }
        self.insert(text, span.skip(common), budget)
    }

    /// Splits this node's label after `offset` bytes.
    ///
    /// The tail of the label moves to a new middle node that takes over this
    /// node's finality and children; this node keeps the head, stops being
    /// final and gets the middle node as its only child. The replacement
    /// child slot is allocated before anything is moved, so on failure the
    /// node is unchanged.
    fn split(&mut self, offset: usize, budget: &mut NodeBudget) -> Result<()> {
        debug_assert!(0 < offset && offset < self.span.len());
        budget.check()?;
        let mut replacement = Children::reserve_one(budget)?;

        let middle = RadixNode {
            span: self.span.skip(offset),
            is_final: self.is_final,
            children: self.children.take(),
        };
        replacement.push_reserved(middle);
        self.span = self.span.take(offset);
        self.is_final = false;
        self.children = replacement;
        budget.commit();

        tracing::trace!(head = %self.span, nodes = budget.live(), "split edge");
        Ok(())
    }
}

/// Length of the common prefix of two labels that share their first byte.
fn common_prefix_len(text: &TextBuffer, a: Span, b: Span) -> usize {
    let bound = a.len().min(b.len());
    let a = &text.slice(a)[1..bound];
    let b = &text.slice(b)[1..bound];
    1 + a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
