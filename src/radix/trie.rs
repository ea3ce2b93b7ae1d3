use std::fmt;

use super::budget::{NodeBudget, TrieOptions};
use super::node::RadixNode;
use super::span::Span;
use super::text::TextBuffer;
use super::walk::{self, InvariantError, TreeDump};
use crate::error::{Result, TrieError};

/// A compressed prefix tree over a borrowed [`TextBuffer`].
///
/// Keys are inserted as spans of the buffer and never copied. The trie
/// borrows the buffer for `'t`, so the buffer is guaranteed to outlive it.
///
/// # Examples
///
/// ```
/// use radixdict::radix::text::TextBuffer;
/// use radixdict::radix::trie::build_trie;
///
/// let text = TextBuffer::from_bytes(b"apple\napp\napricot\n".to_vec());
/// let trie = build_trie(&text, text.word_spans()).unwrap();
///
/// assert!(trie.contains("app"));
/// assert!(trie.contains("apricot"));
/// assert!(!trie.contains("ap"));
/// ```
pub struct RadixTrie<'t> {
    text: &'t TextBuffer,
    root: RadixNode,
    budget: NodeBudget,
}

impl<'t> RadixTrie<'t> {
    /// Creates an empty trie over `text` with no node limit.
    pub fn new(text: &'t TextBuffer) -> Self {
        Self::with_options(text, TrieOptions::default())
    }

    /// Creates an empty trie over `text`.
    pub fn with_options(text: &'t TextBuffer, options: TrieOptions) -> Self {
        RadixTrie {
            text,
            root: RadixNode::root(),
            budget: NodeBudget::new(options),
        }
    }

    /// Inserts the bytes covered by `span` as a key.
    ///
    /// An empty (or inverted) span inserts the empty key.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::SpanOutOfBounds`] if a non-empty span does not
    /// lie within the buffer, and [`TrieError::Allocation`] if a node could
    /// not be allocated. On error the set of stored keys is unchanged.
    pub fn insert_span(&mut self, span: Span) -> Result<()> {
        insert_checked(self.text, &mut self.root, span, &mut self.budget)
    }

    /// Inserts `text[begin..end]` as a key, see [`insert_span`](RadixTrie::insert_span).
    pub fn insert_range(&mut self, begin: usize, end: usize) -> Result<()> {
        self.insert_span(Span::new(begin, end))
    }

    /// Returns `true` if `key` was inserted.
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.root.contains(self.text, key.as_ref())
    }

    /// The buffer every label points into.
    pub fn text(&self) -> &'t TextBuffer {
        self.text
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &RadixNode {
        &self.root
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.budget.live()
    }

    /// Number of distinct keys stored.
    ///
    /// Counts final nodes with a full walk of the tree, so this is O(nodes).
    pub fn len(&self) -> usize {
        walk::key_count(&self.root, self.text)
    }

    /// True if no key has been inserted.
    ///
    /// Every non-root node leads to at least one final node, so a root with
    /// children always holds a key.
    pub fn is_empty(&self) -> bool {
        !self.root.is_final() && self.root.child_count() == 0
    }

    /// Returns every stored key in depth-first order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        walk::keys(&self.root, self.text)
    }

    /// Returns a printable rendering of the tree.
    pub fn dump(&self) -> TreeDump<'_> {
        TreeDump::new(&self.root, self.text)
    }

    /// Verifies the structural invariants of the tree.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        walk::check_invariants(&self.root, self.text)
    }
}

impl fmt::Debug for RadixTrie<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTrie")
            .field("text_len", &self.text.len())
            .field("node_count", &self.node_count())
            .finish()
    }
}

impl Drop for RadixTrie<'_> {
    fn drop(&mut self) {
        tracing::trace!(nodes = self.budget.live(), "releasing trie");
    }
}

/// Inserts `span` below `root` after checking it against the buffer.
pub(crate) fn insert_checked(
    text: &TextBuffer,
    root: &mut RadixNode,
    span: Span,
    budget: &mut NodeBudget,
) -> Result<()> {
    if !span.is_empty() && !span.fits(text.len()) {
        return Err(TrieError::SpanOutOfBounds {
            span,
            len: text.len(),
        });
    }
    root.insert(text, span, budget)
}

/// Builds the root node for every span in `spans`.
///
/// Stops at the first failure; the partial tree is dropped.
pub(crate) fn insert_all(
    text: &TextBuffer,
    spans: impl IntoIterator<Item = Span>,
    options: TrieOptions,
) -> Result<(RadixNode, NodeBudget, usize)> {
    let mut root = RadixNode::root();
    let mut budget = NodeBudget::new(options);
    let mut inserted = 0usize;
    for span in spans {
        insert_checked(text, &mut root, span, &mut budget)?;
        inserted += 1;
    }
    tracing::debug!(words = inserted, nodes = budget.live(), "built radix trie");
    Ok((root, budget, inserted))
}

/// Builds a trie over `text` from an iterator of word spans.
///
/// Spans may come in any order; the stored key set does not depend on it.
///
/// # Errors
///
/// Fails on the first span that cannot be inserted, returning no partial
/// trie.
pub fn build_trie(text: &TextBuffer, spans: impl IntoIterator<Item = Span>) -> Result<RadixTrie<'_>> {
    build_trie_with(text, spans, TrieOptions::default())
}

/// Like [`build_trie`], with explicit [`TrieOptions`].
pub fn build_trie_with(
    text: &TextBuffer,
    spans: impl IntoIterator<Item = Span>,
    options: TrieOptions,
) -> Result<RadixTrie<'_>> {
    let (root, budget, _) = insert_all(text, spans, options)?;
    Ok(RadixTrie { text, root, budget })
}
