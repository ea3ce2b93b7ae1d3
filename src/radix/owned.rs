use std::fmt;
use std::path::Path;

use super::budget::TrieOptions;
use super::node::RadixNode;
use super::text::TextBuffer;
use super::trie::insert_all;
use super::walk::{self, InvariantError, TreeDump};
use crate::error::Result;

/// A self-contained dictionary that owns its text buffer and its trie.
///
/// Unlike [`RadixTrie`](super::trie::RadixTrie), where the caller keeps the
/// buffer alive, `Dictionary` holds both halves, so it can be freely moved,
/// stored and shared between threads. It is immutable once built.
///
/// # Examples
///
/// ```
/// use radixdict::radix::owned::Dictionary;
///
/// let dict = Dictionary::from_words(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
/// assert!(dict.contains("CAKE"));
/// assert!(!dict.contains("AKE"));
/// ```
pub struct Dictionary {
    text: TextBuffer,
    root: RadixNode,
    node_count: usize,
    word_count: usize,
}

impl Dictionary {
    /// Builds a dictionary from every word of an already loaded buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::Allocation`](crate::error::TrieError::Allocation)
    /// if the trie cannot be built; no partial dictionary is returned.
    pub fn from_text(text: TextBuffer) -> Result<Self> {
        Self::from_text_with(text, TrieOptions::default())
    }

    /// Like [`from_text`](Dictionary::from_text), with explicit [`TrieOptions`].
    pub fn from_text_with(text: TextBuffer, options: TrieOptions) -> Result<Self> {
        let (root, budget, word_count) = insert_all(&text, text.word_spans(), options)?;
        Ok(Dictionary {
            node_count: budget.live(),
            text,
            root,
            word_count,
        })
    }

    /// Builds a dictionary from raw file contents, one word per line.
    ///
    /// Bytes outside the printable range separate words.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_text(TextBuffer::from_bytes(bytes))
    }

    /// Builds a dictionary holding exactly `words`.
    ///
    /// Words are stored verbatim, so the empty word is accepted as a key.
    pub fn from_words<W: AsRef<[u8]>>(words: impl IntoIterator<Item = W>) -> Result<Self> {
        let (text, spans) = TextBuffer::from_words(words);
        let (root, budget, word_count) = insert_all(&text, spans, TrieOptions::default())?;
        Ok(Dictionary {
            node_count: budget.live(),
            text,
            root,
            word_count,
        })
    }

    /// Loads a dictionary file, one word per line.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use radixdict::radix::owned::Dictionary;
    ///
    /// let dict = Dictionary::load("dictionary.txt").unwrap();
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, TrieOptions::default())
    }

    /// Like [`load`](Dictionary::load), with explicit [`TrieOptions`].
    pub fn load_with(path: impl AsRef<Path>, options: TrieOptions) -> Result<Self> {
        let path = path.as_ref();
        let dict = Self::from_text_with(TextBuffer::read_file(path)?, options)?;
        tracing::debug!(
            path = %path.display(),
            words = dict.word_count,
            nodes = dict.node_count,
            "loaded dictionary"
        );
        Ok(dict)
    }

    /// Returns `true` if `key` is in the dictionary.
    ///
    /// ```
    /// use radixdict::radix::owned::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["BAKE", "CAKE"]).unwrap();
    /// assert!(dict.contains("CAKE"));
    /// assert!(!dict.contains("FAKE"));
    /// ```
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.root.contains(&self.text, key.as_ref())
    }

    /// The buffer every label points into.
    pub fn text(&self) -> &TextBuffer {
        &self.text
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &RadixNode {
        &self.root
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of words read while building, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns every stored key in depth-first order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        walk::keys(&self.root, &self.text)
    }

    /// Returns a printable rendering of the trie.
    pub fn dump(&self) -> TreeDump<'_> {
        TreeDump::new(&self.root, &self.text)
    }

    /// Verifies the structural invariants of the trie.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        walk::check_invariants(&self.root, &self.text)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count)
            .finish()
    }
}
