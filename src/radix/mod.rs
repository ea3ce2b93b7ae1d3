/// Node allocation accounting and build options.
pub mod budget;
/// Owned, insertion-ordered child collections.
pub mod children;
/// Compressed trie nodes: insertion, splitting and lookup.
pub mod node;
/// Self-contained dictionary owning its buffer and trie.
pub mod owned;
/// Offset ranges into the shared text buffer.
pub mod span;
/// The shared text buffer and the dictionary loader.
pub mod text;
/// Trie over a borrowed text buffer.
pub mod trie;
/// Depth-first traversal, dumps and invariant checks.
pub mod walk;

pub use budget::TrieOptions;
pub use children::{ChildIter, Children};
pub use node::RadixNode;
pub use owned::Dictionary;
pub use span::Span;
pub use text::TextBuffer;
pub use trie::{build_trie, build_trie_with, RadixTrie};
