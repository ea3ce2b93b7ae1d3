//! # radixdict
//!
//! Exact-match dictionary lookups over a compressed prefix tree
//! ([radix trie](https://en.wikipedia.org/wiki/Radix_tree)).
//!
//! Chains of single-child nodes are collapsed into one edge labelled with a
//! substring. Labels are never copied: every node stores a [`Span`](radix::Span)
//! of offsets into one shared, immutable [`TextBuffer`](radix::TextBuffer)
//! that holds the whole dictionary.
//!
//! ## Features
//!
//! - **Zero-copy labels**: nodes hold `(begin, end)` offsets into the buffer
//! - **Transactional splits**: a failed allocation never leaves a half-split edge
//! - **Bounded builds**: an optional node limit via [`TrieOptions`](radix::TrieOptions)
//! - **Thread-safe reads**: a built trie is immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! The simplest way to build a dictionary is with
//! [`Dictionary`](radix::owned::Dictionary), which owns its buffer:
//!
//! ```
//! use radixdict::radix::owned::Dictionary;
//!
//! let dict = Dictionary::from_bytes(b"apple\napp\napricot\n".to_vec()).unwrap();
//! assert!(dict.contains("app"));
//! assert!(dict.contains("apricot"));
//! assert!(!dict.contains("ap"));
//! ```
//!
//! For explicit control over the buffer, borrow it into a
//! [`RadixTrie`](radix::RadixTrie):
//!
//! ```
//! use radixdict::radix::{RadixTrie, TextBuffer};
//!
//! let text = TextBuffer::from_bytes(b"carcat".to_vec());
//! let mut trie = RadixTrie::new(&text);
//! trie.insert_range(0, 3).unwrap();
//! trie.insert_range(3, 6).unwrap();
//!
//! assert!(trie.contains("cat"));
//! assert!(!trie.contains("ca"));
//! ```

#![warn(missing_docs)]

/// Error types.
pub mod error;
/// Query token input.
pub mod query;
/// Compressed trie: buffer, nodes, builder and traversal.
pub mod radix;
/// Query loop answering `YES`/`NO` per token.
pub mod session;

pub use error::{Result, TrieError};
pub use radix::{Dictionary, RadixNode, RadixTrie, Span, TextBuffer, TrieOptions};
pub use session::{run_session, Membership, SessionStats};

#[cfg(test)]
mod proptests;
