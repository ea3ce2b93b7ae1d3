//! Error types for building and loading radix tries.

use std::path::PathBuf;

use thiserror::Error;

use crate::radix::span::Span;

/// Errors that can occur while building a trie or loading a dictionary.
///
/// Queries never fail; an absent key is simply reported as `false`.
#[derive(Debug, Error)]
pub enum TrieError {
    /// A node or child slot could not be allocated.
    ///
    /// Raised either by the allocator itself or when the configured node
    /// limit is reached. `nodes` is the number of nodes live at the time.
    #[error("failed to allocate trie node ({nodes} nodes live)")]
    Allocation {
        /// Nodes already allocated when the failure happened.
        nodes: usize,
    },

    /// A span handed to the trie does not lie within the text buffer.
    #[error("span {span} is out of bounds for a text buffer of {len} bytes")]
    SpanOutOfBounds {
        /// The offending span.
        span: Span,
        /// Length of the text buffer.
        len: usize,
    },

    /// The dictionary file could not be read.
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        /// Path of the dictionary file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
