//! The shared, immutable text buffer that every trie label points into.

use std::fs;
use std::iter::FusedIterator;
use std::path::Path;

use memchr::memchr;

use super::span::Span;
use crate::error::{Result, TrieError};

/// Byte that separates words once a buffer has been sanitized.
pub const TERMINATOR: u8 = 0;

/// True if `byte` may appear inside a dictionary word or query token.
///
/// This is the printable range `[32, 127]`; note that space is included.
#[inline]
pub fn is_key_byte(byte: u8) -> bool {
    (32..=127).contains(&byte)
}

/// An immutable byte buffer holding the characters of every dictionary word.
///
/// Tries never copy key bytes. Each node stores a [`Span`] into a
/// `TextBuffer`, and a [`RadixTrie`](super::trie::RadixTrie) borrows the
/// buffer for its whole lifetime, so the buffer cannot be dropped or changed
/// while a trie built over it is alive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    data: Box<[u8]>,
}

impl TextBuffer {
    /// Creates a buffer from raw dictionary bytes.
    ///
    /// Every byte outside the printable range is replaced with
    /// [`TERMINATOR`], so line breaks, tabs and control bytes all act as word
    /// separators.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Self {
        for byte in bytes.iter_mut().filter(|b| !is_key_byte(**b)) {
            *byte = TERMINATOR;
        }
        TextBuffer {
            data: bytes.into_boxed_slice(),
        }
    }

    /// Reads a dictionary file fully into memory and sanitizes it like
    /// [`from_bytes`](TextBuffer::from_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::Io`] if the file cannot be read.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| TrieError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read dictionary file");
        Ok(Self::from_bytes(bytes))
    }

    /// Lays out `words` back to back, each followed by a terminator, and
    /// returns the buffer with the span of every word in input order.
    ///
    /// Unlike [`from_bytes`](TextBuffer::from_bytes) the words are stored
    /// verbatim, so an empty word yields an empty span.
    pub fn from_words<W: AsRef<[u8]>>(words: impl IntoIterator<Item = W>) -> (Self, Vec<Span>) {
        let mut data = Vec::new();
        let mut spans = Vec::new();
        for word in words {
            let word = word.as_ref();
            let begin = data.len();
            data.extend_from_slice(word);
            spans.push(Span::new(begin, data.len()));
            data.push(TERMINATOR);
        }
        let text = TextBuffer {
            data: data.into_boxed_slice(),
        };
        (text, spans)
    }

    /// The whole buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The bytes covered by `span`.
    ///
    /// Panics if the span does not fit the buffer; spans reaching the trie
    /// are validated at its public boundary.
    #[inline]
    pub fn slice(&self, span: Span) -> &[u8] {
        &self.data[span.range()]
    }

    /// Returns an iterator over the span of every word in the buffer.
    ///
    /// A word is a maximal run of non-terminator bytes.
    pub fn word_spans(&self) -> WordSpans<'_> {
        WordSpans {
            data: &self.data,
            pos: 0,
        }
    }

    /// Number of words in the buffer.
    pub fn word_count(&self) -> usize {
        self.word_spans().count()
    }
}

/// Iterator over the words of a [`TextBuffer`], see [`TextBuffer::word_spans`].
#[derive(Clone, Debug)]
pub struct WordSpans<'t> {
    data: &'t [u8],
    pos: usize,
}

impl Iterator for WordSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let rest = self.data.get(self.pos..)?;
        let skipped = rest.iter().position(|&b| b != TERMINATOR)?;
        let begin = self.pos + skipped;
        let end = memchr(TERMINATOR, &self.data[begin..]).map_or(self.data.len(), |i| begin + i);
        self.pos = end;
        Some(Span::new(begin, end))
    }
}

impl FusedIterator for WordSpans<'_> {}
