//! The interactive query loop: one `YES`/`NO` answer per token.

use std::io::{self, BufRead, Write};

use crate::query::TokenReader;
use crate::radix::owned::Dictionary;
use crate::radix::trie::RadixTrie;

/// Token that ends a session by default.
pub const DEFAULT_SENTINEL: &str = "exit";

/// Anything that can answer exact-match membership queries.
pub trait Membership {
    /// Returns `true` if `key` is a member.
    fn is_member(&self, key: &[u8]) -> bool;
}

impl Membership for Dictionary {
    fn is_member(&self, key: &[u8]) -> bool {
        self.contains(key)
    }
}

impl Membership for RadixTrie<'_> {
    fn is_member(&self, key: &[u8]) -> bool {
        self.contains(key)
    }
}

impl<M: Membership + ?Sized> Membership for &M {
    fn is_member(&self, key: &[u8]) -> bool {
        (**self).is_member(key)
    }
}

/// Counters for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Queries answered, the sentinel excluded.
    pub queries: usize,
    /// Queries answered with `YES`.
    pub hits: usize,
}

impl SessionStats {
    /// Queries answered with `NO`.
    pub fn misses(&self) -> usize {
        self.queries - self.hits
    }
}

/// Answers every token read from `input` with `YES` or `NO` on `output`.
///
/// The session ends when a token equal to `sentinel` is read or the input
/// is exhausted. Each answer is flushed so interactive callers see it
/// immediately.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn run_session<M, R, W>(dict: &M, input: R, mut output: W, sentinel: &str) -> io::Result<SessionStats>
where
    M: Membership + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut tokens = TokenReader::new(input);
    let mut stats = SessionStats::default();
    while let Some(token) = tokens.next_token()? {
        if token == sentinel.as_bytes() {
            tracing::debug!("sentinel received");
            break;
        }
        let found = dict.is_member(token);
        tracing::trace!(query = %String::from_utf8_lossy(token), found, "query");
        let answer: &[u8] = if found { b"YES\n" } else { b"NO\n" };
        output.write_all(answer)?;
        output.flush()?;
        stats.queries += 1;
        stats.hits += found as usize;
    }
    tracing::debug!(queries = stats.queries, hits = stats.hits, "session finished");
    Ok(stats)
}
