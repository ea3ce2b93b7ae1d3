//! Reading query tokens from a byte stream.

use std::io::{self, BufRead, ErrorKind};

use smallvec::SmallVec;

use crate::radix::text::is_key_byte;

/// Splits a byte stream into query tokens.
///
/// A token is a maximal run of printable bytes (see
/// [`is_key_byte`]); everything else separates tokens. Since space is
/// printable, a token from line-oriented input is a whole line.
pub struct TokenReader<R> {
    reader: R,
    token: SmallVec<[u8; 64]>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            token: SmallVec::new(),
        }
    }

    /// Reads the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted. A token cut short by
    /// end of input is still returned.
    pub fn next_token(&mut self) -> io::Result<Option<&[u8]>> {
        self.token.clear();
        if !self.skip_separators()? {
            return Ok(None);
        }
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            match buf.iter().position(|&b| !is_key_byte(b)) {
                Some(end) => {
                    self.token.extend_from_slice(&buf[..end]);
                    self.reader.consume(end + 1);
                    break;
                }
                None => {
                    let len = buf.len();
                    self.token.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
        Ok(Some(&self.token[..]))
    }

    /// Consumes separator bytes. Returns `false` if the input ended first.
    fn skip_separators(&mut self) -> io::Result<bool> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(false);
            }
            match buf.iter().position(|&b| is_key_byte(b)) {
                Some(start) => {
                    self.reader.consume(start);
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}
