// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Byte Sink Cursor
//!
//! A write-only output cursor over any `io::Write` sink. A rejected
//! write drops the sink and transitions the cursor into the failed
//! state, where it compares equal to
//! [`EndOfInput`](rove_core::cursor::EndOfInput); callers detect failure
//! by sentinel comparison, never by a returned error.

use crate::iter::CursorIter;
use rove_core::cursor::{Cursor, EndOfInput, NextCursor, SentinelFor, Tier, WriteCursor};
use std::io::Write;

/// A write-only cursor pushing bytes into a sink.
pub struct ByteSinkCursor<W> {
    writer: Option<W>,
}

impl<W: Write> ByteSinkCursor<W> {
    /// Creates a cursor writing into `writer`.
    #[inline]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Returns `true` once a write has been rejected.
    #[inline]
    pub fn failed(&self) -> bool {
        self.writer.is_none()
    }

    /// Consumes the cursor, returning the sink unless a write failed.
    #[inline]
    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}

impl<W> std::fmt::Debug for ByteSinkCursor<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteSinkCursor")
            .field("failed", &self.writer.is_none())
            .finish()
    }
}

impl<W: Write> Cursor for ByteSinkCursor<W> {
    type Item = u8;
    type Offset = isize;
    const TIER: Tier = Tier::Output;
}

impl<W: Write> WriteCursor for ByteSinkCursor<W> {
    fn write(&mut self, value: u8) {
        if let Some(w) = self.writer.as_mut() {
            if w.write_all(&[value]).is_err() {
                self.writer = None;
            }
        }
    }
}

impl<W: Write> NextCursor for ByteSinkCursor<W> {
    /// The sink has no positions to move between; each write advances
    /// it implicitly.
    #[inline]
    fn next(&mut self) {}
}

impl<W: Write> SentinelFor<ByteSinkCursor<W>> for EndOfInput {
    #[inline]
    fn is_end(&self, cursor: &ByteSinkCursor<W>) -> bool {
        cursor.failed()
    }
}

/// Promotes a byte sink over `writer`.
#[inline]
pub fn byte_sink<W: Write>(writer: W) -> CursorIter<ByteSinkCursor<W>> {
    CursorIter::new(ByteSinkCursor::new(writer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_reach_the_sink() {
        let mut it = byte_sink(Vec::new());
        for b in *b"rove" {
            it.set(b);
            it.bump();
        }
        assert!(!it.at_end(&EndOfInput));
        let sink = it.into_cursor().into_inner().unwrap();
        assert_eq!(sink, b"rove");
    }

    // A sink that accepts a fixed number of bytes, then rejects.
    struct Bounded {
        left: usize,
    }

    impl Write for Bounded {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.left == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "sink full",
                ));
            }
            self.left -= 1;
            Ok(buf.len().min(1))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rejected_write_transitions_to_end_state() {
        let mut it = byte_sink(Bounded { left: 2 });
        it.set(1);
        it.bump();
        assert!(!it.at_end(&EndOfInput));
        it.set(2);
        it.bump();
        it.set(3);
        assert!(it.at_end(&EndOfInput));
        assert!(it.cursor().failed());
        // Further writes are swallowed, the state is stable.
        it.set(4);
        assert!(it.at_end(&EndOfInput));
    }
}
