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

//! # Token Scanning Cursor
//!
//! A single-pass input cursor that parses whitespace-separated tokens
//! from any buffered reader. The stream adapter of this crate: it shows
//! how a source that physically cannot be revisited maps onto the cursor
//! vocabulary.
//!
//! Failure is a state, not an exception: when the source runs dry, a
//! token fails to parse, or the reader errors, the cursor transitions
//! into the exhausted state — it compares equal to
//! [`EndOfInput`](rove_core::cursor::EndOfInput) and stays there. The
//! cause is retained and queryable via [`TokenCursor::error`].
//!
//! The cursor is deliberately not `Clone` and never implements the
//! forward tier; the type system keeps it out of multi-pass algorithms.
//!
//! ## Usage
//!
//! ```rust
//! use rove_iter::scan::tokens;
//!
//! let input = "12 7\n 1990";
//! let parsed: Vec<u32> = tokens(input.as_bytes()).into_iter().collect();
//! assert_eq!(parsed, [12, 7, 1990]);
//! ```

use crate::iter::CursorIter;
use crate::range::CursorRange;
use rove_core::cursor::{Cursor, DirectCursor, EndOfInput, NextCursor, SentinelFor, Tier};
use std::io::BufRead;
use std::str::FromStr;

/// The cause of a token cursor's transition into the end state, when it
/// was not plain exhaustion.
#[derive(Debug)]
pub enum TokenError {
    /// The underlying reader reported an I/O error.
    Io(std::io::Error),
    /// A token could not be parsed into the target type.
    Parse {
        /// The token that failed to parse.
        token: String,
        /// The name of the target type.
        type_name: &'static str,
    },
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error while scanning tokens: {e}"),
            Self::Parse { token, type_name } => {
                write!(f, "could not parse token '{}' as type {}", token, type_name)
            }
        }
    }
}

impl std::error::Error for TokenError {}

impl From<std::io::Error> for TokenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A single-pass cursor over the `T`-parsed tokens of a reader.
///
/// Construction pulls the first token, so a cursor over an empty source
/// starts out equal to the end sentinel.
pub struct TokenCursor<R, T> {
    reader: R,
    line: String,
    offset: usize,
    current: Option<T>,
    error: Option<TokenError>,
}

impl<R, T> TokenCursor<R, T>
where
    R: BufRead,
    T: FromStr,
{
    /// Creates a cursor over the tokens of `reader` and pulls the first
    /// token.
    pub fn new(reader: R) -> Self {
        let mut cursor = Self {
            reader,
            line: String::new(),
            offset: 0,
            current: None,
            error: None,
        };
        cursor.pull();
        cursor
    }

    /// Returns the cause of the end-state transition, if it was a
    /// failure rather than exhaustion.
    #[inline]
    pub fn error(&self) -> Option<&TokenError> {
        self.error.as_ref()
    }

    /// Returns `true` once the cursor has entered the end state.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    // Scans the next token into `current`; on exhaustion or failure,
    // leaves `current` empty.
    fn pull(&mut self) {
        self.current = None;
        loop {
            let rest = &self.line[self.offset..];
            let trimmed = rest.trim_start();
            self.offset += rest.len() - trimmed.len();
            if self.offset < self.line.len() {
                break;
            }
            self.line.clear();
            self.offset = 0;
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return,
                Ok(_) => continue,
                Err(e) => {
                    self.error = Some(TokenError::Io(e));
                    return;
                }
            }
        }
        let rest = &self.line[self.offset..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..end];
        self.offset += end;
        match token.parse::<T>() {
            Ok(value) => self.current = Some(value),
            Err(_) => {
                self.error = Some(TokenError::Parse {
                    token: token.to_string(),
                    type_name: std::any::type_name::<T>(),
                });
            }
        }
    }
}

impl<R, T> std::fmt::Debug for TokenCursor<R, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCursor")
            .field("current", &self.current)
            .field("failed", &self.error.is_some())
            .finish()
    }
}

impl<R, T> Cursor for TokenCursor<R, T>
where
    R: BufRead,
    T: FromStr,
{
    type Item = T;
    type Offset = isize;
    const TIER: Tier = Tier::Input;
}

impl<R, T> DirectCursor for TokenCursor<R, T>
where
    R: BufRead,
    T: FromStr,
{
    #[inline]
    fn read_ref(&self) -> &T {
        self.current
            .as_ref()
            .expect("called `read` on an exhausted token cursor")
    }
}

impl<R, T> NextCursor for TokenCursor<R, T>
where
    R: BufRead,
    T: FromStr,
{
    fn next(&mut self) {
        if self.error.is_some() {
            // A failed source is never retried; stay in the end state.
            self.current = None;
        } else {
            self.pull();
        }
    }
}

impl<R, T> SentinelFor<TokenCursor<R, T>> for EndOfInput
where
    R: BufRead,
    T: FromStr,
{
    #[inline]
    fn is_end(&self, cursor: &TokenCursor<R, T>) -> bool {
        cursor.is_exhausted()
    }
}

/// Returns the range of `T`-parsed tokens of `reader`, delimited by
/// [`EndOfInput`].
#[inline]
pub fn tokens<T, R>(reader: R) -> CursorRange<TokenCursor<R, T>, EndOfInput>
where
    R: BufRead,
    T: FromStr,
{
    CursorRange::new(CursorIter::new(TokenCursor::new(reader)), EndOfInput)
}
