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

//! # Tagged Results
//!
//! Copying algorithms finish with two positions worth returning: where
//! the input stopped and where the output stopped. A bare tuple makes
//! call sites guess which is which; `InOut` names the halves.

/// A labeled pair of an input position and an output position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InOut<I, O> {
    /// Where the input range was left.
    pub input: I,
    /// Where the output was left.
    pub output: O,
}

impl<I, O> InOut<I, O> {
    /// Pairs an input position with an output position.
    #[inline]
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the pair, returning `(input, output)`.
    #[inline]
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

impl<I, O> From<(I, O)> for InOut<I, O> {
    #[inline]
    fn from((input, output): (I, O)) -> Self {
        Self { input, output }
    }
}

impl<I, O> From<InOut<I, O>> for (I, O) {
    #[inline]
    fn from(pair: InOut<I, O>) -> Self {
        (pair.input, pair.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_access() {
        let pair = InOut::new(42, 3.5);
        assert_eq!(pair.input, 42);
        assert_eq!(pair.output, 3.5);
        assert_eq!(pair.into_parts(), (42, 3.5));
    }

    #[test]
    fn test_tuple_conversions() {
        let pair: InOut<u8, &str> = (7, "out").into();
        assert_eq!(pair, InOut::new(7, "out"));
        let tuple: (u8, &str) = pair.into();
        assert_eq!(tuple, (7, "out"));
    }
}
