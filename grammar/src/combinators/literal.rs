//! Fixed literal sequences.

use crate::{Buffer, Decoder, Encoder, Error, Input};

/// Matches and prints a fixed sequence. See [literal].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Literal<L>(L);

/// Creates a grammar that matches `literal` exactly.
///
/// A `&str` literal works with both [crate::Text] and [bytes::Bytes] input (the latter matching
/// its UTF-8 encoding).
pub fn literal<L>(literal: L) -> Literal<L> {
    Literal(literal)
}

impl<I: Input, L: AsRef<I::Slice>> Decoder<I> for Literal<L> {
    type Output = ();

    fn read(&self, input: &mut I) -> Result<(), Error> {
        let literal = self.0.as_ref();
        if input.strip_prefix(literal) {
            return Ok(());
        }
        if input.len() < I::slice_len(literal) && input.is_prefix_of(literal) {
            return Err(Error::EndOfInput("literal"));
        }
        Err(Error::Unexpected {
            expected: "literal",
            remaining: input.len(),
        })
    }
}

impl<I: Input, L: AsRef<I::Slice>> Encoder<I> for Literal<L> {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, _: (), buf: &mut B) -> Result<(), Error> {
        buf.append(self.0.as_ref());
        Ok(())
    }
}
