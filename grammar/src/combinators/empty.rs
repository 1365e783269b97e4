//! The grammar that matches nothing at all.

use crate::{Buffer, Decoder, Encoder, Error, Input};

/// Consumes and prints nothing. See [empty].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Empty;

/// Creates a grammar that always succeeds without consuming input and prints nothing.
///
/// This is the default separator and terminator of [crate::many].
pub fn empty() -> Empty {
    Empty
}

impl<I: Input> Decoder<I> for Empty {
    type Output = ();

    #[inline]
    fn read(&self, _: &mut I) -> Result<(), Error> {
        Ok(())
    }
}

impl<I: Input> Encoder<I> for Empty {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, _: (), _: &mut B) -> Result<(), Error> {
        Ok(())
    }
}
