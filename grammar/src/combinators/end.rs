//! Matching the end of input.

use crate::{Buffer, Decoder, Encoder, Error, Input};

/// Succeeds only when no input remains. See [end].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct End;

/// Creates a grammar that succeeds only at the end of input and prints nothing.
///
/// Commonly used as the terminator of a [crate::many] that must consume its whole input.
pub fn end() -> End {
    End
}

impl<I: Input> Decoder<I> for End {
    type Output = ();

    #[inline]
    fn read(&self, input: &mut I) -> Result<(), Error> {
        if !input.is_empty() {
            return Err(Error::Unexpected {
                expected: "end of input",
                remaining: input.len(),
            });
        }
        Ok(())
    }
}

impl<I: Input> Encoder<I> for End {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, _: (), _: &mut B) -> Result<(), Error> {
        Ok(())
    }
}
