//! Discarding a grammar's unit output.

use crate::{Buffer, Decoder, Encoder, Error, Input};

/// A grammar matched for its input alone. See [skip].
#[derive(Clone, Copy, Debug)]
pub struct Skip<P>(P);

/// Wraps a grammar producing `()` so it can stand wherever a discarded grammar is expected.
///
/// Decoding delegates to `grammar`. Encoding prints `grammar` with `()`, so the printed form is
/// whichever form `grammar` prints for `()` (for a choice, the first alternative that succeeds in
/// print order).
///
/// # Examples
///
/// ```
/// use commonware_grammar::{empty, int, literal, one_of, skip, zip, Decoder, Encoder, Text};
///
/// let space = skip(one_of((literal(" "), empty())));
/// let padded = zip().skip(space).then(int::<u8>());
/// let (value, _) = padded.decode(Text::from(" 7")).unwrap();
/// assert_eq!(value, 7);
///
/// let printed: String = padded.encode(7).unwrap();
/// assert_eq!(printed, "7");
/// ```
pub fn skip<P>(grammar: P) -> Skip<P> {
    Skip(grammar)
}

impl<I: Input, P: Decoder<I, Output = ()>> Decoder<I> for Skip<P> {
    type Output = ();

    #[inline]
    fn read(&self, input: &mut I) -> Result<(), Error> {
        self.0.read(input)
    }
}

impl<I: Input, P: Encoder<I, Output = ()>> Encoder<I> for Skip<P> {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, _: (), buf: &mut B) -> Result<(), Error> {
        self.0.write((), buf)
    }
}
