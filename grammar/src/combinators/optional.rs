//! Grammars that may be absent.

use crate::{Buffer, Decoder, Encoder, Error, Input};
use tracing::trace;

/// Matches a grammar or nothing. See [optional].
#[derive(Clone, Copy, Debug)]
pub struct Optional<P>(P);

/// Creates a grammar that matches `grammar` if it can, and nothing otherwise.
///
/// Decoding yields `None` (consuming nothing) when `grammar` fails. Encoding prints `Some(value)`
/// with `grammar` and `None` as nothing.
///
/// For the round trip to hold, `grammar` must not match the empty input (otherwise `None` prints
/// something that decodes as `Some`).
pub fn optional<P>(grammar: P) -> Optional<P> {
    Optional(grammar)
}

impl<I: Input, P: Decoder<I>> Decoder<I> for Optional<P> {
    type Output = Option<P::Output>;

    fn read(&self, input: &mut I) -> Result<Self::Output, Error> {
        let checkpoint = input.clone();
        match self.0.read(input) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                trace!(%err, "optional grammar absent");
                *input = checkpoint;
                Ok(None)
            }
        }
    }
}

impl<I: Input, P: Encoder<I>> Encoder<I> for Optional<P> {
    fn write<B: Buffer<Input = I>>(&self, output: Self::Output, buf: &mut B) -> Result<(), Error> {
        let Some(value) = output else {
            return Ok(());
        };
        let checkpoint = buf.len();
        let result = self.0.write(value, buf);
        if result.is_err() {
            buf.truncate(checkpoint);
        }
        result
    }
}
