//! Core grammar traits

use crate::{buffer::Buffer, input::Input, Error};
use tracing::debug;

/// Trait for grammars that can decode a value from a cursor.
///
/// On success the cursor has been advanced past everything the grammar consumed. On failure the
/// cursor's position is unspecified: combinators that retry (choice, repetition, optional)
/// snapshot the cursor themselves and restore it before trying something else.
pub trait Decoder<I: Input> {
    /// The type of value produced by decoding (and consumed by encoding).
    type Output;

    /// Reads a value from the cursor, consuming the input it matched.
    fn read(&self, input: &mut I) -> Result<Self::Output, Error>;

    /// Decodes a value from the start of `input`, returning it alongside the unconsumed
    /// remainder.
    ///
    /// (Provided method).
    fn decode(&self, mut input: I) -> Result<(Self::Output, I), Error> {
        let len = input.len();
        match self.read(&mut input) {
            Ok(output) => Ok((output, input)),
            Err(err) => {
                debug!(offset = ?err.offset(len), %err, "decode failed");
                Err(err)
            }
        }
    }

    /// Decodes a value from `input`, ensuring the input is fully consumed.
    ///
    /// (Provided method).
    fn decode_exact(&self, input: I) -> Result<Self::Output, Error> {
        let (output, rest) = self.decode(input)?;
        if !rest.is_empty() {
            return Err(Error::ExtraData(rest.len()));
        }
        Ok(output)
    }
}

/// Trait for grammars that can also print a value back into a buffer.
///
/// Printing is the inverse of [Decoder::read]: if writing `output` succeeds, reading what was
/// written yields `output` again, and if reading some input yields `output`, writing `output`
/// reproduces the input that was consumed.
pub trait Encoder<I: Input>: Decoder<I> {
    /// Appends the encoding of `output` to `buf`.
    ///
    /// Returns an error if `output` can't be represented by this grammar. Primitive grammars never
    /// append anything when they fail; composite grammars document what they leave behind.
    fn write<B: Buffer<Input = I>>(&self, output: Self::Output, buf: &mut B) -> Result<(), Error>;

    /// Encodes `output` into a new buffer.
    ///
    /// (Provided method).
    fn encode<B: Buffer<Input = I>>(&self, output: Self::Output) -> Result<B, Error> {
        let mut buf = B::default();
        if let Err(err) = self.write(output, &mut buf) {
            debug!(%err, "encode failed");
            return Err(err);
        }
        Ok(buf)
    }
}

/// Trait for grammars that can both decode and encode.
pub trait Grammar<I: Input>: Encoder<I> {}

// Automatically implement `Grammar` for types that implement `Encoder`.
impl<I: Input, G: Encoder<I>> Grammar<I> for G {}

impl<I: Input, G: Decoder<I> + ?Sized> Decoder<I> for &G {
    type Output = G::Output;

    #[inline]
    fn read(&self, input: &mut I) -> Result<Self::Output, Error> {
        (**self).read(input)
    }
}

impl<I: Input, G: Encoder<I> + ?Sized> Encoder<I> for &G {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, output: Self::Output, buf: &mut B) -> Result<(), Error> {
        (**self).write(output, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int, literal, zip, Text};
    use bytes::{Bytes, BytesMut};

    #[test]
    fn test_hello() {
        let hello = zip()
            .skip(literal("Hello "))
            .then(int::<i64>())
            .skip(literal("!"));

        let printed: String = hello.encode(42).unwrap();
        assert_eq!(printed, "Hello 42!");

        let (value, rest) = hello.decode(Text::from("Hello 42!")).unwrap();
        assert_eq!(value, 42);
        assert!(rest.is_empty());

        let err = hello.decode(Text::from("Hello abc!")).unwrap_err();
        assert!(matches!(
            err,
            Error::Unexpected {
                expected: "integer",
                ..
            }
        ));
        assert_eq!(err.offset("Hello abc!".len()), Some(6));
    }

    #[test]
    fn test_hello_bytes() {
        let hello = zip()
            .skip(literal("Hello "))
            .then(int::<u8>())
            .skip(literal("!"));

        let printed: BytesMut = hello.encode(7).unwrap();
        assert_eq!(&printed[..], b"Hello 7!");
        let value = hello.decode_exact(printed.freeze()).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_decode_remainder() {
        let hello = literal("Hello");
        let ((), rest) = hello.decode(Bytes::from_static(b"Hello, World")).unwrap();
        assert_eq!(&rest[..], b", World");
    }

    #[test]
    fn test_decode_exact_extra_data() {
        let hello = literal("Hello");
        assert_eq!(
            hello.decode_exact(Text::from("Hello!!")),
            Err(Error::ExtraData(2))
        );
    }

    #[test]
    fn test_write_appends() {
        let number = int::<i32>();
        let mut buf = String::from("n=");
        number.write(-12, &mut buf).unwrap();
        (&number).write(3, &mut buf).unwrap();
        assert_eq!(buf, "n=-123");
    }
}
