//! Invertible mapping of a grammar's output.

use crate::{Buffer, Conversion, Decoder, Encoder, Error, Input};

/// A grammar whose output is transformed by a [Conversion]. See [crate::GrammarExt::map].
#[derive(Clone, Copy, Debug)]
pub struct Map<P, C> {
    grammar: P,
    conversion: C,
}

impl<P, C> Map<P, C> {
    /// Creates a grammar that applies `conversion` after decoding with `grammar`, and un-applies
    /// it before encoding with `grammar`.
    pub fn new(grammar: P, conversion: C) -> Self {
        Self {
            grammar,
            conversion,
        }
    }
}

impl<I: Input, P: Decoder<I>, C: Conversion<P::Output>> Decoder<I> for Map<P, C> {
    type Output = C::Output;

    #[inline]
    fn read(&self, input: &mut I) -> Result<Self::Output, Error> {
        let value = self.grammar.read(input)?;
        self.conversion.apply(value)
    }
}

impl<I: Input, P: Encoder<I>, C: Conversion<P::Output>> Encoder<I> for Map<P, C> {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, output: Self::Output, buf: &mut B) -> Result<(), Error> {
        let value = self.conversion.unapply(output)?;
        self.grammar.write(value, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        conversion::{from_fn, total, utf8},
        int, literal, prefix, zip, GrammarExt, Text,
    };
    use bytes::Bytes;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_map_struct() {
        let point = zip()
            .skip(literal("("))
            .then(int::<i32>())
            .skip(literal(","))
            .then(int::<i32>())
            .skip(literal(")"))
            .map(total(
                |(x, y): (i32, i32)| Point { x, y },
                |p: Point| (p.x, p.y),
            ));

        let value = point.decode_exact(Text::from("(3,-4)")).unwrap();
        assert_eq!(value, Point { x: 3, y: -4 });
        let printed: String = point.encode(value).unwrap();
        assert_eq!(printed, "(3,-4)");
    }

    #[test]
    fn test_map_rejects() {
        let percent = int::<u8>().map(from_fn(
            |n: u8| {
                if n <= 100 {
                    Ok(n)
                } else {
                    Err(Error::Conversion("percentage"))
                }
            },
            |n: u8| {
                if n <= 100 {
                    Ok(n)
                } else {
                    Err(Error::Conversion("percentage"))
                }
            },
        ));

        assert_eq!(percent.decode_exact(Text::from("42")), Ok(42));
        assert_eq!(
            percent.decode_exact(Text::from("142")),
            Err(Error::Conversion("percentage"))
        );

        let mut buf = String::new();
        assert_eq!(
            percent.write(101, &mut buf),
            Err(Error::Conversion("percentage"))
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_map_utf8() {
        let word = prefix(|b: u8| b != b' ').map(utf8());
        let input = Bytes::from_static("größe rest".as_bytes());
        let (value, rest) = word.decode(input).unwrap();
        assert_eq!(value, "größe");
        assert_eq!(&rest[..], b" rest");

        let invalid = word.decode(Bytes::from_static(&[0xc3, 0x28]));
        assert_eq!(invalid, Err(Error::Conversion("invalid utf-8")));
    }
}
