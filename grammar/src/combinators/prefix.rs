//! Runs of items bounded by a predicate.

use crate::{Buffer, Decoder, Encoder, Error, Input, RangeCfg};

/// Matches the longest run of items satisfying a predicate. See [prefix].
#[derive(Clone, Copy, Debug)]
pub struct Prefix<F> {
    predicate: F,
    length: RangeCfg,
}

/// Creates a grammar that matches the longest (possibly empty) run of items satisfying
/// `predicate`.
///
/// Decoding yields the run as a slice of the input. Encoding accepts exactly the values decoding
/// could have produced: every item must satisfy `predicate`.
///
/// # Examples
///
/// ```
/// use commonware_grammar::{prefix, Decoder, Encoder, Error, Text};
///
/// let field = prefix(|c: char| c != ',');
/// let (name, rest) = field.decode(Text::from("Blob,true")).unwrap();
/// assert_eq!(name, "Blob");
/// assert_eq!(rest, ",true");
///
/// // A value containing a comma could never have been decoded by this grammar
/// let mut buf = String::new();
/// assert!(matches!(
///     field.write(Text::from("Blob, Esq."), &mut buf),
///     Err(Error::Unrepresentable(_))
/// ));
/// assert!(buf.is_empty());
/// ```
pub fn prefix<F>(predicate: F) -> Prefix<F> {
    Prefix {
        predicate,
        length: RangeCfg::unbounded(),
    }
}

impl<F> Prefix<F> {
    /// Bounds the number of items in the run.
    ///
    /// Decoding stops once the upper bound is reached and fails with [Error::Predicate] if fewer
    /// items than the lower bound match. Encoding rejects values outside the bound.
    pub fn length(mut self, length: impl Into<RangeCfg>) -> Self {
        self.length = length.into();
        self
    }
}

impl<I: Input, F: Fn(I::Item) -> bool> Decoder<I> for Prefix<F> {
    type Output = I;

    fn read(&self, input: &mut I) -> Result<I, Error> {
        let remaining = input.len();
        let (run, count) = input.take_while(self.length.max(), |item| (self.predicate)(item));
        if count < self.length.min() {
            return Err(Error::Predicate {
                expected: "prefix length",
                remaining,
            });
        }
        Ok(run)
    }
}

impl<I: Input, F: Fn(I::Item) -> bool> Encoder<I> for Prefix<F> {
    fn write<B: Buffer<Input = I>>(&self, output: I, buf: &mut B) -> Result<(), Error> {
        let mut rest = output.clone();
        let (_, count) = rest.take_while(usize::MAX, |item| (self.predicate)(item));
        if !rest.is_empty() {
            return Err(Error::Unrepresentable("prefix predicate"));
        }
        if !self.length.contains(count) {
            return Err(Error::Unrepresentable("prefix length"));
        }
        buf.append(output.as_slice());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;
    use bytes::Bytes;

    #[test]
    fn test_prefix_greedy() {
        let digits = prefix(|b: u8| b.is_ascii_digit());
        let (run, rest) = digits.decode(Bytes::from_static(b"123abc")).unwrap();
        assert_eq!(&run[..], b"123");
        assert_eq!(&rest[..], b"abc");
    }

    #[test]
    fn test_prefix_empty_run() {
        let digits = prefix(|c: char| c.is_ascii_digit());
        let (run, rest) = digits.decode(Text::from("abc")).unwrap();
        assert!(run.is_empty());
        assert_eq!(rest, "abc");

        let printed: String = digits.encode(Text::new()).unwrap();
        assert!(printed.is_empty());
    }

    #[test]
    fn test_prefix_rejects_forbidden_item() {
        let field = prefix(|c: char| c != ',');
        let mut buf = String::from("1,");
        let err = field.write(Text::from("Blob, Esq."), &mut buf).unwrap_err();
        assert_eq!(err, Error::Unrepresentable("prefix predicate"));
        assert_eq!(buf, "1,");

        field.write(Text::from("Blob"), &mut buf).unwrap();
        assert_eq!(buf, "1,Blob");
    }

    #[test]
    fn test_prefix_length_bounds() {
        let code = prefix(|c: char| c.is_ascii_uppercase()).length(2..=3);

        let (run, rest) = code.decode(Text::from("ABCDE")).unwrap();
        assert_eq!(run, "ABC");
        assert_eq!(rest, "DE");

        assert_eq!(
            code.decode(Text::from("Ab")),
            Err(Error::Predicate {
                expected: "prefix length",
                remaining: 2,
            })
        );

        let mut buf = String::new();
        assert_eq!(
            code.write(Text::from("ABCD"), &mut buf),
            Err(Error::Unrepresentable("prefix length"))
        );
        assert_eq!(
            code.write(Text::from("A"), &mut buf),
            Err(Error::Unrepresentable("prefix length"))
        );
        assert!(buf.is_empty());
        code.write(Text::from("AB"), &mut buf).unwrap();
        assert_eq!(buf, "AB");
    }

    #[test]
    fn test_prefix_roundtrip_multibyte() {
        let word = prefix(|c: char| !c.is_whitespace());
        let input = Text::from("größe rest");
        let (run, rest) = word.decode(input).unwrap();
        assert_eq!(run, "größe");
        assert_eq!(rest, " rest");

        let printed: String = word.encode(run).unwrap();
        assert_eq!(printed, "größe");
    }
}
