//! Repetition of a grammar, with optional separators and terminator.

use crate::{empty, Buffer, Decoder, Empty, Encoder, Error, Input, RangeCfg};
use tracing::trace;

/// Repeats a grammar. See [many].
#[derive(Clone, Copy, Debug)]
pub struct Many<P, S = Empty, T = Empty> {
    element: P,
    separator: S,
    terminator: T,
    count: RangeCfg,
}

/// Creates a grammar that matches `element` as many times as possible, collecting the values into
/// a [Vec].
///
/// Decoding stops at the first element (or separator) that fails to decode, restoring the cursor
/// to before it. An iteration whose separator and element together consume nothing is not
/// collected: the cursor is restored and the run stops. The terminator must then match.
///
/// Encoding prints the elements, with a separator between each pair, followed by the terminator.
/// An element that prints nothing together with its separator is [Error::Unrepresentable], since
/// decoding could never have produced it.
///
/// # Examples
///
/// ```
/// use commonware_grammar::{end, int, literal, many, Decoder, Encoder, Text};
///
/// let numbers = many(int::<u16>()).separator(literal(",")).terminator(end());
/// let printed: String = numbers.encode(vec![1, 20, 300]).unwrap();
/// assert_eq!(printed, "1,20,300");
///
/// let (values, _) = numbers.decode(Text::from("1,20,300")).unwrap();
/// assert_eq!(values, vec![1, 20, 300]);
/// ```
pub fn many<P>(element: P) -> Many<P> {
    Many {
        element,
        separator: empty(),
        terminator: empty(),
        count: RangeCfg::unbounded(),
    }
}

impl<P, S, T> Many<P, S, T> {
    /// Sets the grammar matched between consecutive elements.
    pub fn separator<S2>(self, separator: S2) -> Many<P, S2, T> {
        Many {
            element: self.element,
            separator,
            terminator: self.terminator,
            count: self.count,
        }
    }

    /// Sets the grammar matched after the last element.
    pub fn terminator<T2>(self, terminator: T2) -> Many<P, S, T2> {
        Many {
            element: self.element,
            separator: self.separator,
            terminator,
            count: self.count,
        }
    }

    /// Bounds the number of elements.
    ///
    /// Decoding stops once the upper bound is reached and fails with [Error::Predicate] if fewer
    /// elements than the lower bound match. Encoding rejects sequences outside the bound.
    pub fn count(mut self, count: impl Into<RangeCfg>) -> Self {
        self.count = count.into();
        self
    }
}

impl<I, P, S, T> Decoder<I> for Many<P, S, T>
where
    I: Input,
    P: Decoder<I>,
    S: Decoder<I, Output = ()>,
    T: Decoder<I, Output = ()>,
{
    type Output = Vec<P::Output>;

    fn read(&self, input: &mut I) -> Result<Self::Output, Error> {
        let remaining = input.len();
        let mut values = Vec::new();
        while values.len() < self.count.max() {
            let checkpoint = input.clone();
            if !values.is_empty() {
                if let Err(err) = self.separator.read(input) {
                    trace!(count = values.len(), %err, "separator stopped repetition");
                    *input = checkpoint;
                    break;
                }
            }
            let value = match self.element.read(input) {
                Ok(value) => value,
                Err(err) => {
                    trace!(count = values.len(), %err, "element stopped repetition");
                    *input = checkpoint;
                    break;
                }
            };

            // An iteration that matched nothing would match nothing forever
            if input.len() == checkpoint.len() {
                trace!(count = values.len(), "repetition made no progress");
                *input = checkpoint;
                break;
            }
            values.push(value);
        }
        if values.len() < self.count.min() {
            return Err(Error::Predicate {
                expected: "repetition count",
                remaining,
            });
        }
        self.terminator.read(input)?;
        Ok(values)
    }
}

impl<I, P, S, T> Encoder<I> for Many<P, S, T>
where
    I: Input,
    P: Encoder<I>,
    S: Encoder<I, Output = ()>,
    T: Encoder<I, Output = ()>,
{
    fn write<B: Buffer<Input = I>>(&self, output: Self::Output, buf: &mut B) -> Result<(), Error> {
        if !self.count.contains(output.len()) {
            return Err(Error::Unrepresentable("repetition count"));
        }

        let checkpoint = buf.len();
        let result = self.write_all(output, buf);
        if result.is_err() {
            buf.truncate(checkpoint);
        }
        result
    }
}

impl<P, S, T> Many<P, S, T> {
    fn write_all<I, B>(
        &self,
        output: Vec<<P as Decoder<I>>::Output>,
        buf: &mut B,
    ) -> Result<(), Error>
    where
        I: Input,
        B: Buffer<Input = I>,
        P: Encoder<I>,
        S: Encoder<I, Output = ()>,
        T: Encoder<I, Output = ()>,
    {
        for (i, value) in output.into_iter().enumerate() {
            let before = buf.len();
            if i > 0 {
                self.separator.write((), buf)?;
            }
            self.element.write(value, buf)?;

            // Decoding never collects an iteration that consumed nothing
            if buf.len() == before {
                return Err(Error::Unrepresentable("repetition progress"));
            }
        }
        self.terminator.write((), buf)
    }
}
