//! Sequencing grammars one after another.
//!
//! A [Zip] is built slot by slot: [Zip::then] adds a slot whose value is kept, [Zip::skip] adds
//! a slot whose grammar produces `()` and contributes nothing. The kept values form the output:
//!
//! | kept slots | output              |
//! |------------|---------------------|
//! | none       | `()`                |
//! | one        | the value itself    |
//! | `n` (<=12) | `(T0, .., Tn-1)`    |

use crate::{Buffer, Decoder, Encoder, Error, Input};
use paste::paste;

/// A sequence of grammars. See [zip].
#[derive(Clone, Copy, Debug)]
pub struct Zip<S>(S);

/// The empty slot chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nil;

/// A slot chain `S` followed by a grammar whose value is kept.
#[derive(Clone, Copy, Debug)]
pub struct Value<S, P>(S, P);

/// A slot chain `S` followed by a grammar whose `()` output is discarded.
#[derive(Clone, Copy, Debug)]
pub struct Void<S, P>(S, P);

/// Starts an empty sequence.
pub fn zip() -> Zip<Nil> {
    Zip(Nil)
}

impl<S> Zip<S> {
    /// Appends a grammar whose value is kept in the output.
    pub fn then<P>(self, grammar: P) -> Zip<Value<S, P>> {
        Zip(Value(self.0, grammar))
    }

    /// Appends a grammar that produces `()`, matched and printed but absent from the output.
    pub fn skip<P>(self, grammar: P) -> Zip<Void<S, P>> {
        Zip(Void(self.0, grammar))
    }
}

/// Appends a value to a tuple, and splits it back off.
pub trait Append<T> {
    /// The tuple with `T` appended.
    type Output: Flatten;

    /// Appends `value`.
    fn append(self, value: T) -> Self::Output;

    /// Splits the last value off `output`.
    fn split(output: Self::Output) -> (Self, T)
    where
        Self: Sized;
}

/// Converts the accumulated tuple of kept values into the output of a [Zip], and back.
pub trait Flatten {
    /// The output of the [Zip].
    type Output;

    /// Converts the tuple into the output.
    fn flatten(self) -> Self::Output;

    /// Converts the output back into the tuple.
    fn unflatten(output: Self::Output) -> Self;
}

impl Flatten for () {
    type Output = ();

    #[inline]
    fn flatten(self) {}

    #[inline]
    fn unflatten(_: ()) -> Self {}
}

impl<T> Flatten for (T,) {
    type Output = T;

    #[inline]
    fn flatten(self) -> T {
        self.0
    }

    #[inline]
    fn unflatten(output: T) -> Self {
        (output,)
    }
}

// Append implementation
// Appending to an n-tuple produces an (n+1)-tuple.
macro_rules! impl_append_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>], )* T> Append<T> for ( $( [<T $index>], )* ) {
                type Output = ( $( [<T $index>], )* T, );

                #[inline]
                fn append(self, value: T) -> Self::Output {
                    let ( $( [<v $index>], )* ) = self;
                    ( $( [<v $index>], )* value, )
                }

                #[inline]
                fn split(output: Self::Output) -> (Self, T) {
                    let ( $( [<v $index>], )* last, ) = output;
                    (( $( [<v $index>], )* ), last)
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 0 through 11
impl_append_for_tuple!();
impl_append_for_tuple!(0);
impl_append_for_tuple!(0, 1);
impl_append_for_tuple!(0, 1, 2);
impl_append_for_tuple!(0, 1, 2, 3);
impl_append_for_tuple!(0, 1, 2, 3, 4);
impl_append_for_tuple!(0, 1, 2, 3, 4, 5);
impl_append_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_append_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_append_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_append_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_append_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);

// Flatten implementation
// Tuples of two or more values are already the output.
macro_rules! impl_flatten_for_tuple {
    ($($index:literal),*) => {
        paste! {
            impl<$( [<T $index>] ),*> Flatten for ( $( [<T $index>], )* ) {
                type Output = Self;

                #[inline]
                fn flatten(self) -> Self {
                    self
                }

                #[inline]
                fn unflatten(output: Self) -> Self {
                    output
                }
            }
        }
    };
}

// Generate implementations for tuple sizes 2 through 12
impl_flatten_for_tuple!(0, 1);
impl_flatten_for_tuple!(0, 1, 2);
impl_flatten_for_tuple!(0, 1, 2, 3);
impl_flatten_for_tuple!(0, 1, 2, 3, 4);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5, 6);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_flatten_for_tuple!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);

/// A chain of slots that can be decoded in order.
pub trait DecodeSlots<I: Input> {
    /// The tuple of kept values.
    type Values: Flatten;

    /// Reads every slot in order, stopping at the first failure.
    fn read_slots(&self, input: &mut I) -> Result<Self::Values, Error>;
}

/// A chain of slots that can be encoded in order.
pub trait EncodeSlots<I: Input>: DecodeSlots<I> {
    /// Writes every slot in order, stopping at the first failure.
    fn write_slots<B: Buffer<Input = I>>(
        &self,
        values: Self::Values,
        buf: &mut B,
    ) -> Result<(), Error>;
}

impl<I: Input> DecodeSlots<I> for Nil {
    type Values = ();

    #[inline]
    fn read_slots(&self, _: &mut I) -> Result<(), Error> {
        Ok(())
    }
}

impl<I: Input> EncodeSlots<I> for Nil {
    #[inline]
    fn write_slots<B: Buffer<Input = I>>(&self, _: (), _: &mut B) -> Result<(), Error> {
        Ok(())
    }
}

impl<I: Input, S: DecodeSlots<I>, P: Decoder<I>> DecodeSlots<I> for Value<S, P>
where
    S::Values: Append<P::Output>,
{
    type Values = <S::Values as Append<P::Output>>::Output;

    #[inline]
    fn read_slots(&self, input: &mut I) -> Result<Self::Values, Error> {
        let values = self.0.read_slots(input)?;
        let value = self.1.read(input)?;
        Ok(values.append(value))
    }
}

impl<I: Input, S: EncodeSlots<I>, P: Encoder<I>> EncodeSlots<I> for Value<S, P>
where
    S::Values: Append<P::Output>,
{
    #[inline]
    fn write_slots<B: Buffer<Input = I>>(
        &self,
        values: Self::Values,
        buf: &mut B,
    ) -> Result<(), Error> {
        let (values, value) = <S::Values as Append<P::Output>>::split(values);
        self.0.write_slots(values, buf)?;
        self.1.write(value, buf)
    }
}

impl<I: Input, S: DecodeSlots<I>, P: Decoder<I, Output = ()>> DecodeSlots<I> for Void<S, P> {
    type Values = S::Values;

    #[inline]
    fn read_slots(&self, input: &mut I) -> Result<Self::Values, Error> {
        let values = self.0.read_slots(input)?;
        self.1.read(input)?;
        Ok(values)
    }
}

impl<I: Input, S: EncodeSlots<I>, P: Encoder<I, Output = ()>> EncodeSlots<I> for Void<S, P> {
    #[inline]
    fn write_slots<B: Buffer<Input = I>>(
        &self,
        values: Self::Values,
        buf: &mut B,
    ) -> Result<(), Error> {
        self.0.write_slots(values, buf)?;
        self.1.write((), buf)
    }
}

impl<I: Input, S: DecodeSlots<I>> Decoder<I> for Zip<S> {
    type Output = <S::Values as Flatten>::Output;

    #[inline]
    fn read(&self, input: &mut I) -> Result<Self::Output, Error> {
        Ok(self.0.read_slots(input)?.flatten())
    }
}

/// Slots are written in order and the first failure is returned as-is: whatever earlier slots
/// appended stays in the buffer. Callers that need all-or-nothing output (like [crate::one_of])
/// restore the buffer themselves.
impl<I: Input, S: EncodeSlots<I>> Encoder<I> for Zip<S> {
    #[inline]
    fn write<B: Buffer<Input = I>>(&self, output: Self::Output, buf: &mut B) -> Result<(), Error> {
        self.0
            .write_slots(<S::Values as Flatten>::unflatten(output), buf)
    }
}
