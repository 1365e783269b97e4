//! Invertible conversions between the value a grammar produces and a richer type.
//!
//! A [Conversion] is applied by [crate::Map] after decoding and un-applied before encoding.
//! Either direction may reject a value, which surfaces as [Error::Conversion]. For the
//! round-trip guarantee to hold, `unapply` must be the exact inverse of `apply` on every value
//! `apply` can produce.

use crate::{Error, Text};
use bytes::Bytes;

/// A pair of mappings between `A` and [Conversion::Output].
pub trait Conversion<A> {
    /// The type values are converted into.
    type Output;

    /// Converts a decoded value.
    fn apply(&self, input: A) -> Result<Self::Output, Error>;

    /// Converts a value back into the form the underlying grammar prints.
    fn unapply(&self, output: Self::Output) -> Result<A, Error>;
}

/// A conversion backed by a pair of fallible functions. See [from_fn].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F, G> {
    apply: F,
    unapply: G,
}

/// Creates a conversion from a pair of fallible functions.
pub fn from_fn<F, G>(apply: F, unapply: G) -> FromFn<F, G> {
    FromFn { apply, unapply }
}

impl<A, B, F, G> Conversion<A> for FromFn<F, G>
where
    F: Fn(A) -> Result<B, Error>,
    G: Fn(B) -> Result<A, Error>,
{
    type Output = B;

    #[inline]
    fn apply(&self, input: A) -> Result<B, Error> {
        (self.apply)(input)
    }

    #[inline]
    fn unapply(&self, output: B) -> Result<A, Error> {
        (self.unapply)(output)
    }
}

/// A conversion backed by a pair of infallible functions. See [total].
#[derive(Clone, Copy, Debug)]
pub struct Total<F, G> {
    apply: F,
    unapply: G,
}

/// Creates a conversion from a pair of functions that accept every value.
///
/// Typically used to lift the tuple produced by [crate::zip] into a struct and back.
pub fn total<F, G>(apply: F, unapply: G) -> Total<F, G> {
    Total { apply, unapply }
}

impl<A, B, F, G> Conversion<A> for Total<F, G>
where
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    type Output = B;

    #[inline]
    fn apply(&self, input: A) -> Result<B, Error> {
        Ok((self.apply)(input))
    }

    #[inline]
    fn unapply(&self, output: B) -> Result<A, Error> {
        Ok((self.unapply)(output))
    }
}

/// Converts [Text] to an owned [String] and back. See [string].
#[derive(Clone, Copy, Debug, Default)]
pub struct Strings;

/// Creates a conversion between [Text] and [String].
pub fn string() -> Strings {
    Strings
}

impl Conversion<Text> for Strings {
    type Output = String;

    fn apply(&self, input: Text) -> Result<String, Error> {
        Ok(input.as_str().to_owned())
    }

    fn unapply(&self, output: String) -> Result<Text, Error> {
        Ok(Text::from(output))
    }
}

/// Converts UTF-8 [Bytes] to a [String] and back. See [utf8].
#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8;

/// Creates a conversion between [Bytes] and [String] that rejects invalid UTF-8.
pub fn utf8() -> Utf8 {
    Utf8
}

impl Conversion<Bytes> for Utf8 {
    type Output = String;

    fn apply(&self, input: Bytes) -> Result<String, Error> {
        String::from_utf8(input.to_vec()).map_err(|_| Error::Conversion("invalid utf-8"))
    }

    fn unapply(&self, output: String) -> Result<Bytes, Error> {
        Ok(Bytes::from(output.into_bytes()))
    }
}
