//! Grammars for Rust primitive types, printed in their canonical textual form.
//!
//! # Integers
//!
//! [int] matches base-10 integers as [std::fmt::Display] prints them: an optional `-` for signed
//! types, then digits without leading zeros. Only that form is accepted, so every value has
//! exactly one textual form and decoding what was printed always yields the same value:
//! - `+1`, `-0` and `007` are rejected (`007` decodes as `0`, leaving `07`)
//! - `-1` is rejected by unsigned types
//! - digits that overflow the type are rejected rather than truncated
//!
//! # Booleans
//!
//! [boolean] matches `true` and `false`.

use crate::{Buffer, Decoder, Encoder, Error, Input, Item};
use std::marker::PhantomData;

/// An integer type that can be matched by [int].
pub trait Integer: Copy + ToString {
    /// Whether the type can be negative.
    const SIGNED: bool;

    /// Zero.
    const ZERO: Self;

    /// Appends a decimal digit, moving away from zero in the direction given by `negative`.
    ///
    /// Returns `None` on overflow.
    fn push_digit(self, digit: u8, negative: bool) -> Option<Self>;
}

macro_rules! impl_integer {
    ($type:ty, $signed:expr) => {
        impl Integer for $type {
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;

            #[inline]
            fn push_digit(self, digit: u8, negative: bool) -> Option<Self> {
                let shifted = self.checked_mul(10)?;
                let digit = digit as Self;
                if negative {
                    shifted.checked_sub(digit)
                } else {
                    shifted.checked_add(digit)
                }
            }
        }
    };
}

impl_integer!(u8, false);
impl_integer!(u16, false);
impl_integer!(u32, false);
impl_integer!(u64, false);
impl_integer!(u128, false);
impl_integer!(usize, false);
impl_integer!(i8, true);
impl_integer!(i16, true);
impl_integer!(i32, true);
impl_integer!(i64, true);
impl_integer!(i128, true);
impl_integer!(isize, true);

/// Matches a base-10 integer of type `T`. See [int].
#[derive(Clone, Copy, Debug)]
pub struct Int<T>(PhantomData<T>);

/// Creates a grammar for integers of type `T` in canonical decimal form.
pub fn int<T: Integer>() -> Int<T> {
    Int(PhantomData)
}

impl<I: Input, T: Integer> Decoder<I> for Int<T> {
    type Output = T;

    fn read(&self, input: &mut I) -> Result<T, Error> {
        let remaining = input.len();
        let unexpected = Error::Unexpected {
            expected: "integer",
            remaining,
        };
        let mut cursor = input.clone();

        // Sign
        let negative = T::SIGNED && cursor.first().map(Item::as_char) == Some('-');
        if negative {
            cursor.next_item();
        }

        // Leading digit
        let Some(first) = cursor.first().map(Item::as_char) else {
            return Err(Error::EndOfInput("integer"));
        };
        let Some(digit) = first.to_digit(10) else {
            return Err(unexpected);
        };
        cursor.next_item();
        let mut value = T::ZERO.push_digit(digit as u8, negative).ok_or(unexpected.clone())?;

        // A leading zero is the whole number
        if digit == 0 {
            if negative {
                return Err(unexpected);
            }
            *input = cursor;
            return Ok(value);
        }

        // Remaining digits
        while let Some(digit) = cursor.first().and_then(|item| item.as_char().to_digit(10)) {
            cursor.next_item();
            value = value
                .push_digit(digit as u8, negative)
                .ok_or(unexpected.clone())?;
        }
        *input = cursor;
        Ok(value)
    }
}

impl<I: Input, T: Integer> Encoder<I> for Int<T>
where
    str: AsRef<I::Slice>,
{
    fn write<B: Buffer<Input = I>>(&self, output: T, buf: &mut B) -> Result<(), Error> {
        let text = output.to_string();
        buf.append(<str as AsRef<I::Slice>>::as_ref(&text));
        Ok(())
    }
}

/// Matches `true` or `false`. See [boolean].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bool;

/// Creates a grammar for `true` and `false`.
pub fn boolean() -> Bool {
    Bool
}

const TRUE: &str = "true";
const FALSE: &str = "false";

impl<I: Input> Decoder<I> for Bool
where
    str: AsRef<I::Slice>,
{
    type Output = bool;

    fn read(&self, input: &mut I) -> Result<bool, Error> {
        for (text, value) in [(TRUE, true), (FALSE, false)] {
            if input.strip_prefix(text.as_ref()) {
                return Ok(value);
            }
        }
        for text in [TRUE, FALSE] {
            let text: &I::Slice = text.as_ref();
            if input.len() < I::slice_len(text) && input.is_prefix_of(text) {
                return Err(Error::EndOfInput("boolean"));
            }
        }
        Err(Error::Unexpected {
            expected: "boolean",
            remaining: input.len(),
        })
    }
}

impl<I: Input> Encoder<I> for Bool
where
    str: AsRef<I::Slice>,
{
    fn write<B: Buffer<Input = I>>(&self, output: bool, buf: &mut B) -> Result<(), Error> {
        let text = if output { TRUE } else { FALSE };
        buf.append(text.as_ref());
        Ok(())
    }
}
