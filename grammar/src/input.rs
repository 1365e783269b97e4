//! Cursors over the input being decoded.
//!
//! A cursor is an owned view of the input that has not been consumed yet. Both provided cursors
//! ([Bytes] and [Text]) share their backing storage, so cloning one (to remember a position that
//! may need to be restored) is a reference count increment and never copies the input. Slices
//! split off a cursor (e.g. the run matched by a prefix) share the same storage and can outlive
//! the decode call that produced them.

use crate::Error;
use bytes::{Buf, Bytes};
use std::fmt;

/// A single element of an input.
pub trait Item: Copy + PartialEq + fmt::Debug {
    /// Returns the item as a `char`, for grammars that only care about ASCII.
    fn as_char(self) -> char;
}

impl Item for u8 {
    #[inline]
    fn as_char(self) -> char {
        self as char
    }
}

impl Item for char {
    #[inline]
    fn as_char(self) -> char {
        self
    }
}

/// A cursor over the remaining (unconsumed) input.
///
/// Lengths are measured in units of the underlying storage (bytes for both [Bytes] and [Text]),
/// while prefix counts are measured in items.
pub trait Input: Clone + fmt::Debug {
    /// The elements yielded by the cursor.
    type Item: Item;

    /// The borrowed form of a contiguous run of input (`[u8]` or `str`).
    type Slice: ?Sized;

    /// Returns the remaining input.
    fn as_slice(&self) -> &Self::Slice;

    /// Returns the number of units remaining.
    fn len(&self) -> usize;

    /// Returns true if no input remains.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of units in `slice`.
    fn slice_len(slice: &Self::Slice) -> usize;

    /// Returns the next item without consuming it.
    fn first(&self) -> Option<Self::Item>;

    /// Consumes and returns the next item.
    fn next_item(&mut self) -> Option<Self::Item>;

    /// Consumes `prefix` if the remaining input starts with it.
    fn strip_prefix(&mut self, prefix: &Self::Slice) -> bool;

    /// Returns true if the remaining input is a prefix of `slice`.
    fn is_prefix_of(&self, slice: &Self::Slice) -> bool;

    /// Splits off the longest run of at most `max` leading items that satisfy `predicate`.
    ///
    /// Returns the run and the number of items in it.
    fn take_while<F>(&mut self, max: usize, predicate: F) -> (Self, usize)
    where
        F: FnMut(Self::Item) -> bool;
}

impl Input for Bytes {
    type Item = u8;
    type Slice = [u8];

    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self[..]
    }

    #[inline]
    fn len(&self) -> usize {
        Bytes::len(self)
    }

    #[inline]
    fn slice_len(slice: &[u8]) -> usize {
        slice.len()
    }

    #[inline]
    fn first(&self) -> Option<u8> {
        self[..].first().copied()
    }

    #[inline]
    fn next_item(&mut self) -> Option<u8> {
        if Bytes::is_empty(self) {
            return None;
        }
        Some(self.get_u8())
    }

    fn strip_prefix(&mut self, prefix: &[u8]) -> bool {
        if !self[..].starts_with(prefix) {
            return false;
        }
        self.advance(prefix.len());
        true
    }

    fn is_prefix_of(&self, slice: &[u8]) -> bool {
        slice.starts_with(&self[..])
    }

    fn take_while<F>(&mut self, max: usize, mut predicate: F) -> (Self, usize)
    where
        F: FnMut(u8) -> bool,
    {
        let count = self[..]
            .iter()
            .take(max)
            .take_while(|&&b| predicate(b))
            .count();
        (self.split_to(count), count)
    }
}

/// UTF-8 text backed by [Bytes].
///
/// The cursor for textual grammars: items are `char`s and runs are `str`s. Like [Bytes], clones
/// and splits share storage.
///
/// # Invariant
///
/// The wrapped bytes are always valid UTF-8, which [Text::as_str] relies on without checking:
/// - The field is private, so text can only be built by the constructors in this module
/// - Every constructor takes a `str`/`String` or validates the bytes (`TryFrom<Bytes>`)
/// - The cursor only advances or splits at `char` boundaries (asserted in debug builds)
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text(Bytes);

impl Text {
    /// Creates empty text.
    pub fn new() -> Self {
        Self(Bytes::new())
    }

    /// Creates text from a static string without copying it.
    pub fn from_static(s: &'static str) -> Self {
        Self(Bytes::from_static(s.as_bytes()))
    }

    /// Returns the text as a `str`.
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor checks (or is given) valid UTF-8, and the cursor only ever
        // advances or splits at `char` boundaries.
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying bytes.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for Text {
    fn from(s: &'static str) -> Self {
        Self::from_static(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self(Bytes::from(s.into_bytes()))
    }
}

impl TryFrom<Bytes> for Text {
    type Error = Error;

    fn try_from(bytes: Bytes) -> Result<Self, Error> {
        std::str::from_utf8(&bytes).map_err(|_| Error::Conversion("invalid utf-8"))?;
        Ok(Self(bytes))
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Input for Text {
    type Item = char;
    type Slice = str;

    #[inline]
    fn as_slice(&self) -> &str {
        self.as_str()
    }

    #[inline]
    fn len(&self) -> usize {
        Text::len(self)
    }

    #[inline]
    fn slice_len(slice: &str) -> usize {
        slice.len()
    }

    #[inline]
    fn first(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    #[inline]
    fn next_item(&mut self) -> Option<char> {
        let c = self.as_str().chars().next()?;
        debug_assert!(self.as_str().is_char_boundary(c.len_utf8()));
        self.0.advance(c.len_utf8());
        Some(c)
    }

    fn strip_prefix(&mut self, prefix: &str) -> bool {
        if !self.as_str().starts_with(prefix) {
            return false;
        }
        debug_assert!(self.as_str().is_char_boundary(prefix.len()));
        self.0.advance(prefix.len());
        true
    }

    fn is_prefix_of(&self, slice: &str) -> bool {
        slice.starts_with(self.as_str())
    }

    fn take_while<F>(&mut self, max: usize, mut predicate: F) -> (Self, usize)
    where
        F: FnMut(char) -> bool,
    {
        let mut units = 0;
        let mut count = 0;
        for c in self.as_str().chars() {
            if count == max || !predicate(c) {
                break;
            }
            units += c.len_utf8();
            count += 1;
        }
        debug_assert!(self.as_str().is_char_boundary(units));
        (Self(self.0.split_to(units)), count)
    }
}
