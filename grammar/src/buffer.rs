//! Buffers that encoded values are appended to.

use crate::{input::Input, Text};
use bytes::{Bytes, BytesMut};

/// A growable buffer that a grammar can print into.
///
/// Printing only ever appends. The length is the buffer's snapshot: a combinator that needs to
/// undo a failed attempt (e.g. a choice trying its next alternative) records [Buffer::len]
/// before the attempt and calls [Buffer::truncate] with it afterwards.
pub trait Buffer: Default {
    /// The cursor type that decodes what this buffer accumulates.
    type Input: Input;

    /// Appends a contiguous run of elements.
    fn append(&mut self, slice: &<Self::Input as Input>::Slice);

    /// Returns the number of units written so far.
    fn len(&self) -> usize;

    /// Returns true if nothing has been written.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards everything written after the first `len` units.
    fn truncate(&mut self, len: usize);
}

impl Buffer for String {
    type Input = Text;

    #[inline]
    fn append(&mut self, slice: &str) {
        self.push_str(slice);
    }

    #[inline]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        String::truncate(self, len);
    }
}

impl Buffer for Vec<u8> {
    type Input = Bytes;

    #[inline]
    fn append(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}

impl Buffer for BytesMut {
    type Input = Bytes;

    #[inline]
    fn append(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice);
    }

    #[inline]
    fn len(&self) -> usize {
        BytesMut::len(self)
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        BytesMut::truncate(self, len);
    }
}
