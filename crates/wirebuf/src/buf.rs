// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::mem;

use crate::{BufferOverflow, Result};

/// A growable buffer of bytes supporting wire-format encoding and decoding.
///
/// Data is appended at the back and peeked or consumed from the front. The buffer owns
/// its bytes exclusively - extraction operations like [`slice()`] and [`shift()`] return
/// new, independently owned instances that never alias the source's storage.
///
/// The write methods are chainable, so a message can be built up in one expression:
///
/// ```
/// use wirebuf::ByteBuffer;
///
/// let mut buf = ByteBuffer::new();
/// buf.append(b"HDR\x00").put_num_be(1_u16).put_num_be(42_u32);
///
/// assert_eq!(buf.len(), 10);
/// ```
///
/// Reads come in two flavors. The peeking operations take an offset and leave the buffer
/// untouched, while the consuming operations remove the bytes they return from the front:
///
/// ```
/// use wirebuf::ByteBuffer;
///
/// let mut buf = ByteBuffer::from(&b"abcdef"[..]);
///
/// assert_eq!(buf.read(2, 0)?, b"ab");
/// assert_eq!(buf.len(), 6); // Unchanged.
///
/// assert_eq!(buf.consume(2)?, b"ab");
/// assert_eq!(buf.len(), 4); // The consumed prefix is gone.
/// # Ok::<(), wirebuf::BufferOverflow>(())
/// ```
///
/// Every operation that needs more bytes than the buffer holds fails with
/// [`BufferOverflow`] before mutating anything, so a failed call is always a no-op.
///
/// [`slice()`]: Self::slice
/// [`shift()`]: Self::shift
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Creates an empty buffer without any memory capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with at least the given memory capacity pre-allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// How many bytes of data are in the buffer, ready to be consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// assert_eq!(buf.len(), 0);
    ///
    /// buf.put_num_be(0x1234_5678_u32);
    /// assert_eq!(buf.len(), 4);
    ///
    /// buf.append(b"Hello");
    /// assert_eq!(buf.len(), 9);
    ///
    /// _ = buf.consume(4);
    /// assert_eq!(buf.len(), 5);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty (contains no data).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The buffered data as a contiguous slice, without consuming anything.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning its contents as a `Vec<u8>` without copying.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Appends a slice of bytes to the back of the buffer.
    ///
    /// Returns the buffer itself so that writes can be chained.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.append(b"Hello, ").append(b"world!");
    ///
    /// assert_eq!(buf.as_slice(), b"Hello, world!");
    /// ```
    pub fn append(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.data.extend_from_slice(bytes.as_ref());
        self
    }

    /// Appends the contents of another buffer, taking ownership of it.
    ///
    /// When this buffer is empty, the other buffer's allocation is reused instead
    /// of copying.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut header = ByteBuffer::new();
    /// header.put_num_be(0xCAFE_u16);
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.append_buf(header).append(b"payload");
    ///
    /// assert_eq!(buf.as_slice(), b"\xCA\xFEpayload");
    /// ```
    pub fn append_buf(&mut self, other: Self) -> &mut Self {
        if self.data.is_empty() {
            self.data = other.data;
        } else {
            self.data.extend_from_slice(&other.data);
        }

        self
    }

    /// Returns `n` bytes starting at `offset` without consuming them.
    ///
    /// The returned slice borrows from the buffer, so no bytes are copied.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from(&b"abcd"[..]);
    ///
    /// assert_eq!(buf.read(4, 0)?, b"abcd");
    /// assert_eq!(buf.read(2, 1)?, b"bc");
    /// assert_eq!(buf.len(), 4); // Reading never shrinks the buffer.
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`] when `offset + n` exceeds the buffered length.
    pub fn read(&self, n: usize, offset: usize) -> Result<&[u8]> {
        self.ensure_available(n, offset)?;

        Ok(&self.data[offset..offset + n])
    }

    /// Removes the first `n` bytes from the buffer and returns them.
    ///
    /// Consuming the entire buffer transfers the allocation out instead of copying,
    /// leaving the buffer empty.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from(&b"abcd"[..]);
    ///
    /// assert_eq!(buf.consume(1)?, b"a");
    /// assert_eq!(buf.consume(2)?, b"bc");
    /// assert_eq!(buf.len(), 1);
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`] when `n` exceeds the buffered length,
    /// leaving the buffer unchanged.
    pub fn consume(&mut self, n: usize) -> Result<Vec<u8>> {
        self.ensure_available(n, 0)?;

        if n == self.data.len() {
            return Ok(mem::take(&mut self.data));
        }

        Ok(self.data.drain(..n).collect())
    }

    /// Removes the first `n` bytes from the buffer without returning them.
    ///
    /// Returns the buffer itself so that calls can be chained.
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`] when `n` exceeds the buffered length,
    /// leaving the buffer unchanged.
    pub fn discard(&mut self, n: usize) -> Result<&mut Self> {
        self.ensure_available(n, 0)?;

        if n == self.data.len() {
            self.data.clear();
        } else {
            self.data.drain(..n);
        }

        Ok(self)
    }

    /// Returns a new buffer holding a copy of `n` bytes taken from `offset`.
    ///
    /// The new buffer is independently owned - mutating the source afterwards has no
    /// effect on it. The source is not mutated.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from(&b"abcd"[..]);
    ///
    /// let copy = buf.slice(2, 1)?;
    /// assert_eq!(copy.as_slice(), b"bc");
    ///
    /// buf.append(b"ef");
    /// assert_eq!(copy.as_slice(), b"bc"); // Unaffected by source mutation.
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`] when `offset + n` exceeds the buffered length.
    pub fn slice(&self, n: usize, offset: usize) -> Result<Self> {
        let bytes = self.read(n, offset)?;

        Ok(Self { data: bytes.to_vec() })
    }

    /// Removes the first `n` bytes from the buffer and wraps them in a new owned buffer.
    ///
    /// The operation is atomic: either the source shrinks by exactly `n` and the new
    /// buffer holds exactly those bytes, or the operation fails and the source is
    /// untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from(&b"abcdef"[..]);
    ///
    /// let head = buf.shift(1)?;
    /// assert_eq!(head.as_slice(), b"a");
    /// assert_eq!(buf.as_slice(), b"bcdef");
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`] when `n` exceeds the buffered length,
    /// leaving the buffer unchanged.
    pub fn shift(&mut self, n: usize) -> Result<Self> {
        Ok(Self { data: self.consume(n)? })
    }

    /// Takes the entire contents out of the buffer, leaving it empty.
    ///
    /// The allocation is transferred, not copied. Never fails - flushing an empty
    /// buffer yields an empty `Vec`.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from(&b"abcd"[..]);
    ///
    /// assert_eq!(buf.flush(), b"abcd");
    /// assert!(buf.is_empty());
    /// ```
    pub fn flush(&mut self) -> Vec<u8> {
        mem::take(&mut self.data)
    }

    /// Verifies that `needed` bytes can be read starting at `offset`.
    ///
    /// Every fallible operation routes through this check before mutating anything,
    /// which is what makes failed operations side-effect free.
    fn ensure_available(&self, needed: usize, offset: usize) -> Result<()> {
        match offset.checked_add(needed) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(BufferOverflow {
                needed,
                offset,
                available: self.data.len(),
            }),
        }
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish_non_exhaustive()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    /// Wraps an existing `Vec<u8>` without copying.
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for ByteBuffer {
    /// Creates a buffer pre-seeded with a copy of the given bytes.
    fn from(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec() }
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    /// Creates a buffer pre-seeded with a copy of the given bytes.
    fn from(bytes: [u8; N]) -> Self {
        Self { data: bytes.to_vec() }
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_tracks_append_and_consume() {
        let mut buf = ByteBuffer::new();
        assert_eq!(buf.len(), 0);

        buf.append(b"a");
        assert_eq!(buf.len(), 1);

        buf.append(b"a");
        assert_eq!(buf.len(), 2);

        // Peeking reads leave the size alone.
        assert!(buf.read(1, 0).is_ok());
        assert_eq!(buf.len(), 2);

        assert!(buf.read(2, 0).is_ok());
        assert_eq!(buf.len(), 2);

        assert!(buf.consume(1).is_ok());
        assert_eq!(buf.len(), 1);

        assert!(buf.consume(1).is_ok());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn empty() {
        let mut buf = ByteBuffer::new();
        assert!(buf.is_empty());

        buf.append(b"a");
        assert!(!buf.is_empty());
    }

    #[test]
    fn seeded_buffer_holds_its_seed() {
        let data = b"some arbitrary bytes \x00\xFF\x7F";

        let buf = ByteBuffer::from(&data[..]);

        assert_eq!(buf.len(), data.len());
        assert_eq!(buf.read(data.len(), 0).unwrap(), data);
    }

    #[test]
    fn flush_takes_all_and_resets() {
        let mut buf = ByteBuffer::from(&b"abcd"[..]);

        assert_eq!(buf.flush(), b"abcd");
        assert!(buf.is_empty());

        // Flushing again is a harmless no-op.
        assert_eq!(buf.flush(), b"");
    }

    #[test]
    fn read_at_offsets() {
        let buf = ByteBuffer::from(&b"abcd"[..]);

        assert_eq!(buf.read(1, 0).unwrap(), b"a");
        assert_eq!(buf.read(1, 1).unwrap(), b"b");
        assert_eq!(buf.read(1, 2).unwrap(), b"c");
        assert_eq!(buf.read(1, 3).unwrap(), b"d");
        assert_eq!(buf.read(4, 0).unwrap(), b"abcd");
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn read_past_end_fails() {
        let buf = ByteBuffer::new();

        assert_eq!(
            buf.read(1, 0),
            Err(BufferOverflow {
                needed: 1,
                offset: 0,
                available: 0,
            })
        );
    }

    #[test]
    fn read_offset_past_end_fails() {
        let buf = ByteBuffer::from(&b"abcd"[..]);

        assert!(buf.read(1, 4).is_err());
        assert!(buf.read(4, 1).is_err());

        // Degenerate but valid: zero bytes from the end boundary.
        assert_eq!(buf.read(0, 4).unwrap(), b"");
    }

    #[test]
    fn read_huge_offset_does_not_overflow_the_check() {
        let buf = ByteBuffer::from(&b"abcd"[..]);

        // offset + n wraps around usize; must fail, not wrap into a "valid" range.
        assert!(buf.read(2, usize::MAX).is_err());
    }

    #[test]
    fn consume_removes_prefix() {
        let mut buf = ByteBuffer::from(&b"abcd"[..]);

        assert_eq!(buf.consume(1).unwrap(), b"a");
        assert_eq!(buf.len(), 3);

        assert_eq!(buf.consume(2).unwrap(), b"bc");
        assert_eq!(buf.len(), 1);

        assert_eq!(buf.consume(1).unwrap(), b"d");
        assert!(buf.is_empty());
    }

    #[test]
    fn consume_whole_buffer_empties_it() {
        let mut buf = ByteBuffer::from(&b"abcd"[..]);

        assert_eq!(buf.consume(4).unwrap(), b"abcd");
        assert!(buf.is_empty());
    }

    #[test]
    fn consume_past_end_leaves_buffer_unchanged() {
        let mut buf = ByteBuffer::from(&b"ab"[..]);

        assert!(buf.consume(3).is_err());

        assert_eq!(buf.len(), 2);
        assert_eq!(buf.as_slice(), b"ab");
    }

    #[test]
    fn discard_removes_prefix_without_returning_it() {
        let mut buf = ByteBuffer::from(&b"abcd"[..]);

        assert!(buf.discard(1).is_ok());
        assert_eq!(buf.as_slice(), b"bcd");

        assert!(buf.discard(3).is_ok());
        assert!(buf.is_empty());
    }

    #[test]
    fn discard_past_end_leaves_buffer_unchanged() {
        let mut buf = ByteBuffer::from(&b"ab"[..]);

        assert!(buf.discard(3).is_err());
        assert_eq!(buf.as_slice(), b"ab");
    }

    #[test]
    fn slice_copies_without_mutating_source() {
        let buf = ByteBuffer::from(&b"abcd"[..]);

        assert_eq!(buf.slice(1, 0).unwrap().as_slice(), b"a");
        assert_eq!(buf.slice(2, 0).unwrap().as_slice(), b"ab");
        assert_eq!(buf.slice(2, 1).unwrap().as_slice(), b"bc");
        assert_eq!(buf.slice(4, 0).unwrap().as_slice(), b"abcd");

        assert_eq!(buf.as_slice(), b"abcd");
    }

    #[test]
    fn slice_is_independent_of_source() {
        let mut buf = ByteBuffer::from(&b"abcd"[..]);

        let copy = buf.slice(2, 0).unwrap();

        buf.append(b"ef");
        _ = buf.consume(3).unwrap();

        assert_eq!(copy.as_slice(), b"ab");
    }

    #[test]
    fn slice_past_end_fails() {
        let buf = ByteBuffer::from(&b"abcd"[..]);

        assert!(buf.slice(5, 0).is_err());
        assert!(buf.slice(2, 3).is_err());
    }

    #[test]
    fn shift_partitions_the_buffer() {
        let mut buf = ByteBuffer::from(&b"abcdef"[..]);

        let head = buf.shift(1).unwrap();
        assert_eq!(head.as_slice(), b"a");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.as_slice(), b"bcdef");

        let head = buf.shift(2).unwrap();
        assert_eq!(head.as_slice(), b"bc");

        let head = buf.shift(3).unwrap();
        assert_eq!(head.as_slice(), b"def");
        assert!(buf.is_empty());
    }

    #[test]
    fn shift_then_reappend_reconstructs_original() {
        let original = b"abcdef";
        let mut buf = ByteBuffer::from(&original[..]);

        let mut head = buf.shift(2).unwrap();

        // shift is a lossless partition: head + remainder == original.
        let remainder = mem::replace(&mut buf, ByteBuffer::new());
        head.append_buf(remainder);

        assert_eq!(head.as_slice(), original);
    }

    #[test]
    fn shift_past_end_leaves_buffer_unchanged() {
        let mut buf = ByteBuffer::from(&b"a"[..]);

        assert!(buf.shift(2).is_err());
        assert_eq!(buf.as_slice(), b"a");
    }

    #[test]
    fn append_concatenates_in_order() {
        let mut buf = ByteBuffer::from(&b"base"[..]);

        buf.append(b"x").append(b"y");

        assert_eq!(buf.as_slice(), b"basexy");
    }

    #[test]
    fn append_buf_extracts_the_other_buffer() {
        let mut other = ByteBuffer::new();
        other.append(b"cd");

        let mut buf = ByteBuffer::from(&b"ab"[..]);
        buf.append_buf(other);

        assert_eq!(buf.as_slice(), b"abcd");
    }

    #[test]
    fn append_buf_into_empty_reuses_allocation() {
        let other = ByteBuffer::from(&b"abcd"[..]);

        let mut buf = ByteBuffer::new();
        buf.append_buf(other);

        assert_eq!(buf.as_slice(), b"abcd");
    }

    #[test]
    fn conversions_round_trip() {
        let buf = ByteBuffer::from(vec![1_u8, 2, 3]);
        assert_eq!(buf.clone().into_vec(), vec![1, 2, 3]);
        assert_eq!(buf.as_ref(), &[1, 2, 3]);

        let collected: ByteBuffer = [4_u8, 5, 6].into_iter().collect();
        assert_eq!(collected.as_slice(), &[4, 5, 6]);

        let mut extended = ByteBuffer::new();
        extended.extend([7_u8, 8]);
        assert_eq!(extended.as_slice(), &[7, 8]);
    }

    #[test]
    fn equality_is_by_content() {
        let a = ByteBuffer::from(&b"abc"[..]);
        let mut b = ByteBuffer::with_capacity(64);
        b.append(b"abc");

        assert_eq!(a, b);
    }

    #[test]
    fn debug_is_compact() {
        let buf = ByteBuffer::from(&b"abcd"[..]);

        let formatted = format!("{buf:?}");
        assert!(formatted.contains("len: 4"));
    }
}
