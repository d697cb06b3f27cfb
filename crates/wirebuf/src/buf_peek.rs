// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the non-destructive decoding functions for ease of maintenance.

use num_traits::FromBytes;

use crate::{ByteBuffer, Result};

impl ByteBuffer {
    /// Decodes a number of type `T` from its big-endian representation at `offset`,
    /// without consuming anything.
    ///
    /// Works for every fixed-width integer type and for `f32`/`f64` (IEEE-754 bit
    /// layout). Signed integers decode from two's-complement.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from([0xA9, 0x78]);
    ///
    /// assert_eq!(buf.peek_num_be::<i16>(0)?, -22408);
    /// assert_eq!(buf.peek_num_be::<u16>(0)?, 0xA978);
    /// assert_eq!(buf.peek_num_be::<u8>(1)?, 0x78);
    /// assert_eq!(buf.len(), 2); // Peeking never shrinks the buffer.
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`][crate::BufferOverflow] when fewer than
    /// `size_of::<T>()` bytes are buffered from `offset` onward.
    pub fn peek_num_be<T: FromBytes>(&self, offset: usize) -> Result<T>
    where
        T::Bytes: Sized,
    {
        let bytes = self.read(size_of::<T::Bytes>(), offset)?;

        Ok(T::from_be_bytes(as_num_bytes::<T>(bytes)))
    }

    /// Decodes a number of type `T` from its little-endian representation at `offset`,
    /// without consuming anything.
    ///
    /// For interop with little-endian wire formats; prefer [`peek_num_be()`] otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let buf = ByteBuffer::from([0x61, 0x23, 0x78, 0xA9]);
    ///
    /// assert_eq!(buf.peek_num_le::<u32>(0)?, 0xA978_2361);
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`][crate::BufferOverflow] when fewer than
    /// `size_of::<T>()` bytes are buffered from `offset` onward.
    ///
    /// [`peek_num_be()`]: Self::peek_num_be
    pub fn peek_num_le<T: FromBytes>(&self, offset: usize) -> Result<T>
    where
        T::Bytes: Sized,
    {
        let bytes = self.read(size_of::<T::Bytes>(), offset)?;

        Ok(T::from_le_bytes(as_num_bytes::<T>(bytes)))
    }

    /// Returns the byte at `offset` without consuming anything.
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`][crate::BufferOverflow] when `offset` is past
    /// the end of the buffer.
    pub fn peek_byte(&self, offset: usize) -> Result<u8> {
        self.peek_num_be::<u8>(offset)
    }
}

/// Reinterprets a byte slice as the fixed-size byte array a `FromBytes` decode expects.
///
/// The caller must pass a slice of exactly `size_of::<T::Bytes>()` bytes.
fn as_num_bytes<T: FromBytes>(bytes: &[u8]) -> &T::Bytes
where
    T::Bytes: Sized,
{
    debug_assert_eq!(bytes.len(), size_of::<T::Bytes>());

    let bytes_array_ptr = bytes.as_ptr().cast::<T::Bytes>();

    // SAFETY: The slice holds exactly size_of::<T::Bytes>() bytes (asserted above and
    // guaranteed by the callers). The target type is an array of bytes, so it has no
    // alignment requirements.
    let bytes_array_maybe = unsafe { bytes_array_ptr.as_ref() };

    // SAFETY: This is never a null pointer because it came from a reference.
    unsafe { bytes_array_maybe.unwrap_unchecked() }
}
