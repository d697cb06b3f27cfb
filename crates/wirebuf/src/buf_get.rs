// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the consuming decode functions for ease of maintenance.

use num_traits::FromBytes;

use crate::{ByteBuffer, Result};

impl ByteBuffer {
    /// Decodes a number of type `T` from its big-endian representation at the front
    /// of the buffer, removing the decoded bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    /// buf.put_num_be(0xCAFE_u16).put_num_be(0xBABE_u16);
    ///
    /// assert_eq!(buf.get_num_be::<u16>()?, 0xCAFE);
    /// assert_eq!(buf.get_num_be::<u16>()?, 0xBABE);
    /// assert!(buf.is_empty());
    /// # Ok::<(), wirebuf::BufferOverflow>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`][crate::BufferOverflow] when fewer than
    /// `size_of::<T>()` bytes are buffered, leaving the buffer unchanged.
    pub fn get_num_be<T: FromBytes>(&mut self) -> Result<T>
    where
        T::Bytes: Sized,
    {
        let value = self.peek_num_be::<T>(0)?;

        // Cannot fail - the peek above verified the bytes exist.
        _ = self.discard(size_of::<T::Bytes>());

        Ok(value)
    }

    /// Decodes a number of type `T` from its little-endian representation at the front
    /// of the buffer, removing the decoded bytes.
    ///
    /// For interop with little-endian wire formats; prefer [`get_num_be()`] otherwise.
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`][crate::BufferOverflow] when fewer than
    /// `size_of::<T>()` bytes are buffered, leaving the buffer unchanged.
    ///
    /// [`get_num_be()`]: Self::get_num_be
    pub fn get_num_le<T: FromBytes>(&mut self) -> Result<T>
    where
        T::Bytes: Sized,
    {
        let value = self.peek_num_le::<T>(0)?;

        // Cannot fail - the peek above verified the bytes exist.
        _ = self.discard(size_of::<T::Bytes>());

        Ok(value)
    }

    /// Removes and returns the first byte of the buffer.
    ///
    /// # Errors
    ///
    /// Fails with [`BufferOverflow`][crate::BufferOverflow] when the buffer is empty.
    pub fn get_byte(&mut self) -> Result<u8> {
        self.get_num_be::<u8>()
    }
}
