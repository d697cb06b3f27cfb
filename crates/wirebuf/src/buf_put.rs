// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! We separate out the typed append functions for ease of maintenance.

use num_traits::ToBytes;

use crate::ByteBuffer;

impl ByteBuffer {
    /// Appends a number of type `T` in big-endian representation to the buffer.
    ///
    /// Big-endian is the wire default: the encoded bytes are identical on every host
    /// architecture. Works for every fixed-width integer type and for `f32`/`f64`
    /// (IEEE-754 bit layout).
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    ///
    /// buf.put_num_be(0xCAFE_u16).put_num_be(-2_i16);
    ///
    /// // Big-endian: most significant byte first.
    /// assert_eq!(buf.as_slice(), &[0xCA, 0xFE, 0xFF, 0xFE]);
    /// ```
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn put_num_be<T: ToBytes>(&mut self, value: T) -> &mut Self {
        let bytes = value.to_be_bytes();
        self.append(bytes)
    }

    /// Appends a number of type `T` in little-endian representation to the buffer.
    ///
    /// For interop with little-endian wire formats; prefer [`put_num_be()`] otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    ///
    /// buf.put_num_le(0xA978_2361_u32);
    ///
    /// // Little-endian: least significant byte first.
    /// assert_eq!(buf.as_slice(), &[0x61, 0x23, 0x78, 0xA9]);
    /// ```
    ///
    /// [`put_num_be()`]: Self::put_num_be
    #[expect(clippy::needless_pass_by_value, reason = "tiny numeric types, fine to always pass by value")]
    pub fn put_num_le<T: ToBytes>(&mut self, value: T) -> &mut Self {
        let bytes = value.to_le_bytes();
        self.append(bytes)
    }

    /// Appends a single byte to the buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::new();
    ///
    /// buf.put_byte(0xCA).put_byte(0xFE);
    ///
    /// assert_eq!(buf.as_slice(), &[0xCA, 0xFE]);
    /// ```
    pub fn put_byte(&mut self, value: u8) -> &mut Self {
        self.append([value])
    }
}
