// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::{self, BufRead, Read, Write};

use crate::ByteBuffer;

/// Adapter that implements [`Read`] and [`BufRead`] for [`ByteBuffer`].
///
/// Create an instance via [`ByteBuffer::reader()`].
///
/// Because [`ByteBuffer`] is already buffered, this adapter implements [`BufRead`]
/// directly without needing an intermediate buffer. Prefer this over wrapping in
/// [`std::io::BufReader`].
///
/// Bytes read through the adapter are consumed from the front of the buffer.
#[derive(Debug)]
pub struct ByteBufferReader<'b> {
    inner: &'b mut ByteBuffer,
}

impl ByteBuffer {
    /// Creates a [`Read`] + [`BufRead`] adapter that consumes from the front
    /// of this buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Read;
    ///
    /// use wirebuf::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from(&b"Hello"[..]);
    ///
    /// let mut contents = Vec::new();
    /// buf.reader().read_to_end(&mut contents)?;
    ///
    /// assert_eq!(contents, b"Hello");
    /// assert!(buf.is_empty());
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn reader(&mut self) -> ByteBufferReader<'_> {
        ByteBufferReader { inner: self }
    }
}

impl Read for ByteBufferReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let to_read = buf.len().min(self.inner.len());

        if to_read == 0 {
            return Ok(0);
        }

        buf[..to_read].copy_from_slice(&self.inner.as_slice()[..to_read]);

        // Cannot fail - to_read is clamped to the available length.
        _ = self.inner.discard(to_read);

        Ok(to_read)
    }
}

impl BufRead for ByteBufferReader<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.inner.as_slice())
    }

    fn consume(&mut self, amount: usize) {
        let amount = amount.min(self.inner.len());

        // Cannot fail - the amount is clamped to the available length.
        _ = self.inner.discard(amount);
    }
}

/// Appends written bytes to the back of the buffer.
///
/// Writes never fail and are never partial - the buffer grows as needed.
impl Write for ByteBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_in_chunks() {
        let mut buf = ByteBuffer::from(&b"Hello, world"[..]);
        let mut reader = buf.reader();

        let mut chunk = [0u8; 5];
        assert_eq!(reader.read(&mut chunk).unwrap(), 5);
        assert_eq!(&chunk, b"Hello");

        assert_eq!(reader.read(&mut chunk).unwrap(), 5);
        assert_eq!(&chunk, b", wor");

        assert_eq!(reader.read(&mut chunk).unwrap(), 2);
        assert_eq!(&chunk[..2], b"ld");

        assert_eq!(reader.read(&mut chunk).unwrap(), 0);
    }

    #[test]
    fn buf_read_fill_buf_and_consume() {
        let mut buf = ByteBuffer::from(&b"Hello, world"[..]);
        let mut reader = buf.reader();

        // fill_buf returns the contents without consuming them.
        assert_eq!(reader.fill_buf().unwrap(), b"Hello, world");
        assert_eq!(reader.fill_buf().unwrap(), b"Hello, world");

        reader.consume(7);
        assert_eq!(reader.fill_buf().unwrap(), b"world");

        reader.consume(5);
        assert!(reader.fill_buf().unwrap().is_empty());
    }

    #[test]
    fn buf_read_read_line() {
        let mut buf = ByteBuffer::from(&b"first\nsecond\n"[..]);
        let mut reader = buf.reader();

        let mut line = String::new();
        assert_eq!(reader.read_line(&mut line).unwrap(), 6);
        assert_eq!(line, "first\n");

        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 7);
        assert_eq!(line, "second\n");

        line.clear();
        assert_eq!(reader.read_line(&mut line).unwrap(), 0);
        assert!(line.is_empty());
    }

    #[test]
    fn write_appends() {
        let mut buf = ByteBuffer::from(&b"head"[..]);

        buf.write_all(b" tail").unwrap();
        Write::flush(&mut buf).unwrap();

        assert_eq!(buf.as_slice(), b"head tail");
    }
}
