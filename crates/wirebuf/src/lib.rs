// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A growable byte buffer for wire-format encoding and decoding.
//!
//! [`ByteBuffer`] owns a contiguous sequence of bytes that grows at the back and shrinks
//! at the front. It is the accumulator you put between a binary protocol and its
//! transport: encoders append fixed-width numbers and raw bytes to the back, decoders
//! peek or consume them from the front.
//!
//! The buffer is a plain single-owner value type. It performs no I/O of its own and has
//! no internal locking - if an instance must be shared across threads, synchronize it
//! externally like any other value.
//!
//! # Producing data
//!
//! The write methods never fail (the buffer grows as needed) and return the buffer
//! itself, so a message can be assembled in one chained expression. Multi-byte values
//! are encoded big-endian by default, making the wire bytes identical on every host
//! architecture; an explicitly named little-endian family exists for wire formats
//! that require it.
//!
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut message = ByteBuffer::new();
//!
//! message
//!     .append(b"HDR\x00") // Magic
//!     .put_num_be(1_u16) // Version
//!     .put_num_be(42_u32) // Payload length
//!     .put_num_be(0xDEAD_BEEF_u64); // Checksum
//!
//! assert_eq!(message.len(), 18);
//! ```
//!
//! # Consuming data
//!
//! Reads come in two families:
//!
//! * The peeking operations ([`read()`], [`peek_num_be()`], [`peek_num_le()`],
//!   [`peek_byte()`]) take an offset and never mutate the buffer.
//! * The consuming operations ([`consume()`], [`discard()`], [`shift()`],
//!   [`get_num_be()`], [`get_num_le()`], [`get_byte()`], [`flush()`]) remove the bytes
//!   they decode from the front of the buffer, shrinking it.
//!
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut message = ByteBuffer::from([0xA9, 0x78, 0x3F, 0xC0, 0x00, 0x00]);
//!
//! // Look before leaping: peeking leaves the buffer intact.
//! assert_eq!(message.peek_num_be::<i16>(0)?, -22408);
//!
//! // Now consume for real.
//! assert_eq!(message.get_num_be::<i16>()?, -22408);
//! assert_eq!(message.get_num_be::<f32>()?, 1.5);
//! assert!(message.is_empty());
//! # Ok::<(), wirebuf::BufferOverflow>(())
//! ```
//!
//! Any operation that needs more bytes than the buffer holds fails with
//! [`BufferOverflow`] *before* mutating anything, so a failed operation is always a
//! no-op. This makes incremental protocol parsing straightforward: attempt a decode,
//! and if the frame is not complete yet, the buffer is untouched and ready for more
//! appended input.
//!
//! # Extracting sub-buffers
//!
//! [`slice()`] copies a range into a new, independently owned buffer without touching
//! the source. [`shift()`] removes a prefix and transfers it into a new owned buffer
//! in one atomic step. The extracted buffers never alias the source's storage.
//!
//! ```
//! use wirebuf::ByteBuffer;
//!
//! let mut stream = ByteBuffer::from(&b"abcdef"[..]);
//!
//! let frame = stream.shift(1)?;
//! assert_eq!(frame.as_slice(), b"a");
//! assert_eq!(stream.as_slice(), b"bcdef");
//! # Ok::<(), wirebuf::BufferOverflow>(())
//! ```
//!
//! # Standard I/O interop
//!
//! The buffer adapts to `std::io` in both directions: [`ByteBuffer::reader()`] yields a
//! [`ByteBufferReader`] implementing [`Read`] and [`BufRead`] (reads consume from the
//! front), and `ByteBuffer` itself implements [`Write`] (writes append to the back).
//!
//! [`read()`]: ByteBuffer::read
//! [`consume()`]: ByteBuffer::consume
//! [`discard()`]: ByteBuffer::discard
//! [`shift()`]: ByteBuffer::shift
//! [`slice()`]: ByteBuffer::slice
//! [`flush()`]: ByteBuffer::flush
//! [`peek_num_be()`]: ByteBuffer::peek_num_be
//! [`peek_num_le()`]: ByteBuffer::peek_num_le
//! [`peek_byte()`]: ByteBuffer::peek_byte
//! [`get_num_be()`]: ByteBuffer::get_num_be
//! [`get_num_le()`]: ByteBuffer::get_num_le
//! [`get_byte()`]: ByteBuffer::get_byte
//! [`Read`]: std::io::Read
//! [`BufRead`]: std::io::BufRead
//! [`Write`]: std::io::Write

mod buf;
mod buf_get;
mod buf_peek;
mod buf_put;
mod error;
mod io;

pub use buf::ByteBuffer;
pub use error::{BufferOverflow, Result};
pub use io::ByteBufferReader;
