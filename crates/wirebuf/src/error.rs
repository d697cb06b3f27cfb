// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// The error returned when an operation requests more bytes than the buffer holds.
///
/// This is the single failure mode of [`ByteBuffer`][crate::ByteBuffer] - every read,
/// consume, discard, slice and shift checks its bounds before touching the buffer, so a
/// failed operation leaves the buffer content and length exactly as they were.
///
/// The fields describe the failed request, letting callers distinguish a short buffer
/// from a read starting past the end without needing a second error kind.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer overflow: requested {needed} bytes at offset {offset}, but only {available} bytes are buffered")]
pub struct BufferOverflow {
    /// How many bytes the operation needed, counting from `offset`.
    pub needed: usize,

    /// The offset the operation started from. Zero for the consuming operations,
    /// which always work from the front of the buffer.
    pub offset: usize,

    /// How many bytes the buffer held when the operation was attempted.
    pub available: usize,
}

/// A specialized `Result` for buffer operations.
pub type Result<T> = std::result::Result<T, BufferOverflow>;
