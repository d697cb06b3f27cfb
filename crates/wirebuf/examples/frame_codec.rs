// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Encodes a length-prefixed frame into a `ByteBuffer`, then decodes it back,
//! demonstrating the incremental-parse pattern: a decode attempt on an incomplete
//! frame fails without consuming anything.

use wirebuf::{BufferOverflow, ByteBuffer};

fn main() -> Result<(), BufferOverflow> {
    let payload = b"hello wire";

    // Encode: u16 version, u32 payload length, payload bytes.
    let mut wire = ByteBuffer::new();
    wire.put_num_be(1_u16)
        .put_num_be(u32::try_from(payload.len()).expect("payload fits in u32"))
        .append(payload);

    println!("encoded frame: {} bytes", wire.len());

    // Decode incrementally. Peek the header first so an incomplete frame
    // leaves the buffer untouched.
    let version = wire.peek_num_be::<u16>(0)?;
    let length = usize::try_from(wire.peek_num_be::<u32>(2)?).expect("u32 fits in usize");

    if wire.len() < 6 + length {
        println!("frame incomplete, waiting for more input");
        return Ok(());
    }

    // The whole frame is buffered; consume it for real.
    _ = wire.discard(6)?;
    let body = wire.consume(length)?;

    println!("version {version}, payload {:?}", String::from_utf8_lossy(&body));
    assert!(wire.is_empty());

    Ok(())
}
