// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Builds a small binary message with chained writes and splits it apart
//! with `shift`, mirroring how a protocol session carves frames off a stream.

use wirebuf::ByteBuffer;

fn main() {
    let mut stream = ByteBuffer::new();

    // Three 4-byte records, appended in one chain.
    stream
        .put_num_be(0xDEAD_BEEF_u32)
        .put_num_be(0xCAFE_BABE_u32)
        .put_num_le(0xA978_2361_u32);

    while !stream.is_empty() {
        let record = stream.shift(4).expect("stream holds whole records");
        println!("record: {:02X?}", record.as_slice());
    }
}
