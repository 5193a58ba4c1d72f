#![forbid(unsafe_code)]

//! Protobuf-style base-128 varints
//!
//! MMKV length-delimits every key and value with an unsigned varint. Lengths
//! fit in 32 bits, so decoding rejects anything longer than five bytes.

use crate::error::Error;

/// Maximum encoded length of a 32-bit varint
pub const MAX_VARINT32_LEN: usize = 5;

/// Append the varint encoding of `value` to `out`
pub fn encode_u32(mut value: u32, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Decode a varint from the front of `buf`
///
/// Returns the decoded value and the number of bytes consumed. Fails when the
/// buffer ends mid-varint or the encoding runs past five bytes.
pub fn decode_u32(buf: &[u8]) -> Result<(u32, usize), Error> {
    let mut value: u32 = 0;
    for (i, &byte) in buf.iter().enumerate().take(MAX_VARINT32_LEN) {
        // The fifth byte holds bits 28..35; only its low nibble fits in 32 bits
        if i == MAX_VARINT32_LEN - 1 && byte & 0xf0 != 0 {
            return Err(Error::corrupt("varint overflows 32 bits"));
        }
        value |= ((byte & 0x7f) as u32) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(Error::corrupt("varint is truncated or exceeds 32 bits"))
}
