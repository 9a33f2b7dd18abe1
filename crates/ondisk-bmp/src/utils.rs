/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Read a little endian `u16` starting at `offset`.
///
/// Header fields are not aligned for 32 bit access (the file header is 14 bytes),
/// so everything is assembled from halves.
#[inline]
pub(crate) fn read_half(header: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([header[offset], header[offset + 1]])
}

/// Read a little endian `u32` starting at `offset` as two 16 bit halves
#[inline]
pub(crate) fn read_word(header: &[u8], offset: usize) -> u32 {
    u32::from(read_half(header, offset)) | (u32::from(read_half(header, offset + 2)) << 16)
}

/// Bytes per stored row, rows are padded to a multiple of 4 bytes.
///
/// For 1 bit images the row is padded to 32 bits before converting to bytes,
/// which comes out the same but is how the format describes it.
pub(crate) fn row_stride(width: u32, bits_per_pixel: u16) -> u64 {
    if bits_per_pixel >= 8 {
        let stride = u64::from(width) * u64::from(bits_per_pixel / 8);
        // Rows are word aligned.
        stride.next_multiple_of(4)
    } else {
        let bit_stride = u64::from(width).next_multiple_of(32);
        bit_stride / 8
    }
}
