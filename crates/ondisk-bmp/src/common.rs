/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Bytes read up front, the 14 byte file header plus the
/// largest (124 byte) info header.
pub(crate) const HEADER_READ_SIZE: usize = 138;

/// Size of the file header preceding the info header
pub(crate) const FILE_HEADER_SIZE: u32 = 14;

/// Info header sizes of the Windows variants, v2 (core), v3, v4 and v5
pub(crate) const WINDOWS_HEADER_SIZES: [u32; 4] = [12, 40, 108, 124];

// Byte offsets of the fields we interpret.
pub(crate) const DATA_OFFSET_POS: usize = 10;
pub(crate) const HEADER_SIZE_POS: usize = 14;
pub(crate) const WIDTH_POS: usize = 18;
pub(crate) const HEIGHT_POS: usize = 22;
pub(crate) const DEPTH_POS: usize = 28;
pub(crate) const COMPRESSION_POS: usize = 30;
pub(crate) const COLORS_USED_POS: usize = 46;
pub(crate) const RED_MASK_POS: usize = 54;
pub(crate) const GREEN_MASK_POS: usize = 58;
pub(crate) const BLUE_MASK_POS: usize = 62;

/// Channel masks assumed for 16 bit images without explicit masks
pub(crate) const RGB555_MASKS: [u32; 3] = [0x7c00, 0x03e0, 0x001f];

/// Green mask that identifies a 5:6:5 layout
pub(crate) const RGB565_GREEN_MASK: u32 = 0x07e0;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    Unknown(u32)
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> BmpCompression {
        match num {
            0 => BmpCompression::RGB,
            1 => BmpCompression::RLE8,
            2 => BmpCompression::RLE4,
            3 => BmpCompression::BITFIELDS,
            _ => BmpCompression::Unknown(num)
        }
    }
}

/// How a stored pixel is turned into `0x00RRGGBB`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelLayout {
    /// One bit per pixel, set bits are white
    Mono1,
    /// One byte palette index
    Indexed8,
    /// 16 bits, 5:5:5 shift table
    Rgb555,
    /// 16 bits, 5:6:5 shift table
    Rgb565,
    /// Three bytes, returned as read
    Bgr24,
    /// Four bytes, returned as read including the top byte
    Bgrx32,
    /// Four bytes with BITFIELDS compression, top byte dropped
    Bitfield32
}

impl PixelLayout {
    /// Number of bytes fetched from storage for a single pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelLayout::Mono1 | PixelLayout::Indexed8 => 1,
            PixelLayout::Rgb555 | PixelLayout::Rgb565 => 2,
            PixelLayout::Bgr24 => 3,
            PixelLayout::Bgrx32 | PixelLayout::Bitfield32 => 4
        }
    }
}
