/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use ondisk_core::bytestream::ByteIoError;

/// Errors that can occur while opening a BMP image
///
/// Pixel reads never fail, see [`BitmapDescriptor::get_pixel`](crate::BitmapDescriptor::get_pixel)
#[non_exhaustive]
pub enum OnDiskBmpErrors {
    /// The file does not start with `BM`
    InvalidMagicBytes,
    /// The file ended before the full header could be read,
    /// contains the number of bytes that were available
    TruncatedHeader(usize),
    /// The info header is not one of the Windows variants
    UnsupportedHeaderSize(u32),
    /// Bit depth we cannot decode
    UnsupportedDepth(u16),
    /// RLE compressed bitmaps can't be addressed per pixel
    UnsupportedCompression(u32),
    /// Negative height, rows are stored top to bottom
    TopDownUnsupported,
    /// The colour table is shorter than declared, expected
    /// a size but got another size
    PaletteTooShort(u64, u64),
    /// More palette entries than the options allow,
    /// (limit, declared)
    TooManyColors(u32, u32),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// The underlying storage failed
    IoErrors(ByteIoError)
}

impl OnDiskBmpErrors {
    /// Whether this error came from the storage layer rather
    /// than from the contents of the file
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoErrors(_))
    }

    /// Whether the file was read but its contents are not a BMP
    /// image this decoder can handle
    pub const fn is_format_error(&self) -> bool {
        !self.is_io_error()
    }
}

impl Debug for OnDiskBmpErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid BMP file, file does not start with BM")
            }
            Self::TruncatedHeader(found) => {
                writeln!(f, "Invalid BMP file, header is {found} bytes long")
            }
            Self::UnsupportedHeaderSize(size) => {
                writeln!(
                    f,
                    "Only Windows format, uncompressed BMP supported: given header size is {size}"
                )
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Only monochrome, indexed 8bpp, and 16bpp or greater BMPs supported: {depth} bpp given"
                )
            }
            Self::UnsupportedCompression(compression) => {
                writeln!(f, "Compressed BMPs are not supported, compression {compression}")
            }
            Self::TopDownUnsupported => {
                writeln!(f, "Top down BMPs are not supported")
            }
            Self::PaletteTooShort(expected, found) => {
                writeln!(
                    f,
                    "Unable to read color palette data, expected {expected} bytes but found {found}"
                )
            }
            Self::TooManyColors(limit, found) => {
                writeln!(f, "Too many palette colors, {found} exceeds {limit}")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for OnDiskBmpErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OnDiskBmpErrors {}

impl From<ByteIoError> for OnDiskBmpErrors {
    fn from(value: ByteIoError) -> Self {
        OnDiskBmpErrors::IoErrors(value)
    }
}
