/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// The subset of BMP read here, all values little endian:
//
// | Offset | Field                                   |
// |--------|-----------------------------------------|
// | 0      | magic "BM"                              |
// | 10     | data offset, start of the pixel rows    |
// | 14     | info header size, selects the variant   |
// | 18     | width                                   |
// | 22     | height, positive means bottom-up rows   |
// | 28     | bits per pixel (u16)                    |
// | 30     | compression, 3 is BITFIELDS             |
// | 46     | number of palette colors                |
// | 54..66 | red, green, blue masks (16 bpp only)    |
//
// The colour table, when present, follows the info header at 14 + header size,
// four bytes per entry laid out as B, G, R, X.
//
// Pixel rows are never buffered, the descriptor only carries what is needed to
// compute the file offset of any pixel. See pixel.rs for the lookup itself.

use alloc::vec::Vec;

use ondisk_core::bytestream::{RandomAccessReader, SeekFrom};
use ondisk_core::log::{debug, trace, warn};
use ondisk_core::options::DecoderOptions;

use crate::common::{
    BmpCompression, PixelLayout, BLUE_MASK_POS, COLORS_USED_POS, COMPRESSION_POS,
    DATA_OFFSET_POS, DEPTH_POS, FILE_HEADER_SIZE, GREEN_MASK_POS, HEADER_READ_SIZE,
    HEADER_SIZE_POS, HEIGHT_POS, RED_MASK_POS, RGB555_MASKS, RGB565_GREEN_MASK, WIDTH_POS,
    WINDOWS_HEADER_SIZES
};
use crate::utils::{read_half, read_word, row_stride};
use crate::OnDiskBmpErrors;

/// Probe some bytes to see
/// if they look like a BMP image this crate can open
///
/// This only looks at the magic bytes and the info header size,
/// a `true` here doesn't guarantee [`BitmapDescriptor::parse`] succeeds.
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" && bytes.len() >= HEADER_SIZE_POS + 4 {
            let size = read_word(bytes, HEADER_SIZE_POS);

            return WINDOWS_HEADER_SIZES.contains(&size);
        }
    }
    false
}

/// Everything needed to address pixels of a BMP image in storage.
///
/// Produced once per opened file by [`parse`](Self::parse) and never modified
/// afterwards. It does not hold the reader, the same reader must be passed
/// back to [`get_pixel`](Self::get_pixel).
#[derive(Clone, Debug)]
pub struct BitmapDescriptor {
    pub(crate) width:               u32,
    pub(crate) height:              u32,
    pub(crate) bits_per_pixel:      u16,
    pub(crate) data_offset:         u32,
    pub(crate) stride:              u64,
    pub(crate) header_size:         u32,
    pub(crate) compression:         BmpCompression,
    pub(crate) colors_used:         u32,
    pub(crate) indexed:             bool,
    pub(crate) bitfield_compressed: bool,
    /// red, green, blue
    pub(crate) masks:               [u32; 3],
    pub(crate) layout:              PixelLayout,
    pub(crate) palette:             Option<Vec<u32>>
}

impl BitmapDescriptor {
    /// Read and validate the headers of a BMP file.
    ///
    /// The reader can be positioned anywhere, it is rewound first.
    /// For indexed images the colour table is loaded into memory,
    /// nothing else is kept.
    ///
    /// # Errors
    /// - [`OnDiskBmpErrors::IoErrors`] if the reader fails
    /// - any other variant if the file is not a BMP image we can address
    pub fn parse<R: RandomAccessReader>(reader: &mut R) -> Result<Self, OnDiskBmpErrors> {
        Self::parse_with_options(reader, DecoderOptions::default())
    }

    /// Same as [`parse`](Self::parse) with explicit limits
    pub fn parse_with_options<R: RandomAccessReader>(
        reader: &mut R, options: DecoderOptions
    ) -> Result<Self, OnDiskBmpErrors> {
        reader.rewind()?;

        let mut header = [0_u8; HEADER_READ_SIZE];
        let bytes_read = reader.read_up_to(&mut header)?;

        if bytes_read != HEADER_READ_SIZE {
            return Err(OnDiskBmpErrors::TruncatedHeader(bytes_read));
        }
        if &header[0..2] != b"BM" {
            return Err(OnDiskBmpErrors::InvalidMagicBytes);
        }

        let data_offset = read_word(&header, DATA_OFFSET_POS);
        let header_size = read_word(&header, HEADER_SIZE_POS);
        let bits_per_pixel = read_half(&header, DEPTH_POS);
        let compression_code = read_word(&header, COMPRESSION_POS);
        let colors_used = read_word(&header, COLORS_USED_POS);
        let width = read_word(&header, WIDTH_POS);
        let height = read_word(&header, HEIGHT_POS);

        trace!("Data offset: {}", data_offset);
        trace!("Header size: {}", header_size);
        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Bit depth: {}", bits_per_pixel);
        trace!("Compression: {}", compression_code);
        trace!("Colors used: {}", colors_used);

        let indexed = bits_per_pixel <= 8 && colors_used != 0;
        let compression = BmpCompression::from_u32(compression_code);
        let bitfield_compressed = compression == BmpCompression::BITFIELDS;

        let mut masks = [0; 3];
        let mut palette = None;

        if bits_per_pixel == 16 {
            if header_size >= 56 || bitfield_compressed {
                masks = [
                    read_word(&header, RED_MASK_POS),
                    read_word(&header, GREEN_MASK_POS),
                    read_word(&header, BLUE_MASK_POS)
                ];
            } else {
                // no compression or short header means 5:5:5
                masks = RGB555_MASKS;
            }
        } else if indexed && bits_per_pixel != 1 {
            if colors_used > options.get_max_palette_colors() {
                return Err(OnDiskBmpErrors::TooManyColors(
                    options.get_max_palette_colors(),
                    colors_used
                ));
            }
            let palette_offset = u64::from(FILE_HEADER_SIZE) + u64::from(header_size);

            palette = Some(read_palette(reader, palette_offset, colors_used)?);
        } else if !WINDOWS_HEADER_SIZES.contains(&header_size) {
            return Err(OnDiskBmpErrors::UnsupportedHeaderSize(header_size));
        }

        if bits_per_pixel == 4 || (bits_per_pixel == 8 && colors_used == 0) {
            return Err(OnDiskBmpErrors::UnsupportedDepth(bits_per_pixel));
        }

        let layout = match bits_per_pixel {
            1 => PixelLayout::Mono1,
            8 => PixelLayout::Indexed8,
            16 if masks[1] == RGB565_GREEN_MASK => PixelLayout::Rgb565,
            16 => PixelLayout::Rgb555,
            24 => PixelLayout::Bgr24,
            32 if bitfield_compressed => PixelLayout::Bitfield32,
            32 => PixelLayout::Bgrx32,
            _ => return Err(OnDiskBmpErrors::UnsupportedDepth(bits_per_pixel))
        };

        if matches!(compression, BmpCompression::RLE8 | BmpCompression::RLE4) {
            return Err(OnDiskBmpErrors::UnsupportedCompression(compression_code));
        }
        if (height as i32) < 0 {
            return Err(OnDiskBmpErrors::TopDownUnsupported);
        }
        if width as usize > options.get_max_width() {
            return Err(OnDiskBmpErrors::TooLargeDimensions(
                "width",
                options.get_max_width(),
                width as usize
            ));
        }
        if height as usize > options.get_max_height() {
            return Err(OnDiskBmpErrors::TooLargeDimensions(
                "height",
                options.get_max_height(),
                height as usize
            ));
        }
        if layout == PixelLayout::Bitfield32 {
            warn!("32 bpp BITFIELDS masks are ignored, assuming byte aligned channels");
        }

        let stride = row_stride(width, bits_per_pixel);

        debug!("Pixel layout: {:?}", layout);
        debug!("Stride: {}", stride);

        Ok(BitmapDescriptor {
            width,
            height,
            bits_per_pixel,
            data_offset,
            stride,
            header_size,
            compression,
            colors_used,
            indexed,
            bitfield_compressed,
            masks,
            layout,
            palette
        })
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }
    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    pub const fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }
    /// Absolute file offset of the first stored row (the bottom one)
    pub const fn data_offset(&self) -> u32 {
        self.data_offset
    }
    /// Bytes per stored row including padding, always a multiple of 4
    pub const fn stride(&self) -> u64 {
        self.stride
    }
    pub const fn header_size(&self) -> u32 {
        self.header_size
    }
    pub const fn compression(&self) -> BmpCompression {
        self.compression
    }
    /// Number of palette entries declared in the header
    pub const fn colors_used(&self) -> u32 {
        self.colors_used
    }
    /// Whether pixel values are palette indices
    pub const fn is_indexed(&self) -> bool {
        self.indexed
    }
    pub const fn is_bitfield_compressed(&self) -> bool {
        self.bitfield_compressed
    }
    /// Red, green and blue channel masks.
    ///
    /// Only meaningful for 16 bpp images, zero otherwise.
    pub const fn masks(&self) -> [u32; 3] {
        self.masks
    }
    pub const fn pixel_layout(&self) -> PixelLayout {
        self.layout
    }
    /// The colour table as `0xXXRRGGBB` words, present for 8 bpp images only
    pub fn palette(&self) -> Option<&[u32]> {
        self.palette.as_deref()
    }
}

/// Load `colors` palette entries starting at `offset`.
///
/// The table is grown as bytes arrive so a header claiming a huge palette
/// in a short file fails before allocating for it.
fn read_palette<R: RandomAccessReader>(
    reader: &mut R, offset: u64, colors: u32
) -> Result<Vec<u32>, OnDiskBmpErrors> {
    let palette_size = u64::from(colors) * 4;
    let mut palette = Vec::with_capacity(colors.min(256) as usize);

    reader.rewind()?;
    reader.seek_to(SeekFrom::Start(offset))?;

    let mut chunk = [0_u8; 256];
    let mut remaining = palette_size;

    while remaining > 0 {
        let wanted = remaining.min(chunk.len() as u64) as usize;
        let bytes_read = reader.read_up_to(&mut chunk[..wanted])?;

        if bytes_read != wanted {
            let found = palette_size - remaining + bytes_read as u64;
            return Err(OnDiskBmpErrors::PaletteTooShort(palette_size, found));
        }
        palette.extend(
            chunk[..wanted]
                .chunks_exact(4)
                .map(|entry| u32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]))
        );
        remaining -= wanted as u64;
    }
    trace!("Loaded {} palette entries from offset {}", colors, offset);

    Ok(palette)
}
