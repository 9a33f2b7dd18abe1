/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Single pixel lookups
//!
//! Every lookup is a seek and a read of at most four bytes. Nothing is cached,
//! storage layers that care (FAT drivers, `BufReader`) cache sectors themselves.

use ondisk_core::bytestream::{ByteIoError, RandomAccessReader, SeekFrom};
use ondisk_core::log::{trace, warn};

use crate::common::PixelLayout;
use crate::BitmapDescriptor;

/// Value returned for pixels outside the image and for pixels that
/// could not be read
pub const NO_PIXEL: u32 = 0x0000_0000;

const WHITE: u32 = 0x00FF_FFFF;

impl BitmapDescriptor {
    /// Absolute file offset of the byte holding pixel `(x, y)`.
    ///
    /// `(0, 0)` is the top left corner, rows are stored bottom-up.
    /// Returns `None` when the coordinates are outside the image or
    /// the offset does not fit in a `u64`, which a header claiming
    /// billions of rows of gigabyte strides can produce.
    pub fn pixel_offset(&self, x: i32, y: i32) -> Option<u64> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let (x, y) = (u64::from(x as u32), u64::from(y as u32));
        let row = (u64::from(self.height) - y - 1).checked_mul(self.stride)?;

        let column = if self.bits_per_pixel >= 8 {
            x.checked_mul(self.layout.bytes_per_pixel() as u64)?
        } else {
            x / 8
        };
        u64::from(self.data_offset)
            .checked_add(row)?
            .checked_add(column)
    }

    /// Read pixel `(x, y)` from `reader` as `0x00RRGGBB`.
    ///
    /// `reader` must be the same source the descriptor was parsed from.
    ///
    /// This never fails. Out of range coordinates return `0`, as do pixels
    /// whose offset overflows and pixels whose bytes can't be read.
    ///
    /// The exception to the `0x00RRGGBB` shape is 32 bpp without BITFIELDS,
    /// which returns the stored word as is, top byte included.
    pub fn get_pixel<R: RandomAccessReader>(&self, reader: &mut R, x: i32, y: i32) -> u32 {
        let Some(location) = self.pixel_offset(x, y) else {
            return NO_PIXEL;
        };

        let mut raw = [0_u8; 4];
        let bytes_per_pixel = self.layout.bytes_per_pixel();

        match fetch(reader, location, &mut raw[..bytes_per_pixel]) {
            Ok(()) => self.convert(u32::from_le_bytes(raw), x as u32),
            Err(err) => {
                trace!("Could not read pixel ({x},{y}) at {location}: {:?}", err);
                NO_PIXEL
            }
        }
    }

    /// Turn the stored bytes of a pixel into `0x00RRGGBB`
    fn convert(&self, raw: u32, x: u32) -> u32 {
        match self.layout {
            PixelLayout::Mono1 => {
                let bit_offset = x % 8;
                if raw & (0x80 >> bit_offset) != 0 {
                    WHITE
                } else {
                    NO_PIXEL
                }
            }
            PixelLayout::Indexed8 => {
                let entry = self
                    .palette
                    .as_deref()
                    .and_then(|palette| palette.get(raw as usize).copied());

                match entry {
                    Some(entry) => palette_to_rgb(entry),
                    None => {
                        warn!("Palette index {} out of range", raw);
                        NO_PIXEL
                    }
                }
            }
            PixelLayout::Rgb565 => expand_rgb16(raw, self.masks, [11, 5]),
            PixelLayout::Rgb555 => expand_rgb16(raw, self.masks, [10, 4]),
            PixelLayout::Bitfield32 => raw & 0x00FF_FFFF,
            PixelLayout::Bgr24 | PixelLayout::Bgrx32 => raw
        }
    }
}

fn fetch<R: RandomAccessReader>(
    reader: &mut R, location: u64, buf: &mut [u8]
) -> Result<(), ByteIoError> {
    reader.seek_to(SeekFrom::Start(location))?;
    reader.read_exact_bytes(buf)
}

/// Palette entries are stored B, G, R, X, the X byte is dropped
#[inline]
fn palette_to_rgb(entry: u32) -> u32 {
    let blue = entry & 0xFF;
    let green = (entry >> 8) & 0xFF;
    let red = (entry >> 16) & 0xFF;

    red << 16 | green << 8 | blue
}

/// Spread a packed 16 bit pixel over 24 bits.
///
/// Channels are masked, shifted down by `shifts` (red, green, blue is never
/// shifted) and truncated to a byte, then placed with `<<19`, `<<10`, `<<3`.
/// Low bits are left at zero rather than replicated, so full intensity white
/// comes out as `0xF8FCF8` (5:6:5) or `0xF8F8F8` (5:5:5). Existing assets are
/// tuned against exactly this output.
#[inline]
fn expand_rgb16(raw: u32, masks: [u32; 3], shifts: [u32; 2]) -> u32 {
    let [red_mask, green_mask, blue_mask] = masks;

    let red = ((raw & red_mask) >> shifts[0]) as u8;
    let green = ((raw & green_mask) >> shifts[1]) as u8;
    let blue = (raw & blue_mask) as u8;

    u32::from(red) << 19 | u32::from(green) << 10 | u32::from(blue) << 3
}
