/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ondisk_core::bytestream::RandomAccessReader;
use ondisk_core::options::DecoderOptions;

use crate::{BitmapDescriptor, OnDiskBmpErrors};

/// An open BMP image whose pixels stay in storage.
///
/// Owns the reader and the parsed descriptor, so pixels can be queried
/// without passing the reader around. Only one caller may use a given
/// reader at a time, which owning it guarantees.
///
/// # Usage
/// ```no_run
/// use ondisk_bmp::OnDiskBitmap;
/// use ondisk_core::bytestream::ByteCursor;
///
/// fn main() -> Result<(), ondisk_bmp::OnDiskBmpErrors> {
///     let source = ByteCursor::new(std::fs::read("sprite.bmp").unwrap());
///     let mut bitmap = OnDiskBitmap::open(source)?;
///
///     for y in 0..bitmap.height() as i32 {
///         for x in 0..bitmap.width() as i32 {
///             let _color = bitmap.get_pixel(x, y);
///         }
///     }
///     Ok(())
/// }
/// ```
pub struct OnDiskBitmap<R: RandomAccessReader> {
    reader:     R,
    descriptor: BitmapDescriptor
}

impl<R: RandomAccessReader> OnDiskBitmap<R> {
    /// Parse the headers of `reader` and keep it for later pixel reads
    pub fn open(reader: R) -> Result<OnDiskBitmap<R>, OnDiskBmpErrors> {
        OnDiskBitmap::open_with_options(reader, DecoderOptions::default())
    }

    /// Create a new instance with specified options
    pub fn open_with_options(
        mut reader: R, options: DecoderOptions
    ) -> Result<OnDiskBitmap<R>, OnDiskBmpErrors> {
        let descriptor = BitmapDescriptor::parse_with_options(&mut reader, options)?;

        Ok(OnDiskBitmap { reader, descriptor })
    }

    /// Read pixel `(x, y)` as `0x00RRGGBB`, see [`BitmapDescriptor::get_pixel`]
    pub fn get_pixel(&mut self, x: i32, y: i32) -> u32 {
        self.descriptor.get_pixel(&mut self.reader, x, y)
    }

    /// Read pixel `(x, y)` split into `[red, green, blue]`
    pub fn get_pixel_rgb(&mut self, x: i32, y: i32) -> [u8; 3] {
        let [blue, green, red, _] = self.get_pixel(x, y).to_le_bytes();
        [red, green, blue]
    }

    pub fn width(&self) -> u32 {
        self.descriptor.width()
    }

    pub fn height(&self) -> u32 {
        self.descriptor.height()
    }

    pub fn descriptor(&self) -> &BitmapDescriptor {
        &self.descriptor
    }

    /// Close the image, returning
    /// the underlying source of the bytes
    /// from which we were decoding
    pub fn into_inner(self) -> R {
        self.reader
    }
}
