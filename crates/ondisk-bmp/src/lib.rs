/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A BMP decoder for devices without memory for a framebuffer
//!
//! Headers are parsed once into a [`BitmapDescriptor`], after that every pixel
//! is read straight from storage when asked for, in any order. The only heap
//! allocation is the colour table of 8 bpp images.
//!
//! # Features
//! - `no_std` by default with `alloc`
//! - `std`: `std::error::Error` for errors and readers for `std::io` types
//!
//! # Supported formats
//! - Monochrome (1 bit, rendered black and white)
//! - Paletted 8 bit images
//! - 16 bit images, 5:5:5 and 5:6:5
//! - 24 and 32 bit images, including 32 bit BITFIELDS with byte aligned masks
//!
//! # Unsupported formats
//! - RLE compressed images
//! - 4 bit images, and 8 bit images without a colour table
//! - Top down images (negative height)
//! - OS/2 variants

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use crate::bitmap::OnDiskBitmap;
pub use crate::common::{BmpCompression, PixelLayout};
pub use crate::descriptor::{probe_bmp, BitmapDescriptor};
pub use crate::errors::OnDiskBmpErrors;
pub use crate::pixel::NO_PIXEL;

mod bitmap;
mod common;
mod descriptor;
mod errors;
mod pixel;
mod utils;
