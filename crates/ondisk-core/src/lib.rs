/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the ondisk decoders
//!
//! It currently contains
//!
//! - A random access reader trait, the seam between a decoder
//!   and whatever storage holds the image (a FAT file on an sd card,
//!   a `std::fs::File`, an in memory buffer)
//! - Decoder options shared by all decoders
//! - Logging macros that forward to the `log` crate or compile to nothing
//!
//! This library is `#[no_std]` with `alloc` unless the `std` feature
//! is enabled.
//!
//! # Features
//!  - `std`: Implements [`RandomAccessReader`](bytestream::RandomAccessReader)
//!     for `std::io::Cursor`, `std::io::BufReader` and `std::fs::File`
//!  - `log`: Route [`log`] macros to the `log` crate instead of discarding them
//!
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(feature = "log")]
pub use ::log;

pub mod bytestream;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
