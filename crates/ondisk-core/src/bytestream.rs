/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Random access byte input
//!
//! Decoders in this family never load a whole file, they seek to the
//! bytes they need and read them. Anything implementing [`RandomAccessReader`]
//! can back a decoder.
pub use reader::{ByteCursor, ByteIoError, SeekFrom};
pub use traits::RandomAccessReader;

mod reader;
mod traits;
