/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use ondisk_core::bytestream::ByteCursor;
use ondisk_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    // keep huge dimensions from turning one input into hours of lookups
    let options = DecoderOptions::default()
        .set_max_width(256)
        .set_max_height(256);

    if let Ok(mut bitmap) = ondisk_bmp::OnDiskBitmap::open_with_options(ByteCursor::new(data), options) {
        let (width, height) = (bitmap.width() as i32, bitmap.height() as i32);

        for y in -1..=height {
            for x in -1..=width {
                let _ = bitmap.get_pixel(x, y);
            }
        }
    }
});
