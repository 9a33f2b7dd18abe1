/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::debug;
use ondisk_bmp::OnDiskBitmap;
use ondisk_core::bytestream::RandomAccessReader;

// darkest to brightest
const RAMP: &[u8] = b" .:-=+*#%@";

// pixels are addressed with i32
const QUERYABLE_LIMIT: u32 = 1 << 31;

/// Map a `0x00RRGGBB` color to a character of the ramp by its luma
fn shade(color: u32) -> char {
    let [blue, green, red, _] = color.to_le_bytes();
    // BT.601 weights, scaled by 1000
    let luma = 299 * u32::from(red) + 587 * u32::from(green) + 114 * u32::from(blue);
    let index = (luma * (RAMP.len() as u32 - 1)) / (255 * 1000);

    char::from(RAMP[index as usize])
}

/// Sample the image on a grid at most `columns` wide and return it as text.
///
/// Terminal cells are about twice as tall as wide so every other sampled
/// row is skipped.
pub fn ascii_art<R: RandomAccessReader>(bitmap: &mut OnDiskBitmap<R>, columns: u32) -> String {
    let (width, height) = (bitmap.width(), bitmap.height());
    let step = width.div_ceil(columns.max(1)).max(1);

    debug!("Sampling every {} pixels", step);

    let mut out = String::new();

    // anything past i32::MAX cannot be queried
    let (width, height) = (width.min(QUERYABLE_LIMIT), height.min(QUERYABLE_LIMIT));

    for y in (0..height).step_by(step as usize * 2) {
        for x in (0..width).step_by(step as usize) {
            out.push(shade(bitmap.get_pixel(x as i32, y as i32) & 0x00FF_FFFF));
        }
        out.push('\n');
    }
    out
}
