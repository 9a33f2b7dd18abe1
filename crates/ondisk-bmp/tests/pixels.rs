/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

mod common;

use std::collections::HashSet;

use common::{BmpBuilder, FailingReader};
use ondisk_bmp::{BitmapDescriptor, OnDiskBitmap, NO_PIXEL};
use ondisk_core::bytestream::ByteCursor;

fn bgr(color: u32) -> [u8; 3] {
    let [b, g, r, _] = color.to_le_bytes();
    [b, g, r]
}

#[test]
fn rgb24_round_trip_is_bottom_up() {
    let top_left = 0x00_11_22_33;
    let top_right = 0x00_44_55_66;
    let bottom_left = 0x00_77_88_99;
    let bottom_right = 0x00_aa_bb_cc;

    let rows = vec![
        [bgr(top_left), bgr(top_right)].concat(),
        [bgr(bottom_left), bgr(bottom_right)].concat(),
    ];
    let builder = BmpBuilder::new(2, 2, 24).rows(rows);
    let file = builder.build();

    // bottom row is stored first, right after the header
    assert_eq!(&file[54..60], &[0x99, 0x88, 0x77, 0xcc, 0xbb, 0xaa]);
    // 6 bytes of pixels, 2 of padding, then the top row
    assert_eq!(&file[60..62], &[0, 0]);
    assert_eq!(&file[62..65], &[0x33, 0x22, 0x11]);

    let mut bitmap = OnDiskBitmap::open(ByteCursor::new(file)).unwrap();

    assert_eq!(bitmap.descriptor().stride(), 8);
    assert_eq!(bitmap.get_pixel(0, 0), top_left);
    assert_eq!(bitmap.get_pixel(1, 0), top_right);
    assert_eq!(bitmap.get_pixel(0, 1), bottom_left);
    assert_eq!(bitmap.get_pixel(1, 1), bottom_right);

    // any order works, nothing is cached
    assert_eq!(bitmap.get_pixel(1, 1), bottom_right);
    assert_eq!(bitmap.get_pixel(0, 0), top_left);

    assert_eq!(bitmap.get_pixel_rgb(1, 0), [0x44, 0x55, 0x66]);
}

#[test]
fn out_of_range_pixels_are_zero() {
    let rows = vec![vec![0xff; 9]; 3];
    let mut bitmap = OnDiskBitmap::open(BmpBuilder::new(3, 3, 24).rows(rows).cursor()).unwrap();

    assert_eq!(bitmap.get_pixel(2, 2), 0x00ff_ffff);

    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX), (100, 100)] {
        assert_eq!(bitmap.get_pixel(x, y), NO_PIXEL, "({x},{y})");
    }
    assert_eq!(bitmap.descriptor().pixel_offset(3, 0), None);
}

#[test]
fn zero_sized_images_have_no_pixels() {
    let mut bitmap = OnDiskBitmap::open(BmpBuilder::new(0, 0, 24).cursor()).unwrap();

    assert_eq!(bitmap.get_pixel(0, 0), NO_PIXEL);
}

#[test]
fn mono_is_black_or_white_msb_first() {
    // 10 pixels wide so the row spans two bytes
    let rows = vec![vec![0b1000_0001, 0b0100_0000], vec![0b0101_0101, 0b1100_0000]];
    let builder = BmpBuilder::new(10, 2, 1).rows(rows);
    let mut bitmap = OnDiskBitmap::open(builder.cursor()).unwrap();

    let top: Vec<u32> = (0..10).map(|x| bitmap.get_pixel(x, 0)).collect();
    let w = 0x00ff_ffff;
    assert_eq!(top, [w, 0, 0, 0, 0, 0, 0, w, 0, w]);

    let bottom: Vec<u32> = (0..10).map(|x| bitmap.get_pixel(x, 1)).collect();
    assert_eq!(bottom, [0, w, 0, w, 0, w, 0, w, w, w]);
}

#[test]
fn mono_never_returns_other_colors() {
    let rows = (0..16_u8)
        .map(|i| vec![i.wrapping_mul(37), !i, i << 3, 0xa5])
        .collect();
    let mut bitmap = OnDiskBitmap::open(BmpBuilder::new(29, 16, 1).rows(rows).cursor()).unwrap();

    for y in 0..16 {
        for x in 0..29 {
            let pixel = bitmap.get_pixel(x, y);
            assert!(pixel == 0 || pixel == 0x00ff_ffff);
        }
    }
}

#[test]
fn indexed_pixels_come_from_the_palette() {
    let palette: Vec<u32> = (0..256_u32)
        .map(|i| 0x1000_0000 | (i << 16) | ((255 - i) << 8) | (i / 2))
        .collect();
    let rows: Vec<Vec<u8>> = (0..8_u8)
        .map(|y| (0..13_u8).map(|x| y.wrapping_mul(31).wrapping_add(x * 7)).collect())
        .collect();
    let builder = BmpBuilder::new(13, 8, 8).palette(&palette).rows(rows.clone());
    let mut bitmap = OnDiskBitmap::open(builder.cursor()).unwrap();

    let colors: HashSet<u32> = palette.iter().map(|entry| entry & 0x00ff_ffff).collect();

    for y in 0..8 {
        for x in 0..13 {
            let index = rows[y][x] as usize;
            let pixel = bitmap.get_pixel(x as i32, y as i32);

            // the reserved byte of the entry is dropped
            assert_eq!(pixel, palette[index] & 0x00ff_ffff);
            assert!(colors.contains(&pixel));
        }
    }
}

#[test]
fn palette_index_past_the_table_is_zero() {
    let rows = vec![vec![0, 1, 2, 200]];
    let builder = BmpBuilder::new(4, 1, 8)
        .palette(&[0x00ff_0000, 0x0000_ff00, 0x0000_00ff])
        .rows(rows);
    let mut bitmap = OnDiskBitmap::open(builder.cursor()).unwrap();

    assert_eq!(bitmap.get_pixel(0, 0), 0x00ff_0000);
    assert_eq!(bitmap.get_pixel(1, 0), 0x0000_ff00);
    assert_eq!(bitmap.get_pixel(2, 0), 0x0000_00ff);
    assert_eq!(bitmap.get_pixel(3, 0), NO_PIXEL);
}

#[test]
fn rgb565_and_rgb555_decode_white_differently() {
    let rows = vec![vec![0xff, 0xff, 0x00, 0xf8]];

    let rgb565 = BmpBuilder::new(2, 1, 16)
        .compression(3)
        .masks([0xf800, 0x07e0, 0x001f])
        .rows(rows.clone());
    let mut bitmap = OnDiskBitmap::open(rgb565.cursor()).unwrap();
    assert_eq!(bitmap.get_pixel(0, 0), 0x00f8_fcf8);
    // 0xf800, pure red
    assert_eq!(bitmap.get_pixel(1, 0), 0x00f8_0000);

    let rgb555 = BmpBuilder::new(2, 1, 16).rows(rows);
    let mut bitmap = OnDiskBitmap::open(rgb555.cursor()).unwrap();
    assert_eq!(bitmap.get_pixel(0, 0), 0x00f8_f8f8);
    // 0xf800 under 5:5:5 masks loses bit 15 and has no green
    assert_eq!(bitmap.get_pixel(1, 0), 0x1e << 19);
}

#[test]
fn rgb16_rows_are_padded() {
    // 3 pixels, 6 bytes, padded to 8
    let rows = vec![
        vec![0x1f, 0x00, 0xe0, 0x03, 0x00, 0x7c],
        vec![0x00, 0x00, 0x00, 0x00, 0xff, 0x7f],
    ];
    let mut bitmap = OnDiskBitmap::open(BmpBuilder::new(3, 2, 16).rows(rows).cursor()).unwrap();

    assert_eq!(bitmap.descriptor().stride(), 8);
    assert_eq!(bitmap.get_pixel(0, 0), 0x0000_00f8);
    assert_eq!(bitmap.get_pixel(1, 0), 0x0000_f800);
    assert_eq!(bitmap.get_pixel(2, 0), 0x00f8_0000);
    assert_eq!(bitmap.get_pixel(0, 1), 0);
    assert_eq!(bitmap.get_pixel(2, 1), 0x00f8_f8f8);
}

#[test]
fn rgb32_returns_the_stored_word() {
    let rows = vec![vec![0x33, 0x22, 0x11, 0xee, 0x66, 0x55, 0x44, 0x00]];

    let mut bitmap = OnDiskBitmap::open(BmpBuilder::new(2, 1, 32).rows(rows.clone()).cursor())
        .unwrap();
    assert_eq!(bitmap.get_pixel(0, 0), 0xee11_2233);
    assert_eq!(bitmap.get_pixel(1, 0), 0x0044_5566);

    let bitfields = BmpBuilder::new(2, 1, 32)
        .compression(3)
        .masks([0x00ff_0000, 0x0000_ff00, 0x0000_00ff])
        .rows(rows);
    let mut bitmap = OnDiskBitmap::open(bitfields.cursor()).unwrap();
    assert_eq!(bitmap.get_pixel(0, 0), 0x0011_2233);
    assert_eq!(bitmap.get_pixel(1, 0), 0x0044_5566);
}

#[test]
fn pixel_offsets_follow_bottom_up_rows() {
    let builder = BmpBuilder::new(5, 4, 24);
    let descriptor = BitmapDescriptor::parse(&mut builder.cursor()).unwrap();
    let base = builder.data_offset() as u64;

    assert_eq!(descriptor.pixel_offset(0, 3), Some(base));
    assert_eq!(descriptor.pixel_offset(4, 3), Some(base + 12));
    assert_eq!(descriptor.pixel_offset(0, 0), Some(base + 3 * 16));

    let builder = BmpBuilder::new(40, 2, 1);
    let descriptor = BitmapDescriptor::parse(&mut builder.cursor()).unwrap();
    let base = builder.data_offset() as u64;

    assert_eq!(descriptor.pixel_offset(7, 1), Some(base));
    assert_eq!(descriptor.pixel_offset(8, 1), Some(base + 1));
    assert_eq!(descriptor.pixel_offset(39, 0), Some(base + 8 + 4));
}

#[test]
fn offsets_too_large_for_u64_are_zero() {
    let builder = BmpBuilder::new(u32::MAX, 0x7fff_ffff, 32);
    let mut bitmap = OnDiskBitmap::open(ByteCursor::new(builder.build_headers())).unwrap();
    let descriptor = bitmap.descriptor().clone();

    assert_eq!(descriptor.stride(), 4 * u64::from(u32::MAX));
    // (height - 1) * stride is past u64::MAX
    assert_eq!(descriptor.pixel_offset(0, 0), None);
    assert_eq!(bitmap.get_pixel(0, 0), NO_PIXEL);
    assert_eq!(bitmap.get_pixel(i32::MAX, 0), NO_PIXEL);

    // the bottom row is still addressable
    let bottom = 0x7fff_fffe;
    assert_eq!(
        descriptor.pixel_offset(1, bottom),
        Some(builder.data_offset() as u64 + 4)
    );
    assert_eq!(bitmap.get_pixel(1, bottom), NO_PIXEL);
}

#[test]
fn unreadable_pixels_are_zero() {
    let rows = vec![vec![0xff; 6]; 2];
    let builder = BmpBuilder::new(2, 2, 24).rows(rows);
    let data_offset = builder.data_offset() as u64;

    let mut reader = FailingReader::failing_reads_from(builder.build(), data_offset);
    let descriptor = BitmapDescriptor::parse(&mut reader).unwrap();

    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(descriptor.get_pixel(&mut reader, x, y), NO_PIXEL);
    }
}

#[test]
fn pixels_past_the_end_of_the_file_are_zero() {
    // data offset points far past the end of the file
    let mut file = BmpBuilder::new(2, 2, 24).build();
    file[10..14].copy_from_slice(&10_000_u32.to_le_bytes());

    let mut bitmap = OnDiskBitmap::open(ByteCursor::new(file)).unwrap();
    assert_eq!(bitmap.get_pixel(0, 0), NO_PIXEL);
    assert_eq!(bitmap.get_pixel(1, 1), NO_PIXEL);
}

#[test]
fn partially_stored_pixels_are_zero() {
    let rows = vec![vec![0xff; 3]];
    let builder = BmpBuilder::new(1, 1, 24).header_size(124).rows(rows);
    let mut file = builder.build();
    let data_offset = builder.data_offset();
    // cut the file in the middle of the only pixel
    file.truncate(data_offset + 2);

    let mut bitmap = OnDiskBitmap::open(ByteCursor::new(file)).unwrap();
    assert_eq!(bitmap.get_pixel(0, 0), NO_PIXEL);
}

#[test]
fn reads_from_a_real_file() {
    let rows = vec![
        [bgr(0x0001_0203), bgr(0x0004_0506)].concat(),
        [bgr(0x0007_0809), bgr(0x000a_0b0c)].concat(),
    ];
    let file = BmpBuilder::new(2, 2, 24).rows(rows).build();

    let path = std::env::temp_dir().join(format!("ondisk-bmp-{}.bmp", std::process::id()));
    std::fs::write(&path, &file).unwrap();

    let handle = std::fs::File::open(&path).unwrap();
    let mut bitmap = OnDiskBitmap::open(std::io::BufReader::new(handle)).unwrap();

    assert_eq!(bitmap.get_pixel(1, 0), 0x0004_0506);
    assert_eq!(bitmap.get_pixel(0, 1), 0x0007_0809);
    assert_eq!((bitmap.width(), bitmap.height()), (2, 2));

    drop(bitmap.into_inner());
    std::fs::remove_file(&path).unwrap();
}
