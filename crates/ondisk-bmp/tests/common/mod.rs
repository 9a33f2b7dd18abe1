/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![allow(dead_code)]

use ondisk_core::bytestream::{ByteCursor, ByteIoError, RandomAccessReader, SeekFrom};

/// Writes small BMP files for tests.
///
/// Rows are given top row first, the builder stores them bottom-up and pads
/// them. Files are padded to at least 138 bytes since that's what the header
/// read needs.
pub struct BmpBuilder {
    width:       u32,
    height:      u32,
    depth:       u16,
    header_size: u32,
    compression: u32,
    colors_used: Option<u32>,
    palette:     Vec<u32>,
    masks:       Option<[u32; 3]>,
    rows:        Vec<Vec<u8>>
}

impl BmpBuilder {
    pub fn new(width: u32, height: u32, depth: u16) -> BmpBuilder {
        BmpBuilder {
            width,
            height,
            depth,
            header_size: 40,
            compression: 0,
            colors_used: None,
            palette: vec![],
            masks: None,
            rows: vec![]
        }
    }
    pub fn header_size(mut self, size: u32) -> Self {
        self.header_size = size;
        self
    }
    pub fn compression(mut self, compression: u32) -> Self {
        self.compression = compression;
        self
    }
    /// Override the declared palette size
    pub fn colors_used(mut self, colors: u32) -> Self {
        self.colors_used = Some(colors);
        self
    }
    /// Palette entries as `0x00RRGGBB`
    pub fn palette(mut self, entries: &[u32]) -> Self {
        self.palette = entries.to_vec();
        self
    }
    pub fn masks(mut self, masks: [u32; 3]) -> Self {
        self.masks = Some(masks);
        self
    }
    pub fn rows(mut self, rows: Vec<Vec<u8>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn stride(&self) -> usize {
        ((self.width as usize * self.depth as usize + 31) / 32) * 4
    }

    pub fn data_offset(&self) -> usize {
        let mut offset = 14 + self.header_size as usize + self.palette.len() * 4;
        if self.masks.is_some() && self.header_size < 56 {
            offset += 12;
        }
        offset
    }

    pub fn build(&self) -> Vec<u8> {
        let file_size = (self.data_offset() + self.stride() * self.height as usize).max(138);
        self.write(file_size)
    }

    /// Only the headers and palette, for dimensions too large to store
    pub fn build_headers(&self) -> Vec<u8> {
        self.write(self.data_offset().max(138))
    }

    fn write(&self, file_size: usize) -> Vec<u8> {
        let data_offset = self.data_offset();
        let stride = self.stride();

        let mut out = vec![0_u8; file_size];

        out[0..2].copy_from_slice(b"BM");
        put_u32(&mut out, 2, file_size as u32);
        put_u32(&mut out, 10, data_offset as u32);
        put_u32(&mut out, 14, self.header_size);
        put_u32(&mut out, 18, self.width);
        put_u32(&mut out, 22, self.height);
        out[26..28].copy_from_slice(&1_u16.to_le_bytes());
        out[28..30].copy_from_slice(&self.depth.to_le_bytes());
        put_u32(&mut out, 30, self.compression);
        put_u32(
            &mut out,
            46,
            self.colors_used.unwrap_or(self.palette.len() as u32)
        );
        if let Some([r, g, b]) = self.masks {
            put_u32(&mut out, 54, r);
            put_u32(&mut out, 58, g);
            put_u32(&mut out, 62, b);
        }
        let palette_start = 14 + self.header_size as usize;
        for (i, entry) in self.palette.iter().enumerate() {
            put_u32(&mut out, palette_start + i * 4, *entry);
        }
        for (i, row) in self.rows.iter().rev().enumerate() {
            let start = data_offset + i * stride;
            out[start..start + row.len()].copy_from_slice(row);
        }
        out
    }

    pub fn cursor(&self) -> ByteCursor<Vec<u8>> {
        ByteCursor::new(self.build())
    }
}

fn put_u32(out: &mut [u8], offset: usize, value: u32) {
    out[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// A reader whose storage goes bad from a given offset onwards
pub struct FailingReader {
    inner:     ByteCursor<Vec<u8>>,
    fail_from: u64,
    fail_seek: bool
}

impl FailingReader {
    /// Reads starting at or after `fail_from` report an I/O error
    pub fn failing_reads_from(data: Vec<u8>, fail_from: u64) -> FailingReader {
        FailingReader {
            inner: ByteCursor::new(data),
            fail_from,
            fail_seek: false
        }
    }
    /// Every seek reports an I/O error
    pub fn failing_seeks(data: Vec<u8>) -> FailingReader {
        FailingReader {
            inner:     ByteCursor::new(data),
            fail_from: u64::MAX,
            fail_seek: true
        }
    }
}

impl RandomAccessReader for FailingReader {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        if self.inner.position()? >= self.fail_from {
            return Err(ByteIoError::Generic("bad sector"));
        }
        self.inner.read_bytes(buf)
    }

    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        if self.fail_seek {
            return Err(ByteIoError::SeekError("seek failed"));
        }
        self.inner.seek_to(from)
    }

    fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.position()
    }
}
