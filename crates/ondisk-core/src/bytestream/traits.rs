/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The reader trait implemented by storage backends

use crate::bytestream::reader::{ByteIoError, SeekFrom};

/// Random access input used by the ondisk decoders.
///
/// Only three primitives need to be provided, a possibly short read,
/// a seek and a position query. Everything else is built on top.
///
/// Implementations are expected to be deterministic, decoders do not retry
/// failed reads.
pub trait RandomAccessReader {
    /// Read bytes into `buf` returning how many bytes were read or an error
    /// if the underlying storage failed.
    ///
    /// A return of `Ok(0)` for a non-empty `buf` means end of input.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// Seek to a new position, returning the new absolute position
    ///
    /// Seeking past the end is allowed, the next read will then return `Ok(0)`.
    /// Seeking before byte zero is an error.
    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError>;

    /// Return the current absolute position of the reader
    fn position(&mut self) -> Result<u64, ByteIoError>;

    /// Move back to the start of the input
    fn rewind(&mut self) -> Result<(), ByteIoError> {
        self.seek_to(SeekFrom::Start(0))?;
        Ok(())
    }

    /// Keep reading until `buf` is full or the input runs out.
    ///
    /// # Returns
    /// - `Ok(usize)`: bytes actually placed in `buf`, less than `buf.len()` only at end of input
    /// - `Err()`: the storage reported a failure
    fn read_up_to(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.read_bytes(&mut buf[filled..])?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }

    /// Read exactly `buf.len()` bytes or return an error
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let read = self.read_up_to(buf)?;

        if read != buf.len() {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), read));
        }
        Ok(())
    }
}

impl<R: RandomAccessReader + ?Sized> RandomAccessReader for &mut R {
    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        (**self).read_bytes(buf)
    }

    #[inline(always)]
    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        (**self).seek_to(from)
    }

    #[inline(always)]
    fn position(&mut self) -> Result<u64, ByteIoError> {
        (**self).position()
    }
}
