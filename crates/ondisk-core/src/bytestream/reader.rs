/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::RandomAccessReader;

mod std_readers;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum SeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    Current(i64)
}

impl SeekFrom {
    /// Convert to [SeekFrom](std::io::SeekFrom) from the `std::io` library
    ///
    /// This is only present when std feature is present
    #[cfg(feature = "std")]
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            SeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            SeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            SeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Errors reported by a [`RandomAccessReader`]
#[non_exhaustive]
pub enum ByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    // requested, read
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    SeekError(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            ByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// An in memory reader
///
/// Wraps anything that can be viewed as a byte slice, a `&[u8]`, `Vec<u8>`
/// or a `&'static [u8]` baked into flash.
///
/// This works in `no_std` and is what the tests and the fuzzer use.
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Destroy this reader returning
    /// the underlying buffer
    pub fn into_inner(self) -> T {
        self.stream
    }

    #[inline]
    fn len(&self) -> usize {
        self.stream.as_ref().len()
    }
}

impl<T: AsRef<[u8]>> RandomAccessReader for ByteCursor<T> {
    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let start = core::cmp::min(self.position, self.len());
        let end = core::cmp::min(self.position.saturating_add(buf.len()), self.len());

        let slice = &self.stream.as_ref()[start..end];
        buf[..slice.len()].copy_from_slice(slice);

        self.position = self.position.saturating_add(end - start);

        Ok(end - start)
    }

    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        let new_position = match from {
            SeekFrom::Start(position) => {
                usize::try_from(position).map_err(ByteIoError::from)?
            }
            SeekFrom::End(offset) => {
                let end = i64::try_from(self.len()).map_err(ByteIoError::from)?;
                let position = end
                    .checked_add(offset)
                    .ok_or(ByteIoError::SeekError("Seek offset overflowed"))?;
                usize::try_from(position)
                    .map_err(|_| ByteIoError::SeekError("Seek before start of buffer"))?
            }
            SeekFrom::Current(offset) => {
                let current = i64::try_from(self.position).map_err(ByteIoError::from)?;
                let position = current
                    .checked_add(offset)
                    .ok_or(ByteIoError::SeekError("Seek offset overflowed"))?;
                usize::try_from(position)
                    .map_err(|_| ByteIoError::SeekError("Seek before start of buffer"))?
            }
        };
        self.position = new_position;

        Ok(self.position as u64)
    }

    #[inline(always)]
    fn position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position as u64)
    }
}
