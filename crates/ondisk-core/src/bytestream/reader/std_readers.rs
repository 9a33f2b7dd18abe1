#![cfg(feature = "std")]

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};

use crate::bytestream::reader::{ByteIoError, SeekFrom};
use crate::bytestream::RandomAccessReader;

impl<T> RandomAccessReader for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from.to_std_seek()).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn position(&mut self) -> Result<u64, ByteIoError> {
        Ok(Cursor::position(self))
    }
}

impl<T: Read + Seek> RandomAccessReader for BufReader<T> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    // BufReader discards its buffer on every seek, decoders that jump around
    // a file get no benefit from it beyond the header read.
    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from.to_std_seek()).map_err(ByteIoError::from)
    }

    fn position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }
}

impl RandomAccessReader for File {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    fn seek_to(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from.to_std_seek()).map_err(ByteIoError::from)
    }

    fn position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }
}
