use std::ffi::OsString;

use ondisk_bmp::BitmapDescriptor;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:       OsString,
    size:       u64,
    descriptor: &'a BitmapDescriptor
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, descriptor: &BitmapDescriptor) -> Metadata {
        Metadata {
            file,
            size,
            descriptor
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let descriptor = self.descriptor;
        let mut state = serializer.serialize_struct("BmpMetadata", 14)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("file_size", &self.size)?;
        state.serialize_field("width", &descriptor.width())?;
        state.serialize_field("height", &descriptor.height())?;
        state.serialize_field("bits_per_pixel", &descriptor.bits_per_pixel())?;
        state.serialize_field("data_offset", &descriptor.data_offset())?;
        state.serialize_field("stride", &descriptor.stride())?;
        state.serialize_field("header_size", &descriptor.header_size())?;
        state.serialize_field("compression", &format!("{:?}", descriptor.compression()))?;
        state.serialize_field("layout", &format!("{:?}", descriptor.pixel_layout()))?;
        state.serialize_field("indexed", &descriptor.is_indexed())?;
        state.serialize_field("bitfield_compressed", &descriptor.is_bitfield_compressed())?;
        state.serialize_field("masks", &descriptor.masks())?;
        state.serialize_field(
            "palette_entries",
            &descriptor.palette().map_or(0, |palette| palette.len())
        )?;

        state.end()
    }
}
