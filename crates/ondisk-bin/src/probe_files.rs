/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use log::error;
use ondisk_bmp::BitmapDescriptor;

use crate::serde::Metadata;

/// Print the parsed headers of `file` to standard output as json
pub fn print_metadata(file: OsString, size: u64, descriptor: &BitmapDescriptor) {
    let metadata = Metadata::new(file, size, descriptor);

    match serde_json::to_string_pretty(&metadata) {
        Ok(json) => println!("{json}"),
        Err(err) => error!("Could not serialize metadata: {err}")
    }
}
