/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;

use clap::ArgMatches;
use log::{debug, info};
use ondisk_bmp::{OnDiskBitmap, OnDiskBmpErrors};
use ondisk_core::bytestream::ByteIoError;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::probe_files::print_metadata;
use crate::render::ascii_art;

pub fn run_workflow_from_cmd(args: &ArgMatches, options: &CmdOptions) -> Result<(), OnDiskBmpErrors> {
    // required by the command definition
    let in_file = args.get_one::<String>("in").unwrap();

    info!("Opening {}", in_file);

    let file = File::open(in_file).map_err(ByteIoError::from)?;
    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);

    let mut bitmap = OnDiskBitmap::open_with_options(BufReader::new(file), options.decoder)?;

    debug!("Opened {}x{} image", bitmap.width(), bitmap.height());

    let pixels: Vec<(i32, i32)> = args
        .get_many::<(i32, i32)>("pixel")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    let ascii = args.get_flag("ascii");

    // probing is the default when nothing else was asked for
    if args.get_flag("probe") || (pixels.is_empty() && !ascii) {
        print_metadata(OsString::from(in_file), file_size, bitmap.descriptor());
    }

    for (x, y) in pixels {
        let [r, g, b] = bitmap.get_pixel_rgb(x, y);
        println!("({x},{y}) #{r:02X}{g:02X}{b:02X}");
    }

    if ascii {
        print!("{}", ascii_art(&mut bitmap, options.columns));
    }
    Ok(())
}
