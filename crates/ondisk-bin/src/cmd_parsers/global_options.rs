/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use ondisk_core::options::DecoderOptions;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder: DecoderOptions,
    pub columns: u32
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut decoder = DecoderOptions::default();

    if let Some(width) = options.get_one::<usize>("max-width") {
        info!("Setting maximum width to {}", width);
        decoder = decoder.set_max_width(*width);
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        info!("Setting maximum height to {}", height);
        decoder = decoder.set_max_height(*height);
    }
    let columns = options.get_one::<u32>("columns").copied().unwrap_or(64);

    CmdOptions { decoder, columns }
}

pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not set up logging: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
