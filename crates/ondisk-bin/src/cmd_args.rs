/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

/// Parse `X,Y` into a pixel coordinate
fn parse_coordinate(value: &str) -> Result<(i32, i32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but found `{value}`"))?;

    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid x coordinate `{x}`: {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid y coordinate `{y}`: {e}"))?;

    Ok((x, y))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ondisk")
        .about("Inspect BMP images without loading them into memory")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .required(true))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Print image headers as json"))
        .arg(Arg::new("pixel")
            .long("pixel")
            .action(ArgAction::Append)
            .value_name("X,Y")
            .value_parser(parse_coordinate)
            .help_heading("OPERATIONS")
            .help("Print the color of a pixel, can be repeated"))
        .arg(Arg::new("ascii")
            .long("ascii")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Draw the image in the terminal"))
        .arg(Arg::new("columns")
            .long("columns")
            .help_heading("OPERATIONS")
            .help("Maximum width of the --ascii drawing")
            .value_parser(value_parser!(u32).range(1..))
            .default_value("64"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse images wider than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse images taller than this")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}
