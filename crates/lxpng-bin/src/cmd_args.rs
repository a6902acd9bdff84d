/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

static SLICES_HELP: &str = "Slices to read from a file pattern

Given as FIRST:LAST, both inclusive. The number put in the
pattern for slice z is OFFSET + SPACING * z.";

static PATTERN_HELP: &str = "printf style pattern for slice file names

%s is replaced by the prefix and %d by the slice number,
zero padding like %03d is supported.";

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("lxpng")
        .about("Read png files and their text chunks")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from, repeat to stack slices")
            .long("input")
            .action(ArgAction::Append)
            .required_unless_present("prefix"))
        .arg(Arg::new("prefix")
            .long("prefix")
            .help_heading("SERIES")
            .help("Prefix for a numbered file series")
            .conflicts_with("in"))
        .arg(Arg::new("pattern")
            .long("pattern")
            .help_heading("SERIES")
            .help("File name pattern for a numbered file series")
            .long_help(PATTERN_HELP)
            .default_value("%s.%d"))
        .arg(Arg::new("slices")
            .long("slices")
            .help_heading("SERIES")
            .help("First and last slice, as FIRST:LAST")
            .long_help(SLICES_HELP)
            .default_value("0:0"))
        .arg(Arg::new("slice-offset")
            .long("slice-offset")
            .help_heading("SERIES")
            .help("Number of the file holding slice 0")
            .value_parser(value_parser!(i32))
            .default_value("0"))
        .arg(Arg::new("slice-spacing")
            .long("slice-spacing")
            .help_heading("SERIES")
            .help("Step between file numbers of consecutive slices")
            .value_parser(value_parser!(i32))
            .default_value("1"))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Write decoded samples as raw native endian bytes to this file"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("METADATA")
            .help("Print image information and text chunks as json"))
        .arg(Arg::new("text")
            .long("text")
            .action(ArgAction::SetTrue)
            .help_heading("METADATA")
            .help("Print all text chunks"))
        .arg(Arg::new("key")
            .long("key")
            .action(ArgAction::Append)
            .help_heading("METADATA")
            .help("Print values of text chunks with this key"))
        .arg(Arg::new("spacing-from-file")
            .long("spacing-from-file")
            .action(ArgAction::SetTrue)
            .help_heading("OPTIONS")
            .help("Compute spacing from the pHYs chunk"))
        .arg(Arg::new("compressed-text")
            .long("compressed-text")
            .action(ArgAction::SetTrue)
            .help_heading("OPTIONS")
            .help("Also index zTXt and iTXt chunks"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("OPTIONS")
            .help("Treat unreadable chunks after the image data as errors"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("OPTIONS")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("OPTIONS")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
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
