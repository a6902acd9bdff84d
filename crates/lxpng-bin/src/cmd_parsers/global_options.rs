/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use lxpng_reader::ReaderOptions;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:         usize,
    pub max_height:        usize,
    pub spacing_from_file: bool,
    pub compressed_text:   bool,
    pub strict_mode:       bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            max_width:         0,
            max_height:        0,
            spacing_from_file: false,
            compressed_text:   false,
            strict_mode:       false
        }
    }

    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_read_spacing_from_file(self.spacing_from_file)
            .set_read_compressed_text(self.compressed_text)
            .set_strict_mode(self.strict_mode)
    }
}

fn flag_on_command_line(options: &ArgMatches, id: &str) -> bool {
    options.value_source(id) == Some(ValueSource::CommandLine)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.max_width = *options.get_one::<usize>("max-width").unwrap();
    cmd_options.max_height = *options.get_one::<usize>("max-height").unwrap();

    if flag_on_command_line(options, "spacing-from-file") {
        info!("Reading spacing from pHYs chunks");
        cmd_options.spacing_from_file = true;
    }
    if flag_on_command_line(options, "compressed-text") {
        info!("Indexing compressed and international text");
        cmd_options.compressed_text = true;
    }
    if flag_on_command_line(options, "strict") {
        info!("Using strict mode");
        cmd_options.strict_mode = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
