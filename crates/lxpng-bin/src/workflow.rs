/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{info, warn};
use lxpng_reader::{FileSeries, PngReader, PngReaderErrors, ReadConfidence};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::write_raw;
use crate::probe_files::{probe_json, text_lines};

/// Parse `FIRST:LAST`
fn parse_slices(slices: &str) -> Result<(i32, i32), PngReaderErrors> {
    let invalid = || PngReaderErrors::Generic(format!("Invalid slice range {slices:?}, expected FIRST:LAST"));

    let (first, last) = slices.split_once(':').ok_or_else(invalid)?;
    let first = first.trim().parse::<i32>().map_err(|_| invalid())?;
    let last = last.trim().parse::<i32>().map_err(|_| invalid())?;

    Ok((first, last))
}

/// Build a reader for the inputs on the command line
pub fn create_reader(args: &ArgMatches, options: &CmdOptions) -> Result<PngReader, PngReaderErrors> {
    let mut reader = PngReader::new_with_options(options.reader_options());

    if let Some(prefix) = args.get_one::<String>("prefix") {
        let pattern = args.get_one::<String>("pattern").unwrap();
        let (first, last) = parse_slices(args.get_one::<String>("slices").unwrap())?;

        let series = FileSeries::new(prefix.as_str(), pattern.as_str(), first, last)
            .set_offset(*args.get_one::<i32>("slice-offset").unwrap())
            .set_spacing(*args.get_one::<i32>("slice-spacing").unwrap());

        reader.set_file_series(series);
        return Ok(reader);
    }
    let inputs: Vec<PathBuf> = args
        .get_many::<String>("in")
        .ok_or(PngReaderErrors::NoInput)?
        .map(PathBuf::from)
        .collect();

    for input in &inputs {
        if reader.can_read_file(input) != ReadConfidence::Definitely {
            warn!("{} does not look like a png file", input.display());
        }
    }
    if inputs.len() == 1 {
        reader.set_file_name(&inputs[0]);
    } else {
        reader.set_file_names(inputs);
    }
    Ok(reader)
}

pub fn run_from_cmd(args: &ArgMatches, options: &CmdOptions) -> Result<(), PngReaderErrors> {
    let mut reader = create_reader(args, options)?;

    if args.get_flag("probe") {
        println!("{}", probe_json(&mut reader)?);
    }

    let keys: Vec<String> = args
        .get_many::<String>("key")
        .map(|keys| keys.cloned().collect())
        .unwrap_or_default();

    if let Some(out) = args.get_one::<String>("out") {
        let image = reader.execute_data()?;
        let written = write_raw(&image, Path::new(out))?;
        info!("Wrote {written} bytes to {out}");
    } else {
        reader.execute_information()?;
    }

    if args.get_flag("text") || !keys.is_empty() {
        for line in text_lines(&reader, &keys) {
            println!("{line}");
        }
    }
    info!("{reader}");

    Ok(())
}
