/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use lxpng_reader::{ImageData, PngReaderErrors};

/// Write decoded samples of `image` to `path` as raw native endian bytes
pub fn write_raw(image: &ImageData, path: &Path) -> Result<usize, PngReaderErrors> {
    let bytes = image.pixels().as_bytes();

    let file = File::create(path).map_err(|e| PngReaderErrors::FileErrors(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    writer.write_all(bytes)?;
    writer.flush()?;

    let (nx, ny, nz) = image.dimensions();
    info!(
        "Wrote {nx}x{ny}x{nz}, {} components of {:?} to {}",
        image.number_of_components(),
        image.scalar_type(),
        path.display()
    );
    Ok(bytes.len())
}
