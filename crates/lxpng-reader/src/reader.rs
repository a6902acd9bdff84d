/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The png reader
//!
//! A reader is configured with an input and options, then asked for
//! information (what the output looks like) and data (the pixels).
//!
//! ```no_run
//! use lxpng_reader::PngReader;
//!
//! let mut reader = PngReader::new();
//! reader.set_file_name("scan.png");
//! reader.set_read_spacing_from_file(true);
//!
//! let info = reader.execute_information().unwrap();
//! println!("extent {:?}", info.whole_extent().as_array());
//!
//! let image = reader.execute_data().unwrap();
//! println!("{} samples", image.pixels().len());
//!
//! for index in reader.text_chunks("Comment") {
//!     println!("{}", reader.text_value(index).unwrap());
//! }
//! ```
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Range;
use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use crate::decode::{place_slice, SliceDecoder, SliceHeader};
use crate::errors::{PngReaderErrors, SliceLayout};
use crate::image_data::{ImageData, PixelBuffer};
use crate::information::{Extent, ImageInformation};
use crate::options::ReaderOptions;
use crate::sniff::{self, ReadConfidence};
use crate::source::{FileSeries, Source};
use crate::text::TextChunks;

/// Reads png files into image data
#[derive(Clone, Debug)]
pub struct PngReader {
    source:      Option<Source>,
    options:     ReaderOptions,
    spacing:     [f64; 3],
    origin:      [f64; 3],
    information: Option<ImageInformation>,
    text:        TextChunks
}

impl Default for PngReader {
    fn default() -> Self {
        PngReader {
            source:      None,
            options:     ReaderOptions::default(),
            spacing:     [1.0; 3],
            origin:      [0.0; 3],
            information: None,
            text:        TextChunks::new()
        }
    }
}

impl PngReader {
    pub fn new() -> PngReader {
        PngReader::default()
    }

    pub fn new_with_options(options: ReaderOptions) -> PngReader {
        PngReader {
            options,
            ..Default::default()
        }
    }

    /// Whether the file at `path` is a png file
    pub fn can_read_file<P: AsRef<Path>>(&self, path: P) -> ReadConfidence {
        sniff::can_read_file(path)
    }

    /// Space separated list of extensions, e.g `".png"`
    pub const fn file_extensions(&self) -> &'static str {
        sniff::FILE_EXTENSIONS
    }

    pub const fn descriptive_name(&self) -> &'static str {
        sniff::DESCRIPTIVE_NAME
    }

    fn set_source(&mut self, source: Source) {
        self.source = Some(source);
        self.information = None;
        self.text = TextChunks::new();
    }

    /// Read a single file
    pub fn set_file_name<P: AsRef<Path>>(&mut self, path: P) {
        self.set_source(Source::File(path.as_ref().to_path_buf()));
    }

    /// Read one file per z slice, in order
    pub fn set_file_names(&mut self, paths: Vec<PathBuf>) {
        self.set_source(Source::Files(paths));
    }

    /// Read a numbered file series
    pub fn set_file_series(&mut self, series: FileSeries) {
        self.set_source(Source::Series(series));
    }

    /// Read a single png from memory
    pub fn set_memory_buffer(&mut self, bytes: Vec<u8>) {
        self.set_source(Source::Memory(bytes));
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    /// File name used for slice `z`, `None` for memory input
    pub fn file_name_for_slice(&self, z: i32) -> Result<Option<PathBuf>, PngReaderErrors> {
        match self.source.as_ref().ok_or(PngReaderErrors::NoInput)? {
            Source::File(path) => Ok(Some(path.clone())),
            Source::Files(paths) => {
                let path = usize::try_from(z).ok().and_then(|z| paths.get(z)).ok_or_else(|| {
                    PngReaderErrors::Generic(format!("No file for slice {z}"))
                })?;
                Ok(Some(path.clone()))
            }
            Source::Series(series) => series.file_name(z).map(Some),
            Source::Memory(_) => Ok(None)
        }
    }

    pub const fn options(&self) -> ReaderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ReaderOptions) {
        self.options = options;
        self.information = None;
    }

    /// Compute spacing from the `pHYs` chunk. Files without pixels per
    /// meter keep the configured spacing
    pub fn set_read_spacing_from_file(&mut self, yes: bool) {
        self.set_options(self.options.set_read_spacing_from_file(yes));
    }

    pub const fn read_spacing_from_file(&self) -> bool {
        self.options.read_spacing_from_file()
    }

    pub fn set_data_spacing(&mut self, spacing: [f64; 3]) {
        self.spacing = spacing;
        self.information = None;
    }

    pub const fn data_spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn set_data_origin(&mut self, origin: [f64; 3]) {
        self.origin = origin;
        self.information = None;
    }

    pub const fn data_origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Information from the last successful `execute_information`
    pub const fn information(&self) -> Option<&ImageInformation> {
        self.information.as_ref()
    }

    fn open_slice(&self, z: i32) -> Result<SliceDecoder<Box<dyn Read + '_>>, PngReaderErrors> {
        let source = self.source.as_ref().ok_or(PngReaderErrors::NoInput)?;

        let stream: Box<dyn Read + '_> = match source {
            Source::Memory(bytes) => {
                if sniff::can_read_bytes(bytes) != ReadConfidence::Definitely {
                    return Err(PngReaderErrors::NotPng("memory buffer".to_string()));
                }
                Box::new(bytes.as_slice())
            }
            _ => {
                let path = self.file_name_for_slice(z)?.ok_or(PngReaderErrors::NoInput)?;

                trace!("Opening slice {z} from {}", path.display());

                let mut file = File::open(&path).map_err(|e| PngReaderErrors::FileErrors(path.clone(), e))?;
                let mut magic = [0_u8; 8];

                file.read_exact(&mut magic)
                    .map_err(|_| PngReaderErrors::NotPng(path.display().to_string()))?;

                if sniff::can_read_bytes(&magic) != ReadConfidence::Definitely {
                    return Err(PngReaderErrors::NotPng(path.display().to_string()));
                }
                // give the codec the whole stream again
                Box::new(BufReader::new(std::io::Cursor::new(magic).chain(file)))
            }
        };
        SliceDecoder::new(stream, self.options)
    }

    /// Read header chunks and work out what the output looks like
    ///
    /// The whole extent is `[0, width - 1, 0, height - 1, first, last]`
    /// where `first..=last` are the slices the input provides.
    pub fn execute_information(&mut self) -> Result<&ImageInformation, PngReaderErrors> {
        let source = self.source.as_ref().ok_or(PngReaderErrors::NoInput)?;

        if source.is_empty() {
            return Err(PngReaderErrors::NoInput);
        }
        let (first, last) = source.slice_range();

        let header = self.open_slice(first)?.header();

        let information = self.information_from_header(&header, first, last);

        info!(
            "Png {}x{}x{}, {} components of {:?}",
            header.width,
            header.height,
            information.number_of_slices(),
            information.number_of_components(),
            information.scalar_type()
        );
        self.text = header.text;

        Ok(&*self.information.insert(information))
    }

    fn information_from_header(&self, header: &SliceHeader, first: i32, last: i32) -> ImageInformation {
        let mut spacing = self.spacing;
        let mut spacing_from_file = false;

        if self.options.read_spacing_from_file() {
            match header.physical {
                Some((x, y)) => {
                    debug!("Spacing from pHYs chunk: {x} x {y} mm");
                    spacing[0] = x;
                    spacing[1] = y;
                    spacing_from_file = true;
                }
                None => debug!("No usable pixels per meter in file, using configured spacing")
            }
        }
        let mut whole_extent = Extent::from_dimensions(header.width, header.height, first).as_array();
        whole_extent[5] = last;

        ImageInformation {
            whole_extent: Extent::new(whole_extent),
            spacing,
            origin: self.origin,
            scalar_type: header.scalar,
            components: header.components,
            source_depth: header.source_depth,
            source_color: header.source_color,
            interlaced: header.interlaced,
            gamma: header.gamma,
            spacing_from_file
        }
    }

    /// Decode the whole extent
    pub fn execute_data(&mut self) -> Result<ImageData, PngReaderErrors> {
        let whole = self.ensure_information()?.whole_extent();
        self.execute_data_with_extent(whole)
    }

    /// Decode the pixels inside `extent`, which must be a non empty
    /// part of the whole extent
    pub fn execute_data_with_extent(&mut self, extent: Extent) -> Result<ImageData, PngReaderErrors> {
        let information = self.ensure_information()?.clone();
        let whole = information.whole_extent();

        if extent.is_empty() || !whole.contains(&extent) {
            return Err(PngReaderErrors::ExtentOutOfBounds {
                requested: extent,
                whole
            });
        }
        let components = information.number_of_components();
        let mut pixels = PixelBuffer::zeroed(
            information.scalar_type(),
            extent.number_of_points() * components
        );
        let (width, height) = information.dimensions();
        let expected = SliceLayout {
            width,
            height,
            components,
            scalar: information.scalar_type()
        };
        let (z0, z1) = extent.z();
        let mut trailing_text = None;

        for (slice, z) in (z0..=z1).enumerate() {
            let mut decoder = self.open_slice(z)?;
            let header = decoder.header();

            if header.layout() != expected {
                return Err(PngReaderErrors::SliceMismatch {
                    slice: z,
                    expected,
                    found: header.layout()
                });
            }
            let (frame, line_size) = decoder.decode_frame()?;

            place_slice(&frame, line_size, &header, &extent, slice, &mut pixels);

            if z == whole.z().0 {
                trailing_text = Some(decoder.finish()?);
            }
            trace!("Placed slice {z}");
        }
        if let Some(text) = trailing_text {
            self.text = text;
        }

        Ok(ImageData {
            extent,
            spacing: information.spacing(),
            origin: information.origin(),
            components,
            pixels
        })
    }

    fn ensure_information(&mut self) -> Result<&ImageInformation, PngReaderErrors> {
        if self.information.is_none() {
            self.execute_information()?;
        }
        self.information.as_ref().ok_or(PngReaderErrors::NoInput)
    }

    /// Indexes `[begin, end)` of the text chunks stored for `key`
    pub fn text_chunks(&self, key: &str) -> Range<usize> {
        self.text.range(key)
    }

    /// Text key stored at `index`
    pub fn text_key(&self, index: usize) -> Option<&str> {
        self.text.key(index)
    }

    /// Text value stored at `index`
    pub fn text_value(&self, index: usize) -> Option<&str> {
        self.text.value(index)
    }

    /// Number of indexed text chunks
    ///
    /// Compressed and international entries are only counted when
    /// [`ReaderOptions::set_read_compressed_text`] is on
    pub fn number_of_text_chunks(&self) -> usize {
        self.text.len()
    }

    pub const fn text(&self) -> &TextChunks {
        &self.text
    }
}

impl Display for PngReader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PngReader ({})", self.descriptive_name())?;
        match &self.source {
            Some(source) => writeln!(f, "  {source}")?,
            None => writeln!(f, "  Source: (none)")?
        }
        writeln!(f, "  DataSpacing: {:?}", self.spacing)?;
        writeln!(f, "  DataOrigin: {:?}", self.origin)?;
        writeln!(f, "  ReadSpacingFromFile: {}", self.read_spacing_from_file())?;
        writeln!(f, "  TextChunks: {}", self.number_of_text_chunks())?;

        if let Some(information) = &self.information {
            writeln!(f, "  WholeExtent: {:?}", information.whole_extent().as_array())?;
            writeln!(f, "  Spacing: {:?}", information.spacing())?;
            writeln!(f, "  ScalarType: {:?}", information.scalar_type())?;
            writeln!(f, "  Components: {}", information.number_of_components())?;
        }
        Ok(())
    }
}
