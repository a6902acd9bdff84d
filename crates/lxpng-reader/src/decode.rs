/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bridge to the png codec
//!
//! The codec does inflate, unfiltering, deinterlacing and expansion of
//! palette, low bit depth and `tRNS` data. Here we only configure it,
//! read what it reports and move its rows into pipeline order.
use std::io::Read;

use log::{trace, warn};

use crate::errors::{PngReaderErrors, SliceLayout};
use crate::image_data::PixelBuffer;
use crate::information::{Extent, ScalarType, SourceColor};
use crate::options::ReaderOptions;
use crate::text::TextChunks;

/// What one png stream says about itself after its header chunks
#[derive(Clone, Debug)]
pub(crate) struct SliceHeader {
    pub(crate) width:        usize,
    pub(crate) height:       usize,
    pub(crate) components:   usize,
    pub(crate) scalar:       ScalarType,
    pub(crate) source_depth: u8,
    pub(crate) source_color: SourceColor,
    pub(crate) interlaced:   bool,
    pub(crate) gamma:        Option<f32>,
    /// Millimeters per pixel from a `pHYs` chunk in meters
    pub(crate) physical:     Option<(f64, f64)>,
    pub(crate) text:         TextChunks
}

impl SliceHeader {
    pub(crate) fn layout(&self) -> SliceLayout {
        SliceLayout {
            width:      self.width,
            height:     self.height,
            components: self.components,
            scalar:     self.scalar
        }
    }
}

/// A configured codec reader positioned after the header chunks
pub(crate) struct SliceDecoder<R: Read> {
    reader:  png::Reader<R>,
    options: ReaderOptions
}

impl<R: Read> SliceDecoder<R> {
    /// Read header chunks up to the first image data chunk
    pub(crate) fn new(source: R, options: ReaderOptions) -> Result<SliceDecoder<R>, PngReaderErrors> {
        let mut decoder = png::Decoder::new(source);
        // palette to rgb, gray below 8 bits to 8 bits, tRNS to alpha
        decoder.set_transformations(png::Transformations::EXPAND);

        let reader = decoder.read_info()?;

        let (width, height) = {
            let info = reader.info();
            (info.width as usize, info.height as usize)
        };
        if width > options.max_width() || height > options.max_height() {
            return Err(PngReaderErrors::TooLarge {
                width,
                height,
                max_width: options.max_width(),
                max_height: options.max_height()
            });
        }
        Ok(SliceDecoder { reader, options })
    }

    pub(crate) fn header(&self) -> SliceHeader {
        let info = self.reader.info();
        let (color, depth) = self.reader.output_color_type();

        let scalar = match depth {
            png::BitDepth::Sixteen => ScalarType::U16,
            _ => ScalarType::U8
        };
        let physical = info.pixel_dims.as_ref().and_then(|dims| {
            if matches!(dims.unit, png::Unit::Meter) && dims.xppu > 0 && dims.yppu > 0 {
                Some((1000.0 / f64::from(dims.xppu), 1000.0 / f64::from(dims.yppu)))
            } else {
                None
            }
        });

        SliceHeader {
            width: info.width as usize,
            height: info.height as usize,
            components: color.samples(),
            scalar,
            source_depth: info.bit_depth as u8,
            source_color: SourceColor::from(info.color_type),
            interlaced: info.interlaced,
            gamma: info.source_gamma.map(|gamma| gamma.into_value()),
            physical,
            text: TextChunks::from_info(info, self.options.read_compressed_text())
        }
    }

    /// Decode the first frame, rows are in file order (top row first)
    ///
    /// Returns the frame bytes and the number of bytes per row
    pub(crate) fn decode_frame(&mut self) -> Result<(Vec<u8>, usize), PngReaderErrors> {
        let mut frame = vec![0; self.reader.output_buffer_size()];
        let output = self.reader.next_frame(&mut frame)?;

        trace!(
            "Decoded frame {}x{} {:?} {:?}, {} bytes per row",
            output.width,
            output.height,
            output.color_type,
            output.bit_depth,
            output.line_size
        );
        Ok((frame, output.line_size))
    }

    /// Read the chunks that follow the image data and return the
    /// text index including them
    ///
    /// Unreadable trailing chunks are reported as a warning unless
    /// strict mode is on
    pub(crate) fn finish(mut self) -> Result<TextChunks, PngReaderErrors> {
        if let Err(err) = self.reader.finish() {
            if self.options.strict_mode() {
                return Err(err.into());
            }
            warn!("Could not read chunks after image data: {err}");
        }
        Ok(TextChunks::from_info(
            self.reader.info(),
            self.options.read_compressed_text()
        ))
    }
}

/// Copy the part of a decoded frame that falls inside `extent` into
/// `output`, flipping rows so that `y == 0` is the bottom row
///
/// `slice` is the z position of the frame relative to `extent`
pub(crate) fn place_slice(
    frame: &[u8], line_size: usize, header: &SliceHeader, extent: &Extent, slice: usize,
    output: &mut PixelBuffer
) {
    let (nx, ny, _) = extent.dimensions();
    let (x0, _) = extent.x();
    let (y0, y1) = extent.y();
    let components = header.components;
    let bytes_per_sample = header.scalar.size_of();

    let row_samples = nx * components;
    let first_sample = x0 as usize * components;

    for y in y0..=y1 {
        let file_row = header.height - 1 - y as usize;
        let source_start = file_row * line_size + first_sample * bytes_per_sample;
        let source = &frame[source_start..source_start + row_samples * bytes_per_sample];

        let dest_start = (slice * ny + (y - y0) as usize) * row_samples;

        match output {
            PixelBuffer::U8(data) => {
                data[dest_start..dest_start + row_samples].copy_from_slice(source);
            }
            PixelBuffer::U16(data) => {
                // png stores 16 bit samples big endian
                for (dest, pair) in data[dest_start..dest_start + row_samples]
                    .iter_mut()
                    .zip(source.chunks_exact(2))
                {
                    *dest = u16::from_be_bytes([pair[0], pair[1]]);
                }
            }
        }
    }
}
