/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png reader for image pipelines
//!
//! This crate reads png files into [`ImageData`], a buffer laid out the
//! way structured image pipelines expect it, and exposes the `tEXt`
//! chunks of the file as a sorted key/value index.
//!
//! Decoding itself is handed to the [`png`] crate, with palette,
//! low bit depth and transparency expansion turned on. The reader takes
//! care of
//! - telling png files apart from other files ([`sniff`])
//! - describing the output before decoding ([`ImageInformation`])
//! - stacking several files into one volume ([`source`])
//! - placing rows bottom to top and cutting out requested extents
//!
//! # Example
//!
//! ```no_run
//! use lxpng_reader::{PngReader, ReadConfidence};
//!
//! let mut reader = PngReader::new();
//!
//! if reader.can_read_file("image.png") == ReadConfidence::Definitely {
//!     reader.set_file_name("image.png");
//!     let image = reader.execute_data().unwrap();
//!     let (width, height, _) = image.dimensions();
//!     println!("{width}x{height}, {} text chunks", reader.number_of_text_chunks());
//! }
//! ```
#![forbid(unsafe_code)]

pub use png;
pub use zune_core;

pub use crate::errors::PngReaderErrors;
pub use crate::image_data::{ImageData, PixelBuffer};
pub use crate::information::{Extent, ImageInformation, ScalarType, SourceColor};
pub use crate::options::ReaderOptions;
pub use crate::reader::PngReader;
pub use crate::sniff::{can_read_bytes, can_read_file, ReadConfidence};
pub use crate::source::{FileSeries, Source};
pub use crate::text::TextChunks;

mod decode;
pub mod errors;
mod image_data;
mod information;
mod options;
mod reader;
mod serde;
pub mod sniff;
pub mod source;
mod text;
