/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reader options

/// Options that influence how png files are read
///
/// Options are builder style, each setter consumes and returns
/// the options
///
/// ```
/// use lxpng_reader::ReaderOptions;
///
/// let options = ReaderOptions::default()
///     .set_read_spacing_from_file(true)
///     .set_max_width(1024);
///
/// assert!(options.read_spacing_from_file());
/// assert_eq!(options.max_width(), 1024);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ReaderOptions {
    /// Maximum width, images wider than this are rejected
    ///
    /// - Default value: 131072
    max_width:              usize,
    /// Maximum height, images taller than this are rejected
    ///
    /// - Default value: 131072
    max_height:             usize,
    /// Whether data spacing is computed from the `pHYs` chunk
    ///
    /// - Default value: false
    read_spacing_from_file: bool,
    /// Whether `zTXt` and `iTXt` entries are indexed alongside `tEXt`
    ///
    /// - Default value: false
    read_compressed_text:   bool,
    /// Whether a failure to read chunks after the image data is an error
    ///
    /// - Default value: false
    strict_mode:            bool
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            max_width:              1 << 17,
            max_height:             1 << 17,
            read_spacing_from_file: false,
            read_compressed_text:   false,
            strict_mode:            false
        }
    }
}

impl ReaderOptions {
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
    pub const fn read_spacing_from_file(&self) -> bool {
        self.read_spacing_from_file
    }
    pub const fn read_compressed_text(&self) -> bool {
        self.read_compressed_text
    }
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set the maximum width allowed
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set the maximum height allowed
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    /// Compute spacing from pixels per meter stored in the file.
    ///
    /// Files without a usable `pHYs` chunk keep the configured spacing
    pub fn set_read_spacing_from_file(mut self, yes: bool) -> Self {
        self.read_spacing_from_file = yes;
        self
    }
    /// Index compressed and international text entries too
    pub fn set_read_compressed_text(mut self, yes: bool) -> Self {
        self.read_compressed_text = yes;
        self
    }
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
