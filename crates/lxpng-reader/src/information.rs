/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pipeline information
//!
//! This is what a downstream consumer needs to know about the output
//! before any pixel is decoded: which indexes exist, how they map to
//! physical space and how samples are stored.

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

/// Inclusive index bounds `[x_min, x_max, y_min, y_max, z_min, z_max]`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Extent([i32; 6]);

impl Extent {
    pub const fn new(extent: [i32; 6]) -> Extent {
        Extent(extent)
    }

    /// Extent of a single `width`x`height` plane at `z`
    pub fn from_dimensions(width: usize, height: usize, z: i32) -> Extent {
        Extent([0, width as i32 - 1, 0, height as i32 - 1, z, z])
    }

    pub const fn as_array(&self) -> [i32; 6] {
        self.0
    }

    pub const fn x(&self) -> (i32, i32) {
        (self.0[0], self.0[1])
    }
    pub const fn y(&self) -> (i32, i32) {
        (self.0[2], self.0[3])
    }
    pub const fn z(&self) -> (i32, i32) {
        (self.0[4], self.0[5])
    }

    /// Number of indexes along each axis, zero for an empty axis
    pub fn dimensions(&self) -> (usize, usize, usize) {
        let axis = |min: i32, max: i32| -> usize {
            if max < min {
                0
            } else {
                (i64::from(max) - i64::from(min) + 1) as usize
            }
        };
        (
            axis(self.0[0], self.0[1]),
            axis(self.0[2], self.0[3]),
            axis(self.0[4], self.0[5])
        )
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_points() == 0
    }

    pub fn number_of_points(&self) -> usize {
        let (nx, ny, nz) = self.dimensions();
        nx * ny * nz
    }

    /// Whether `other` lies completely inside this extent
    pub fn contains(&self, other: &Extent) -> bool {
        let (a, b) = (self.0, other.0);

        (0..3).all(|axis| a[2 * axis] <= b[2 * axis] && b[2 * axis + 1] <= a[2 * axis + 1])
    }
}

impl From<[i32; 6]> for Extent {
    fn from(value: [i32; 6]) -> Self {
        Extent(value)
    }
}

/// Storage type of a single sample in the output
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarType {
    U8,
    U16
}

impl ScalarType {
    pub const fn size_of(self) -> usize {
        match self {
            ScalarType::U8 => 1,
            ScalarType::U16 => 2
        }
    }

    pub const fn bit_depth(self) -> BitDepth {
        match self {
            ScalarType::U8 => BitDepth::Eight,
            ScalarType::U16 => BitDepth::Sixteen
        }
    }
}

/// Colour type as stored in the file, before expansion
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SourceColor {
    Grayscale,
    GrayscaleAlpha,
    Rgb,
    Rgba,
    Indexed
}

impl From<png::ColorType> for SourceColor {
    fn from(value: png::ColorType) -> Self {
        match value {
            png::ColorType::Grayscale => SourceColor::Grayscale,
            png::ColorType::GrayscaleAlpha => SourceColor::GrayscaleAlpha,
            png::ColorType::Rgb => SourceColor::Rgb,
            png::ColorType::Rgba => SourceColor::Rgba,
            png::ColorType::Indexed => SourceColor::Indexed
        }
    }
}

/// Everything known about the output before decoding pixels
#[derive(Clone, Debug, PartialEq)]
pub struct ImageInformation {
    pub(crate) whole_extent:      Extent,
    pub(crate) spacing:           [f64; 3],
    pub(crate) origin:            [f64; 3],
    pub(crate) scalar_type:       ScalarType,
    pub(crate) components:        usize,
    pub(crate) source_depth:      u8,
    pub(crate) source_color:      SourceColor,
    pub(crate) interlaced:        bool,
    pub(crate) gamma:             Option<f32>,
    pub(crate) spacing_from_file: bool
}

impl ImageInformation {
    pub const fn whole_extent(&self) -> Extent {
        self.whole_extent
    }
    /// Width and height of a single slice
    pub fn dimensions(&self) -> (usize, usize) {
        let (nx, ny, _) = self.whole_extent.dimensions();
        (nx, ny)
    }
    /// Number of z slices the inputs provide
    pub fn number_of_slices(&self) -> usize {
        self.whole_extent.dimensions().2
    }
    pub const fn spacing(&self) -> [f64; 3] {
        self.spacing
    }
    pub const fn origin(&self) -> [f64; 3] {
        self.origin
    }
    pub const fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }
    pub const fn depth(&self) -> BitDepth {
        self.scalar_type.bit_depth()
    }
    pub const fn number_of_components(&self) -> usize {
        self.components
    }
    /// Colorspace of the decoded samples
    pub fn colorspace(&self) -> ColorSpace {
        match self.components {
            1 => ColorSpace::Luma,
            2 => ColorSpace::LumaA,
            3 => ColorSpace::RGB,
            4 => ColorSpace::RGBA,
            _ => ColorSpace::Unknown
        }
    }
    /// Bit depth stored in the file, may be 1, 2, 4, 8 or 16
    pub const fn source_depth(&self) -> u8 {
        self.source_depth
    }
    pub const fn source_color(&self) -> SourceColor {
        self.source_color
    }
    pub const fn is_interlaced(&self) -> bool {
        self.interlaced
    }
    /// Value of the `gAMA` chunk if present. It is reported, never applied
    pub const fn gamma(&self) -> Option<f32> {
        self.gamma
    }
    /// Whether spacing came from the file's `pHYs` chunk
    pub const fn spacing_from_file(&self) -> bool {
        self.spacing_from_file
    }
}
