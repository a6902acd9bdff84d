/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoded image data
//!
//! Samples are component interleaved with x varying fastest, then y,
//! then z. Row `y == 0` is the bottom row of the picture.
use crate::information::{Extent, ScalarType};

/// Decoded samples
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PixelBuffer {
    U8(Vec<u8>),
    U16(Vec<u16>)
}

impl PixelBuffer {
    /// Allocate a zeroed buffer of `length` samples
    pub(crate) fn zeroed(scalar: ScalarType, length: usize) -> PixelBuffer {
        match scalar {
            ScalarType::U8 => PixelBuffer::U8(vec![0; length]),
            ScalarType::U16 => PixelBuffer::U16(vec![0; length])
        }
    }

    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            PixelBuffer::U8(_) => ScalarType::U8,
            PixelBuffer::U16(_) => ScalarType::U16
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        match self {
            PixelBuffer::U8(data) => data.len(),
            PixelBuffer::U16(data) => data.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            PixelBuffer::U8(data) => Some(data.as_slice()),
            PixelBuffer::U16(_) => None
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            PixelBuffer::U8(_) => None,
            PixelBuffer::U16(data) => Some(data.as_slice())
        }
    }

    /// Samples as raw bytes in native endian
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PixelBuffer::U8(data) => data.as_slice(),
            PixelBuffer::U16(data) => bytemuck::cast_slice(data)
        }
    }

    /// Sample at `index` widened to `u16`
    pub fn get(&self, index: usize) -> Option<u16> {
        match self {
            PixelBuffer::U8(data) => data.get(index).map(|x| u16::from(*x)),
            PixelBuffer::U16(data) => data.get(index).copied()
        }
    }
}

/// Pixels for an extent together with their placement in space
#[derive(Clone, Debug, PartialEq)]
pub struct ImageData {
    pub(crate) extent:     Extent,
    pub(crate) spacing:    [f64; 3],
    pub(crate) origin:     [f64; 3],
    pub(crate) components: usize,
    pub(crate) pixels:     PixelBuffer
}

impl ImageData {
    pub const fn extent(&self) -> Extent {
        self.extent
    }
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.extent.dimensions()
    }
    pub const fn spacing(&self) -> [f64; 3] {
        self.spacing
    }
    pub const fn origin(&self) -> [f64; 3] {
        self.origin
    }
    pub const fn number_of_components(&self) -> usize {
        self.components
    }
    pub const fn scalar_type(&self) -> ScalarType {
        self.pixels.scalar_type()
    }
    pub const fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    /// Offset of sample `(x, y, z, component)` in the buffer, using
    /// the extent's indexes
    pub fn offset(&self, x: i32, y: i32, z: i32, component: usize) -> Option<usize> {
        let (nx, ny, _) = self.extent.dimensions();
        let point = Extent::new([x, x, y, y, z, z]);

        if !self.extent.contains(&point) || component >= self.components {
            return None;
        }
        let [x0, _, y0, _, z0, _] = self.extent.as_array();
        let (i, j, k) = (
            (x - x0) as usize,
            (y - y0) as usize,
            (z - z0) as usize
        );

        Some(((k * ny + j) * nx + i) * self.components + component)
    }

    /// Sample at `(x, y, z, component)` widened to `u16`
    pub fn scalar(&self, x: i32, y: i32, z: i32, component: usize) -> Option<u16> {
        self.offset(x, y, z, component)
            .and_then(|offset| self.pixels.get(offset))
    }

    /// Physical position of index `(x, y, z)`
    pub fn point(&self, x: i32, y: i32, z: i32) -> [f64; 3] {
        [
            self.origin[0] + f64::from(x) * self.spacing[0],
            self.origin[1] + f64::from(y) * self.spacing[1],
            self.origin[2] + f64::from(z) * self.spacing[2]
        ]
    }
}
