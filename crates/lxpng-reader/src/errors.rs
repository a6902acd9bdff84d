/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while reading png files into image data

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use crate::information::{Extent, ScalarType};

/// Describes a single slice, used to report mismatches
/// between slices of a stack
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SliceLayout {
    pub width:      usize,
    pub height:     usize,
    pub components: usize,
    pub scalar:     ScalarType
}

/// All errors the reader can return
pub enum PngReaderErrors {
    /// No file name, file list, pattern or memory buffer was set
    NoInput,
    /// An io error not tied to a specific file
    IoErrors(std::io::Error),
    /// A file could not be opened or read
    FileErrors(PathBuf, std::io::Error),
    /// The input does not start with the png signature
    NotPng(String),
    /// The png codec could not decode the stream
    DecodeErrors(png::DecodingError),
    /// Image dimensions are above the configured limits
    TooLarge {
        width:      usize,
        height:     usize,
        max_width:  usize,
        max_height: usize
    },
    /// A slice of a stack differs from the first slice
    SliceMismatch {
        slice:    i32,
        expected: SliceLayout,
        found:    SliceLayout
    },
    /// Requested extent is empty or outside of the whole extent
    ExtentOutOfBounds { requested: Extent, whole: Extent },
    /// A file pattern could not be expanded
    InvalidPattern(String),
    Generic(String)
}

impl Debug for PngReaderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoInput => writeln!(
                f,
                "No input specified, set a file name, file names, a file pattern or a memory buffer"
            ),
            Self::IoErrors(err) => writeln!(f, "Io error: {err}"),
            Self::FileErrors(path, err) => {
                writeln!(f, "Could not read file {}: {err}", path.display())
            }
            Self::NotPng(source) => writeln!(f, "Unknown file type, {source} is not a png file"),
            Self::DecodeErrors(err) => writeln!(f, "png: {err}"),
            Self::TooLarge {
                width,
                height,
                max_width,
                max_height
            } => writeln!(
                f,
                "Image dimensions {width}x{height} exceed the configured limit of {max_width}x{max_height}"
            ),
            Self::SliceMismatch {
                slice,
                expected,
                found
            } => writeln!(
                f,
                "Slice {slice} has layout {found:?} but the first slice has layout {expected:?}"
            ),
            Self::ExtentOutOfBounds { requested, whole } => writeln!(
                f,
                "Requested extent {:?} is not inside the whole extent {:?}",
                requested.as_array(),
                whole.as_array()
            ),
            Self::InvalidPattern(pattern) => writeln!(f, "Invalid file pattern {pattern:?}"),
            Self::Generic(val) => writeln!(f, "{val}")
        }
    }
}

impl Display for PngReaderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Debug output already reads well, reuse it without the trailing newline
        let message = format!("{self:?}");
        write!(f, "{}", message.trim_end())
    }
}

impl std::error::Error for PngReaderErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) | Self::FileErrors(_, err) => Some(err),
            Self::DecodeErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for PngReaderErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<png::DecodingError> for PngReaderErrors {
    fn from(value: png::DecodingError) -> Self {
        Self::DecodeErrors(value)
    }
}

impl From<String> for PngReaderErrors {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::PngReaderErrors;

    #[test]
    fn test_display_has_no_trailing_newline() {
        let err = PngReaderErrors::NotPng("a.txt".to_string());
        let shown = err.to_string();
        assert_eq!(shown, "Unknown file type, a.txt is not a png file");
    }

    #[test]
    fn test_io_errors_keep_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PngReaderErrors::from(io);
        assert!(err.source().is_some());
    }
}
