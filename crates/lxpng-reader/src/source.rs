/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Where slices come from
//!
//! A reader can be fed a single file, a list of files, a prefix plus a
//! printf style pattern, or bytes already in memory.
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::errors::PngReaderErrors;

/// Numbered file series, `offset + spacing * z` gives the number
/// substituted into the pattern for slice `z`
#[derive(Clone, Debug, PartialEq)]
pub struct FileSeries {
    pub(crate) prefix:  String,
    pub(crate) pattern: String,
    pub(crate) first:   i32,
    pub(crate) last:    i32,
    pub(crate) offset:  i32,
    pub(crate) spacing: i32
}

impl FileSeries {
    /// Series over slices `first..=last` with offset 0 and spacing 1
    pub fn new(prefix: impl Into<String>, pattern: impl Into<String>, first: i32, last: i32) -> FileSeries {
        FileSeries {
            prefix: prefix.into(),
            pattern: pattern.into(),
            first,
            last,
            offset: 0,
            spacing: 1
        }
    }

    pub fn set_offset(mut self, offset: i32) -> FileSeries {
        self.offset = offset;
        self
    }

    pub fn set_spacing(mut self, spacing: i32) -> FileSeries {
        self.spacing = spacing;
        self
    }

    /// File name for slice `z`
    pub fn file_name(&self, z: i32) -> Result<PathBuf, PngReaderErrors> {
        let number = self
            .spacing
            .checked_mul(z)
            .and_then(|step| step.checked_add(self.offset))
            .ok_or_else(|| {
                PngReaderErrors::InvalidPattern(format!(
                    "{}: file number {} + {} * {z} does not fit in 32 bits",
                    self.pattern, self.offset, self.spacing
                ))
            })?;
        format_pattern(&self.pattern, &self.prefix, number).map(PathBuf::from)
    }
}

/// Input of a reader
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    File(PathBuf),
    Files(Vec<PathBuf>),
    Series(FileSeries),
    Memory(Vec<u8>)
}

impl Source {
    /// First and last z index this source provides
    pub fn slice_range(&self) -> (i32, i32) {
        match self {
            Source::File(_) | Source::Memory(_) => (0, 0),
            Source::Files(files) => (0, files.len() as i32 - 1),
            Source::Series(series) => (series.first, series.last)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Source::Files(files) => files.is_empty(),
            Source::Series(series) => series.last < series.first,
            Source::Memory(bytes) => bytes.is_empty(),
            Source::File(_) => false
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "FileName: {}", path.display()),
            Source::Files(files) => write!(f, "FileNames: {} files", files.len()),
            Source::Series(series) => write!(
                f,
                "FilePrefix: {} FilePattern: {} Slices: {}..={}",
                series.prefix, series.pattern, series.first, series.last
            ),
            Source::Memory(bytes) => write!(f, "MemoryBuffer: {} bytes", bytes.len())
        }
    }
}

/// Expand a printf style file pattern
///
/// Supported conversions are `%s` for the prefix, `%d` and `%i` for the
/// number with an optional zero pad width like `%03d`, and `%%`.
pub fn format_pattern(pattern: &str, prefix: &str, number: i32) -> Result<String, PngReaderErrors> {
    let invalid = || PngReaderErrors::InvalidPattern(pattern.to_string());

    let mut output = String::with_capacity(pattern.len() + prefix.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            output.push(c);
            continue;
        }
        let zero_pad = chars.next_if_eq(&'0').is_some();
        let mut width = 0_usize;

        while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
            width = width
                .checked_mul(10)
                .and_then(|w| w.checked_add(digit as usize))
                .ok_or_else(invalid)?;
            chars.next();
        }
        match chars.next() {
            Some('%') if width == 0 && !zero_pad => output.push('%'),
            Some('s') if !zero_pad => output.push_str(&format!("{prefix:>width$}")),
            Some('d' | 'i') => {
                if zero_pad {
                    output.push_str(&format!("{number:0width$}"));
                } else {
                    output.push_str(&format!("{number:>width$}"));
                }
            }
            _ => return Err(invalid())
        }
    }
    Ok(output)
}
