/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Format identification
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::trace;

// http://www.w3.org/TR/PNG-Structure.html
// The first eight bytes of a PNG file always contain the following (decimal) values:
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Extensions handled by this reader, space separated and dot prefixed
pub const FILE_EXTENSIONS: &str = ".png";

/// Name of the format, suitable for showing in user interfaces
pub const DESCRIPTIVE_NAME: &str = "PNG";

/// How sure a reader is that it can read some input
///
/// The numeric values follow the usual pipeline convention,
/// higher means more confident
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ReadConfidence {
    /// The input cannot be read
    CannotRead = 0,
    /// The reader thinks it can read the input but cannot prove it
    Unsure     = 1,
    /// The input may be readable
    Maybe      = 2,
    /// The input can definitely be read
    Definitely = 3
}

impl ReadConfidence {
    pub const fn to_int(self) -> u8 {
        self as u8
    }
    pub const fn can_read(self) -> bool {
        !matches!(self, ReadConfidence::CannotRead)
    }
}

/// Check whether `bytes` start with the png signature
pub fn can_read_bytes(bytes: &[u8]) -> ReadConfidence {
    if bytes.starts_with(&PNG_SIGNATURE) {
        ReadConfidence::Definitely
    } else {
        ReadConfidence::CannotRead
    }
}

/// Check whether the file at `path` is a png file
///
/// Only the first eight bytes are read. Files that can't
/// be opened or are too short are reported as unreadable
pub fn can_read_file<P: AsRef<Path>>(path: P) -> ReadConfidence {
    let path = path.as_ref();

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            trace!("Could not open {}: {err}", path.display());
            return ReadConfidence::CannotRead;
        }
    };
    let mut magic = [0_u8; 8];

    if let Err(err) = file.read_exact(&mut magic) {
        trace!("Could not read signature of {}: {err}", path.display());
        return ReadConfidence::CannotRead;
    }
    can_read_bytes(&magic)
}
