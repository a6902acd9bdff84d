/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::information::{Extent, ImageInformation, ScalarType, SourceColor};
use crate::text::TextChunks;

impl Serialize for ImageInformation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 11;
        let mut state = serializer.serialize_struct("ImageInformation", STRUCT_FIELDS)?;

        state.serialize_field("whole_extent", &self.whole_extent)?;
        state.serialize_field("spacing", &self.spacing)?;
        state.serialize_field("origin", &self.origin)?;
        state.serialize_field("scalar_type", &self.scalar_type)?;
        state.serialize_field("components", &self.components)?;
        state.serialize_field("colorspace", &format!("{:?}", self.colorspace()))?;
        state.serialize_field("source_depth", &self.source_depth)?;
        state.serialize_field("source_color", &self.source_color)?;
        state.serialize_field("interlaced", &self.interlaced)?;
        state.serialize_field("gamma", &self.gamma)?;
        state.serialize_field("spacing_from_file", &self.spacing_from_file)?;

        state.end()
    }
}

impl Serialize for Extent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        self.as_array().serialize(serializer)
    }
}

impl Serialize for ScalarType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(match self {
            ScalarType::U8 => "unsigned char",
            ScalarType::U16 => "unsigned short"
        })
    }
}

impl Serialize for SourceColor {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(&format!("{:?}", self))
    }
}

/// Text chunks serialize as a list of `{ "key": .., "value": .. }`
/// objects, keys may repeat so a map would lose entries
impl Serialize for TextChunks {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        struct Entry<'a> {
            key:   &'a str,
            value: &'a str
        }
        impl Serialize for Entry<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer
            {
                let mut state = serializer.serialize_struct("TextChunk", 2)?;
                state.serialize_field("key", self.key)?;
                state.serialize_field("value", self.value)?;
                state.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (key, value) in self.iter() {
            seq.serialize_element(&Entry { key, value })?;
        }
        seq.end()
    }
}
