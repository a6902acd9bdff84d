/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use lxpng_reader::{ImageInformation, TextChunks};

pub struct Metadata<'a> {
    source:      String,
    information: &'a ImageInformation,
    text:        &'a TextChunks
}

impl<'a> Metadata<'a> {
    pub fn new(source: String, information: &'a ImageInformation, text: &'a TextChunks) -> Metadata<'a> {
        Metadata {
            source,
            information,
            text
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PngMetadata", 3)?;

        state.serialize_field("source", &self.source)?;
        state.serialize_field("information", self.information)?;
        state.serialize_field("text", self.text)?;

        state.end()
    }
}
