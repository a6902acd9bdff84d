/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lxpng_reader::{PngReader, PngReaderErrors};

use crate::serde::Metadata;

/// Describe the reader's input as pretty printed json
pub fn probe_json(reader: &mut PngReader) -> Result<String, PngReaderErrors> {
    let source = reader
        .source()
        .map(|source| source.to_string())
        .unwrap_or_default();

    let information = reader.execute_information()?.clone();
    let metadata = Metadata::new(source, &information, reader.text());

    serde_json::to_string_pretty(&metadata)
        .map_err(|e| PngReaderErrors::Generic(format!("Could not serialize metadata: {e}")))
}

/// Text chunks as `key: value` lines, restricted to `keys` when not empty
pub fn text_lines(reader: &PngReader, keys: &[String]) -> Vec<String> {
    let indexes: Vec<usize> = if keys.is_empty() {
        (0..reader.number_of_text_chunks()).collect()
    } else {
        keys.iter().flat_map(|key| reader.text_chunks(key)).collect()
    };

    indexes
        .into_iter()
        .filter_map(|index| Some(format!("{}: {}", reader.text_key(index)?, reader.text_value(index)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use lxpng_reader::PngReader;

    use crate::probe_files::{probe_json, text_lines};

    fn png_with_text() -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, 1, 1);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_chunk(png::chunk::tEXt, b"Title\0ruler").unwrap();
            writer.write_chunk(png::chunk::tEXt, b"Author\0me").unwrap();
            writer.write_image_data(&[7]).unwrap();
        }
        bytes
    }

    #[test]
    fn test_probe_contains_information_and_text() {
        let mut reader = PngReader::new();
        reader.set_memory_buffer(png_with_text());

        let json = probe_json(&mut reader).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["information"]["components"], 1);
        assert_eq!(value["text"][0]["key"], "Author");
        assert_eq!(value["text"][1]["value"], "ruler");
    }

    #[test]
    fn test_text_lines_filter() {
        let mut reader = PngReader::new();
        reader.set_memory_buffer(png_with_text());
        reader.execute_information().unwrap();

        assert_eq!(text_lines(&reader, &[]), ["Author: me", "Title: ruler"]);
        assert_eq!(
            text_lines(&reader, &["Title".to_string(), "None".to_string()]),
            ["Title: ruler"]
        );
    }
}
