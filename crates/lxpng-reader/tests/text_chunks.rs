/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lxpng_reader::{PngReader, PngReaderErrors, ReaderOptions};

use crate::common::Fixture;

mod common;

fn annotated() -> Fixture {
    Fixture::gray(2, 2)
        .with_text("Title", "phantom")
        .with_text("Comment", "second pass")
        .with_text("Author", "lab")
        .with_text("Comment", "first pass")
}

#[test]
fn test_text_chunks_are_sorted() {
    let mut reader = PngReader::new();
    reader.set_memory_buffer(annotated().encode());
    reader.execute_information().unwrap();

    assert_eq!(reader.number_of_text_chunks(), 4);
    assert_eq!(reader.text_key(0), Some("Author"));
    assert_eq!(reader.text_key(1), Some("Comment"));
    assert_eq!(reader.text_value(1), Some("first pass"));
    assert_eq!(reader.text_value(2), Some("second pass"));
    assert_eq!(reader.text_key(3), Some("Title"));
    assert_eq!(reader.text_key(4), None);
}

#[test]
fn test_ranges_per_key() {
    let mut reader = PngReader::new();
    reader.set_memory_buffer(annotated().encode());
    reader.execute_information().unwrap();

    assert_eq!(reader.text_chunks("Comment"), 1..3);
    assert_eq!(reader.text_chunks("Title"), 3..4);

    let missing = reader.text_chunks("Software");
    assert!(missing.is_empty());
    assert_eq!(missing.start, 3);

    let values: Vec<&str> = reader
        .text_chunks("Comment")
        .filter_map(|index| reader.text_value(index))
        .collect();
    assert_eq!(values, ["first pass", "second pass"]);
}

#[test]
fn test_international_text_is_skipped_by_default() {
    let bytes = Fixture::gray(2, 2)
        .with_text("Title", "phantom")
        .with_itxt("Description", "slice through the skull")
        .encode();

    let mut reader = PngReader::new();
    reader.set_memory_buffer(bytes.clone());
    reader.execute_information().unwrap();

    assert_eq!(reader.number_of_text_chunks(), 1);
    assert!(reader.text_chunks("Description").is_empty());

    let mut reader =
        PngReader::new_with_options(ReaderOptions::default().set_read_compressed_text(true));
    reader.set_memory_buffer(bytes);
    reader.execute_information().unwrap();

    assert_eq!(reader.number_of_text_chunks(), 2);
    let range = reader.text_chunks("Description");
    assert_eq!(range.len(), 1);
    assert_eq!(
        reader.text_value(range.start),
        Some("slice through the skull")
    );
}

#[test]
fn test_compressed_text_is_skipped_by_default() {
    let bytes = Fixture::gray(2, 2)
        .with_text("Title", "phantom")
        .with_ztxt("Comment", "reconstructed with a soft kernel")
        .encode();

    let mut reader = PngReader::new();
    reader.set_memory_buffer(bytes.clone());
    reader.execute_information().unwrap();

    assert_eq!(reader.number_of_text_chunks(), 1);
    assert!(reader.text_chunks("Comment").is_empty());

    let mut reader =
        PngReader::new_with_options(ReaderOptions::default().set_read_compressed_text(true));
    reader.set_memory_buffer(bytes);
    reader.execute_information().unwrap();

    assert_eq!(reader.number_of_text_chunks(), 2);
    assert_eq!(reader.text_chunks("Comment"), 0..1);
    assert_eq!(
        reader.text_value(0),
        Some("reconstructed with a soft kernel")
    );
}

/// Png whose stream stops in the middle of a `tEXt` chunk that
/// follows the image data, `IEND` is missing
fn truncated_after_image_data() -> Vec<u8> {
    let mut bytes = Fixture::gray(3, 2)
        .with_text("Title", "phantom")
        .with_trailing_text("Software", "scanner 2.1")
        .encode();
    // IEND is 12 bytes, the trailing chunk is 12 + 20 bytes
    let keep = bytes.len() - 12 - 16;
    bytes.truncate(keep);
    bytes
}

#[test]
fn test_broken_trailing_chunks_keep_pixels() {
    let mut reader = PngReader::new();
    reader.set_memory_buffer(truncated_after_image_data());

    let image = reader.execute_data().unwrap();
    assert_eq!(image.pixels().as_u8().unwrap(), &[3, 4, 5, 0, 1, 2]);
    assert_eq!(reader.text_chunks("Title").len(), 1);
}

#[test]
fn test_broken_trailing_chunks_fail_in_strict_mode() {
    let mut reader = PngReader::new_with_options(ReaderOptions::default().set_strict_mode(true));
    reader.set_memory_buffer(truncated_after_image_data());

    reader.execute_information().unwrap();
    assert!(matches!(
        reader.execute_data(),
        Err(PngReaderErrors::DecodeErrors(_))
    ));
}

#[test]
fn test_text_after_image_data() {
    let bytes = Fixture::gray(2, 2)
        .with_text("Title", "phantom")
        .with_trailing_text("Software", "scanner 2.1")
        .encode();

    let mut reader = PngReader::new();
    reader.set_memory_buffer(bytes);

    reader.execute_information().unwrap();
    assert_eq!(reader.number_of_text_chunks(), 1);

    reader.execute_data().unwrap();
    assert_eq!(reader.number_of_text_chunks(), 2);
    let range = reader.text_chunks("Software");
    assert_eq!(reader.text_value(range.start), Some("scanner 2.1"));
}

#[test]
fn test_new_input_clears_text() {
    let mut reader = PngReader::new();
    reader.set_memory_buffer(annotated().encode());
    reader.execute_information().unwrap();
    assert_eq!(reader.number_of_text_chunks(), 4);

    reader.set_memory_buffer(Fixture::gray(2, 2).encode());
    assert_eq!(reader.number_of_text_chunks(), 0);
    reader.execute_information().unwrap();
    assert_eq!(reader.number_of_text_chunks(), 0);
}

#[cfg(feature = "serde-support")]
#[test]
fn test_information_serializes() {
    let mut reader = PngReader::new();
    reader.set_memory_buffer(annotated().encode());
    let info = reader.execute_information().unwrap().clone();

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["whole_extent"], serde_json::json!([0, 1, 0, 1, 0, 0]));
    assert_eq!(json["components"], 1);
    assert_eq!(json["scalar_type"], "unsigned char");

    let text = serde_json::to_value(reader.text()).unwrap();
    assert_eq!(text.as_array().unwrap().len(), 4);
    assert_eq!(text[0]["key"], "Author");
}
