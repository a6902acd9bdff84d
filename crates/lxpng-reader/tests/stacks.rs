/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use lxpng_reader::{Extent, FileSeries, PngReader, PngReaderErrors};

use crate::common::Fixture;

mod common;

/// 2x1 gray slice whose two samples are `value` and `value + 1`
fn slice(value: u8) -> Fixture {
    Fixture::new(
        2,
        1,
        png::ColorType::Grayscale,
        png::BitDepth::Eight,
        vec![value, value + 1]
    )
}

#[test]
fn test_file_list_stack() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = [10, 20, 30]
        .iter()
        .enumerate()
        .map(|(i, v)| slice(*v).write_to(dir.path(), &format!("s{i}.png")))
        .collect();

    let mut reader = PngReader::new();
    reader.set_file_names(files);

    let info = reader.execute_information().unwrap();
    assert_eq!(info.whole_extent().as_array(), [0, 1, 0, 0, 0, 2]);
    assert_eq!(info.number_of_slices(), 3);

    let image = reader.execute_data().unwrap();
    assert_eq!(image.dimensions(), (2, 1, 3));
    assert_eq!(
        image.pixels().as_u8().unwrap(),
        &[10, 11, 20, 21, 30, 31]
    );
    assert_eq!(image.scalar(1, 0, 2, 0), Some(31));
}

#[test]
fn test_pattern_stack() {
    let dir = tempfile::tempdir().unwrap();
    for (number, value) in [(1, 5), (3, 7), (5, 9)] {
        slice(value).write_to(dir.path(), &format!("ct_{number:03}.png"));
    }
    let prefix = dir.path().join("ct").display().to_string();
    let series = FileSeries::new(prefix, "%s_%03d.png", 0, 2)
        .set_offset(1)
        .set_spacing(2);

    let mut reader = PngReader::new();
    reader.set_file_series(series);

    assert_eq!(
        reader.file_name_for_slice(1).unwrap(),
        Some(dir.path().join("ct_003.png"))
    );

    let image = reader.execute_data().unwrap();
    assert_eq!(image.pixels().as_u8().unwrap(), &[5, 6, 7, 8, 9, 10]);

    // just the last slice
    let image = reader
        .execute_data_with_extent(Extent::new([0, 1, 0, 0, 2, 2]))
        .unwrap();
    assert_eq!(image.pixels().as_u8().unwrap(), &[9, 10]);
}

#[test]
fn test_pattern_with_slice_range_offset() {
    let dir = tempfile::tempdir().unwrap();
    for number in 4..=5 {
        slice(number as u8).write_to(dir.path(), &format!("img.{number}"));
    }
    let prefix = dir.path().join("img").display().to_string();

    let mut reader = PngReader::new();
    reader.set_file_series(FileSeries::new(prefix, "%s.%d", 4, 5));

    let info = reader.execute_information().unwrap();
    assert_eq!(info.whole_extent().z(), (4, 5));

    let image = reader.execute_data().unwrap();
    assert_eq!(image.extent().as_array(), [0, 1, 0, 0, 4, 5]);
    assert_eq!(image.pixels().as_u8().unwrap(), &[4, 5, 5, 6]);
}

#[test]
fn test_mismatched_slice() {
    let dir = tempfile::tempdir().unwrap();
    let first = slice(1).write_to(dir.path(), "a.png");
    let second = Fixture::gray(3, 1).write_to(dir.path(), "b.png");

    let mut reader = PngReader::new();
    reader.set_file_names(vec![first, second]);

    match reader.execute_data() {
        Err(PngReaderErrors::SliceMismatch {
            slice,
            expected,
            found
        }) => {
            assert_eq!(slice, 1);
            assert_eq!(expected.width, 2);
            assert_eq!(found.width, 3);
        }
        other => panic!("Expected a slice mismatch, got {other:?}"),
    }
}

#[test]
fn test_missing_slice_file() {
    let dir = tempfile::tempdir().unwrap();
    slice(1).write_to(dir.path(), "img.0");
    let prefix = dir.path().join("img").display().to_string();

    let mut reader = PngReader::new();
    reader.set_file_series(FileSeries::new(prefix, "%s.%d", 0, 1));

    reader.execute_information().unwrap();
    assert!(matches!(
        reader.execute_data(),
        Err(PngReaderErrors::FileErrors(..))
    ));
}
