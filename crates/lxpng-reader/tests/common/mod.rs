/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Png fixtures built with the reference encoder
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Description of a png file to generate
#[derive(Clone, Debug)]
pub struct Fixture {
    pub width:         u32,
    pub height:        u32,
    pub color:         png::ColorType,
    pub depth:         png::BitDepth,
    /// Raw scanline data, rows top to bottom, 16 bit samples big endian
    pub data:          Vec<u8>,
    pub palette:       Option<Vec<u8>>,
    pub trns:          Option<Vec<u8>>,
    /// `(x pixels per unit, y pixels per unit, unit)`, unit 1 is meter
    pub phys:          Option<(u32, u32, u8)>,
    pub text:          Vec<(String, String)>,
    pub itxt:          Vec<(String, String)>,
    /// Compressed `zTXt` chunks, written before the image data
    pub ztxt:          Vec<(String, String)>,
    /// `tEXt` chunks written after the image data
    pub trailing_text: Vec<(String, String)>
}

impl Fixture {
    pub fn new(width: u32, height: u32, color: png::ColorType, depth: png::BitDepth, data: Vec<u8>) -> Fixture {
        Fixture {
            width,
            height,
            color,
            depth,
            data,
            palette: None,
            trns: None,
            phys: None,
            text: Vec::new(),
            itxt: Vec::new(),
            ztxt: Vec::new(),
            trailing_text: Vec::new()
        }
    }

    /// 8 bit grayscale image with sample values `0, 1, 2, ...` in file order
    pub fn gray(width: u32, height: u32) -> Fixture {
        let data = (0..width * height).map(|x| x as u8).collect();
        Fixture::new(width, height, png::ColorType::Grayscale, png::BitDepth::Eight, data)
    }

    pub fn with_text(mut self, key: &str, value: &str) -> Fixture {
        self.text.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_itxt(mut self, key: &str, value: &str) -> Fixture {
        self.itxt.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_ztxt(mut self, key: &str, value: &str) -> Fixture {
        self.ztxt.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_trailing_text(mut self, key: &str, value: &str) -> Fixture {
        self.trailing_text.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_phys(mut self, x: u32, y: u32, unit: u8) -> Fixture {
        self.phys = Some((x, y, unit));
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(self.color);
            encoder.set_depth(self.depth);

            if let Some(palette) = &self.palette {
                encoder.set_palette(palette.clone());
            }
            if let Some(trns) = &self.trns {
                encoder.set_trns(trns.clone());
            }
            for (key, value) in &self.ztxt {
                encoder.add_ztxt_chunk(key.clone(), value.clone()).unwrap();
            }
            let mut writer = encoder.write_header().unwrap();

            if let Some((x, y, unit)) = self.phys {
                let mut phys = Vec::new();
                phys.extend_from_slice(&x.to_be_bytes());
                phys.extend_from_slice(&y.to_be_bytes());
                phys.push(unit);
                writer.write_chunk(png::chunk::pHYs, &phys).unwrap();
            }
            for (key, value) in &self.text {
                writer.write_chunk(png::chunk::tEXt, &text_chunk(key, value)).unwrap();
            }
            for (key, value) in &self.itxt {
                writer.write_chunk(png::chunk::iTXt, &itxt_chunk(key, value)).unwrap();
            }
            writer.write_image_data(&self.data).unwrap();

            for (key, value) in &self.trailing_text {
                writer.write_chunk(png::chunk::tEXt, &text_chunk(key, value)).unwrap();
            }
            // dropping the writer writes IEND
        }
        bytes
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.encode()).unwrap();
        path
    }
}

fn text_chunk(key: &str, value: &str) -> Vec<u8> {
    let mut data = key.as_bytes().to_vec();
    data.push(0);
    data.extend_from_slice(value.as_bytes());
    data
}

/// Uncompressed iTXt chunk without language tag or translated keyword
fn itxt_chunk(key: &str, value: &str) -> Vec<u8> {
    let mut data = key.as_bytes().to_vec();
    // separator, compression flag, compression method
    data.extend_from_slice(&[0, 0, 0]);
    // empty language tag and translated keyword
    data.extend_from_slice(&[0, 0]);
    data.extend_from_slice(value.as_bytes());
    data
}
