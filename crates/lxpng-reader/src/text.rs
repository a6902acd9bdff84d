/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Png text chunk index
//!
//! Text chunks are kept as `(key, value)` pairs sorted by key and then by
//! value, so all values of one key sit next to each other and can be
//! addressed as a range of indexes.
use std::ops::Range;

use log::warn;

/// Sorted key/value pairs from a png file's text chunks
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextChunks {
    entries: Vec<(String, String)>
}

impl TextChunks {
    pub fn new() -> TextChunks {
        TextChunks::default()
    }

    /// Build an index from unsorted pairs
    pub fn from_pairs<I>(pairs: I) -> TextChunks
    where
        I: IntoIterator<Item = (String, String)>
    {
        let mut entries: Vec<(String, String)> = pairs.into_iter().collect();
        entries.sort();
        TextChunks { entries }
    }

    /// Collect text entries from the codec's header info
    ///
    /// `tEXt` entries are always taken, `zTXt` and `iTXt` entries
    /// only when `include_compressed` is set
    pub(crate) fn from_info(info: &png::Info, include_compressed: bool) -> TextChunks {
        let mut pairs: Vec<(String, String)> = info
            .uncompressed_latin1_text
            .iter()
            .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
            .collect();

        let skipped = info.compressed_latin1_text.len() + info.utf8_text.len();

        if include_compressed {
            for chunk in &info.compressed_latin1_text {
                match chunk.get_text() {
                    Ok(text) => pairs.push((chunk.keyword.clone(), text)),
                    Err(err) => warn!("Could not read zTXt entry {:?}: {err}", chunk.keyword)
                }
            }
            for chunk in &info.utf8_text {
                match chunk.get_text() {
                    Ok(text) => pairs.push((chunk.keyword.clone(), text)),
                    Err(err) => warn!("Could not read iTXt entry {:?}: {err}", chunk.keyword)
                }
            }
        } else if skipped > 0 {
            warn!("Compressed and international text entries are not indexed, ignoring {skipped} entries");
        }
        TextChunks::from_pairs(pairs)
    }

    /// Number of text chunks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexes `[begin, end)` holding values for `key`
    ///
    /// When `key` is absent the range is empty and starts where
    /// the key would have been inserted
    pub fn range(&self, key: &str) -> Range<usize> {
        let begin = self.entries.partition_point(|(k, _)| k.as_str() < key);
        let end = begin + self.entries[begin..].partition_point(|(k, _)| k.as_str() == key);

        begin..end
    }

    /// Key stored at `index`
    pub fn key(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    /// Value stored at `index`
    pub fn value(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, v)| v.as_str())
    }

    /// All values stored for `key`, in sorted order
    pub fn values<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries[self.range(key)].iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
