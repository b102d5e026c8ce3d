/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Whole-file line buffers and field splitting

use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Ordered, immutable lines of one input file
///
/// Line indices into the buffer are the coordinates used by every
/// [`Section`](super::Section).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBuffer {
    /// File the lines were read from, if any
    pub source: Option<PathBuf>,
    lines: Vec<String>,
}

impl LineBuffer {
    /// Read a whole file into memory
    pub fn read<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut buffer = Self::from_text(&text);
        buffer.source = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Split in-memory text into a buffer
    pub fn from_text(text: &str) -> Self {
        Self {
            source: None,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Deref for LineBuffer {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.lines
    }
}

impl<S: Into<String>> FromIterator<S> for LineBuffer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            source: None,
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Split a line into whitespace-separated fields
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Split a line on `delim`, trimming each field
pub fn split_delimited(line: &str, delim: char) -> Vec<&str> {
    line.split(delim).map(str::trim).collect()
}
