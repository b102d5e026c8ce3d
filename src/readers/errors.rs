/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the file readers

use crate::timer::TimerError;
use crate::wavefunction::ModelError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading wavefunction exports
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Unable to open file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing section: <{0}>")]
    MissingSection(&'static str),

    #[error("K-point {kpoint} has {found} bands, expected {expected}")]
    NonUniformBands {
        kpoint: usize,
        expected: usize,
        found: usize,
    },

    #[error("Band {band} of k-point {kpoint} has {found} plane waves, expected {expected}")]
    NonUniformPlaneWaves {
        kpoint: usize,
        band: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: {reason}: '{content}'")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Binary data truncated: need {needed} bytes, buffer has {available}")]
    TruncatedBinary { needed: usize, available: usize },

    #[error("Invalid binary layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl ReadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReadError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(index: usize, content: &str, reason: impl Into<String>) -> Self {
        ReadError::MalformedLine {
            line: index + 1,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReadError>;
