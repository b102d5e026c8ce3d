/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the timer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while timing or reporting
#[derive(Error, Debug)]
pub enum TimerError {
    #[error("Too many timed blocks (limit {limit}); cannot add '{name}'")]
    TooManyBlocks { limit: usize, name: String },

    #[error("Unable to write timing report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for timer operations
pub type Result<T> = std::result::Result<T, TimerError>;
