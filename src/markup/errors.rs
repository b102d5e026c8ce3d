/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for markup scanning

use thiserror::Error;

/// Errors that can occur while decoding values embedded in markup lines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    #[error("expected {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
}

/// Result type for markup operations
pub type Result<T> = std::result::Result<T, MarkupError>;
