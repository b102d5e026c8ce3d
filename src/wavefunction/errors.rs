/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the wavefunction model

use super::model::Shape;
use thiserror::Error;

/// Errors raised by the k-point/MO hierarchy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("model already shaped as {existing}, refusing {requested}")]
    ShapeMismatch { existing: Shape, requested: Shape },

    #[error("cannot allocate an empty shape ({0})")]
    EmptyShape(Shape),

    #[error("model has not been shaped yet")]
    Unshaped,

    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
