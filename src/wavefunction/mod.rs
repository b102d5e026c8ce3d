/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! In-memory wavefunction model
//!
//! A [`Wavefunction`] owns k-points, each owning bands ([`Mo`]), each owning
//! a plane-wave coefficient vector. Two readers can derive the dimensions
//! independently (the index header and the ASCII coefficient file), so the
//! hierarchy carries an explicit [`AllocationState`] and is allocated once.

pub mod errors;
pub mod header;
pub mod model;

pub use errors::{ModelError, Result};
pub use header::{Cell, GammaOnly, Header};
pub use model::{
    Allocation, AllocationState, KPoint, Mo, Shape, ShapeSource, Summary, Wavefunction,
};
