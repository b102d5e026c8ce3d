/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # qewfc-rs
//!
//! Readers for plane-wave wavefunction exports.
//!
//! An export consists of an index file (dimensions, cell, eigenvalues), the
//! plane-wave coefficients either as tagged ASCII or as a raw binary stream,
//! and optionally a real-space grid. The readers fill a [`Wavefunction`]
//! organised as k-points, each holding a list of bands (molecular orbitals),
//! each holding complex coefficients.

pub mod cli;
pub mod markup;
pub mod readers;
pub mod timer;
pub mod utils;
pub mod wavefunction;

pub use readers::{load, ReadError, ReaderConfig};
pub use wavefunction::{Shape, Wavefunction};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
