/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Utility functions shared by the readers and the model
//!
//! Physical constants and unit conversions for the energy and length labels
//! found in the exported headers.

pub mod constants;
pub mod conversions;

pub use conversions::{bohr_to_angstrom, EnergyUnit};
