/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used for unit conversion

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 0.529177210903;

/// Rydberg energy in eV
pub const RYDBERG: f64 = 13.605693122994;

/// Conversion from Rydberg to eV
pub const RYDBERG_TO_EV: f64 = RYDBERG;

/// Conversion from Hartree to eV
pub const HARTREE_TO_EV: f64 = 2.0 * RYDBERG;
