/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Unit conversion utilities

use super::constants;
use serde::Serialize;

/// Convert from Bohr radii to Angstroms
pub fn bohr_to_angstrom(bohr: f64) -> f64 {
    bohr * constants::BOHR_RADIUS
}

/// Energy unit named by an `units="..."` label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnergyUnit {
    Hartree,
    Rydberg,
    ElectronVolt,
}

impl EnergyUnit {
    /// Recognise a units label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "hartree" | "ha" | "au" | "a.u." => Some(EnergyUnit::Hartree),
            "rydberg" | "ry" => Some(EnergyUnit::Rydberg),
            "ev" => Some(EnergyUnit::ElectronVolt),
            _ => None,
        }
    }

    /// Convert `value` in this unit to eV
    pub fn to_ev(self, value: f64) -> f64 {
        match self {
            EnergyUnit::Hartree => value * constants::HARTREE_TO_EV,
            EnergyUnit::Rydberg => value * constants::RYDBERG_TO_EV,
            EnergyUnit::ElectronVolt => value,
        }
    }
}
