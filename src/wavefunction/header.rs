/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Scalar header fields filled by the index reader

use super::model::Shape;
use crate::markup::Field;
use serde::Serialize;

/// Whether the calculation used gamma-point tricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GammaOnly {
    #[default]
    Unknown,
    False,
    True,
}

impl GammaOnly {
    /// Map a `gamma_only` attribute: `"F"` is false, any other value true
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(str::trim) {
            None => GammaOnly::Unknown,
            Some("F") => GammaOnly::False,
            Some(_) => GammaOnly::True,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            GammaOnly::Unknown => None,
            GammaOnly::False => Some(false),
            GammaOnly::True => Some(true),
        }
    }
}

/// Unit cell description from the `<Cell>` section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cell {
    /// Units label of the cell vectors
    pub units: Option<String>,
    /// Lattice parameter
    pub alat: Field<f64>,
    /// Cell volume
    pub omega: Field<f64>,
    /// 2π/alat
    pub tpiba: Field<f64>,
    /// Real-space vectors a1, a2, a3
    pub a: [Field<[f64; 3]>; 3],
    /// Reciprocal-space vectors b1, b2, b3
    pub b: [Field<[f64; 3]>; 3],
}

impl Cell {
    /// Slot for the vector tag `a1`..`a3`, `b1`..`b3`
    pub fn vector_mut(&mut self, tag: &str) -> Option<&mut Field<[f64; 3]>> {
        let (set, index) = match tag.as_bytes() {
            [set @ (b'a' | b'b'), digit @ b'1'..=b'3'] => (*set, usize::from(digit - b'1')),
            _ => return None,
        };
        match set {
            b'a' => Some(&mut self.a[index]),
            _ => Some(&mut self.b[index]),
        }
    }
}

/// Header fields of the wavefunction export
///
/// `nkpts`, `nbands` and `npw` are what the header reports; the allocated
/// hierarchy is described by [`Shape`] on the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    pub nkpts: Field<usize>,
    pub nbands: Field<usize>,
    /// Plane-wave count per band, shared by every k-point
    pub npw: Field<usize>,
    pub nspin: Field<usize>,
    pub gamma_only: GammaOnly,
    pub natoms: Field<usize>,
    pub cell: Cell,
    pub efermi: Field<f64>,
    pub energy_units: Option<String>,
}

impl Header {
    /// Shape implied by the header when all three dimensions are positive
    pub fn shape(&self) -> Option<Shape> {
        let shape = Shape::new(self.nkpts.get()?, self.nbands.get()?, self.npw.get()?);
        (!shape.is_empty()).then_some(shape)
    }
}
