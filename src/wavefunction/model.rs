/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! K-point / MO / coefficient hierarchy

use super::errors::{ModelError, Result};
use super::header::{GammaOnly, Header};
use crate::utils::{bohr_to_angstrom, EnergyUnit};
use log::info;
use num_complex::Complex64;
use serde::Serialize;
use std::fmt;

/// Dimensions of the allocated hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    pub nkpts: usize,
    pub nbands: usize,
    pub npw: usize,
}

impl Shape {
    pub fn new(nkpts: usize, nbands: usize, npw: usize) -> Self {
        Self { nkpts, nbands, npw }
    }

    /// True when any dimension is zero
    pub fn is_empty(&self) -> bool {
        self.nkpts == 0 || self.nbands == 0 || self.npw == 0
    }

    /// Total number of coefficient slots
    pub fn coefficient_count(&self) -> usize {
        self.nkpts * self.nbands * self.npw
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nkpts={}, nbands={}, npw={}",
            self.nkpts, self.nbands, self.npw
        )
    }
}

/// Which reader determined the shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeSource {
    /// Dimensions from the index header attributes
    Header,
    /// Dimensions counted from `Kpoint`/`Wfc` sections
    AsciiCoefficients,
}

/// Allocation state of the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationState {
    #[default]
    Empty,
    Shaped { shape: Shape, source: ShapeSource },
}

/// Result of a shape request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// The hierarchy was allocated by this request
    Allocated,
    /// An equal shape was already in place; nothing changed
    AlreadyShaped,
}

/// One band at one k-point
#[derive(Debug, Clone, PartialEq)]
pub struct Mo {
    coeff: Vec<Complex64>,
    /// Band energy, filled from the eigenvalue section only
    pub energy: Option<f64>,
}

impl Mo {
    /// Band with `npw` zero coefficients and no energy
    pub fn new(npw: usize) -> Self {
        Self {
            coeff: vec![Complex64::new(0.0, 0.0); npw],
            energy: None,
        }
    }

    pub fn npw(&self) -> usize {
        self.coeff.len()
    }

    pub fn coeff(&self) -> &[Complex64] {
        &self.coeff
    }

    pub fn coeff_mut(&mut self) -> &mut [Complex64] {
        &mut self.coeff
    }

    /// sqrt(Σ |c|²)
    pub fn norm(&self) -> f64 {
        self.coeff.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt()
    }

    /// Scale to unit norm; zero vectors are left alone
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            self.coeff.iter_mut().for_each(|c| *c /= norm);
        }
    }
}

/// All bands of one k-point
#[derive(Debug, Clone, PartialEq)]
pub struct KPoint {
    mos: Vec<Mo>,
}

impl KPoint {
    pub fn new(nbands: usize, npw: usize) -> Self {
        Self {
            mos: (0..nbands).map(|_| Mo::new(npw)).collect(),
        }
    }

    pub fn nbands(&self) -> usize {
        self.mos.len()
    }

    pub fn mos(&self) -> &[Mo] {
        &self.mos
    }

    pub fn mos_mut(&mut self) -> &mut [Mo] {
        &mut self.mos
    }

    pub fn energies(&self) -> Vec<Option<f64>> {
        self.mos.iter().map(|mo| mo.energy).collect()
    }
}

/// Parsed wavefunction export
///
/// The hierarchy starts [`AllocationState::Empty`] and is shaped exactly
/// once through [`Wavefunction::ensure_shape`]. The grid is a separate flat
/// container and never shapes the hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wavefunction {
    pub header: Header,
    state: AllocationState,
    kpoints: Vec<KPoint>,
    grid: Vec<[i32; 3]>,
}

impl Wavefunction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AllocationState {
        self.state
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self.state, AllocationState::Shaped { .. })
    }

    pub fn shape(&self) -> Option<Shape> {
        match self.state {
            AllocationState::Shaped { shape, .. } => Some(shape),
            AllocationState::Empty => None,
        }
    }

    pub fn allocation_source(&self) -> Option<ShapeSource> {
        match self.state {
            AllocationState::Shaped { source, .. } => Some(source),
            AllocationState::Empty => None,
        }
    }

    /// Allocate the hierarchy if it is empty
    ///
    /// An already shaped model accepts an equal shape as a no-op and rejects
    /// a different one without touching existing data.
    pub fn ensure_shape(&mut self, shape: Shape, source: ShapeSource) -> Result<Allocation> {
        if shape.is_empty() {
            return Err(ModelError::EmptyShape(shape));
        }

        match self.state {
            AllocationState::Shaped { shape: existing, .. } if existing == shape => {
                Ok(Allocation::AlreadyShaped)
            }
            AllocationState::Shaped { shape: existing, .. } => Err(ModelError::ShapeMismatch {
                existing,
                requested: shape,
            }),
            AllocationState::Empty => {
                info!("Allocating wavefunction ({}) from {:?}", shape, source);
                self.kpoints = (0..shape.nkpts)
                    .map(|_| KPoint::new(shape.nbands, shape.npw))
                    .collect();
                self.state = AllocationState::Shaped { shape, source };
                Ok(Allocation::Allocated)
            }
        }
    }

    pub fn kpoints(&self) -> &[KPoint] {
        &self.kpoints
    }

    pub fn kpoints_mut(&mut self) -> &mut [KPoint] {
        &mut self.kpoints
    }

    pub fn kpoint(&self, k: usize) -> Option<&KPoint> {
        self.kpoints.get(k)
    }

    pub fn mo(&self, k: usize, band: usize) -> Option<&Mo> {
        self.kpoints.get(k)?.mos.get(band)
    }

    /// Every coefficient slot in k-point, band, plane-wave order
    pub fn coefficients_mut(&mut self) -> impl Iterator<Item = &mut Complex64> {
        self.kpoints
            .iter_mut()
            .flat_map(|kpoint| kpoint.mos.iter_mut())
            .flat_map(|mo| mo.coeff.iter_mut())
    }

    pub fn grid(&self) -> &[[i32; 3]] {
        &self.grid
    }

    /// Replace the grid container
    pub fn set_grid(&mut self, grid: Vec<[i32; 3]>) {
        self.grid = grid;
    }

    /// Normalize every band to unit norm
    pub fn normalize(&mut self) {
        self.kpoints
            .iter_mut()
            .flat_map(|kpoint| kpoint.mos.iter_mut())
            .for_each(Mo::normalize);
    }

    /// ⟨ψ_i|φ_j⟩ between band `i` of this model and band `j` of `other` at k-point `k`
    pub fn overlap(&self, other: &Wavefunction, k: usize, i: usize, j: usize) -> Result<Complex64> {
        let shape = self.shape().ok_or(ModelError::Unshaped)?;
        let other_shape = other.shape().ok_or(ModelError::Unshaped)?;
        if shape != other_shape {
            return Err(ModelError::ShapeMismatch {
                existing: shape,
                requested: other_shape,
            });
        }
        if k >= shape.nkpts {
            return Err(ModelError::IndexOutOfRange {
                what: "k-point",
                index: k,
                len: shape.nkpts,
            });
        }
        for band in [i, j] {
            if band >= shape.nbands {
                return Err(ModelError::IndexOutOfRange {
                    what: "band",
                    index: band,
                    len: shape.nbands,
                });
            }
        }

        let bra = &self.kpoints[k].mos[i].coeff;
        let ket = &other.kpoints[k].mos[j].coeff;
        Ok(bra.iter().zip(ket).map(|(a, b)| a.conj() * b).sum())
    }

    /// Band energies of k-point `k` in eV, using the header energy units
    ///
    /// `None` when the k-point does not exist or the units label is unknown.
    pub fn energies_ev(&self, k: usize) -> Option<Vec<Option<f64>>> {
        let unit = EnergyUnit::from_label(self.header.energy_units.as_deref()?)?;
        let kpoint = self.kpoints.get(k)?;
        Some(
            kpoint
                .mos
                .iter()
                .map(|mo| mo.energy.map(|e| unit.to_ev(e)))
                .collect(),
        )
    }

    /// Serializable overview of the model
    pub fn summary(&self) -> Summary {
        let shape = self.shape();
        let cell = &self.header.cell;
        let bohr_cell = cell
            .units
            .as_deref()
            .map(|units| matches!(units.to_ascii_lowercase().as_str(), "bohr" | "alat" | "au"))
            .unwrap_or(false);

        Summary {
            shape,
            source: self.allocation_source(),
            nspin: self.header.nspin.get(),
            gamma_only: self.header.gamma_only,
            natoms: self.header.natoms.get(),
            cell_units: cell.units.clone(),
            alat: cell.alat.get(),
            alat_angstrom: cell.alat.get().filter(|_| bohr_cell).map(bohr_to_angstrom),
            omega: cell.omega.get(),
            efermi: self.header.efermi.get(),
            energy_units: self.header.energy_units.clone(),
            grid_points: self.grid.len(),
            energies: self.kpoints.iter().map(KPoint::energies).collect(),
        }
    }
}

/// Overview returned by [`Wavefunction::summary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub shape: Option<Shape>,
    pub source: Option<ShapeSource>,
    pub nspin: Option<usize>,
    pub gamma_only: GammaOnly,
    pub natoms: Option<usize>,
    pub cell_units: Option<String>,
    pub alat: Option<f64>,
    pub alat_angstrom: Option<f64>,
    pub omega: Option<f64>,
    pub efermi: Option<f64>,
    pub energy_units: Option<String>,
    pub grid_points: usize,
    pub energies: Vec<Vec<Option<f64>>>,
}
