/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Binary coefficient reader
//!
//! The binary file is a headerless run of complex doubles, each stored as a
//! little-endian real part followed by a little-endian imaginary part. The
//! values are assigned positionally in k-point, band, plane-wave order.
//!
//! The file carries no per-band record length, so the number of plane waves
//! per band is supplied through a [`PlaneWavePolicy`]. Every band gets the
//! same count; files whose bands differ in size cannot be described.

use super::errors::{ReadError, Result};
use crate::wavefunction::{ModelError, Shape, Wavefunction};
use log::{debug, warn};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bytes per stored complex value
pub const COMPLEX_SIZE: usize = 16;

/// How the per-band plane-wave count is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneWavePolicy {
    /// Split a per-k-point total evenly over the bands (`total / nbands`)
    SplitTotal(usize),
    /// Use this count for every band
    Explicit(usize),
    /// Use the plane-wave count of the already shaped model
    FromModel,
}

/// Externally supplied layout of a binary coefficient file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryLayout {
    pub nkpts: usize,
    pub nbands: usize,
    pub plane_waves: PlaneWavePolicy,
}

impl BinaryLayout {
    pub fn new(nkpts: usize, nbands: usize, plane_waves: PlaneWavePolicy) -> Self {
        Self {
            nkpts,
            nbands,
            plane_waves,
        }
    }

    /// Plane waves per band under this layout's policy
    pub fn npw_per_band(&self, model: Shape) -> Result<usize> {
        match self.plane_waves {
            PlaneWavePolicy::SplitTotal(total) => {
                if self.nbands == 0 {
                    return Err(ReadError::InvalidLayout(
                        "cannot split plane waves over zero bands".to_string(),
                    ));
                }
                if total % self.nbands != 0 {
                    warn!(
                        "Total of {} plane waves does not divide evenly over {} bands",
                        total, self.nbands
                    );
                }
                Ok(total / self.nbands)
            }
            PlaneWavePolicy::Explicit(npw) => Ok(npw),
            PlaneWavePolicy::FromModel => Ok(model.npw),
        }
    }
}

fn decode_complex(chunk: &[u8]) -> Complex64 {
    let mut re = [0u8; 8];
    let mut im = [0u8; 8];
    re.copy_from_slice(&chunk[..8]);
    im.copy_from_slice(&chunk[8..COMPLEX_SIZE]);
    Complex64::new(f64::from_le_bytes(re), f64::from_le_bytes(im))
}

/// Read a binary coefficient file into an already shaped `wfc`
pub fn read_binary_wfc<P: AsRef<Path>>(
    path: P,
    layout: &BinaryLayout,
    wfc: &mut Wavefunction,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ReadError::io(path, e))?;
    decode_binary_wfc(&bytes, layout, wfc)
}

/// Decode a binary coefficient buffer into an already shaped `wfc`
///
/// The model is never allocated here: the layout must describe the shape the
/// model already has, and the buffer must hold at least that many values.
pub fn decode_binary_wfc(
    bytes: &[u8],
    layout: &BinaryLayout,
    wfc: &mut Wavefunction,
) -> Result<()> {
    let shape = wfc.shape().ok_or(ModelError::Unshaped)?;
    let npw = layout.npw_per_band(shape)?;
    let requested = Shape::new(layout.nkpts, layout.nbands, npw);
    if requested != shape {
        return Err(ModelError::ShapeMismatch {
            existing: shape,
            requested,
        }
        .into());
    }

    let available = bytes.len() / COMPLEX_SIZE;
    debug!("ntot_pw = {}", available);
    if bytes.len() % COMPLEX_SIZE != 0 {
        warn!(
            "Binary buffer of {} bytes is not a whole number of complex values",
            bytes.len()
        );
    }

    let needed = shape.coefficient_count() * COMPLEX_SIZE;
    if needed > bytes.len() {
        return Err(ReadError::TruncatedBinary {
            needed,
            available: bytes.len(),
        });
    }
    if available > shape.coefficient_count() {
        debug!(
            "Ignoring {} trailing complex values",
            available - shape.coefficient_count()
        );
    }

    for (slot, chunk) in wfc
        .coefficients_mut()
        .zip(bytes.chunks_exact(COMPLEX_SIZE))
    {
        *slot = decode_complex(chunk);
    }

    Ok(())
}
