/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! ASCII coefficient reader
//!
//! The file holds `<Kpoint.N>` sections, each holding `<Wfc.M>` sections
//! whose interior lines are `real,imag` pairs. Line `i` of a Wfc section is
//! coefficient `i - begin - 1`; plane-wave labels are not interpreted.

use super::errors::{ReadError, Result};
use super::read_lines;
use crate::markup::{sections, split_delimited, Section};
use crate::wavefunction::{Allocation, Shape, ShapeSource, Wavefunction};
use log::debug;
use num_complex::Complex64;
use std::path::Path;

/// Section boundaries of one k-point and its bands
#[derive(Debug, Clone, PartialEq)]
pub struct KpointLayout {
    pub section: Section,
    pub bands: Vec<Section>,
}

/// Locate every k-point section and every band section inside it
///
/// One pass over the buffer; the readers work from the resulting tree of
/// ranges instead of re-scanning.
pub fn scan_layout<S: AsRef<str>>(lines: &[S]) -> Vec<KpointLayout> {
    sections(lines, "<Kpoint.", "</Kpoint.", 0..lines.len())
        .map(|section| KpointLayout {
            section,
            bands: sections(lines, "<Wfc.", "</Wfc.", section.interior()).collect(),
        })
        .collect()
}

/// Dimensions implied by a layout, checked for uniformity
///
/// The band count comes from the first k-point and the plane-wave count
/// from its first band; every other k-point and band must agree.
pub fn layout_shape(layout: &[KpointLayout]) -> Result<Shape> {
    let first = layout.first().ok_or(ReadError::MissingSection("Kpoint"))?;
    let first_band = first.bands.first().ok_or(ReadError::MissingSection("Wfc"))?;
    let shape = Shape::new(layout.len(), first.bands.len(), first_band.interior_len());

    for (k, kpoint) in layout.iter().enumerate() {
        debug!("Number of bands for k-point {} is = {}", k, kpoint.bands.len());
        if kpoint.bands.len() != shape.nbands {
            return Err(ReadError::NonUniformBands {
                kpoint: k,
                expected: shape.nbands,
                found: kpoint.bands.len(),
            });
        }
        for (band, section) in kpoint.bands.iter().enumerate() {
            if section.interior_len() != shape.npw {
                return Err(ReadError::NonUniformPlaneWaves {
                    kpoint: k,
                    band,
                    expected: shape.npw,
                    found: section.interior_len(),
                });
            }
        }
    }

    Ok(shape)
}

/// Parse one `real,imag` line
pub fn parse_coefficient(line: &str) -> std::result::Result<Complex64, String> {
    let fields = split_delimited(line, ',');
    if fields.len() < 2 {
        return Err(format!("expected 2 comma-separated fields, found {}", fields.len()));
    }
    let re = fields[0]
        .parse::<f64>()
        .map_err(|_| format!("invalid real part '{}'", fields[0]))?;
    let im = fields[1]
        .parse::<f64>()
        .map_err(|_| format!("invalid imaginary part '{}'", fields[1]))?;
    Ok(Complex64::new(re, im))
}

/// Read an ASCII coefficient file into `wfc`
pub fn read_ascii_wfc<P: AsRef<Path>>(path: P, wfc: &mut Wavefunction) -> Result<Shape> {
    let lines = read_lines(path.as_ref())?;
    parse_ascii_wfc(&lines, wfc)
}

/// Parse ASCII coefficient lines into `wfc`, allocating it if still empty
///
/// Coefficients already written stay in place when a later line fails.
pub fn parse_ascii_wfc<S: AsRef<str>>(lines: &[S], wfc: &mut Wavefunction) -> Result<Shape> {
    let layout = scan_layout(lines);
    debug!("Number of K-points = {}", layout.len());

    let shape = layout_shape(&layout)?;
    if wfc.ensure_shape(shape, ShapeSource::AsciiCoefficients)? == Allocation::AlreadyShaped {
        debug!("Reusing existing allocation ({})", shape);
    }

    for (kpoint, k_layout) in wfc.kpoints_mut().iter_mut().zip(&layout) {
        for (mo, band) in kpoint.mos_mut().iter_mut().zip(&k_layout.bands) {
            for (slot, index) in mo.coeff_mut().iter_mut().zip(band.interior()) {
                let line = lines[index].as_ref();
                *slot = parse_coefficient(line)
                    .map_err(|reason| ReadError::malformed(index, line, reason))?;
            }
        }
    }

    Ok(shape)
}
