/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Index (header) reader
//!
//! Reads the `<Dimensions>`, `<Cell>` and `<Eigenvalues>` sections of the
//! index file. The read is best-effort: a missing section or a malformed
//! attribute leaves the corresponding fields unset and is listed in the
//! returned [`IndexReport`] instead of aborting.

use super::errors::Result;
use super::read_lines;
use crate::markup::{
    element_text, extract_attribute, find_section, parse_vector3, sections, tag_index, Field,
    Section,
};
use crate::wavefunction::{Allocation, GammaOnly, ModelError, ShapeSource, Wavefunction};
use log::{debug, warn};
use std::path::Path;

const CELL_VECTORS: [&str; 6] = ["a1", "a2", "a3", "b1", "b2", "b3"];

/// Problems tolerated while reading an index file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexReport {
    /// Top-level sections that were not found
    pub missing_sections: Vec<&'static str>,
    /// Attributes present but not convertible, with their raw text
    pub malformed_fields: Vec<(&'static str, String)>,
    /// 1-based `e.N` tags expected but not found
    pub missing_eigenvalues: Vec<usize>,
    /// 1-based line numbers of eigenvalue lines that did not parse
    pub malformed_energy_lines: Vec<usize>,
    /// Set when the header shape disagrees with an already shaped model
    pub shape_conflict: Option<ModelError>,
    /// True when this read allocated the hierarchy
    pub allocated: bool,
}

impl IndexReport {
    /// True when nothing was tolerated
    pub fn is_clean(&self) -> bool {
        self.missing_sections.is_empty()
            && self.malformed_fields.is_empty()
            && self.missing_eigenvalues.is_empty()
            && self.malformed_energy_lines.is_empty()
            && self.shape_conflict.is_none()
    }

    fn note<T>(&mut self, name: &'static str, field: &Field<T>) {
        if let Some(raw) = field.malformed_text() {
            warn!("Malformed value for {}: '{}'", name, raw);
            self.malformed_fields.push((name, raw.to_string()));
        }
    }
}

/// Read an index file into `wfc`
///
/// Only an unreadable file is an error; everything else is reported.
pub fn read_index<P: AsRef<Path>>(path: P, wfc: &mut Wavefunction) -> Result<IndexReport> {
    let lines = read_lines(path.as_ref())?;
    Ok(parse_index(&lines, wfc))
}

/// Parse index lines into `wfc`
pub fn parse_index<S: AsRef<str>>(lines: &[S], wfc: &mut Wavefunction) -> IndexReport {
    let mut report = IndexReport::default();
    let all = 0..lines.len();

    wfc.header.nspin = Field::Absent;
    wfc.header.gamma_only = GammaOnly::Unknown;
    wfc.header.natoms = Field::Absent;

    match find_section(lines, "<Dimensions>", "</Dimensions>", all.clone()) {
        Some(section) => read_dimensions(lines, section, wfc, &mut report),
        None => {
            debug!("No <Dimensions> section");
            report.missing_sections.push("Dimensions");
        }
    }

    match find_section(lines, "<Cell", "</Cell>", all.clone()) {
        Some(section) => read_cell(lines, section, wfc, &mut report),
        None => {
            debug!("No <Cell> section");
            report.missing_sections.push("Cell");
        }
    }

    let eigenvalues = find_section(lines, "<Eigenvalues", "</Eigenvalues>", all);
    match eigenvalues {
        Some(section) => {
            let tag = lines[section.begin].as_ref();
            wfc.header.efermi = Field::from_attribute(tag, "efermi");
            report.note("efermi", &wfc.header.efermi);
            wfc.header.energy_units = extract_attribute(tag, "units").map(str::to_string);
        }
        None => {
            debug!("No <Eigenvalues> section");
            report.missing_sections.push("Eigenvalues");
        }
    }

    if let Some(shape) = wfc.header.shape() {
        match wfc.ensure_shape(shape, ShapeSource::Header) {
            Ok(Allocation::Allocated) => report.allocated = true,
            Ok(Allocation::AlreadyShaped) => debug!("Wavefunction already shaped as {}", shape),
            Err(err) => {
                warn!("Header dimensions ignored: {}", err);
                report.shape_conflict = Some(err);
            }
        }
    }

    if let Some(section) = eigenvalues {
        if wfc.is_allocated() {
            read_eigenvalues(lines, section, wfc, &mut report);
        }
    }

    report
}

fn read_dimensions<S: AsRef<str>>(
    lines: &[S],
    section: Section,
    wfc: &mut Wavefunction,
    report: &mut IndexReport,
) {
    let header = &mut wfc.header;
    for line in &lines[section.span()] {
        let line: &str = line.as_ref();
        if line.contains("<Kpoints") {
            header.nkpts = Field::from_attribute(line, "nktot");
            header.nspin = Field::from_attribute(line, "nspin");
            report.note("nktot", &header.nkpts);
            report.note("nspin", &header.nspin);
        }
        if line.contains("<Wfc_grid") {
            header.npw = Field::from_attribute(line, "npwx");
            report.note("npwx", &header.npw);
        }
        if line.contains("<Bands") {
            header.nbands = Field::from_attribute(line, "nbnd");
            report.note("nbnd", &header.nbands);
        }
        if line.contains("<Gamma_tricks") {
            let flag = extract_attribute(line, "gamma_only").unwrap_or("");
            header.gamma_only = GammaOnly::from_flag(Some(flag));
        }
        if line.contains("<Atoms") {
            header.natoms = Field::from_attribute(line, "natoms");
            report.note("natoms", &header.natoms);
        }
    }
}

fn read_cell<S: AsRef<str>>(
    lines: &[S],
    section: Section,
    wfc: &mut Wavefunction,
    report: &mut IndexReport,
) {
    let cell = &mut wfc.header.cell;
    for line in &lines[section.span()] {
        let line: &str = line.as_ref();
        if line.contains("<Cell") {
            cell.units = extract_attribute(line, "units").map(str::to_string);
        }
        if line.contains("<Data") {
            cell.alat = Field::from_attribute(line, "alat");
            cell.omega = Field::from_attribute(line, "omega");
            cell.tpiba = Field::from_attribute(line, "tpiba");
            report.note("alat", &cell.alat);
            report.note("omega", &cell.omega);
            report.note("tpiba", &cell.tpiba);
        }
        for name in CELL_VECTORS {
            if !line.contains(&format!("<{}", name)) {
                continue;
            }
            let value = cell_vector(line, name);
            report.note(name, &value);
            if let Some(slot) = cell.vector_mut(name) {
                *slot = value;
            }
        }
    }
}

/// Vector from the `xyz` attribute, or from the element text
fn cell_vector(line: &str, name: &str) -> Field<[f64; 3]> {
    match extract_attribute(line, "xyz").or_else(|| element_text(line, name)) {
        None => Field::Absent,
        Some(raw) => match parse_vector3(raw) {
            Ok(vector) => Field::Parsed(vector),
            Err(_) => Field::Malformed(raw.to_string()),
        },
    }
}

/// Fill band energies from the `e.N` blocks, N being the 1-based k-point
fn read_eigenvalues<S: AsRef<str>>(
    lines: &[S],
    section: Section,
    wfc: &mut Wavefunction,
    report: &mut IndexReport,
) {
    let Some(shape) = wfc.shape() else {
        return;
    };
    let mut seen = vec![false; shape.nkpts];

    for block in sections(lines, "<e.", "</e.", section.interior()) {
        let Some(tag) = tag_index(lines[block.begin].as_ref(), "e.") else {
            continue;
        };
        if tag == 0 || tag > shape.nkpts {
            warn!("Eigenvalue block e.{} outside {} k-points", tag, shape.nkpts);
            continue;
        }
        let k = tag - 1;
        seen[k] = true;

        let mos = wfc.kpoints_mut()[k].mos_mut();
        for (mo, index) in mos.iter_mut().zip(block.interior()) {
            let line = lines[index].as_ref();
            match line.trim().parse::<f64>() {
                Ok(energy) => mo.energy = Some(energy),
                Err(_) => {
                    warn!("Unparseable eigenvalue on line {}: '{}'", index + 1, line);
                    report.malformed_energy_lines.push(index + 1);
                }
            }
        }
    }

    report.missing_eigenvalues = seen
        .iter()
        .enumerate()
        .filter(|(_, found)| !**found)
        .map(|(k, _)| k + 1)
        .collect();
    if !report.missing_eigenvalues.is_empty() {
        debug!("No eigenvalue block for k-points {:?}", report.missing_eigenvalues);
    }
}
