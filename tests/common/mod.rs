/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Fixtures shared by the integration tests

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Index file for 2 k-points, 2 bands and 3 plane waves
pub const INDEX: &str = r#"<?xml version="1.0"?>
<Root>
  <Dimensions>
    <Kpoints nktot="2" nspin="1" nk1="0" nk2="0" nk3="0"/>
    <Wfc_grid npwx="3" nr1="12" nr2="12" nr3="12"/>
    <Bands nbnd="2"/>
    <Gamma_tricks gamma_only="F"/>
    <Atoms natoms="2" nsp="1"/>
  </Dimensions>
  <Cell units="Bohr">
    <Data alat="10.2" omega="270.0114" tpiba="0.6160"/>
    <a1 xyz="-0.5 0.0 0.5"/>
    <a2 xyz="0.0 0.5 0.5"/>
    <a3 xyz="-0.5 0.5 0.0"/>
    <b1 xyz="-1.0 -1.0 1.0"/>
    <b2 xyz="1.0 1.0 1.0"/>
    <b3 xyz="-1.0 1.0 -1.0"/>
  </Cell>
  <Eigenvalues nk="2" nbnd="2" efermi="0.25" units="Hartree">
    <e.1 type="real" size="2">
      -0.2
      0.1
    </e.1>
    <e.2 type="real" size="2">
      -0.15
      0.12
    </e.2>
  </Eigenvalues>
</Root>"#;

/// Grid file with four points
pub const GRID: &str = r#"<Root>
  <grid size="4">
    0 0 0
    1 0 0
    0 -1 0
    0 0 2
  </grid>
</Root>"#;

/// Value stored for plane wave `g` of band `b` at k-point `k`, all 0-based
pub fn coefficient(k: usize, b: usize, g: usize) -> (f64, f64) {
    ((100 * k + 10 * b + g) as f64, -(g as f64) * 0.5)
}

/// ASCII coefficient file with `nkpts` k-points, `nbands` bands and `npw`
/// plane waves per band, filled from [`coefficient`]
pub fn ascii_wfc(nkpts: usize, nbands: usize, npw: usize) -> String {
    let mut text = String::new();
    for k in 0..nkpts {
        text.push_str(&format!("<Kpoint.{} nbnd=\"{}\">\n", k + 1, nbands));
        for b in 0..nbands {
            text.push_str(&format!("  <Wfc.{} size=\"{}\">\n", b + 1, npw));
            for g in 0..npw {
                let (re, im) = coefficient(k, b, g);
                text.push_str(&format!("    {:.6e},{:.6e}\n", re, im));
            }
            text.push_str(&format!("  </Wfc.{}>\n", b + 1));
        }
        text.push_str(&format!("</Kpoint.{}>\n", k + 1));
    }
    text
}

/// Little-endian binary stream of `count` complex values, value `i` being `(i, -i)`
pub fn binary_wfc(count: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(count * 16);
    for i in 0..count {
        bytes.extend_from_slice(&(i as f64).to_le_bytes());
        bytes.extend_from_slice(&(-(i as f64)).to_le_bytes());
    }
    bytes
}

/// Test helper to create a temporary file with the given content
pub fn create_test_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join(name);
    let mut file = File::create(&file_path).unwrap();
    file.write_all(content).unwrap();
    (dir, file_path)
}

/// Write several files into one temporary directory
pub fn create_test_files(files: &[(&str, &[u8])]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempdir().unwrap();
    let paths = files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            let mut file = File::create(&path).unwrap();
            file.write_all(content).unwrap();
            path
        })
        .collect();
    (dir, paths)
}
