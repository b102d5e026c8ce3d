/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Grid reader for the single `<grid>` section

use super::errors::{ReadError, Result};
use super::read_lines;
use crate::markup::{find_section, split_fields};
use crate::wavefunction::Wavefunction;
use log::{debug, warn};
use std::path::Path;

/// Parse three whitespace-separated integers
pub fn parse_grid_point(line: &str) -> std::result::Result<[i32; 3], String> {
    let fields = split_fields(line);
    if fields.len() < 3 {
        return Err(format!("expected 3 integers, found {} fields", fields.len()));
    }
    let mut point = [0; 3];
    for (slot, field) in point.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| format!("invalid integer '{}'", field))?;
    }
    Ok(point)
}

/// Read a grid file into `wfc`, returning the number of points
pub fn read_grid<P: AsRef<Path>>(path: P, wfc: &mut Wavefunction) -> Result<usize> {
    let lines = read_lines(path.as_ref())?;
    parse_grid(&lines, wfc)
}

/// Parse grid lines into `wfc`
///
/// Without a `<grid>` section the grid is left as it was and zero is
/// returned. On a malformed line the grid is left as it was.
pub fn parse_grid<S: AsRef<str>>(lines: &[S], wfc: &mut Wavefunction) -> Result<usize> {
    let Some(section) = find_section(lines, "<grid", "</grid>", 0..lines.len()) else {
        warn!("No <grid> section found");
        return Ok(0);
    };

    let mut grid = Vec::with_capacity(section.interior_len());
    for index in section.interior() {
        let line = lines[index].as_ref();
        let point =
            parse_grid_point(line).map_err(|reason| ReadError::malformed(index, line, reason))?;
        grid.push(point);
    }
    debug!("Size of the grid = {}", grid.len());

    let count = grid.len();
    wfc.set_grid(grid);
    Ok(count)
}
