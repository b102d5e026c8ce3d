/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Readers for the exported wavefunction files
//!
//! The index reader runs first and normally shapes the model from its
//! header. The ASCII coefficient reader can shape the model on its own when
//! no index was read; whichever runs first allocates, the other reuses the
//! allocation. The binary reader and the grid reader never allocate the
//! k-point hierarchy.
//!
//! ```no_run
//! use qewfc_rs::readers::{read_ascii_wfc, read_index};
//! use qewfc_rs::wavefunction::Wavefunction;
//!
//! let mut wfc = Wavefunction::new();
//! let report = read_index("out/index.xml", &mut wfc)?;
//! read_ascii_wfc("out/wfc.1", &mut wfc)?;
//! println!("{:?} {}", wfc.shape(), report.is_clean());
//! # Ok::<(), qewfc_rs::readers::ReadError>(())
//! ```

pub mod ascii;
pub mod binary;
pub mod config;
pub mod errors;
pub mod grid;
pub mod index;
pub mod loader;

pub use ascii::{parse_ascii_wfc, read_ascii_wfc, scan_layout, KpointLayout};
pub use binary::{decode_binary_wfc, read_binary_wfc, BinaryLayout, PlaneWavePolicy};
pub use config::ReaderConfig;
pub use errors::{ReadError, Result};
pub use grid::{parse_grid, read_grid};
pub use index::{parse_index, read_index, IndexReport};
pub use loader::{load, load_with_timer, Loaded};

use crate::markup::LineBuffer;
use std::path::Path;

/// Read a whole file into lines, attaching the path to any I/O error
fn read_lines(path: &Path) -> Result<LineBuffer> {
    LineBuffer::read(path).map_err(|e| ReadError::io(path, e))
}
