/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for loading a wavefunction export

use super::binary::BinaryLayout;
use super::errors::{ReadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Which files to read and how
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Index file with dimensions, cell and eigenvalues
    pub index: Option<PathBuf>,
    /// ASCII coefficient file
    pub ascii_wfc: Option<PathBuf>,
    /// Binary coefficient file
    pub binary_wfc: Option<PathBuf>,
    /// Layout of the binary coefficient file
    pub binary_layout: Option<BinaryLayout>,
    /// Grid file
    pub grid: Option<PathBuf>,
    /// Normalize every band after reading
    pub normalize: bool,
    /// Append a timing report to this file
    pub timing_report: Option<PathBuf>,
}

impl ReaderConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ReadError::io(path, e))?;
        serde_json::from_str(&text)
            .map_err(|e| ReadError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Check that the requested readers can run together
    pub fn validate(&self) -> Result<()> {
        if self.index.is_none()
            && self.ascii_wfc.is_none()
            && self.binary_wfc.is_none()
            && self.grid.is_none()
        {
            return Err(ReadError::Config("no input files given".to_string()));
        }
        if self.binary_wfc.is_some() && self.binary_layout.is_none() {
            return Err(ReadError::Config(
                "binary_wfc requires binary_layout".to_string(),
            ));
        }
        if self.binary_wfc.is_some() && self.index.is_none() && self.ascii_wfc.is_none() {
            return Err(ReadError::Config(
                "binary_wfc needs index or ascii_wfc to shape the model".to_string(),
            ));
        }
        Ok(())
    }
}
