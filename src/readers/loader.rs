/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Runs the readers in order from a [`ReaderConfig`]

use super::ascii::read_ascii_wfc;
use super::binary::{read_binary_wfc, COMPLEX_SIZE};
use super::config::ReaderConfig;
use super::errors::{ReadError, Result};
use super::grid::read_grid;
use super::index::{read_index, IndexReport};
use crate::timer::Timer;
use crate::wavefunction::Wavefunction;
use log::info;

/// Model produced by [`load`] together with the index report
#[derive(Debug, Clone)]
pub struct Loaded {
    pub wavefunction: Wavefunction,
    pub index_report: Option<IndexReport>,
}

/// Load everything named in `config` into a fresh model
///
/// Appends a timing report when `config.timing_report` is set.
pub fn load(config: &ReaderConfig) -> Result<Loaded> {
    let mut timer = Timer::new();
    let loaded = load_with_timer(config, &mut timer)?;
    if let Some(path) = &config.timing_report {
        timer.report(path)?;
    }
    Ok(loaded)
}

/// Load everything named in `config`, timing each reader on `timer`
///
/// Order: index, ASCII coefficients, binary coefficients, grid.
pub fn load_with_timer(config: &ReaderConfig, timer: &mut Timer) -> Result<Loaded> {
    config.validate()?;

    let mut run = timer.scoped("load")?;
    let mut wfc = Wavefunction::new();
    let mut index_report = None;

    if let Some(path) = &config.index {
        let _block = run.scoped("read_index")?;
        info!("Reading index {}", path.display());
        index_report = Some(read_index(path, &mut wfc)?);
    }

    if let Some(path) = &config.ascii_wfc {
        let mut block = run.scoped("read_ascii_wfc")?;
        info!("Reading ASCII coefficients {}", path.display());
        let shape = read_ascii_wfc(path, &mut wfc)?;
        block.log_bytes((shape.coefficient_count() * COMPLEX_SIZE) as u64);
    }

    if let Some(path) = &config.binary_wfc {
        let layout = config
            .binary_layout
            .as_ref()
            .ok_or_else(|| ReadError::Config("binary_wfc requires binary_layout".to_string()))?;
        let mut block = run.scoped("read_binary_wfc")?;
        info!("Reading binary coefficients {}", path.display());
        read_binary_wfc(path, layout, &mut wfc)?;
        let count = wfc.shape().map_or(0, |s| s.coefficient_count());
        block.log_bytes((count * COMPLEX_SIZE) as u64);
    }

    if let Some(path) = &config.grid {
        let _block = run.scoped("read_grid")?;
        info!("Reading grid {}", path.display());
        read_grid(path, &mut wfc)?;
    }

    if config.normalize {
        let _block = run.scoped("normalize")?;
        wfc.normalize();
    }

    Ok(Loaded {
        wavefunction: wfc,
        index_report,
    })
}
