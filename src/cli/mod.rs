/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Loads a wavefunction export and prints a summary of what was read.

use crate::readers::{self, BinaryLayout, Loaded, PlaneWavePolicy, ReaderConfig};
use crate::timer::{self, Timer};
use crate::wavefunction::Summary;
use anyhow::bail;
use clap::Parser;
use std::path::PathBuf;

/// Inspect plane-wave wavefunction exports
#[derive(Parser, Debug)]
#[command(name = "qewfc")]
#[command(version)]
#[command(about = "Read index, coefficient and grid exports and summarize them", long_about = None)]
pub struct Cli {
    /// JSON reader configuration; command-line paths override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Index file with dimensions, cell and eigenvalues
    #[arg(long)]
    pub index: Option<PathBuf>,

    /// ASCII coefficient file
    #[arg(long)]
    pub wfc: Option<PathBuf>,

    /// Binary coefficient file
    #[arg(long)]
    pub binary: Option<PathBuf>,

    /// K-points in the binary file
    #[arg(long, requires = "binary")]
    pub nkpts: Option<usize>,

    /// Bands per k-point in the binary file
    #[arg(long, requires = "binary")]
    pub nbands: Option<usize>,

    /// Plane waves per k-point in the binary file, split evenly over bands
    #[arg(long, requires = "binary")]
    pub total_npw: Option<usize>,

    /// Grid file
    #[arg(long)]
    pub grid: Option<PathBuf>,

    /// Normalize every band after reading
    #[arg(long)]
    pub normalize: bool,

    /// Append a timing report to this file
    #[arg(long)]
    pub timing: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Merge command-line options over the optional JSON configuration
    pub fn to_config(&self) -> anyhow::Result<ReaderConfig> {
        let mut config = match &self.config {
            Some(path) => ReaderConfig::from_json_file(path)?,
            None => ReaderConfig::default(),
        };

        if let Some(path) = &self.index {
            config.index = Some(path.clone());
        }
        if let Some(path) = &self.wfc {
            config.ascii_wfc = Some(path.clone());
        }
        if let Some(path) = &self.binary {
            config.binary_wfc = Some(path.clone());
        }
        if let Some(path) = &self.grid {
            config.grid = Some(path.clone());
        }
        if let Some(path) = &self.timing {
            config.timing_report = Some(path.clone());
        }
        config.normalize |= self.normalize;

        match (self.nkpts, self.nbands) {
            (Some(nkpts), Some(nbands)) => {
                let plane_waves = match self.total_npw {
                    Some(total) => PlaneWavePolicy::SplitTotal(total),
                    None => PlaneWavePolicy::FromModel,
                };
                config.binary_layout = Some(BinaryLayout::new(nkpts, nbands, plane_waves));
            }
            (None, None) if self.total_npw.is_some() => {
                bail!("--total-npw requires --nkpts and --nbands")
            }
            (None, None) => {}
            _ => bail!("--nkpts and --nbands must be given together"),
        }

        Ok(config)
    }
}

/// Run the CLI
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    print!("{}", execute(cli)?);
    Ok(())
}

/// Load the inputs named by `cli` and render the summary
///
/// Timing goes to the process-wide timer when called on its owning thread,
/// otherwise to a local one.
pub fn execute(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.to_config()?;

    let loaded = match timer::with_global(|timer| load_timed(&config, timer)) {
        Some(loaded) => loaded?,
        None => load_timed(&config, &mut Timer::new())?,
    };

    if let Some(report) = &loaded.index_report {
        for (name, raw) in &report.malformed_fields {
            log::warn!("Malformed header value {} = '{}'", name, raw);
        }
        if let Some(conflict) = &report.shape_conflict {
            log::warn!("{}", conflict);
        }
    }

    let summary = loaded.wavefunction.summary();
    if cli.json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
    } else {
        Ok(format_summary(&summary))
    }
}

fn load_timed(config: &ReaderConfig, timer: &mut Timer) -> anyhow::Result<Loaded> {
    let loaded = readers::load_with_timer(config, timer)?;
    if let Some(path) = &config.timing_report {
        timer.report(path)?;
    }
    Ok(loaded)
}

/// Plain-text rendering of a summary
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();
    match summary.shape {
        Some(shape) => out.push_str(&format!(
            "K-points: {}\nBands: {}\nPlane waves per band: {}\n",
            shape.nkpts, shape.nbands, shape.npw
        )),
        None => out.push_str("Wavefunction not allocated\n"),
    }
    if let Some(source) = summary.source {
        out.push_str(&format!("Shape source: {:?}\n", source));
    }
    if let Some(nspin) = summary.nspin {
        out.push_str(&format!("Spin components: {}\n", nspin));
    }
    out.push_str(&format!("Gamma only: {:?}\n", summary.gamma_only));
    if let Some(natoms) = summary.natoms {
        out.push_str(&format!("Atoms: {}\n", natoms));
    }
    if let Some(alat) = summary.alat {
        let units = summary.cell_units.as_deref().unwrap_or("?");
        match summary.alat_angstrom {
            Some(angstrom) => {
                out.push_str(&format!("alat: {} {} ({:.6} A)\n", alat, units, angstrom))
            }
            None => out.push_str(&format!("alat: {} {}\n", alat, units)),
        }
    }
    if let Some(omega) = summary.omega {
        out.push_str(&format!("Cell volume: {}\n", omega));
    }
    if let Some(efermi) = summary.efermi {
        let units = summary.energy_units.as_deref().unwrap_or("?");
        out.push_str(&format!("Fermi energy: {} {}\n", efermi, units));
    }
    if summary.grid_points > 0 {
        out.push_str(&format!("Grid points: {}\n", summary.grid_points));
    }
    for (k, energies) in summary.energies.iter().enumerate() {
        let known: Vec<String> = energies
            .iter()
            .map(|e| e.map_or_else(|| "-".to_string(), |e| format!("{:.6}", e)))
            .collect();
        out.push_str(&format!("e.{}: {}\n", k + 1, known.join(" ")));
    }
    out
}
