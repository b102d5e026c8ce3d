/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Named stopwatch blocks with a sorted text report
//!
//! Blocks nest: [`Timer::start`] pushes a block on a stack and
//! [`Timer::stop`] pops it, adding the elapsed time to the block and to its
//! parent's child time. The report sorts blocks by exclusive time (total
//! minus children) and appends to a file.
//!
//! A process-wide timer is available through [`with_global`]; it only
//! records on the thread that first touched it.

pub mod errors;

pub use errors::{Result, TimerError};

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

/// Maximum number of distinct block names per timer
pub const MAX_TIMED_BLOCKS: usize = 1000;

/// Accumulated statistics of one named block
#[derive(Debug, Clone, PartialEq)]
pub struct TimedBlock {
    pub name: String,
    /// Time spent in the block, children included
    pub total: Duration,
    /// Time spent in nested blocks
    pub child: Duration,
    pub calls: u64,
    pub flops: u64,
    pub bytes: u64,
    entered: Option<Instant>,
}

impl TimedBlock {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total: Duration::ZERO,
            child: Duration::ZERO,
            calls: 0,
            flops: 0,
            bytes: 0,
            entered: None,
        }
    }

    /// Time spent in the block itself
    pub fn exclusive(&self) -> Duration {
        self.total.saturating_sub(self.child)
    }
}

/// Stack of nested timed blocks
#[derive(Debug, Default)]
pub struct Timer {
    blocks: Vec<TimedBlock>,
    index: HashMap<String, usize>,
    stack: Vec<usize>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or re-enter) the block `name`
    pub fn start(&mut self, name: &str) -> Result<()> {
        let id = match self.index.get(name) {
            Some(&id) => id,
            None => {
                if self.blocks.len() >= MAX_TIMED_BLOCKS {
                    return Err(TimerError::TooManyBlocks {
                        limit: MAX_TIMED_BLOCKS,
                        name: name.to_string(),
                    });
                }
                self.blocks.push(TimedBlock::new(name));
                self.index.insert(name.to_string(), self.blocks.len() - 1);
                self.blocks.len() - 1
            }
        };

        self.stack.push(id);
        let block = &mut self.blocks[id];
        block.calls += 1;
        block.entered = Some(Instant::now());
        Ok(())
    }

    /// Stop the innermost running block
    ///
    /// Returns false, with a warning, when no block is running.
    pub fn stop(&mut self) -> bool {
        let Some(id) = self.stack.pop() else {
            warn!("Timer stop has no matching start");
            return false;
        };

        let block = &mut self.blocks[id];
        let elapsed = block.entered.take().map(|t| t.elapsed()).unwrap_or_default();
        block.total += elapsed;
        if let Some(&parent) = self.stack.last() {
            self.blocks[parent].child += elapsed;
        }
        true
    }

    /// Start `name` and stop it when the guard drops
    pub fn scoped(&mut self, name: &str) -> Result<ScopedBlock<'_>> {
        self.start(name)?;
        let id = self.index[name];
        Ok(ScopedBlock { timer: self, id })
    }

    /// Add floating-point operations to the running block
    pub fn log_flops(&mut self, flops: u64) {
        if let Some(&id) = self.stack.last() {
            self.blocks[id].flops += flops;
        }
    }

    /// Add transferred bytes to the running block
    pub fn log_bytes(&mut self, bytes: u64) {
        if let Some(&id) = self.stack.last() {
            self.blocks[id].bytes += bytes;
        }
    }

    pub fn blocks(&self) -> &[TimedBlock] {
        &self.blocks
    }

    pub fn block(&self, name: &str) -> Option<&TimedBlock> {
        self.index.get(name).map(|&id| &self.blocks[id])
    }

    /// Number of blocks currently running
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Stop every running block
    pub fn close_all(&mut self) {
        while self.stop() {}
    }

    /// Close running blocks and render the report text
    ///
    /// The first block ever started is taken as the whole run.
    pub fn render_report(&mut self, host: &str) -> String {
        if !self.stack.is_empty() {
            self.close_all();
        }

        let mut out = String::new();
        let total_time = self
            .blocks
            .first()
            .map(|b| b.total.as_secs_f64())
            .unwrap_or(0.0);
        if total_time < 1.0e-9 {
            out.push_str("Total time is zero for some reason\n");
            return out;
        }

        let mut sorted: Vec<&TimedBlock> = self.blocks.iter().collect();
        sorted.sort_by(|a, b| b.exclusive().cmp(&a.exclusive()));

        out.push_str("    time in seconds    +children       calls    name\n");
        let mut total_flops: u64 = 0;
        for block in sorted {
            let dt = block.exclusive().as_secs_f64();
            let frac = 100.0 * dt / total_time;
            let _ = write!(
                out,
                " {:10.3} ({:5.1}%) {:10.3} {:12}  {:<20.20}",
                dt,
                frac,
                block.total.as_secs_f64(),
                block.calls,
                block.name
            );
            if block.flops > 0 && dt > 0.0 {
                total_flops += block.flops;
                let _ = writeln!(out, "  {:7.3} GFlops", block.flops as f64 * 1.0e-9 / dt);
            } else if block.bytes > 0 && dt > 0.0 {
                let _ = writeln!(out, "  {:9.2} MB/sec", block.bytes as f64 * 1.0e-6 / dt);
            } else {
                out.push('\n');
            }
        }

        if total_flops > 0 {
            let _ = writeln!(
                out,
                "\n {:9.2} billion operations --> {:9.3} GFlops",
                total_flops as f64 * 1.0e-9,
                total_flops as f64 * 1.0e-9 / total_time
            );
        }

        let hours = (total_time / 3600.0) as u64;
        let minutes = ((total_time - hours as f64 * 3600.0) / 60.0) as u64;
        let seconds = total_time - hours as f64 * 3600.0 - minutes as f64 * 60.0;
        let _ = writeln!(
            out,
            "\n  Total time is {:.6} secs    ({} hours  {} mins  {:6.3} secs) on {}\n\n",
            total_time, hours, minutes, seconds, host
        );
        out
    }

    /// Append the report to `path`
    pub fn report<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        let text = self.render_report(&host);

        let to_error = |source| TimerError::Report {
            path: path.to_path_buf(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(to_error)?;
        file.write_all(text.as_bytes()).map_err(to_error)
    }
}

/// Guard returned by [`Timer::scoped`]
///
/// Dropping it stops its block, unless the block was already stopped by hand.
pub struct ScopedBlock<'a> {
    timer: &'a mut Timer,
    id: usize,
}

impl Deref for ScopedBlock<'_> {
    type Target = Timer;

    fn deref(&self) -> &Timer {
        self.timer
    }
}

impl DerefMut for ScopedBlock<'_> {
    fn deref_mut(&mut self) -> &mut Timer {
        self.timer
    }
}

impl Drop for ScopedBlock<'_> {
    fn drop(&mut self) {
        if self.timer.stack.last() == Some(&self.id) {
            self.timer.stop();
        }
    }
}

struct GlobalTimer {
    owner: ThreadId,
    timer: Timer,
}

static GLOBAL: Lazy<Mutex<GlobalTimer>> = Lazy::new(|| {
    Mutex::new(GlobalTimer {
        owner: thread::current().id(),
        timer: Timer::new(),
    })
});

/// Run `f` on the process-wide timer
///
/// Returns `None` without calling `f` on any thread other than the one that
/// first used the global timer.
pub fn with_global<R>(f: impl FnOnce(&mut Timer) -> R) -> Option<R> {
    let mut global = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    if global.owner != thread::current().id() {
        return None;
    }
    Some(f(&mut global.timer))
}
