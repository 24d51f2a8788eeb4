//! Per-call counters and timings, owned by the caller of `reconstruct` rather
//! than tracked as process-global state.

use std::time::Duration;

/// Counters and timings for one `reconstruct` call.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    pub iterations: u32,
    pub subiterations_total: u64,
    pub subiterations_max: u64,
    pub combinations: u64,
    pub notautology: u64,
    pub equalp: u64,
    pub comparisons: u64,
    pub rcnucl_time: Duration,
    pub hclose_time: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn increment_iterations(&mut self) {
        self.iterations += 1;
    }

    pub fn record_subiterations(&mut self, count: u64) {
        self.subiterations_total += count;
        if count > self.subiterations_max {
            self.subiterations_max = count;
        }
    }

    pub fn increment_combinations(&mut self) {
        self.combinations += 1;
    }

    pub fn increment_notautology(&mut self) {
        self.notautology += 1;
    }

    pub fn increment_equalp(&mut self) {
        self.equalp += 1;
    }

    pub fn increment_comparisons(&mut self) {
        self.comparisons += 1;
    }

    pub fn add_rcnucl_time(&mut self, d: Duration) {
        self.rcnucl_time += d;
    }

    pub fn add_hclose_time(&mut self, d: Duration) {
        self.hclose_time += d;
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "iterations: {}", self.iterations)?;
        writeln!(f, "subiterations (total/max): {}/{}", self.subiterations_total, self.subiterations_max)?;
        writeln!(f, "combinations: {}", self.combinations)?;
        writeln!(f, "notautology: {}", self.notautology)?;
        writeln!(f, "equalp: {}", self.equalp)?;
        writeln!(f, "comparisons: {}", self.comparisons)?;
        writeln!(f, "rcnucl: {:?}", self.rcnucl_time)?;
        write!(f, "hclose: {:?}", self.hclose_time)
    }
}
