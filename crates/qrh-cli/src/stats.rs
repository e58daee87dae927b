// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Avalanche and throughput statistics

use core::fmt;
use std::time::Duration;

/// Number of differing bits between two equally sized buffers
pub fn bit_difference(a: &[u8], b: &[u8]) -> u32 {
    debug_assert_eq!(a.len(), b.len(), "buffers must have equal length");

    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// `changed` bits as a percentage of a `bytes`-byte buffer
pub fn percent_of_bits(changed: u32, bytes: usize) -> f64 {
    if bytes == 0 {
        return 0.0;
    }

    f64::from(changed) * 100.0 / (bytes * 8) as f64
}

/// Running mean/min/max of per-trial changed-bit percentages
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AvalancheReport {
    trials: usize,
    sum: f64,
    min: f64,
    max: f64,
}

impl AvalancheReport {
    pub fn record(&mut self, percent: f64) {
        if self.trials == 0 {
            self.min = percent;
            self.max = percent;
        } else {
            self.min = self.min.min(percent);
            self.max = self.max.max(percent);
        }

        self.sum += percent;
        self.trials += 1;
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn mean(&self) -> Option<f64> {
        (self.trials > 0).then(|| self.sum / self.trials as f64)
    }

    pub fn min(&self) -> Option<f64> {
        (self.trials > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.trials > 0).then_some(self.max)
    }
}

impl fmt::Display for AvalancheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mean(), self.min(), self.max()) {
            (Some(mean), Some(min), Some(max)) => write!(
                f,
                "{} trials, mean {:.2}%, min {:.2}%, max {:.2}%",
                self.trials, mean, min, max
            ),
            _ => write!(f, "no trials"),
        }
    }
}

/// Bytes processed over wall-clock time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    bytes: u64,
    elapsed: Duration,
}

impl Throughput {
    pub fn new(bytes: u64, elapsed: Duration) -> Self {
        Self { bytes, elapsed }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Decimal megabytes per second; `None` when no time was measured
    pub fn mb_per_sec(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.bytes as f64 / 1_000_000.0 / secs)
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mb_per_sec() {
            Some(rate) => write!(f, "{:.2} MB/s ({} bytes in {:.3?})", rate, self.bytes, self.elapsed),
            None => write!(f, "n/a ({} bytes, no measurable time)", self.bytes),
        }
    }
}
