//! Tally of a finished run

use crate::utils::Palette;

/// Counts of repositories by outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub succeeded: usize,
    pub failed: usize,
    /// Repositories never finished because fail-fast cancelled them
    pub skipped: usize,
}

impl RunStatistics {
    /// Creates a new statistics tracker with all counters initialized to zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, success: bool) {
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// True when every repository ran and none failed
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }

    /// Builds the summary line, e.g. `Summary: 3 succeeded, 1 failed`
    ///
    /// Only non-zero counts are listed.
    pub fn generate_summary(&self, palette: &Palette) -> String {
        let mut parts = Vec::new();
        if self.succeeded > 0 {
            parts.push(palette.green(&format!("{} succeeded", self.succeeded)));
        }
        if self.failed > 0 {
            parts.push(palette.red(&format!("{} failed", self.failed)));
        }
        if self.skipped > 0 {
            parts.push(palette.yellow(&format!("{} skipped", self.skipped)));
        }
        if parts.is_empty() {
            parts.push(format!("{} succeeded", self.succeeded));
        }

        format!("{}{}", palette.blue("Summary: "), parts.join(", "))
    }
}
