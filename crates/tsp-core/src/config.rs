//! # Build configuration
//!
//! Controls how the adjacency matrix is materialized. The result never
//! depends on these settings, only the time it takes to get there.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Settings for the adjacency build.
///
/// Deserializable with every field optional, so it can sit inside a host
/// application's own JSON config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Worker threads used for the pair computation. 0 and 1 both mean serial.
    pub workers: usize,

    /// Smallest point count for which the parallel path is used.
    ///
    /// Below this, thread startup costs more than the distances.
    pub parallel_threshold: usize,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self {
            workers: 1,
            parallel_threshold: 512,
        }
    }

    /// One worker per available core.
    pub fn parallel() -> Self {
        let workers = std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::new().with_workers(workers)
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Worker count to actually use for a problem with `points` points.
    pub fn effective_workers(&self, points: usize) -> usize {
        if points < self.parallel_threshold || points < 2 {
            return 1;
        }
        self.workers.clamp(1, points)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_serial() {
        let config = BuildConfig::default();
        assert_eq!(config.effective_workers(10_000), 1);
    }

    #[test]
    fn small_problems_stay_serial() {
        let config = BuildConfig::new().with_workers(8).with_parallel_threshold(100);
        assert_eq!(config.effective_workers(99), 1);
        assert_eq!(config.effective_workers(100), 8);
    }

    #[test]
    fn workers_never_exceed_points() {
        let config = BuildConfig::new().with_workers(64).with_parallel_threshold(0);
        assert_eq!(config.effective_workers(3), 3);
        assert_eq!(config.effective_workers(1), 1);
        assert_eq!(config.with_workers(0).effective_workers(50), 1);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: BuildConfig = serde_json::from_str(r#"{"workers": 4}"#).unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.parallel_threshold, 512);
    }
}
