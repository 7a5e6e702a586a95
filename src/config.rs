//! Benchmark configuration.
//!
//! Defaults match the workload the benchmark has always run; each knob can
//! be overridden through a `SORTER_BENCH_*` environment variable.

use std::env;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ConfigError;

const DEFAULT_SIZES: [usize; 3] = [100, 500, 1000];
const DEFAULT_RANDOM_CASES: usize = 5;
const DEFAULT_NEARLY_SORTED_CASES: usize = 2;
const DEFAULT_WARMUP_MS: u64 = 50;
const DEFAULT_RUN_MS: u64 = 300;
const DEFAULT_SEED: u64 = 12345;

/// Workloads are `i32` ranges `0..size`, so sizes must fit in an `i32`
pub const MAX_SIZE: usize = i32::MAX as usize;

/// Workload and timing knobs for the benchmark binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchConfig {
    /// Array lengths to generate workloads for
    pub sizes: Vec<usize>,
    /// Uniformly random arrays per size
    pub random_cases: usize,
    /// Arrays per size that are sorted apart from ~10% random swaps
    pub nearly_sorted_cases: usize,
    pub warmup_ms: u64,
    pub run_ms: u64,
    /// Seed for the workload generator
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            random_cases: DEFAULT_RANDOM_CASES,
            nearly_sorted_cases: DEFAULT_NEARLY_SORTED_CASES,
            warmup_ms: DEFAULT_WARMUP_MS,
            run_ms: DEFAULT_RUN_MS,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    /// Load configuration from the process environment.
    ///
    /// - `SORTER_BENCH_SIZES`: comma-separated lengths (default: 100,500,1000)
    /// - `SORTER_BENCH_RANDOM_CASES`: random arrays per size (default: 5)
    /// - `SORTER_BENCH_NEARLY_SORTED_CASES`: nearly sorted arrays per size (default: 2)
    /// - `SORTER_BENCH_WARMUP_MS`: warmup duration (default: 50)
    /// - `SORTER_BENCH_RUN_MS`: measured duration (default: 300)
    /// - `SORTER_BENCH_SEED`: generator seed (default: 12345)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SORTER_BENCH_SIZES") {
            config.sizes = parse_sizes(&raw)?;
        }
        if let Some(raw) = lookup("SORTER_BENCH_RANDOM_CASES") {
            config.random_cases = parse_var("SORTER_BENCH_RANDOM_CASES", &raw)?;
        }
        if let Some(raw) = lookup("SORTER_BENCH_NEARLY_SORTED_CASES") {
            config.nearly_sorted_cases = parse_var("SORTER_BENCH_NEARLY_SORTED_CASES", &raw)?;
        }
        if let Some(raw) = lookup("SORTER_BENCH_WARMUP_MS") {
            config.warmup_ms = parse_var("SORTER_BENCH_WARMUP_MS", &raw)?;
        }
        if let Some(raw) = lookup("SORTER_BENCH_RUN_MS") {
            config.run_ms = parse_var("SORTER_BENCH_RUN_MS", &raw)?;
        }
        if let Some(raw) = lookup("SORTER_BENCH_SEED") {
            config.seed = parse_var("SORTER_BENCH_SEED", &raw)?;
        }

        if config.run_ms == 0 {
            return Err(ConfigError::Invalid {
                var: "SORTER_BENCH_RUN_MS",
                value: config.run_ms.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_sizes(raw: &str) -> Result<Vec<usize>, ConfigError> {
    let sizes = raw
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_var("SORTER_BENCH_SIZES", part))
        .collect::<Result<Vec<usize>, _>>()?;

    if sizes.is_empty() {
        return Err(ConfigError::Invalid {
            var: "SORTER_BENCH_SIZES",
            value: raw.to_string(),
            reason: "at least one size is required".to_string(),
        });
    }
    if let Some(&size) = sizes.iter().find(|&&size| size > MAX_SIZE) {
        return Err(ConfigError::Invalid {
            var: "SORTER_BENCH_SIZES",
            value: raw.to_string(),
            reason: format!("size {size} exceeds the maximum of {MAX_SIZE}"),
        });
    }
    Ok(sizes)
}
