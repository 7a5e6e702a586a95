//! Benchmark for the bubble sorter against the baselines.
//!
//! Prints a single JSON document to stdout; logs go to stderr.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use sorter::baselines::{InsertionSorter, NaiveBubbleSorter, StdSorter, StdUnstableSorter};
use sorter::{bubble_sort_with_stats, is_sorted, BenchConfig, BubbleSorter, SortStats, Sorter};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    avg_ns: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    config: BenchConfig,
    results: Vec<BenchmarkResult>,
    bubble_stats: SortStats,
    early_exit_runs: usize,
    correctness: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn generate_test_data(config: &BenchConfig) -> Vec<Vec<i32>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut tests = Vec::new();

    for &size in &config.sizes {
        for _ in 0..config.random_cases {
            let data: Vec<i32> = (0..size).map(|_| rng.gen_range(-10000..10000)).collect();
            tests.push(data);
        }

        // Nearly sorted (90% sorted)
        for _ in 0..config.nearly_sorted_cases {
            let mut data: Vec<i32> = (0..size as i32).collect();
            if size > 0 {
                for _ in 0..size / 10 {
                    let i = rng.gen_range(0..size);
                    let j = rng.gen_range(0..size);
                    data.swap(i, j);
                }
            }
            tests.push(data);
        }

        tests.push((0..size as i32).rev().collect());
        tests.push((0..size as i32).collect());
    }

    tests
}

fn verify_correctness<S: Sorter>(name: &str, sorter: &S, tests: &[Vec<i32>]) -> bool {
    for (idx, test) in tests.iter().enumerate() {
        let mut expected = test.clone();
        expected.sort();

        let before = test.clone();
        let out = sorter.sorted(test);
        if *test != before {
            warn!(sorter = name, case = idx, "input was modified by sorted()");
            return false;
        }
        if !is_sorted(&out) || out != expected {
            warn!(sorter = name, case = idx, len = test.len(), "incorrect output");
            return false;
        }
    }
    true
}

fn benchmark<S: Sorter>(
    name: &str,
    sorter: &S,
    tests: &[Vec<i32>],
    config: &BenchConfig,
) -> BenchmarkResult {
    let correct = verify_correctness(name, sorter, tests);

    // Warmup
    let warmup_end = Instant::now() + Duration::from_millis(config.warmup_ms);
    while Instant::now() < warmup_end {
        for test in tests.iter().take(3) {
            let mut data = test.clone();
            sorter.sort(&mut data);
            std::hint::black_box(&data);
        }
    }

    let mut ops = 0u64;
    let start = Instant::now();
    let end = start + Duration::from_millis(config.run_ms);
    while Instant::now() < end {
        for test in tests {
            let mut data = test.clone();
            sorter.sort(&mut data);
            std::hint::black_box(&data);
            ops += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    let ops_per_second = if elapsed > 0.0 { ops as f64 / elapsed } else { 0.0 };
    let avg_ns = if ops > 0 { elapsed * 1e9 / ops as f64 } else { 0.0 };

    info!(sorter = name, ops, ops_per_second, correct, "benchmark finished");

    BenchmarkResult {
        name: name.to_string(),
        ops_per_second,
        avg_ns,
        correct,
    }
}

fn main() -> ExitCode {
    init_logging();

    let config = match BenchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let tests = generate_test_data(&config);
    info!(cases = tests.len(), sizes = ?config.sizes, "generated workload");

    let mut bubble_stats = SortStats::default();
    let mut early_exit_runs = 0;
    for test in &tests {
        let (_, stats) = bubble_sort_with_stats(test);
        early_exit_runs += usize::from(stats.early_exit);
        bubble_stats.merge(&stats);
    }

    let results = vec![
        benchmark("bubble", &BubbleSorter, &tests, &config),
        benchmark("naive_bubble", &NaiveBubbleSorter, &tests, &config),
        benchmark("insertion", &InsertionSorter, &tests, &config),
        benchmark("std", &StdSorter, &tests, &config),
        benchmark("std_unstable", &StdUnstableSorter, &tests, &config),
    ];
    let correctness = results.iter().all(|r| r.correct);

    let full = FullResults {
        config,
        results,
        bubble_stats,
        early_exit_runs,
        correctness,
    };

    match serde_json::to_string(&full) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("failed to serialize results: {e}");
            return ExitCode::FAILURE;
        }
    }

    if correctness {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
