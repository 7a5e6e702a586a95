//! Bubble sort with early exit.
//!
//! Every public entry point except [`bubble_sort_in_place`] copies its input
//! into a fresh buffer before the first swap, so the caller's slice is only
//! ever borrowed immutably. Elements are swapped only when strictly out of
//! order, which keeps the sort stable.

use std::cmp::Ordering;
use std::convert::Infallible;

use serde::Serialize;

use crate::error::{Result, SortError};
use crate::Sorter;

/// Counters describing a single bubble sort run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Passes started over the buffer
    pub passes: usize,
    /// Adjacent comparisons performed
    pub comparisons: usize,
    /// Adjacent swaps performed
    pub swaps: usize,
    /// The run stopped on a pass that made no swaps
    pub early_exit: bool,
}

impl SortStats {
    /// Accumulate another run's counters into this one.
    ///
    /// Counters are summed. `early_exit` becomes true if any merged run
    /// exited early; count those runs separately when that matters.
    pub fn merge(&mut self, other: &SortStats) {
        self.passes += other.passes;
        self.comparisons += other.comparisons;
        self.swaps += other.swaps;
        self.early_exit |= other.early_exit;
    }
}

/// Bubble sort with early exit
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn sort<T: Ord>(&self, data: &mut [T]) {
        bubble_sort_in_place(data);
    }
}

/// Return a new ascending copy of `input`.
///
/// ```
/// let data = [24, -3, 24, -3, 2, 0, 17, 1];
/// assert_eq!(sorter::bubble_sort(&data), [-3, -3, 0, 1, 2, 17, 24, 24]);
/// assert_eq!(data, [24, -3, 24, -3, 2, 0, 17, 1]);
/// ```
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    bubble_sort_with_stats(input).0
}

/// Like [`bubble_sort`], also returning the run's [`SortStats`]
pub fn bubble_sort_with_stats<T: Ord + Clone>(input: &[T]) -> (Vec<T>, SortStats) {
    let mut out = input.to_vec();
    let stats = bubble_sort_in_place(&mut out);
    (out, stats)
}

/// Return a new copy of `input` ordered by `compare`.
///
/// Elements move only when `compare(left, right)` is `Ordering::Greater`.
pub fn bubble_sort_by<T, F>(input: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = input.to_vec();
    infallible(run_passes(&mut out, |a, b, _, _| Ok(compare(a, b))));
    out
}

/// Return a new ascending copy of `input` for types with only a partial order.
///
/// Fails with [`SortError::Incomparable`] on the first comparison that has no
/// answer. No partial result is returned.
pub fn try_bubble_sort<T: PartialOrd + Clone>(input: &[T]) -> Result<Vec<T>> {
    let mut out = input.to_vec();
    run_passes(&mut out, |a, b, pass, left| {
        a.partial_cmp(b).ok_or_else(|| {
            tracing::debug!(pass, left, "incomparable elements, aborting sort");
            SortError::Incomparable {
                pass,
                left,
                right: left + 1,
            }
        })
    })?;
    Ok(out)
}

/// Sort `data` in place, returning the run's counters
pub fn bubble_sort_in_place<T: Ord>(data: &mut [T]) -> SortStats {
    infallible(run_passes(data, |a, b, _, _| Ok(a.cmp(b))))
}

fn infallible(result: std::result::Result<SortStats, Infallible>) -> SortStats {
    match result {
        Ok(stats) => stats,
        Err(never) => match never {},
    }
}

/// Shared kernel. `compare` receives the pair plus the pass index and the
/// left element's position.
fn run_passes<T, E, F>(data: &mut [T], mut compare: F) -> std::result::Result<SortStats, E>
where
    F: FnMut(&T, &T, usize, usize) -> std::result::Result<Ordering, E>,
{
    let n = data.len();
    let mut stats = SortStats::default();
    if n < 2 {
        return Ok(stats);
    }

    for i in 0..n - 1 {
        stats.passes += 1;
        let mut swapped = false;

        // Last i elements are already in place
        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            if compare(&data[j], &data[j + 1], i, j)? == Ordering::Greater {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            stats.early_exit = true;
            break;
        }
    }

    tracing::trace!(
        len = n,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        early_exit = stats.early_exit,
        "bubble sort finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_input_without_touching_it() {
        let input = vec![24, -3, 24, -3, 2, 0, 17, 1];
        let out = bubble_sort(&input);
        assert_eq!(out, vec![-3, -3, 0, 1, 2, 17, 24, 24]);
        assert_eq!(input, vec![24, -3, 24, -3, 2, 0, 17, 1]);
    }

    #[test]
    fn empty_and_single() {
        let (out, stats) = bubble_sort_with_stats::<i32>(&[]);
        assert!(out.is_empty());
        assert_eq!(stats, SortStats::default());

        let (out, stats) = bubble_sort_with_stats(&[5]);
        assert_eq!(out, vec![5]);
        assert_eq!(stats.passes, 0);
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let (out, stats) = bubble_sort_with_stats(&[1, 2, 3]);
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 2);
        assert!(stats.early_exit);
    }

    #[test]
    fn reverse_input_runs_every_pass() {
        let (out, stats) = bubble_sort_with_stats(&[3, 2, 1]);
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.swaps, 3);
        assert!(!stats.early_exit);

        let input: Vec<u32> = (0..50).rev().collect();
        let (_, stats) = bubble_sort_with_stats(&input);
        assert_eq!(stats.passes, 49);
        assert_eq!(stats.swaps, 50 * 49 / 2);
        assert_eq!(stats.comparisons, 50 * 49 / 2);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let input = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let out = bubble_sort_by(&input, |a, b| a.0.cmp(&b.0));
        assert_eq!(out, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn custom_comparator_can_reverse() {
        let out = bubble_sort_by(&[1, 5, 3], |a, b| b.cmp(a));
        assert_eq!(out, vec![5, 3, 1]);
    }

    #[test]
    fn partial_order_sorts_floats() {
        let out = try_bubble_sort(&[2.5, -1.0, 0.0, 2.5]).unwrap();
        assert_eq!(out, vec![-1.0, 0.0, 2.5, 2.5]);
    }

    #[test]
    fn nan_is_reported_as_incomparable() {
        let input = [1.0, f64::NAN, 0.5];
        let err = try_bubble_sort(&input).unwrap_err();
        assert_eq!(
            err,
            SortError::Incomparable {
                pass: 0,
                left: 0,
                right: 1
            }
        );
        assert!(err.to_string().contains("not comparable"));
    }

    #[test]
    fn stats_merge_adds_counters() {
        let mut total = SortStats::default();
        total.merge(&bubble_sort_with_stats(&[3, 2, 1]).1);
        total.merge(&bubble_sort_with_stats(&[1, 2, 3]).1);
        assert_eq!(total.passes, 3);
        assert_eq!(total.swaps, 3);
        assert!(total.early_exit);

        let mut full_runs = SortStats::default();
        full_runs.merge(&bubble_sort_with_stats(&[3, 2, 1]).1);
        full_runs.merge(&bubble_sort_with_stats(&[2, 1]).1);
        assert_eq!(full_runs.passes, 3);
        assert!(!full_runs.early_exit);
    }
}
