//! Copy-on-entry Sorting
//!
//! A stable bubble sort with early exit that never touches the caller's
//! data, along with reference sorters to benchmark it against.

pub mod baselines;
pub mod bubble;
pub mod config;
pub mod error;

pub use bubble::{
    bubble_sort, bubble_sort_by, bubble_sort_in_place, bubble_sort_with_stats, try_bubble_sort,
    BubbleSorter, SortStats,
};
pub use config::BenchConfig;
pub use error::{ConfigError, Result, SortError};

/// Trait for sorting implementations
pub trait Sorter {
    /// Sort the slice in-place in ascending order
    fn sort<T: Ord>(&self, data: &mut [T]);

    /// Return a sorted copy of `input`, leaving `input` untouched
    fn sorted<T: Ord + Clone>(&self, input: &[T]) -> Vec<T> {
        let mut out = input.to_vec();
        self.sort(&mut out);
        out
    }
}

/// True when every adjacent pair satisfies `left <= right`
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
