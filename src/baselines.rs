use crate::Sorter;

/// Classic O(n²) bubble sort that always runs every pass
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBubbleSorter;

impl Sorter for NaiveBubbleSorter {
    fn sort<T: Ord>(&self, data: &mut [T]) {
        let n = data.len();
        if n <= 1 {
            return;
        }

        for i in 0..n - 1 {
            for j in 0..n - 1 - i {
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                }
            }
        }
    }
}

/// Insertion sort by adjacent swaps - stable, O(n) on sorted input
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    fn sort<T: Ord>(&self, data: &mut [T]) {
        for i in 1..data.len() {
            let mut j = i;
            while j > 0 && data[j - 1] > data[j] {
                data.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}

/// Standard library stable sort
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSorter;

impl Sorter for StdSorter {
    #[inline]
    fn sort<T: Ord>(&self, data: &mut [T]) {
        data.sort();
    }
}

/// Standard library unstable sort (faster, no stability guarantee)
#[derive(Debug, Clone, Copy, Default)]
pub struct StdUnstableSorter;

impl Sorter for StdUnstableSorter {
    #[inline]
    fn sort<T: Ord>(&self, data: &mut [T]) {
        data.sort_unstable();
    }
}
