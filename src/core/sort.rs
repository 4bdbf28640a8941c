//! # Sorting Algorithms
//!
//! The sorting algorithms under measurement. All operate in place on
//! `&mut [u32]` (dataset values are 8-digit numbers) and none allocate
//! beyond what the algorithm itself requires.
//!
//! Deliberately includes the slow ones - bubble and stooge exist here
//! to be measured, not to be used.

use std::fmt;
use std::str::FromStr;

use crate::core::scaling::Complexity;

/// A sorting algorithm the bench engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgo {
    Bubble,
    Quick,
    Stooge,
    Radix,
    Merge,
    Bitonic,
}

/// Parse failure for an algorithm name given on the command line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl SortAlgo {
    /// Every sorting algorithm, in menu order
    pub const ALL: [SortAlgo; 6] = [
        SortAlgo::Bubble,
        SortAlgo::Quick,
        SortAlgo::Stooge,
        SortAlgo::Radix,
        SortAlgo::Merge,
        SortAlgo::Bitonic,
    ];

    /// Display name, also the key used in result CSV rows
    pub fn name(self) -> &'static str {
        match self {
            SortAlgo::Bubble => "Bubble Sort",
            SortAlgo::Quick => "Quick Sort",
            SortAlgo::Stooge => "Stooge Sort",
            SortAlgo::Radix => "Radix Sort",
            SortAlgo::Merge => "Merge Sort",
            SortAlgo::Bitonic => "Bitonic Sort",
        }
    }

    /// Growth class used when a run must be estimated instead of measured
    pub fn complexity(self) -> Complexity {
        match self {
            SortAlgo::Bubble => Complexity::Quadratic,
            SortAlgo::Quick => Complexity::Linearithmic,
            SortAlgo::Stooge => Complexity::Stooge,
            SortAlgo::Radix => Complexity::Linear,
            SortAlgo::Merge => Complexity::Linearithmic,
            SortAlgo::Bitonic => Complexity::NLogSquared,
        }
    }

    /// Largest size this algorithm is actually run at.
    ///
    /// For `n` above the returned base, the engine estimates from the
    /// measurement at the base size via [`Complexity::scale`]. Bubble
    /// is measured up to 100k, stooge only up to 10k; everything else
    /// always runs for real.
    pub fn estimation_base(self, n: usize) -> Option<usize> {
        match self {
            SortAlgo::Bubble if n > 100_000 => Some(100_000),
            SortAlgo::Stooge if n > 10_000 => Some(10_000),
            _ => None,
        }
    }

    /// Run the algorithm in place
    pub fn run(self, data: &mut [u32]) {
        match self {
            SortAlgo::Bubble => bubble_sort(data),
            SortAlgo::Quick => quick_sort(data),
            SortAlgo::Stooge => stooge_sort(data),
            SortAlgo::Radix => radix_sort(data),
            SortAlgo::Merge => merge_sort(data),
            SortAlgo::Bitonic => bitonic_sort(data),
        }
    }
}

impl fmt::Display for SortAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgo {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(SortAlgo::Bubble),
            "quick" => Ok(SortAlgo::Quick),
            "stooge" => Ok(SortAlgo::Stooge),
            "radix" => Ok(SortAlgo::Radix),
            "merge" => Ok(SortAlgo::Merge),
            "bitonic" => Ok(SortAlgo::Bitonic),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// True when the slice is in non-decreasing order
pub fn is_sorted(data: &[u32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

// ============================================================================
// ALGORITHMS
// ============================================================================

/// Bubble sort, O(n^2)
pub fn bubble_sort(data: &mut [u32]) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
}

/// Quick sort with middle-element pivot, O(n log n) average
pub fn quick_sort(data: &mut [u32]) {
    if data.len() > 1 {
        quick_sort_range(data, 0, data.len() - 1);
    }
}

fn quick_sort_range(data: &mut [u32], left: usize, right: usize) {
    let pivot = data[(left + right) / 2];
    let mut i = left;
    let mut j = right;

    loop {
        while data[i] < pivot {
            i += 1;
        }
        while data[j] > pivot {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        if j == 0 {
            break;
        }
        j -= 1;
    }

    if left < j {
        quick_sort_range(data, left, j);
    }
    if i < right {
        quick_sort_range(data, i, right);
    }
}

/// Stooge sort, O(n^2.7)
pub fn stooge_sort(data: &mut [u32]) {
    if !data.is_empty() {
        stooge_sort_range(data, 0, data.len() - 1);
    }
}

fn stooge_sort_range(data: &mut [u32], low: usize, high: usize) {
    if low >= high {
        return;
    }

    if data[low] > data[high] {
        data.swap(low, high);
    }

    if high - low + 1 > 2 {
        let third = (high - low + 1) / 3;
        stooge_sort_range(data, low, high - third);
        stooge_sort_range(data, low + third, high);
        stooge_sort_range(data, low, high - third);
    }
}

/// LSD radix sort, base 10, O(n) over fixed-width keys
pub fn radix_sort(data: &mut [u32]) {
    if data.is_empty() {
        return;
    }

    let max = *data.iter().max().unwrap_or(&0);
    let mut output = vec![0u32; data.len()];
    let mut exp: u64 = 1;

    while max as u64 / exp > 0 {
        let mut count = [0usize; 10];

        for &value in data.iter() {
            count[(value as u64 / exp % 10) as usize] += 1;
        }
        for digit in 1..10 {
            count[digit] += count[digit - 1];
        }
        for &value in data.iter().rev() {
            let digit = (value as u64 / exp % 10) as usize;
            count[digit] -= 1;
            output[count[digit]] = value;
        }

        data.copy_from_slice(&output);
        exp *= 10;
    }
}

/// Top-down merge sort, O(n log n)
pub fn merge_sort(data: &mut [u32]) {
    let mut scratch = data.to_vec();
    merge_sort_range(data, &mut scratch, 0, data.len());
}

fn merge_sort_range(data: &mut [u32], scratch: &mut [u32], low: usize, high: usize) {
    if high - low < 2 {
        return;
    }

    let mid = low + (high - low) / 2;
    merge_sort_range(data, scratch, low, mid);
    merge_sort_range(data, scratch, mid, high);

    scratch[low..high].copy_from_slice(&data[low..high]);

    let mut i = low;
    let mut j = mid;
    for slot in low..high {
        if i < mid && (j >= high || scratch[i] <= scratch[j]) {
            data[slot] = scratch[i];
            i += 1;
        } else {
            data[slot] = scratch[j];
            j += 1;
        }
    }
}

/// Bitonic sort, O(n log^2 n).
///
/// The network only works on power-of-two lengths, so the input is
/// padded with `u32::MAX` sentinels and truncated afterwards. Values
/// are 8-digit numbers, well below the sentinel.
pub fn bitonic_sort(data: &mut [u32]) {
    if data.len() < 2 {
        return;
    }

    let padded_len = data.len().next_power_of_two();
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(data);
    padded.resize(padded_len, u32::MAX);

    bitonic_sort_range(&mut padded, 0, padded_len, true);

    data.copy_from_slice(&padded[..data.len()]);
}

fn bitonic_sort_range(data: &mut [u32], low: usize, count: usize, ascending: bool) {
    if count > 1 {
        let half = count / 2;
        bitonic_sort_range(data, low, half, true);
        bitonic_sort_range(data, low + half, half, false);
        bitonic_merge(data, low, count, ascending);
    }
}

fn bitonic_merge(data: &mut [u32], low: usize, count: usize, ascending: bool) {
    if count > 1 {
        let half = count / 2;
        for i in low..low + half {
            if (data[i] > data[i + half]) == ascending {
                data.swap(i, i + half);
            }
        }
        bitonic_merge(data, low, half, ascending);
        bitonic_merge(data, low + half, half, ascending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled() -> Vec<u32> {
        vec![
            57_402_118, 12_345_678, 99_999_999, 10_000_000, 83_214_650, 44_444_444, 12_345_678,
            71_028_456, 30_405_060, 65_432_100,
        ]
    }

    fn expected() -> Vec<u32> {
        let mut v = scrambled();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_bubble_sort() {
        let mut data = scrambled();
        bubble_sort(&mut data);
        assert_eq!(data, expected());
    }

    #[test]
    fn test_quick_sort() {
        let mut data = scrambled();
        quick_sort(&mut data);
        assert_eq!(data, expected());
    }

    #[test]
    fn test_stooge_sort() {
        let mut data = scrambled();
        stooge_sort(&mut data);
        assert_eq!(data, expected());
    }

    #[test]
    fn test_radix_sort() {
        let mut data = scrambled();
        radix_sort(&mut data);
        assert_eq!(data, expected());
    }

    #[test]
    fn test_merge_sort() {
        let mut data = scrambled();
        merge_sort(&mut data);
        assert_eq!(data, expected());
    }

    #[test]
    fn test_bitonic_sort_non_power_of_two() {
        // 10 elements forces padding up to 16
        let mut data = scrambled();
        bitonic_sort(&mut data);
        assert_eq!(data, expected());
    }

    #[test]
    fn test_all_algorithms_on_edge_inputs() {
        for algo in SortAlgo::ALL {
            let mut empty: Vec<u32> = vec![];
            algo.run(&mut empty);
            assert!(empty.is_empty(), "{algo} broke the empty slice");

            let mut single = vec![42_000_000];
            algo.run(&mut single);
            assert_eq!(single, vec![42_000_000], "{algo} broke a single element");

            let mut sorted = vec![1, 2, 3, 4, 5, 6, 7];
            algo.run(&mut sorted);
            assert!(is_sorted(&sorted), "{algo} unsorted a sorted slice");

            let mut reversed: Vec<u32> = (0..33).rev().collect();
            algo.run(&mut reversed);
            assert!(is_sorted(&reversed), "{algo} failed on reversed input");
        }
    }

    #[test]
    fn test_sort_algo_from_str() {
        assert_eq!("quick".parse::<SortAlgo>().unwrap(), SortAlgo::Quick);
        assert_eq!("Bitonic".parse::<SortAlgo>().unwrap(), SortAlgo::Bitonic);
        assert!("bogo".parse::<SortAlgo>().is_err());
    }

    #[test]
    fn test_estimation_bases() {
        assert_eq!(SortAlgo::Bubble.estimation_base(1_000_000), Some(100_000));
        assert_eq!(SortAlgo::Bubble.estimation_base(100_000), None);
        assert_eq!(SortAlgo::Stooge.estimation_base(100_000), Some(10_000));
        assert_eq!(SortAlgo::Quick.estimation_base(1_000_000), None);
    }
}
