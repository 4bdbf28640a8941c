//! # Search Algorithms
//!
//! The search algorithms under measurement. All return the position of
//! the target if present. Every algorithm except linear search expects
//! the slice sorted ascending; the bench engine sorts a copy first.

use std::fmt;
use std::str::FromStr;

use crate::core::scaling::Complexity;
use crate::core::sort::UnknownAlgorithm;

/// A search algorithm the bench engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgo {
    Linear,
    Binary,
    Ternary,
    Jump,
}

impl SearchAlgo {
    /// Every search algorithm, in menu order
    pub const ALL: [SearchAlgo; 4] = [
        SearchAlgo::Linear,
        SearchAlgo::Binary,
        SearchAlgo::Ternary,
        SearchAlgo::Jump,
    ];

    /// Display name, also the key used in result CSV rows
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgo::Linear => "Linear Search",
            SearchAlgo::Binary => "Binary Search",
            SearchAlgo::Ternary => "Ternary Search",
            SearchAlgo::Jump => "Jumping Search",
        }
    }

    /// Growth class of the search itself (excluding any pre-sort)
    pub fn complexity(self) -> Complexity {
        match self {
            SearchAlgo::Linear => Complexity::Linear,
            // log n and sqrt n classes are never extrapolated here, the
            // runs are always fast enough to measure; linearithmic is
            // the closest conservative bucket.
            SearchAlgo::Binary | SearchAlgo::Ternary | SearchAlgo::Jump => {
                Complexity::Linearithmic
            }
        }
    }

    /// Whether the slice must be sorted before running
    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgo::Linear)
    }

    /// Run the algorithm
    pub fn run(self, data: &[u32], target: u32) -> Option<usize> {
        match self {
            SearchAlgo::Linear => linear_search(data, target),
            SearchAlgo::Binary => binary_search(data, target),
            SearchAlgo::Ternary => ternary_search(data, target),
            SearchAlgo::Jump => jump_search(data, target),
        }
    }
}

impl fmt::Display for SearchAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgo {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(SearchAlgo::Linear),
            "binary" => Ok(SearchAlgo::Binary),
            "ternary" => Ok(SearchAlgo::Ternary),
            "jump" | "jumping" => Ok(SearchAlgo::Jump),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

// ============================================================================
// ALGORITHMS
// ============================================================================

/// Linear scan, O(n), works on unsorted input
pub fn linear_search(data: &[u32], target: u32) -> Option<usize> {
    data.iter().position(|&value| value == target)
}

/// Binary search over a sorted slice, O(log n)
pub fn binary_search(data: &[u32], target: u32) -> Option<usize> {
    let mut left = 0usize;
    let mut right = data.len();

    while left < right {
        let mid = left + (right - left) / 2;

        if data[mid] == target {
            return Some(mid);
        }
        if data[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    None
}

/// Ternary search over a sorted slice, O(log3 n)
pub fn ternary_search(data: &[u32], target: u32) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut left = 0usize;
    let mut right = data.len() - 1;

    while left <= right {
        let mid1 = left + (right - left) / 3;
        let mid2 = right - (right - left) / 3;

        if data[mid1] == target {
            return Some(mid1);
        }
        if data[mid2] == target {
            return Some(mid2);
        }

        if target < data[mid1] {
            if mid1 == 0 {
                return None;
            }
            right = mid1 - 1;
        } else if target > data[mid2] {
            left = mid2 + 1;
        } else {
            left = mid1 + 1;
            if mid2 == 0 {
                return None;
            }
            right = mid2 - 1;
        }
    }

    None
}

/// Jump search over a sorted slice, O(sqrt n).
///
/// Jumps ahead in sqrt(n) strides until the block that could contain
/// the target, then scans that block linearly.
pub fn jump_search(data: &[u32], target: u32) -> Option<usize> {
    let n = data.len();
    if n == 0 {
        return None;
    }

    let step = ((n as f64).sqrt().floor() as usize).max(1);
    let mut prev = 0usize;
    let mut bound = step;

    while data[bound.min(n) - 1] < target {
        prev = bound;
        bound += step;
        if prev >= n {
            return None;
        }
    }

    while data[prev] < target {
        prev += 1;
        if prev == bound.min(n) {
            return None;
        }
    }

    if data[prev] == target {
        Some(prev)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted() -> Vec<u32> {
        vec![
            10_000_000, 12_345_678, 30_405_060, 44_444_444, 57_402_118, 65_432_100, 71_028_456,
            83_214_650, 99_999_999,
        ]
    }

    #[test]
    fn test_all_find_every_element() {
        let data = sorted();
        for algo in SearchAlgo::ALL {
            for (expected, &value) in data.iter().enumerate() {
                let found = algo.run(&data, value);
                assert_eq!(found, Some(expected), "{algo} missed {value}");
            }
        }
    }

    #[test]
    fn test_all_report_absent_target() {
        let data = sorted();
        for algo in SearchAlgo::ALL {
            assert_eq!(algo.run(&data, 11_111_111), None, "{algo} hallucinated");
            assert_eq!(algo.run(&data, 9_999_999), None, "{algo} found below min");
            assert_eq!(algo.run(&data, 99_999_998), None, "{algo} found a near miss");
        }
    }

    #[test]
    fn test_all_on_empty_slice() {
        for algo in SearchAlgo::ALL {
            assert_eq!(algo.run(&[], 42), None);
        }
    }

    #[test]
    fn test_all_on_single_element() {
        for algo in SearchAlgo::ALL {
            assert_eq!(algo.run(&[7], 7), Some(0));
            assert_eq!(algo.run(&[7], 8), None);
            assert_eq!(algo.run(&[7], 6), None);
        }
    }

    #[test]
    fn test_linear_works_unsorted() {
        let data = vec![5, 3, 9, 1];
        assert_eq!(linear_search(&data, 9), Some(2));
    }

    #[test]
    fn test_requires_sorted() {
        assert!(!SearchAlgo::Linear.requires_sorted());
        assert!(SearchAlgo::Binary.requires_sorted());
        assert!(SearchAlgo::Ternary.requires_sorted());
        assert!(SearchAlgo::Jump.requires_sorted());
    }

    #[test]
    fn test_search_algo_from_str() {
        assert_eq!("binary".parse::<SearchAlgo>().unwrap(), SearchAlgo::Binary);
        assert_eq!("Jumping".parse::<SearchAlgo>().unwrap(), SearchAlgo::Jump);
        assert!("quantum".parse::<SearchAlgo>().is_err());
    }
}
