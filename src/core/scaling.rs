//! # Scaling
//!
//! Growth classes for extrapolating run times that are infeasible to
//! measure directly. A quadratic sort over a million elements is timed
//! once at a smaller size and scaled up instead of running for hours.

/// Asymptotic growth class of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// O(n) - e.g. radix sort over fixed-width keys
    Linear,
    /// O(n log n) - e.g. merge sort, quick sort (average)
    Linearithmic,
    /// O(n log^2 n) - bitonic sorting network
    NLogSquared,
    /// O(n^2) - bubble sort
    Quadratic,
    /// O(n^2.7) - stooge sort (n^(log 3 / log 1.5))
    Stooge,
}

impl Complexity {
    /// Cost model value at input size n
    fn cost(self, n: f64) -> f64 {
        match self {
            Complexity::Linear => n,
            Complexity::Linearithmic => n * n.log2(),
            Complexity::NLogSquared => n * n.log2() * n.log2(),
            Complexity::Quadratic => n * n,
            Complexity::Stooge => n.powf(2.7),
        }
    }

    /// Multiplier turning a measurement at `from` elements into an
    /// estimate at `to` elements.
    ///
    /// `scale(100_000, 1_000_000)` for `Quadratic` is 100: ten times
    /// the input, a hundred times the work.
    ///
    /// `from` must be at least 2: the logarithmic classes have zero
    /// cost at one element, which would make the ratio meaningless.
    pub fn scale(self, from: usize, to: usize) -> f64 {
        debug_assert!(from > 1, "scale base must be at least 2 elements");
        self.cost(to as f64) / self.cost(from as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_tenfold() {
        let factor = Complexity::Quadratic.scale(100_000, 1_000_000);
        assert!((factor - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_stooge_tenfold() {
        // 10^2.7 ~= 501
        let factor = Complexity::Stooge.scale(10_000, 100_000);
        assert!((factor - 501.187).abs() < 0.01);
    }

    #[test]
    fn test_stooge_hundredfold() {
        // 100^2.7 ~= 251,189; the factor stays on the cost curve
        // rather than rounding to a flat 100,000
        let factor = Complexity::Stooge.scale(10_000, 1_000_000);
        assert!((factor - 251_188.643).abs() < 0.01);
    }

    #[test]
    fn test_linear_tenfold() {
        let factor = Complexity::Linear.scale(10_000, 100_000);
        assert!((factor - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_nlog_squared_between_linearithmic_and_quadratic() {
        let nls = Complexity::NLogSquared.scale(10_000, 100_000);
        let nlogn = Complexity::Linearithmic.scale(10_000, 100_000);
        let quad = Complexity::Quadratic.scale(10_000, 100_000);

        assert!(nlogn < nls);
        assert!(nls < quad);
    }

    #[test]
    fn test_identity_scale() {
        assert!((Complexity::Quadratic.scale(500, 500) - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "scale base must be at least 2")]
    fn test_scale_rejects_single_element_base() {
        Complexity::Linearithmic.scale(1, 10);
    }
}
