//! # Chart Configuration
//!
//! Pixel dimensions for the rendered charts. The defaults mirror the
//! original report sizes: 12x8 inches for the ranking chart, 14x12 for
//! the two-panel scaling chart, at 100 dpi.

/// Dimensions and font sizing for one chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Caption font size
    pub caption_size: u32,

    /// Axis label font size
    pub label_size: u32,
}

impl ChartStyle {
    /// Style for the sorting ranking chart (1200x800)
    pub fn ranking() -> Self {
        Self {
            width: 1200,
            height: 800,
            caption_size: 32,
            label_size: 13,
        }
    }

    /// Style for the two-panel search scaling chart (1400x1200)
    pub fn scaling() -> Self {
        Self {
            width: 1400,
            height: 1200,
            caption_size: 28,
            label_size: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let ranking = ChartStyle::ranking();
        assert_eq!((ranking.width, ranking.height), (1200, 800));

        let scaling = ChartStyle::scaling();
        assert_eq!((scaling.width, scaling.height), (1400, 1200));
    }
}
