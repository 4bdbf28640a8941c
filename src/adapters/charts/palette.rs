//! # Palette
//!
//! Fixed color table shared by every chart so an algorithm keeps the
//! same color in the line panel and the bar panel. Matches the
//! matplotlib tab10 cycle the original reports used.

use plotters::style::RGBColor;

/// The tab10 color cycle
pub(crate) const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Color for the series at `index`, cycling past ten
pub(crate) fn color(index: usize) -> RGBColor {
    TAB10[index % TAB10.len()]
}
