//! # Scaling Chart
//!
//! Two-panel PNG for search results:
//! - upper: log-log line chart of time over dataset size, one series
//!   per algorithm with point markers
//! - lower: grouped bar chart per dataset size on a log y axis
//!
//! Both panels index the palette by algorithm order, so colors match.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::core::config::ChartStyle;
use crate::core::series::SeriesMap;
use crate::ports::{PlotError, PlotResult};

use super::{backend_err, ensure_parent_dir, palette};

pub(crate) fn render(series: &SeriesMap, style: &ChartStyle, out: &Path) -> PlotResult<()> {
    if series.is_empty() {
        return Err(PlotError::EmptyInput);
    }

    ensure_parent_dir(out)?;

    let root = BitMapBackend::new(out, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let (upper, lower) = root.split_vertically((style.height / 2) as i32);
    draw_log_log(&upper, series, style)?;
    draw_grouped_bars(&lower, series, style)?;

    root.present().map_err(backend_err)?;
    info!(algorithms = series.len(), path = %out.display(), "scaling chart written");

    Ok(())
}

/// Smallest and largest positive times across all series.
///
/// Log axes cannot contain zero, so zero and negative samples are left
/// out of the bounds (and later out of the panels).
fn positive_time_bounds(series: &SeriesMap) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = 0.0f64;

    for algo in series.iter() {
        for &t in &algo.seconds {
            if t > 0.0 {
                min = min.min(t);
                max = max.max(t);
            }
        }
    }

    if max <= 0.0 {
        (1e-6, 1.0)
    } else {
        (min, max)
    }
}

fn draw_log_log(
    area: &DrawingArea<BitMapBackend, Shift>,
    series: &SeriesMap,
    style: &ChartStyle,
) -> PlotResult<()> {
    let sizes = series.size_union();
    let (Some(&first), Some(&last)) = (sizes.first(), sizes.last()) else {
        return Err(PlotError::EmptyInput);
    };
    let x_min = first as f64;
    let mut x_max = last as f64;
    if x_max <= x_min {
        // A single measured size still needs a non-degenerate axis
        x_max = x_min * 10.0;
    }
    let (t_min, t_max) = positive_time_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Search Algorithm Execution Times (log-log)",
            ("sans-serif", style.caption_size),
        )
        .margin(14)
        .x_label_area_size(55)
        .y_label_area_size(95)
        .build_cartesian_2d(
            (x_min..x_max * 1.1).log_scale(),
            (t_min * 0.5..t_max * 2.0).log_scale(),
        )
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("Dataset size (elements)")
        .y_desc("Time (seconds)")
        .label_style(("sans-serif", style.label_size))
        .draw()
        .map_err(backend_err)?;

    for (index, algo) in series.iter().enumerate() {
        let color = palette::color(index);
        let points: Vec<(f64, f64)> = algo
            .points_by_size()
            .into_iter()
            .filter(|&(_, t)| t > 0.0)
            .map(|(n, t)| (n as f64, t))
            .collect();
        if points.is_empty() {
            continue;
        }

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(backend_err)?
            .label(algo.algorithm.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
            )
            .map_err(backend_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_err)?;

    Ok(())
}

fn draw_grouped_bars(
    area: &DrawingArea<BitMapBackend, Shift>,
    series: &SeriesMap,
    style: &ChartStyle,
) -> PlotResult<()> {
    let sizes = series.size_union();
    let groups = sizes.len();
    let (t_min, t_max) = positive_time_bounds(series);
    let y_floor = t_min * 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption("Comparison by Dataset Size", ("sans-serif", style.caption_size))
        .margin(14)
        .x_label_area_size(55)
        .y_label_area_size(95)
        .build_cartesian_2d(
            -0.6f64..(groups as f64 - 0.4),
            (y_floor..t_max * 2.0).log_scale(),
        )
        .map_err(backend_err)?;

    let size_labels: Vec<String> = sizes.iter().map(|n| n.to_string()).collect();
    let group_label = |x: &f64| -> String {
        let nearest = x.round();
        if (x - nearest).abs() < 0.01 && nearest >= 0.0 && (nearest as usize) < size_labels.len() {
            size_labels[nearest as usize].clone()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(groups * 4 + 4)
        .x_label_formatter(&group_label)
        .x_desc("Dataset size")
        .y_desc("Time (seconds)")
        .label_style(("sans-serif", style.label_size))
        .draw()
        .map_err(backend_err)?;

    let group_width = 0.8f64;
    let bar_width = group_width / series.len().max(1) as f64;

    for (index, algo) in series.iter().enumerate() {
        let color = palette::color(index);
        let mut bars = Vec::new();

        for (group, &size) in sizes.iter().enumerate() {
            let Some(t) = algo.seconds_at(size) else {
                continue;
            };
            if t <= 0.0 {
                // Log axis cannot place a zero-height bar
                continue;
            }
            let x0 = group as f64 - group_width / 2.0 + index as f64 * bar_width;
            let x1 = x0 + bar_width * 0.9;
            bars.push(Rectangle::new([(x0, y_floor), (x1, t)], color.filled()));
        }

        chart
            .draw_series(bars)
            .map_err(backend_err)?
            .label(algo.algorithm.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_err)?;

    Ok(())
}
