//! # Ranking Chart
//!
//! Bar chart of sorting results: one bar per (algorithm, size) sample,
//! slowest first, elapsed seconds printed above each bar and the
//! combined "Algorithm (size)" label under it.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::core::config::ChartStyle;
use crate::core::sample::{rank_descending, Sample};
use crate::ports::{PlotError, PlotResult};

use super::{backend_err, ensure_parent_dir};

pub(crate) fn render(samples: &[Sample], style: &ChartStyle, out: &Path) -> PlotResult<()> {
    if samples.is_empty() {
        return Err(PlotError::EmptyInput);
    }

    let mut ranked = samples.to_vec();
    rank_descending(&mut ranked);

    let labels: Vec<String> = ranked.iter().map(Sample::label).collect();
    let slowest = ranked[0].seconds;
    let y_top = if slowest > 0.0 { slowest * 1.1 } else { 1.0 };

    ensure_parent_dir(out)?;

    let root = BitMapBackend::new(out, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Sorting Algorithm Execution Times",
            ("sans-serif", style.caption_size),
        )
        .margin(16)
        .x_label_area_size(150)
        .y_label_area_size(70)
        .build_cartesian_2d((0..ranked.len()).into_segmented(), 0f64..y_top)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Time (seconds)")
        .x_labels(labels.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_style(
            ("sans-serif", style.label_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(super::palette::color(0).filled())
                .margin(8)
                .data(ranked.iter().enumerate().map(|(i, s)| (i, s.seconds))),
        )
        .map_err(backend_err)?;

    // Elapsed time above each bar
    let value_style = TextStyle::from(("sans-serif", style.label_size).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(ranked.iter().enumerate().map(|(i, s)| {
            Text::new(
                format!("{:.4}", s.seconds),
                (SegmentValue::CenterOf(i), s.seconds),
                value_style.clone(),
            )
        }))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    info!(bars = ranked.len(), path = %out.display(), "ranking chart written");

    Ok(())
}
