//! Line chart of the raw daily series.

use crate::error::{to_render_error, Result};
use crate::style::{ChartBackend, ChartStyle};
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use rain_jma::series::RainfallSeries;
use std::ops::Range;
use std::path::Path;

/// Render the unaggregated series as a line chart at `path`.
pub fn render_daily_series(
    series: &RainfallSeries,
    style: &ChartStyle,
    backend: ChartBackend,
    path: &Path,
) -> Result<()> {
    match backend {
        ChartBackend::Svg => {
            let root = SVGBackend::new(path, style.size).into_drawing_area();
            draw_line(&root, series, style)
        }
        ChartBackend::Png => {
            let root = BitMapBackend::new(path, style.size).into_drawing_area();
            draw_line(&root, series, style)
        }
    }
}

fn draw_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &RainfallSeries,
    style: &ChartStyle,
) -> Result<()> {
    root.fill(&WHITE).map_err(to_render_error)?;

    // days with a missing reading draw no point
    let points: Vec<(NaiveDate, f64)> = series
        .measurements
        .iter()
        .filter_map(|m| m.precipitation.map(|millimeters| (m.date, millimeters)))
        .collect();

    let ranged_date: RangedDate<NaiveDate> = axis_date_range(series).into();
    let y_max = axis_max(points.iter().map(|&(_, millimeters)| millimeters));

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, ("sans-serif", 24))
        .margin(20i32)
        .x_label_area_size(40u32)
        .y_label_area_size(60u32)
        .build_cartesian_2d(ranged_date, 0f64..y_max)
        .map_err(to_render_error)?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_desc(&style.x_desc)
        .y_desc(&style.y_desc)
        .light_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(to_render_error)?;

    chart
        .draw_series(LineSeries::new(points, BLUE))
        .map_err(to_render_error)?
        .label("precipitation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_render_error)?;

    root.present().map_err(to_render_error)?;
    Ok(())
}

/// X-axis range for a series; a one-day series gets a day of padding so
/// the range is never degenerate.
fn axis_date_range(series: &RainfallSeries) -> Range<NaiveDate> {
    let end = if series.end_date > series.start_date {
        series.end_date
    } else {
        series.start_date + Duration::days(1)
    };
    series.start_date..end
}

/// Y-axis top: ten percent above the largest value, one when flat zero.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}
