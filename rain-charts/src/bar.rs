//! Grouped bar charts of month-by-year tables.
//!
//! Month slots are centered on integer x positions 0..=11; within a slot
//! the year columns draw side by side, oldest year leftmost, each filled
//! with its palette color.

use crate::error::{to_render_error, Result};
use crate::palette::year_color;
use crate::style::{ChartBackend, ChartStyle, MONTH_LABELS};
use plotters::coord::Shift;
use plotters::prelude::*;
use rain_stats::year_table::YearTable;
use std::path::Path;

/// Fraction of each month slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

/// Render a month-by-year table as a grouped bar chart at `path`.
pub fn render_year_table<T>(
    table: &YearTable<T>,
    style: &ChartStyle,
    backend: ChartBackend,
    path: &Path,
) -> Result<()>
where
    T: Copy + Into<f64>,
{
    match backend {
        ChartBackend::Svg => {
            let root = SVGBackend::new(path, style.size).into_drawing_area();
            draw_bars(&root, table, style)
        }
        ChartBackend::Png => {
            let root = BitMapBackend::new(path, style.size).into_drawing_area();
            draw_bars(&root, table, style)
        }
    }
}

fn draw_bars<DB, T>(
    root: &DrawingArea<DB, Shift>,
    table: &YearTable<T>,
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    T: Copy + Into<f64>,
{
    root.fill(&WHITE).map_err(to_render_error)?;

    let y_max = match table.max_value() {
        Some(max) if max > 0.0 => max * 1.1,
        _ => 1.0,
    };

    let mut chart = ChartBuilder::on(root)
        .caption(&style.title, ("sans-serif", 24))
        .margin(20i32)
        .x_label_area_size(40u32)
        .y_label_area_size(60u32)
        .build_cartesian_2d(-0.6f64..11.6f64, 0f64..y_max)
        .map_err(to_render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(12)
        .x_label_formatter(&month_slot_label)
        .x_desc(&style.x_desc)
        .y_desc(&style.y_desc)
        .light_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(to_render_error)?;

    let year_count = table.columns.len();
    for (year_index, column) in table.columns.iter().enumerate() {
        let color = year_color(year_index);
        let bars: Vec<Rectangle<(f64, f64)>> = column
            .months
            .iter()
            .enumerate()
            .filter_map(|(month_index, cell)| {
                cell.map(|value| {
                    let (x0, x1) = bar_span(month_index, year_index, year_count);
                    Rectangle::new([(x0, 0.0), (x1, value.into())], color.filled())
                })
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(to_render_error)?
            .label(column.year.to_string())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(to_render_error)?;

    root.present().map_err(to_render_error)?;
    Ok(())
}

/// Horizontal extent of one year's bar within a month slot.
fn bar_span(month_index: usize, year_index: usize, year_count: usize) -> (f64, f64) {
    let bar_width = GROUP_WIDTH / year_count as f64;
    let group_start = month_index as f64 - GROUP_WIDTH / 2.0;
    let x0 = group_start + year_index as f64 * bar_width;
    (x0, x0 + bar_width)
}

/// Month label for an axis tick; ticks off slot centers label as empty.
fn month_slot_label(x: &f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 0.001 || rounded < 0.0 {
        return String::new();
    }
    MONTH_LABELS
        .get(rounded as usize)
        .map(|label| (*label).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_year_bars_split_the_group() {
        let (x0, x1) = bar_span(0, 0, 2);
        assert!(close(x0, -0.4));
        assert!(close(x1, 0.0));
        let (x0, x1) = bar_span(0, 1, 2);
        assert!(close(x0, 0.0));
        assert!(close(x1, 0.4));
    }

    #[test]
    fn bars_stay_inside_their_month_slot() {
        let year_count = 7;
        for month_index in 0..12 {
            let center = month_index as f64;
            for year_index in 0..year_count {
                let (x0, x1) = bar_span(month_index, year_index, year_count);
                assert!(x0 >= center - 0.5, "bar start escapes slot {month_index}");
                assert!(x1 <= center + 0.5, "bar end escapes slot {month_index}");
                assert!(x1 > x0);
            }
        }
    }

    #[test]
    fn adjacent_bars_do_not_overlap() {
        let (_, first_end) = bar_span(3, 0, 4);
        let (second_start, _) = bar_span(3, 1, 4);
        assert!(close(first_end, second_start));
    }

    #[test]
    fn slot_centers_get_month_labels() {
        assert_eq!(month_slot_label(&0.0), "Jan");
        assert_eq!(month_slot_label(&11.0), "Dec");
        assert_eq!(month_slot_label(&4.0), "May");
    }

    #[test]
    fn off_center_ticks_get_no_label() {
        assert_eq!(month_slot_label(&0.5), "");
        assert_eq!(month_slot_label(&-1.0), "");
        assert_eq!(month_slot_label(&12.0), "");
    }
}
