//! Plain-text rendering of month-by-year tables.

use rain_charts::style::MONTH_LABELS;
use rain_stats::year_table::YearTable;

/// Cell text for a month outside a year's covered span.
const ABSENT_CELL: &str = "-";

/// Render `table` with months as rows and years as columns. Present
/// cells go through `format_cell`; absent cells show a dash.
pub fn format_table<T, F>(table: &YearTable<T>, format_cell: F) -> String
where
    T: Copy,
    F: Fn(T) -> String,
{
    let mut out = String::new();
    out.push_str(&format!("{:<5}", ""));
    for column in &table.columns {
        out.push_str(&format!("{:>8}", column.year));
    }
    out.push('\n');

    for (month_index, label) in MONTH_LABELS.iter().enumerate() {
        out.push_str(&format!("{label:<5}"));
        for column in &table.columns {
            let cell = match column.months[month_index] {
                Some(value) => format_cell(value),
                None => ABSENT_CELL.to_string(),
            };
            out.push_str(&format!("{cell:>8}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rain_stats::year_table::YearColumn;

    fn sample_table() -> YearTable<f64> {
        let mut first = [None; 12];
        first[0] = Some(12.5);
        first[1] = Some(0.0);
        let mut second = [Some(3.0); 12];
        second[11] = None;
        YearTable {
            columns: vec![
                YearColumn {
                    year: 2021,
                    months: first,
                },
                YearColumn {
                    year: 2022,
                    months: second,
                },
            ],
        }
    }

    #[test]
    fn header_row_lists_years() {
        let text = format_table(&sample_table(), |v| format!("{v:.1}"));
        let header = text.lines().next().unwrap();
        assert!(header.contains("2021"));
        assert!(header.contains("2022"));
    }

    #[test]
    fn each_month_gets_a_row() {
        let text = format_table(&sample_table(), |v| format!("{v:.1}"));
        assert_eq!(text.lines().count(), 13);
        assert!(text.lines().nth(1).unwrap().starts_with("Jan"));
        assert!(text.lines().last().unwrap().starts_with("Dec"));
    }

    #[test]
    fn absent_cells_show_a_dash() {
        let text = format_table(&sample_table(), |v| format!("{v:.1}"));
        let march = text.lines().nth(3).unwrap();
        assert!(march.contains('-'));
        assert!(march.contains("3.0"));
    }

    #[test]
    fn present_cells_use_the_formatter() {
        let counts: YearTable<u32> = YearTable {
            columns: vec![YearColumn {
                year: 2020,
                months: [Some(7); 12],
            }],
        };
        let text = format_table(&counts, |v| v.to_string());
        let jan = text.lines().nth(1).unwrap();
        assert!(jan.contains('7'));
        assert!(!jan.contains("7.0"));
    }
}
