//! Full report run: one input CSV in, three charts out.

use crate::table;
use anyhow::Context;
use clap::Args;
use log::{info, warn};
use rain_charts::bar::render_year_table;
use rain_charts::line::render_daily_series;
use rain_charts::style::{ChartBackend, ChartStyle};
use rain_jma::series::RainfallSeries;
use rain_stats::monthly::{monthly_totals, rainy_day_counts};
use rain_stats::year_table::YearTable;
use std::path::PathBuf;

/// File stem of the daily precipitation line chart.
const DAILY_STEM: &str = "daily-rainfall";
/// File stem of the monthly totals bar chart.
const TOTALS_STEM: &str = "monthly-rainfall";
/// File stem of the rainy-day counts bar chart.
const RAINY_STEM: &str = "rainy-days";

/// Arguments for one report run.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the precipitation CSV (one date,amount row per day, no header)
    #[arg(short = 'i', long, default_value = "data/hiyoshi.csv")]
    pub input: PathBuf,

    /// Chart backend, svg or png
    #[arg(short = 'b', long, default_value = "svg")]
    pub backend: String,

    /// Millimeters a day must exceed to count as rainy
    #[arg(short = 't', long, default_value_t = 0.0)]
    pub threshold: f64,

    /// Directory the charts are written into
    #[arg(short = 'o', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the month-by-year tables to stdout
    #[arg(long)]
    pub print_tables: bool,
}

/// Load the input series, aggregate it, and render all three charts.
pub fn run_report(args: &ReportArgs) -> anyhow::Result<()> {
    let backend: ChartBackend = args.backend.parse()?;

    let series = RainfallSeries::from_csv_path(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let totals = monthly_totals(&series);
    let rainy_days = rainy_day_counts(&series, args.threshold);

    let start_year = series.start_year();
    let end_year = series.end_year();
    let totals_table = YearTable::from_aggregate(&totals, start_year, end_year);
    let rainy_table = YearTable::from_aggregate(&rainy_days, start_year, end_year);
    if totals_table.is_empty() {
        warn!(
            "No chart years in {}..{}; the bar charts will be empty",
            start_year, end_year
        );
    }

    if args.print_tables {
        println!("Monthly rainfall (mm)");
        println!(
            "{}",
            table::format_table(&totals_table, |v| format!("{v:.1}"))
        );
        println!("Rainy days (> {} mm)", args.threshold);
        println!("{}", table::format_table(&rainy_table, |v| v.to_string()));
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    let daily_path = args.out_dir.join(backend.file_name(DAILY_STEM));
    let daily_style = ChartStyle::new(
        "Hiyoshi daily precipitation",
        "Date",
        "Precipitation (mm)",
        backend,
    );
    render_daily_series(&series, &daily_style, backend, &daily_path)?;
    info!("Wrote {}", daily_path.display());

    let totals_path = args.out_dir.join(backend.file_name(TOTALS_STEM));
    let totals_style =
        ChartStyle::new("Hiyoshi monthly rainfall", "Month", "Rainfall (mm)", backend);
    render_year_table(&totals_table, &totals_style, backend, &totals_path)?;
    info!("Wrote {}", totals_path.display());

    let rainy_path = args.out_dir.join(backend.file_name(RAINY_STEM));
    let rainy_style =
        ChartStyle::new("Hiyoshi rainy days per month", "Month", "Rainy days", backend);
    render_year_table(&rainy_table, &rainy_style, backend, &rainy_path)?;
    info!("Wrote {}", rainy_path.display());

    Ok(())
}
