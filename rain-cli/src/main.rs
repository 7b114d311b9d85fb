//! rain-cli - Command line tool for charting Hiyoshi precipitation data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rain-cli",
    version,
    about = "Hiyoshi rainfall reporting toolkit"
)]
struct Cli {
    #[command(flatten)]
    report: rain_cmd::report::ReportArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rain_cmd::report::run_report(&cli.report)
}
