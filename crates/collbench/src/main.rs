use std::io;
use std::process::ExitCode;

use clap::Parser;
use collbench::logging::init_logging;
use collbench::{Args, Menu};
use collbench_chart::{ChartExporter, SvgBarChart};
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let config = args.session_config();
    if let Err(e) = config.validate() {
        error!(%e, "invalid configuration");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let exporter = config
        .chart
        .as_ref()
        .map(|path| Box::new(SvgBarChart::new(path)) as Box<dyn ChartExporter>);

    let menu = Menu::new(io::stdin().lock(), io::stdout().lock(), config, exporter);
    match menu.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "session aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
