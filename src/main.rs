use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt
};

use bridgedays::configuration::OptimizerConfiguration;
use bridgedays::error::CatalogError;
use bridgedays::holiday::jsonholidaycatalog::JsonHolidayCatalog;
use bridgedays::holiday::region::Region;
use bridgedays::optimizer::vacationoptimizer::VacationOptimizer;

#[derive(Parser, Debug)]
#[command(name = "bridgedays")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find vacation days that turn public holidays into long weekends", long_about = None)]
struct Cli {
    /// Holiday data file (publicHolidays / schoolHolidays tables)
    #[arg(long = "catalog", value_name = "JSON")]
    catalog: PathBuf,

    /// Federal state code, e.g. BY
    #[arg(long = "region")]
    region: Region,

    #[arg(long = "year")]
    year: i32,

    /// Optimizer settings; defaults apply when omitted
    #[arg(long = "config", value_name = "JSON")]
    config: Option<PathBuf>,

    /// List template bridge days instead of searched windows
    #[arg(long = "bridges")]
    bridges: bool
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => OptimizerConfiguration::from_reader(path)?,
        None => OptimizerConfiguration::default()
    };
    let catalog = JsonHolidayCatalog::from_reader(&cli.catalog)?;
    tracing::info!(catalog = %cli.catalog.display(), years = ?catalog.years(), "catalog loaded");

    let optimizer = VacationOptimizer::new(catalog, config);

    let lines: Vec<String> = if cli.bridges {
        match optimizer.bridge_opportunities(cli.region, cli.year, &[]) {
            Ok(opportunities) => opportunities.iter().map(|o| o.description().to_owned()).collect(),
            Err(CatalogError::NoHolidaysAvailable { .. }) => vec![],
            Err(e) => return Err(e.into())
        }
    } else {
        match optimizer.window_recommendations(cli.region, cli.year) {
            Ok(windows) => windows.iter().map(|w| w.to_string()).collect(),
            Err(CatalogError::NoHolidaysAvailable { .. }) => vec![],
            Err(e) => return Err(e.into())
        }
    };

    if lines.is_empty() {
        println!("no recommendations available");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bridgedays=info".into())
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
