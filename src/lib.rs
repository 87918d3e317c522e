// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod forecast;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::PERSISTENCE;
pub use domain::{HorizonYears, PriceSeries, Ticker, TrainingFrame};
pub use forecast::{Forecast, ForecastModel, SeasonalTrend, TrainedModel};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use API as primary source instead of the local cache
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
