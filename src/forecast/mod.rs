//! Forecasting engine: fit a model on a training frame, predict a horizon.
//!
//! Models are stateless per run: every pipeline pass fits a fresh instance
//! from scratch and nothing survives between runs.

mod seasonal_trend;

pub use seasonal_trend::{SeasonalTrend, TrainedSeasonalTrend};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::TrainingFrame;

/// Custom error types for the forecast engine
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("invalid horizon: {0} days")]
    InvalidHorizon(i64),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("fitting failed: {0}")]
    Fit(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

/// One row of a [`Forecast`], for table display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRow {
    pub date: NaiveDate,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Point forecasts with uncertainty bounds, covering the training range
/// plus the requested horizon beyond the last training date.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub timestamps: Vec<NaiveDate>,
    pub predicted: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    /// Width of the uncertainty interval (0..1)
    pub confidence_level: f64,
}

impl Forecast {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Row view over the last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = ForecastRow> + '_ {
        let start = self.len().saturating_sub(n);
        (start..self.len()).map(|i| ForecastRow {
            date: self.timestamps[i],
            predicted: self.predicted[i],
            lower: self.lower[i],
            upper: self.upper[i],
        })
    }
}

/// Common interface for forecasting models
pub trait ForecastModel {
    type Trained: TrainedModel;

    /// Fit the model on a training frame
    fn fit(&self, frame: &TrainingFrame) -> Result<Self::Trained>;

    fn name(&self) -> &str;
}

/// A model fit on one training frame
pub trait TrainedModel {
    /// Forecast `horizon_days` calendar days beyond the last training date
    fn predict(&self, horizon_days: i64) -> Result<Forecast>;
}
