/// Model shape and interval settings for the forecast engine.
pub struct ForecastConfig {
    /// Fourier order of the yearly seasonality component
    pub yearly_order: usize,
    /// Fourier order of the weekly seasonality component
    pub weekly_order: usize,
    pub yearly_period_days: f64,
    pub weekly_period_days: f64,
    /// Width of the uncertainty interval (0..1)
    pub confidence_level: f64,
}

pub const FORECAST: ForecastConfig = ForecastConfig {
    yearly_order: 3,
    weekly_order: 2,
    yearly_period_days: 365.25,
    weekly_period_days: 7.0,
    confidence_level: 0.80,
};

/// How many rows the raw-data and forecast tail tables show.
pub const TABLE_TAIL_ROWS: usize = 5;
