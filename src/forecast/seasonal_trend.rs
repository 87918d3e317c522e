//! Additive trend + seasonality model.
//!
//! Decomposes a daily series into a linear trend plus yearly and weekly
//! seasonality (truncated Fourier series), estimated jointly by least
//! squares. Uncertainty intervals come from the in-sample residual spread
//! and widen with the square root of the forecast step.

use chrono::{Days, NaiveDate};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::config::FORECAST;
use crate::domain::TrainingFrame;
use crate::forecast::{Forecast, ForecastError, ForecastModel, Result, TrainedModel};

const RIDGE: f64 = 1e-8;

#[derive(Debug, Clone)]
pub struct SeasonalTrend {
    name: String,
    yearly_order: usize,
    weekly_order: usize,
    confidence_level: f64,
}

impl SeasonalTrend {
    /// Model with the configured seasonality orders and interval level.
    pub fn new() -> Self {
        Self {
            name: format!(
                "Seasonal Trend (yearly={}, weekly={})",
                FORECAST.yearly_order, FORECAST.weekly_order
            ),
            yearly_order: FORECAST.yearly_order,
            weekly_order: FORECAST.weekly_order,
            confidence_level: FORECAST.confidence_level,
        }
    }

    pub fn with_orders(
        yearly_order: usize,
        weekly_order: usize,
        confidence_level: f64,
    ) -> Result<Self> {
        if !(0.0..1.0).contains(&confidence_level) || confidence_level <= 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "confidence level must be in (0, 1), got {}",
                confidence_level
            )));
        }
        Ok(Self {
            name: format!(
                "Seasonal Trend (yearly={}, weekly={})",
                yearly_order, weekly_order
            ),
            yearly_order,
            weekly_order,
            confidence_level,
        })
    }

    /// Intercept, slope, and a cos/sin pair per Fourier term.
    fn coefficient_count(&self) -> usize {
        2 + 2 * (self.yearly_order + self.weekly_order)
    }

    fn feature_row(&self, t_days: f64, span_days: f64) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.coefficient_count());
        row.push(1.0);
        row.push(t_days / span_days);
        for k in 1..=self.yearly_order {
            let w = std::f64::consts::TAU * k as f64 * t_days / FORECAST.yearly_period_days;
            row.push(w.cos());
            row.push(w.sin());
        }
        for k in 1..=self.weekly_order {
            let w = std::f64::consts::TAU * k as f64 * t_days / FORECAST.weekly_period_days;
            row.push(w.cos());
            row.push(w.sin());
        }
        row
    }
}

impl Default for SeasonalTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for SeasonalTrend {
    type Trained = TrainedSeasonalTrend;

    fn fit(&self, frame: &TrainingFrame) -> Result<TrainedSeasonalTrend> {
        let n = frame.len();
        let p = self.coefficient_count();
        // One spare observation keeps the residual variance defined
        if n < p + 1 {
            return Err(ForecastError::InsufficientData { needed: p + 1, got: n });
        }

        let origin = frame.timestamps[0];
        let last = frame.timestamps[n - 1];
        let span_days = ((last - origin).num_days() as f64).max(1.0);

        // Accumulate the normal equations X'X b = X'y
        let mut xtx = vec![vec![0.0; p]; p];
        let mut xty = vec![0.0; p];
        for (&date, &y) in frame.timestamps.iter().zip(&frame.values) {
            let t = (date - origin).num_days() as f64;
            let row = self.feature_row(t, span_days);
            for i in 0..p {
                xty[i] += row[i] * y;
                for j in 0..=i {
                    xtx[i][j] += row[i] * row[j];
                }
            }
        }
        // Mirror the lower triangle and ridge the diagonal so the
        // decomposition stays positive definite
        for i in 0..p {
            xtx[i][i] += RIDGE;
            for j in i + 1..p {
                xtx[i][j] = xtx[j][i];
            }
        }

        let coefficients = cholesky_solve(xtx, xty)
            .ok_or_else(|| ForecastError::Fit("normal equations are singular".to_string()))?;

        // In-sample residual spread, degrees-of-freedom adjusted
        let mut sum_sq = 0.0;
        for (&date, &y) in frame.timestamps.iter().zip(&frame.values) {
            let t = (date - origin).num_days() as f64;
            let row = self.feature_row(t, span_days);
            let yhat: f64 = row.iter().zip(&coefficients).map(|(x, b)| x * b).sum();
            sum_sq += (y - yhat) * (y - yhat);
        }
        let residual_std = (sum_sq / (n - p) as f64).sqrt();

        let normal = Normal::new(0.0, 1.0).map_err(|e| ForecastError::Fit(e.to_string()))?;
        let z = normal.inverse_cdf(0.5 + self.confidence_level / 2.0);

        Ok(TrainedSeasonalTrend {
            model: self.clone(),
            coefficients,
            train_timestamps: frame.timestamps.clone(),
            origin,
            last,
            span_days,
            residual_std,
            z,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A [`SeasonalTrend`] fit on one training frame.
#[derive(Debug, Clone)]
pub struct TrainedSeasonalTrend {
    model: SeasonalTrend,
    coefficients: Vec<f64>,
    train_timestamps: Vec<NaiveDate>,
    origin: NaiveDate,
    last: NaiveDate,
    span_days: f64,
    residual_std: f64,
    z: f64,
}

impl TrainedSeasonalTrend {
    fn value_at(&self, date: NaiveDate) -> f64 {
        let t = (date - self.origin).num_days() as f64;
        let row = self.model.feature_row(t, self.span_days);
        row.iter().zip(&self.coefficients).map(|(x, b)| x * b).sum()
    }
}

impl TrainedModel for TrainedSeasonalTrend {
    fn predict(&self, horizon_days: i64) -> Result<Forecast> {
        if horizon_days <= 0 {
            return Err(ForecastError::InvalidHorizon(horizon_days));
        }

        let future_len = horizon_days as usize;
        let total = self.train_timestamps.len() + future_len;
        let mut timestamps = Vec::with_capacity(total);
        timestamps.extend_from_slice(&self.train_timestamps);
        for step in 1..=horizon_days {
            let date = self
                .last
                .checked_add_days(Days::new(step as u64))
                .ok_or(ForecastError::InvalidHorizon(horizon_days))?;
            timestamps.push(date);
        }

        let mut predicted = Vec::with_capacity(total);
        let mut lower = Vec::with_capacity(total);
        let mut upper = Vec::with_capacity(total);
        for &date in &timestamps {
            let yhat = self.value_at(date);
            let steps_ahead = (date - self.last).num_days().max(0) as f64;
            let se = self.residual_std * (1.0 + steps_ahead).sqrt();
            predicted.push(yhat);
            lower.push(yhat - self.z * se);
            upper.push(yhat + self.z * se);
        }

        Ok(Forecast {
            timestamps,
            predicted,
            lower,
            upper,
            confidence_level: self.model.confidence_level,
        })
    }
}

/// Solve `a x = b` for symmetric positive definite `a`.
fn cholesky_solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    // Decompose a = L L' in the lower triangle
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= a[i][k] * a[j][k];
            }
            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                a[i][j] = sum.sqrt();
            } else {
                a[i][j] = sum / a[j][j];
            }
        }
    }

    // Forward solve L y = b
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= a[i][k] * b[k];
        }
        b[i] = sum / a[i][i];
    }

    // Back solve L' x = y
    for i in (0..n).rev() {
        let mut sum = b[i];
        for k in i + 1..n {
            sum -= a[k][i] * b[k];
        }
        b[i] = sum / a[i][i];
    }

    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn frame_from_fn(days: usize, f: impl Fn(f64) -> f64) -> TrainingFrame {
        let origin = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let timestamps: Vec<NaiveDate> = (0..days)
            .map(|d| origin.checked_add_days(Days::new(d as u64)).unwrap())
            .collect();
        let values = (0..days).map(|d| f(d as f64)).collect();
        TrainingFrame { timestamps, values }
    }

    #[test]
    fn recovers_a_linear_trend() {
        let frame = frame_from_fn(50, |t| 50.0 + 0.5 * t);
        let model = SeasonalTrend::with_orders(0, 0, 0.8).unwrap();
        let trained = model.fit(&frame).unwrap();

        // Extrapolation stays on the line
        let forecast = trained.predict(30).unwrap();
        let last_idx = forecast.len() - 1;
        assert_approx_eq!(forecast.predicted[last_idx], 50.0 + 0.5 * 79.0, 1e-6);
    }

    #[test]
    fn recovers_trend_plus_weekly_cycle() {
        let weekly = std::f64::consts::TAU / 7.0;
        let frame = frame_from_fn(140, |t| 100.0 + 0.1 * t + 3.0 * (weekly * t).sin());
        let model = SeasonalTrend::with_orders(0, 2, 0.8).unwrap();
        let trained = model.fit(&frame).unwrap();

        let forecast = trained.predict(14).unwrap();
        for step in 1..=14_usize {
            let t = 139.0 + step as f64;
            let expected = 100.0 + 0.1 * t + 3.0 * (weekly * t).sin();
            assert_approx_eq!(forecast.predicted[139 + step], expected, 1e-3);
        }
    }

    #[test]
    fn cholesky_solves_a_known_system() {
        // [4 2; 2 3] x = [10 9] -> x = [1.5, 2]
        let a = vec![vec![4.0, 2.0], vec![2.0, 3.0]];
        let x = cholesky_solve(a, vec![10.0, 9.0]).unwrap();
        assert_approx_eq!(x[0], 1.5, 1e-12);
        assert_approx_eq!(x[1], 2.0, 1e-12);
    }

    #[test]
    fn cholesky_rejects_indefinite_matrix() {
        let a = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        assert!(cholesky_solve(a, vec![1.0, 1.0]).is_none());
    }

    #[test]
    fn too_few_observations_is_an_error() {
        let frame = frame_from_fn(5, |t| t);
        let err = SeasonalTrend::new().fit(&frame).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData { .. }));
    }

    #[test]
    fn zero_horizon_is_an_error() {
        let frame = frame_from_fn(100, |t| 10.0 + t);
        let trained = SeasonalTrend::new().fit(&frame).unwrap();
        assert!(matches!(
            trained.predict(0),
            Err(ForecastError::InvalidHorizon(0))
        ));
    }

    #[test]
    fn bounds_bracket_the_point_forecast() {
        let frame = frame_from_fn(150, |t| 100.0 + 0.2 * t + (t * 0.7).sin());
        let trained = SeasonalTrend::new().fit(&frame).unwrap();
        let forecast = trained.predict(60).unwrap();

        for i in 0..forecast.len() {
            assert!(forecast.lower[i] <= forecast.predicted[i]);
            assert!(forecast.predicted[i] <= forecast.upper[i]);
        }
    }

    #[test]
    fn intervals_widen_into_the_future() {
        let frame = frame_from_fn(150, |t| 100.0 + 0.2 * t + (t * 0.7).sin());
        let trained = SeasonalTrend::new().fit(&frame).unwrap();
        let forecast = trained.predict(90).unwrap();

        let first_future = forecast.len() - 90;
        let early = forecast.upper[first_future] - forecast.lower[first_future];
        let late = forecast.upper[forecast.len() - 1] - forecast.lower[forecast.len() - 1];
        assert!(late > early);
    }

    #[test]
    fn invalid_confidence_level_is_rejected() {
        assert!(SeasonalTrend::with_orders(3, 2, 1.5).is_err());
        assert!(SeasonalTrend::with_orders(3, 2, 0.0).is_err());
    }
}
