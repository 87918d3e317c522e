use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};

use stockcast::forecast::{ForecastError, ForecastModel, SeasonalTrend, TrainedModel};
use stockcast::TrainingFrame;

fn frame_from_fn(days: usize, f: impl Fn(f64) -> f64) -> TrainingFrame {
    let origin = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    TrainingFrame {
        timestamps: (0..days)
            .map(|d| origin.checked_add_days(Days::new(d as u64)).unwrap())
            .collect(),
        values: (0..days).map(|d| f(d as f64)).collect(),
    }
}

#[test]
fn default_model_recovers_trend_and_weekly_cycle() {
    let weekly = std::f64::consts::TAU / 7.0;
    let f = |t: f64| 100.0 + 0.2 * t + 5.0 * (weekly * t).sin();
    let frame = frame_from_fn(1_100, f);

    let trained = SeasonalTrend::new().fit(&frame).unwrap();
    let forecast = trained.predict(90).unwrap();

    for step in [1_usize, 30, 60, 90] {
        let t = 1_099.0 + step as f64;
        assert_approx_eq!(forecast.predicted[1_099 + step], f(t), 1e-3);
    }
}

#[test]
fn refit_is_deterministic() {
    let frame = frame_from_fn(400, |t| 50.0 + 0.3 * t + (t * 0.41).sin());

    let first = SeasonalTrend::new().fit(&frame).unwrap().predict(120).unwrap();
    let second = SeasonalTrend::new().fit(&frame).unwrap().predict(120).unwrap();

    assert_eq!(first, second);
}

#[test]
fn forecast_covers_history_plus_horizon_with_daily_steps() {
    let frame = frame_from_fn(200, |t| 10.0 + t);
    let trained = SeasonalTrend::new().fit(&frame).unwrap();
    let forecast = trained.predict(30).unwrap();

    assert_eq!(forecast.len(), 230);
    assert_eq!(&forecast.timestamps[..200], &frame.timestamps[..]);

    // Future stretch is consecutive calendar days
    for w in forecast.timestamps[199..].windows(2) {
        assert_eq!((w[1] - w[0]).num_days(), 1);
    }
}

#[test]
fn bounds_bracket_and_widen() {
    let frame = frame_from_fn(500, |t| 80.0 + 0.1 * t + (t * 0.77).sin() * 2.0);
    let trained = SeasonalTrend::new().fit(&frame).unwrap();
    let forecast = trained.predict(365).unwrap();

    for i in 0..forecast.len() {
        assert!(forecast.lower[i] <= forecast.predicted[i]);
        assert!(forecast.predicted[i] <= forecast.upper[i]);
    }

    let width = |i: usize| forecast.upper[i] - forecast.lower[i];
    let first_future = forecast.len() - 365;
    assert!(width(forecast.len() - 1) > width(first_future));
}

#[test]
fn too_short_frame_is_rejected() {
    let frame = frame_from_fn(8, |t| t);
    match SeasonalTrend::new().fit(&frame) {
        Err(ForecastError::InsufficientData { got, .. }) => assert_eq!(got, 8),
        other => panic!("expected InsufficientData, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn non_positive_horizon_is_rejected() {
    let frame = frame_from_fn(100, |t| 5.0 + t);
    let trained = SeasonalTrend::new().fit(&frame).unwrap();

    assert!(matches!(
        trained.predict(0),
        Err(ForecastError::InvalidHorizon(0))
    ));
    assert!(matches!(
        trained.predict(-10),
        Err(ForecastError::InvalidHorizon(-10))
    ));
}
