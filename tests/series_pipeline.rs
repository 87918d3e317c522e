use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use rstest::rstest;

use stockcast::domain::DailyQuote;
use stockcast::forecast::{ForecastModel, SeasonalTrend, TrainedModel};
use stockcast::{HorizonYears, PriceSeries};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn synthetic_quotes(days: u64) -> Vec<DailyQuote> {
    (0..days)
        .map(|d| {
            let close = 100.0 + 0.1 * d as f64;
            DailyQuote::new(day(d), close - 0.5, close + 1.0, close - 1.5, close, 1_000 + d)
        })
        .collect()
}

#[rstest]
#[case(1, 365)]
#[case(2, 730)]
#[case(3, 1095)]
#[case(4, 1460)]
#[case(5, 1825)]
fn horizon_days_is_years_times_365(#[case] years: u8, #[case] expected_days: i64) {
    assert_eq!(HorizonYears::new(years).days(), expected_days);
}

#[test]
fn preparation_keeps_rows_and_columns() {
    let quotes = synthetic_quotes(30);
    let series = PriceSeries::from_quotes(quotes.clone());

    assert_eq!(series.len(), quotes.len());
    assert_eq!(series.dates, quotes.iter().map(|q| q.date).collect::<Vec<_>>());
    assert_eq!(series.closes, quotes.iter().map(|q| q.close).collect::<Vec<_>>());
    assert_eq!(series.opens, quotes.iter().map(|q| q.open).collect::<Vec<_>>());
}

#[test]
fn preparation_is_idempotent() {
    let series = PriceSeries::from_quotes(synthetic_quotes(60));
    let rows: Vec<DailyQuote> = series.tail(series.len()).collect();
    let again = PriceSeries::from_quotes(rows);

    assert_eq!(again, series);
}

#[test]
fn preparation_orders_shuffled_input() {
    let mut quotes = synthetic_quotes(40);
    quotes.reverse();
    let series = PriceSeries::from_quotes(quotes);

    assert!(series.dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(series.len(), 40);
}

#[test]
fn training_frame_has_two_columns_and_all_rows() {
    let series = PriceSeries::from_quotes(synthetic_quotes(25));
    let frame = series.training_frame();

    assert_eq!(frame.len(), 25);
    assert_eq!(frame.timestamps, series.dates);
    assert_eq!(frame.values, series.closes);
}

#[test]
fn empty_provider_result_degrades_gracefully() {
    let series = PriceSeries::from_quotes(Vec::new());

    assert_eq!(series.len(), 0);
    assert_eq!(series.tail(5).count(), 0);
    let frame = series.training_frame();
    assert!(frame.is_empty());

    // The engine rejects the empty frame instead of panicking
    assert!(SeasonalTrend::new().fit(&frame).is_err());
}

#[test]
fn one_year_scenario_forecasts_past_the_series_end() {
    // Roughly three years of history, one year of horizon
    let series = PriceSeries::from_quotes(synthetic_quotes(1_100));
    let frame = series.training_frame();
    let horizon = HorizonYears::new(1);

    let trained = SeasonalTrend::new().fit(&frame).unwrap();
    let forecast = trained.predict(horizon.days()).unwrap();

    assert_eq!(forecast.len(), frame.len() + 365);

    let last_observed = series.last_date().unwrap();
    let tail: Vec<_> = forecast.tail(5).collect();
    assert_eq!(tail.len(), 5);
    assert!(tail.iter().all(|row| row.date > last_observed));
}
