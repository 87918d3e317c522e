use chrono::NaiveDate;
use itertools::izip;
use serde::{Deserialize, Serialize};

use crate::domain::DailyQuote;

/// Column-oriented daily price history for one ticker.
///
/// Built by [`PriceSeries::from_quotes`], which is the normalization step
/// between the provider's raw rows and everything downstream: dates end up
/// unique and strictly ascending, and the date column is explicit.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PriceSeries {
    pub dates: Vec<NaiveDate>,
    pub opens: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
    pub volumes: Vec<u64>,
}

impl PriceSeries {
    /// Normalize raw provider rows into a series.
    ///
    /// Rows are sorted by date; on duplicate dates the first occurrence
    /// wins. Empty input yields an empty series.
    pub fn from_quotes(mut quotes: Vec<DailyQuote>) -> Self {
        quotes.sort_by_key(|q| q.date);
        quotes.dedup_by_key(|q| q.date);

        let len = quotes.len();
        let mut dates = Vec::with_capacity(len);
        let mut opens = Vec::with_capacity(len);
        let mut highs = Vec::with_capacity(len);
        let mut lows = Vec::with_capacity(len);
        let mut closes = Vec::with_capacity(len);
        let mut volumes = Vec::with_capacity(len);

        for q in quotes {
            dates.push(q.date);
            opens.push(q.open);
            highs.push(q.high);
            lows.push(q.low);
            closes.push(q.close);
            volumes.push(q.volume);
        }

        Self {
            dates,
            opens,
            highs,
            lows,
            closes,
            volumes,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Row view over the last `n` records, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = DailyQuote> + '_ {
        let start = self.len().saturating_sub(n);
        izip!(
            &self.dates[start..],
            &self.opens[start..],
            &self.highs[start..],
            &self.lows[start..],
            &self.closes[start..],
            &self.volumes[start..],
        )
        .map(|(&date, &open, &high, &low, &close, &volume)| {
            DailyQuote::new(date, open, high, low, close, volume)
        })
    }

    /// Project the series to the two columns the forecast engine trains on.
    pub fn training_frame(&self) -> TrainingFrame {
        TrainingFrame {
            timestamps: self.dates.clone(),
            values: self.closes.clone(),
        }
    }
}

/// The (timestamp, value) pair of columns a forecast model is fit on.
/// Derived from a [`PriceSeries`]; recomputed every run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrainingFrame {
    pub timestamps: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl TrainingFrame {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn last_timestamp(&self) -> Option<NaiveDate> {
        self.timestamps.last().copied()
    }
}
