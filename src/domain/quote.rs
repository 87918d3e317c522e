use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV record as returned by the market data provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyQuote {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        DailyQuote {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
