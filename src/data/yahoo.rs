//! Yahoo Finance chart API client.
//!
//! Fetches daily OHLCV history for one symbol over a date range. Rows with
//! any missing field are skipped; API-level errors (unknown symbol, empty
//! range) surface as [`MarketDataError`].

use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::MARKET;
use crate::domain::DailyQuote;
use crate::utils::epoch_sec_to_date;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected payload: {0}")]
    Parse(String),
    #[error("provider error [{code}]: {description}")]
    Api { code: String, description: String },
    #[error("no data returned")]
    NoData,
}

// Response shape of /v8/finance/chart. Only the fields we read.

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartOutcome,
}

#[derive(Debug, Deserialize)]
struct ChartOutcome {
    result: Option<Vec<ChartData>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

pub struct YahooClient {
    http: reqwest::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Result<Self, MarketDataError> {
        let http = reqwest::Client::builder()
            .user_agent(MARKET.chart.user_agent)
            .timeout(Duration::from_millis(MARKET.chart.timeout_ms))
            .build()
            .map_err(|e| MarketDataError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: MARKET.chart.base_url.to_string(),
        })
    }

    fn endpoint(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let period1 = start.and_hms_opt(0, 0, 0).map_or(0, |t| t.and_utc().timestamp());
        let period2 = end.and_hms_opt(0, 0, 0).map_or(0, |t| t.and_utc().timestamp());
        format!(
            "{}/{}?period1={}&period2={}&interval={}",
            self.base_url, symbol, period1, period2, MARKET.chart.daily_interval
        )
    }

    /// Download daily quotes for `[start, end)`, oldest first.
    pub async fn fetch_daily(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyQuote>, MarketDataError> {
        let url = self.endpoint(symbol, start, end);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::Request(e.to_string()))?;

        parse_chart(&body)
    }
}

fn parse_chart(json: &str) -> Result<Vec<DailyQuote>, MarketDataError> {
    let envelope: ChartEnvelope =
        serde_json::from_str(json).map_err(|e| MarketDataError::Parse(e.to_string()))?;

    if let Some(error) = envelope.chart.error {
        return Err(MarketDataError::Api {
            code: error.code,
            description: error.description,
        });
    }

    let results = envelope.chart.result.ok_or(MarketDataError::NoData)?;
    let data = results.first().ok_or(MarketDataError::NoData)?;
    let block = data.indicators.quote.first().ok_or(MarketDataError::NoData)?;

    let mut quotes = Vec::with_capacity(data.timestamp.len());
    for (i, &ts) in data.timestamp.iter().enumerate() {
        let open = block.open.get(i).copied().flatten();
        let high = block.high.get(i).copied().flatten();
        let low = block.low.get(i).copied().flatten();
        let close = block.close.get(i).copied().flatten();
        let volume = block.volume.get(i).copied().flatten();

        // Half-filled rows (holidays, live bars) are dropped
        if let (Some(date), Some(o), Some(h), Some(l), Some(c), Some(v)) =
            (epoch_sec_to_date(ts), open, high, low, close, volume)
        {
            quotes.push(DailyQuote::new(date, o, h, l, c, v));
        }
    }

    if quotes.is_empty() {
        return Err(MarketDataError::NoData);
    }

    Ok(quotes)
}
