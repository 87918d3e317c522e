//! Source chain for a ticker's price history: local cache first, then the
//! network API, unless the launcher asked for the API first. The first
//! source that succeeds wins; an API download refreshes the cache.

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;

use crate::config::history_start;
use crate::data::{YahooClient, read_cached_series, write_cached_series};
use crate::domain::{PriceSeries, Ticker};
use crate::utils::today_utc;

const CACHE_SIGNATURE: &str = "Local Cache";
const API_SIGNATURE: &str = "Yahoo Finance API";

/// Abstract interface for producing a ticker's price history.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    fn signature(&self) -> &'static str;
    async fn load(&self, ticker: Ticker) -> Result<PriceSeries>;
}

struct CacheSource;

#[async_trait]
impl SeriesSource for CacheSource {
    fn signature(&self) -> &'static str {
        CACHE_SIGNATURE
    }

    async fn load(&self, ticker: Ticker) -> Result<PriceSeries> {
        // bincode IO is blocking
        tokio::task::spawn_blocking(move || read_cached_series(ticker.symbol()))
            .await
            .context("Cache read task panicked")?
    }
}

struct ApiSource;

#[async_trait]
impl SeriesSource for ApiSource {
    fn signature(&self) -> &'static str {
        API_SIGNATURE
    }

    async fn load(&self, ticker: Ticker) -> Result<PriceSeries> {
        let client = YahooClient::new()?;
        let quotes = client
            .fetch_daily(ticker.symbol(), history_start(), today_utc())
            .await
            .with_context(|| format!("Download failed for {}", ticker))?;
        Ok(PriceSeries::from_quotes(quotes))
    }
}

/// Load the history for `ticker` covering the fixed start date up to today.
/// Returns the series together with the signature of the source that
/// produced it.
pub async fn fetch_history(ticker: Ticker, prefer_api: bool) -> Result<(PriceSeries, &'static str)> {
    let sources: Vec<Box<dyn SeriesSource>> = if prefer_api {
        vec![Box::new(ApiSource), Box::new(CacheSource)]
    } else {
        vec![Box::new(CacheSource), Box::new(ApiSource)]
    };

    let mut last_err = None;
    for source in &sources {
        match source.load(ticker).await {
            Ok(series) => {
                if source.signature() == API_SIGNATURE {
                    refresh_cache(ticker, &series).await;
                }
                return Ok((series, source.signature()));
            }
            Err(e) => {
                log::warn!("{} failed for {}: {:#}", source.signature(), ticker, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow!("No data source configured")))
        .with_context(|| format!("All data sources failed for {}", ticker))
}

/// Cache write failures are logged, never fatal.
async fn refresh_cache(ticker: Ticker, series: &PriceSeries) {
    let series = series.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        write_cached_series(ticker.symbol(), &series)
    })
    .await;

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("Failed to write cache for {}: {:#}", ticker, e),
        Err(e) => log::warn!("Cache write task panicked for {}: {}", ticker, e),
    }
}
