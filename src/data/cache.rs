//! Binary on-disk cache for downloaded quote series.
//!
//! One versioned bincode file per symbol. A stale or mismatched file is
//! reported as an error and the caller falls through to the API.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::{PERSISTENCE, quote_cache_filename};
use crate::domain::PriceSeries;
use crate::utils::{how_many_seconds_ago, now_timestamp_ms};

/// Binary cache file wrapper with metadata
#[derive(Serialize, Deserialize, Debug)]
struct QuoteCacheFile {
    version: f64,
    fetched_at_ms: i64,
    symbol: String,
    series: PriceSeries,
}

pub(crate) fn read_cached_series(symbol: &str) -> Result<PriceSeries> {
    read_series_from(
        Path::new(PERSISTENCE.quotes.directory),
        symbol,
        PERSISTENCE.quotes.max_age_secs,
    )
}

pub(crate) fn write_cached_series(symbol: &str, series: &PriceSeries) -> Result<()> {
    write_series_to(Path::new(PERSISTENCE.quotes.directory), symbol, series)
}

fn read_series_from(dir: &Path, symbol: &str, max_age_secs: i64) -> Result<PriceSeries> {
    let full_path = dir.join(quote_cache_filename(symbol));

    let file =
        File::open(&full_path).with_context(|| format!("Failed to open file: {:?}", full_path))?;
    let reader = BufReader::new(file);

    let cache: QuoteCacheFile = bincode::deserialize_from(reader)
        .with_context(|| format!("Failed to deserialize cache from: {:?}", full_path))?;

    if cache.version != PERSISTENCE.quotes.version {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            PERSISTENCE.quotes.version
        );
    }

    if cache.symbol != symbol {
        bail!(
            "Cache symbol mismatch: file has {}, expected {}",
            cache.symbol,
            symbol
        );
    }

    let seconds_ago = how_many_seconds_ago(cache.fetched_at_ms);
    if seconds_ago > max_age_secs {
        bail!(
            "Cache too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            max_age_secs
        );
    }

    log::info!(
        "Cache hit for {}: {} rows, {}s old",
        symbol,
        cache.series.len(),
        seconds_ago
    );

    Ok(cache.series)
}

// Helper function to create a new file and any missing parent directories.
fn create_file_with_parents(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))
}

fn write_series_to(dir: &Path, symbol: &str, series: &PriceSeries) -> Result<()> {
    let full_path: PathBuf = dir.join(quote_cache_filename(symbol));

    let file = create_file_with_parents(&full_path)?;
    let writer = BufWriter::new(file);

    let cache = QuoteCacheFile {
        version: PERSISTENCE.quotes.version,
        fetched_at_ms: now_timestamp_ms(),
        symbol: symbol.to_string(),
        series: series.clone(),
    };

    bincode::serialize_into(writer, &cache)
        .with_context(|| format!("Failed to serialize cache to: {}", full_path.display()))?;

    log::info!("Cache written: {:?} ({} rows)", full_path, series.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DailyQuote;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_series() -> PriceSeries {
        PriceSeries::from_quotes(vec![
            DailyQuote::new(
                NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                100.0,
                105.0,
                99.0,
                104.0,
                10_000,
            ),
            DailyQuote::new(
                NaiveDate::from_ymd_opt(2020, 1, 3).unwrap(),
                104.0,
                108.0,
                103.0,
                107.0,
                12_000,
            ),
        ])
    }

    #[test]
    fn round_trip_preserves_series() {
        let dir = tempfile::tempdir().unwrap();
        let series = sample_series();

        write_series_to(dir.path(), "AAPL", &series).unwrap();
        let restored = read_series_from(dir.path(), "AAPL", 60).unwrap();

        assert_eq!(restored, series);
    }

    #[test]
    fn stale_cache_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_series_to(dir.path(), "AAPL", &sample_series()).unwrap();

        // A negative budget makes any file stale
        let err = read_series_from(dir.path(), "AAPL", -1).unwrap_err();
        assert!(err.to_string().contains("too old"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_series_from(dir.path(), "TSLA", 60).is_err());
    }

    #[test]
    fn symbol_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_series_to(dir.path(), "AAPL", &sample_series()).unwrap();

        // Same payload renamed on disk to another symbol's slot
        fs::rename(
            dir.path().join(quote_cache_filename("AAPL")),
            dir.path().join(quote_cache_filename("NVDA")),
        )
        .unwrap();

        let err = read_series_from(dir.path(), "NVDA", 60).unwrap_err();
        assert!(err.to_string().contains("symbol mismatch"));
    }
}
