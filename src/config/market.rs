use chrono::NaiveDate;

/// REST constraints for the Yahoo Finance chart endpoint.
pub struct ChartEndpointConfig {
    pub base_url: &'static str,
    /// The endpoint rejects requests without a browser-like agent.
    pub user_agent: &'static str,
    pub daily_interval: &'static str,
    pub timeout_ms: u64,
}

pub struct MarketApiConfig {
    pub chart: ChartEndpointConfig,
}

pub const MARKET: MarketApiConfig = MarketApiConfig {
    chart: ChartEndpointConfig {
        base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        daily_interval: "1d",
        timeout_ms: 10_000,
    },
};

/// History is always requested from this date up to today.
const HISTORY_START_YMD: (i32, u32, u32) = (2020, 1, 1);

pub fn history_start() -> NaiveDate {
    let (y, m, d) = HISTORY_START_YMD;
    NaiveDate::from_ymd_opt(y, m, d).expect("history start is a valid date")
}
