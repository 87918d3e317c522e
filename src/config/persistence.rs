//! File persistence and serialization configuration

/// Configuration for downloaded quote persistence
pub struct QuotePersistenceConfig {
    /// Directory path for storing downloaded quote series
    pub directory: &'static str,
    /// Base filename for quote cache files (without extension)
    pub filename_base: &'static str,
    /// Current version of the quote cache serialization format
    pub version: f64,
    /// A cached series older than this is re-downloaded
    pub max_age_secs: i64,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub quotes: QuotePersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    quotes: QuotePersistenceConfig {
        directory: "quote_data",
        filename_base: "quotes",
        // Daily bars only change once a trading day
        max_age_secs: 24 * 60 * 60,
        version: 1.0,
    },
    app: AppPersistenceConfig {
        state_path: ".stockcast_state.json",
    },
};

/// Generate symbol-specific cache filename
/// Example: "quotes_AAPL_v1.bin"
pub fn quote_cache_filename(symbol: &str) -> String {
    format!(
        "{}_{}_v{}.bin",
        PERSISTENCE.quotes.filename_base, symbol, PERSISTENCE.quotes.version
    )
}
