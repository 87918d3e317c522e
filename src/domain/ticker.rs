use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The fixed set of securities offered by the selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Ticker {
    #[default]
    Aapl,
    Tsla,
    Amzn,
    Nvda,
}

impl Ticker {
    /// Exchange symbol as the data provider expects it.
    pub const fn symbol(self) -> &'static str {
        match self {
            Ticker::Aapl => "AAPL",
            Ticker::Tsla => "TSLA",
            Ticker::Amzn => "AMZN",
            Ticker::Nvda => "NVDA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn symbols_match_display() {
        for ticker in Ticker::iter() {
            assert_eq!(ticker.symbol(), ticker.to_string());
        }
    }
}
