// src/app/state.rs

use anyhow::Result;

use crate::domain::{PriceSeries, Ticker};

/// What the status line reports about the data layer.
#[derive(Debug, Clone, Default)]
pub(crate) enum FetchStatus {
    #[default]
    Idle,
    Loading(Ticker),
    Done {
        ticker: Ticker,
        source: &'static str,
    },
    Failed {
        ticker: Ticker,
        message: String,
    },
}

/// Outcome of one background download, delivered over the channel.
pub(crate) struct FetchEvent {
    pub(crate) ticker: Ticker,
    pub(crate) outcome: Result<(PriceSeries, &'static str)>,
}
