use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        collections::HashMap,
        sync::mpsc::{self, Receiver, Sender},
        thread,
    },
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{FetchEvent, FetchStatus},
    data::fetch_history,
    domain::{HorizonYears, PriceSeries, Ticker},
    forecast::{Forecast, ForecastModel, SeasonalTrend, TrainedModel},
    ui::UI_CONFIG,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Selection persists across sessions; everything else is recomputed.
    pub(crate) selected: Ticker,
    pub(crate) horizon: HorizonYears,
    #[serde(skip)]
    pub(crate) series_by_ticker: HashMap<Ticker, PriceSeries>,
    #[serde(skip)]
    pub(crate) failed_tickers: HashMap<Ticker, String>,
    #[serde(skip)]
    pub(crate) status: FetchStatus,
    #[serde(skip)]
    pub(crate) forecast: Option<Forecast>,
    #[serde(skip)]
    pub(crate) forecast_error: Option<String>,
    #[serde(skip)]
    forecast_key: Option<(Ticker, HorizonYears)>,
    #[serde(skip)]
    in_flight: Option<Ticker>,
    #[serde(skip)]
    prefer_api: bool,
    #[serde(skip)]
    data_tx: Option<Sender<FetchEvent>>,
    #[serde(skip)]
    data_rx: Option<Receiver<FetchEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected: Ticker::default(),
            horizon: HorizonYears::default(),
            series_by_ticker: HashMap::new(),
            failed_tickers: HashMap::new(),
            status: FetchStatus::Idle,
            forecast: None,
            forecast_error: None,
            forecast_key: None,
            in_flight: None,
            prefer_api: false,
            data_tx: None,
            data_rx: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let (data_tx, data_rx) = mpsc::channel();
        app.data_tx = Some(data_tx);
        app.data_rx = Some(data_rx);
        app.prefer_api = args.prefer_api;
        app
    }

    /// Series held for the current selection, if it has arrived.
    pub(crate) fn selected_series(&self) -> Option<&PriceSeries> {
        self.series_by_ticker.get(&self.selected)
    }

    fn drain_fetch_events(&mut self) {
        let Some(rx) = &self.data_rx else { return };

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }

        for event in events {
            if self.in_flight == Some(event.ticker) {
                self.in_flight = None;
            }
            match event.outcome {
                Ok((series, source)) => {
                    log::info!(
                        "Loaded {} rows for {} via {}",
                        series.len(),
                        event.ticker,
                        source
                    );
                    self.series_by_ticker.insert(event.ticker, series);
                    self.status = FetchStatus::Done {
                        ticker: event.ticker,
                        source,
                    };
                }
                Err(e) => {
                    let message = format!("{:#}", e);
                    log::error!("Download failed for {}: {}", event.ticker, message);
                    self.failed_tickers.insert(event.ticker, message.clone());
                    self.status = FetchStatus::Failed {
                        ticker: event.ticker,
                        message,
                    };
                }
            }
        }
    }

    /// Kick off a background download for the selection if it is neither
    /// held, failed, nor already in flight. One download at a time.
    fn ensure_series(&mut self, ctx: &Context) {
        let ticker = self.selected;
        if self.series_by_ticker.contains_key(&ticker)
            || self.failed_tickers.contains_key(&ticker)
            || self.in_flight.is_some()
        {
            return;
        }

        let Some(tx) = self.data_tx.clone() else {
            return;
        };

        self.in_flight = Some(ticker);
        self.status = FetchStatus::Loading(ticker);

        let prefer_api = self.prefer_api;
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let outcome = rt.block_on(fetch_history(ticker, prefer_api));
            let _ = tx.send(FetchEvent { ticker, outcome });
        });

        ctx.request_repaint();
    }

    /// Refit when the series or the horizon changed. A fresh model is fit
    /// from scratch every run; no model state survives between runs.
    fn ensure_forecast(&mut self) {
        let key = (self.selected, self.horizon);
        if self.forecast_key == Some(key) {
            return;
        }
        let Some(series) = self.series_by_ticker.get(&self.selected) else {
            return;
        };

        self.forecast_key = Some(key);
        self.forecast = None;
        self.forecast_error = None;

        // Empty series: every downstream surface renders its empty state
        if series.is_empty() {
            return;
        }

        let frame = series.training_frame();
        let model = SeasonalTrend::new();
        match model
            .fit(&frame)
            .and_then(|trained| trained.predict(self.horizon.days()))
        {
            Ok(forecast) => self.forecast = Some(forecast),
            Err(e) => {
                log::warn!("Forecast failed for {}: {}", self.selected, e);
                self.forecast_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.drain_fetch_events();
        self.ensure_series(ctx);
        self.ensure_forecast();

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);

        // A download in flight means new state is coming without input
        if self.in_flight.is_some() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
