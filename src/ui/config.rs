use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub status: Color32,
    pub error: Color32,

    pub open_line: Color32,
    pub close_line: Color32,
    pub observed: Color32,
    pub predicted_line: Color32,
    pub band_fill: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::from_rgb(255, 200, 80),
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(28, 28, 36),
        status: Color32::GRAY,
        error: Color32::from_rgb(255, 100, 100),

        open_line: Color32::from_rgb(100, 160, 255),
        close_line: Color32::from_rgb(255, 160, 60),
        observed: Color32::from_rgb(160, 160, 170),
        predicted_line: Color32::from_rgb(80, 180, 255),
        band_fill: Color32::from_rgb(80, 180, 255),
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }
}

/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub ticker_label: &'static str,
    pub horizon_label: &'static str,
    pub loading: &'static str,
    pub loading_done: &'static str,
    pub waiting_for_data: &'static str,
    pub raw_header: &'static str,
    pub forecast_header: &'static str,
    pub forecast_caption_prefix: &'static str,
    pub forecast_pending: &'static str,
    pub history_plot_title: &'static str,

    pub open_series: &'static str,
    pub close_series: &'static str,
    pub observed_series: &'static str,
    pub predicted_series: &'static str,
    pub band_series: &'static str,

    pub header_date: &'static str,
    pub header_open: &'static str,
    pub header_high: &'static str,
    pub header_low: &'static str,
    pub header_close: &'static str,
    pub header_volume: &'static str,
    pub header_predicted: &'static str,
    pub header_lower: &'static str,
    pub header_upper: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Stock Forecast",
    ticker_label: "Select stock for prediction",
    horizon_label: "Prediction horizon (years)",
    loading: "Loading data...",
    loading_done: "Loading data... done!",
    waiting_for_data: "No data yet.",
    raw_header: "Raw Data",
    forecast_header: "Forecast Data",
    forecast_caption_prefix: "Forecast for the next",
    forecast_pending: "No forecast available.",
    history_plot_title: "Time Series Data",

    open_series: "Opening Price",
    close_series: "Closing Price",
    observed_series: "Observed",
    predicted_series: "Predicted",
    band_series: "Uncertainty",

    header_date: "Date",
    header_open: "Open",
    header_high: "High",
    header_low: "Low",
    header_close: "Close",
    header_volume: "Volume",
    header_predicted: "Forecast",
    header_lower: "Lower",
    header_upper: "Upper",
};
