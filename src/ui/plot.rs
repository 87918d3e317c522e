use chrono::NaiveDate;
use eframe::egui::{Stroke, Ui};
use egui_plot::{Axis, AxisHints, Legend, Line, Plot, PlotPoints, Points, Polygon};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::PriceSeries;
use crate::forecast::Forecast;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{date_from_epoch_days, epoch_days, format_date};

// Helper to build a Date axis: plot x is days since the Unix epoch
fn date_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.header_date)
        .formatter(|mark, _range| {
            date_from_epoch_days(mark.value.round() as i64)
                .map(format_date)
                .unwrap_or_default()
        })
}

fn pair_points(dates: &[NaiveDate], values: &[f64]) -> Vec<[f64; 2]> {
    dates
        .iter()
        .zip(values)
        .map(|(&date, &value)| [epoch_days(date) as f64, value])
        .collect()
}

/// Historical open/close chart. Zoom, pan and double-click reset stand in
/// for a range selector.
pub(crate) fn history_plot(ui: &mut Ui, series: &PriceSeries) {
    let open_pts = pair_points(&series.dates, &series.opens);
    let close_pts = pair_points(&series.dates, &series.closes);

    Plot::new("history_plot")
        .height(PLOT_CONFIG.history_height)
        .legend(Legend::default())
        .custom_x_axes(vec![date_axis()])
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(UI_TEXT.open_series, PlotPoints::new(open_pts))
                    .color(UI_CONFIG.colors.open_line)
                    .width(PLOT_CONFIG.line_width),
            );
            plot_ui.line(
                Line::new(UI_TEXT.close_series, PlotPoints::new(close_pts))
                    .color(UI_CONFIG.colors.close_line)
                    .width(PLOT_CONFIG.line_width),
            );
        });
}

/// Composite forecast chart: observed closes, the predicted line, and the
/// shaded uncertainty band underneath it.
pub(crate) fn forecast_plot(ui: &mut Ui, series: &PriceSeries, forecast: &Forecast) {
    let observed = pair_points(&series.dates, &series.closes);
    let predicted = pair_points(&forecast.timestamps, &forecast.predicted);

    // Upper bound forward, lower bound back: one closed band polygon
    let n = forecast.len();
    let mut band = Vec::with_capacity(2 * n);
    for i in 0..n {
        band.push([epoch_days(forecast.timestamps[i]) as f64, forecast.upper[i]]);
    }
    for i in (0..n).rev() {
        band.push([epoch_days(forecast.timestamps[i]) as f64, forecast.lower[i]]);
    }

    Plot::new("forecast_plot")
        .height(PLOT_CONFIG.forecast_height)
        .legend(Legend::default())
        .custom_x_axes(vec![date_axis()])
        .show(ui, |plot_ui| {
            plot_ui.polygon(
                Polygon::new(UI_TEXT.band_series, PlotPoints::new(band))
                    .fill_color(
                        UI_CONFIG
                            .colors
                            .band_fill
                            .linear_multiply(PLOT_CONFIG.band_opacity_pct),
                    )
                    .stroke(Stroke::NONE),
            );
            plot_ui.line(
                Line::new(UI_TEXT.predicted_series, PlotPoints::new(predicted))
                    .color(UI_CONFIG.colors.predicted_line)
                    .width(PLOT_CONFIG.line_width),
            );
            plot_ui.points(
                Points::new(UI_TEXT.observed_series, PlotPoints::new(observed))
                    .color(UI_CONFIG.colors.observed)
                    .radius(PLOT_CONFIG.observed_radius),
            );
        });
}
