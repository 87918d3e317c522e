use eframe::egui::{Grid, RichText, Ui};

use crate::config::TABLE_TAIL_ROWS;
use crate::domain::PriceSeries;
use crate::forecast::Forecast;
use crate::ui::UI_TEXT;
use crate::utils::format_date;

/// Tail of the normalized series, date column first.
pub(crate) fn quote_tail_table(ui: &mut Ui, series: &PriceSeries) {
    Grid::new("raw_tail_grid")
        .striped(true)
        .num_columns(6)
        .show(ui, |ui| {
            for header in [
                UI_TEXT.header_date,
                UI_TEXT.header_open,
                UI_TEXT.header_high,
                UI_TEXT.header_low,
                UI_TEXT.header_close,
                UI_TEXT.header_volume,
            ] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for row in series.tail(TABLE_TAIL_ROWS) {
                ui.label(format_date(row.date));
                ui.label(format!("{:.2}", row.open));
                ui.label(format!("{:.2}", row.high));
                ui.label(format!("{:.2}", row.low));
                ui.label(format!("{:.2}", row.close));
                ui.label(row.volume.to_string());
                ui.end_row();
            }
        });
}

/// Tail of the forecast: point prediction plus interval bounds.
pub(crate) fn forecast_tail_table(ui: &mut Ui, forecast: &Forecast) {
    Grid::new("forecast_tail_grid")
        .striped(true)
        .num_columns(4)
        .show(ui, |ui| {
            for header in [
                UI_TEXT.header_date,
                UI_TEXT.header_predicted,
                UI_TEXT.header_lower,
                UI_TEXT.header_upper,
            ] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for row in forecast.tail(TABLE_TAIL_ROWS) {
                ui.label(format_date(row.date));
                ui.label(format!("{:.2}", row.predicted));
                ui.label(format!("{:.2}", row.lower));
                ui.label(format!("{:.2}", row.upper));
                ui.end_row();
            }
        });
}
