use eframe::egui::{
    CentralPanel, ComboBox, Context, RichText, ScrollArea, Slider, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::app::{App, FetchStatus};
use crate::domain::{HorizonYears, Ticker};
use crate::ui::{UI_CONFIG, UI_TEXT, panels, plot};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading),
                    );
                    ui.add_space(16.0);
                    self.render_status_line(ui);
                });
            });
    }

    fn render_status_line(&self, ui: &mut Ui) {
        // A selection whose download already failed keeps its error visible
        if let Some(message) = self.failed_tickers.get(&self.selected) {
            ui.colored_label(
                UI_CONFIG.colors.error,
                format!("{}: {}", self.selected, message),
            );
            return;
        }
        match &self.status {
            FetchStatus::Idle => {}
            FetchStatus::Loading(ticker) => {
                ui.spinner();
                ui.colored_label(
                    UI_CONFIG.colors.status,
                    format!("{} ({})", UI_TEXT.loading, ticker),
                );
            }
            FetchStatus::Done { ticker, source } => {
                ui.colored_label(
                    UI_CONFIG.colors.status,
                    format!("{} ({} via {})", UI_TEXT.loading_done, ticker, source),
                );
            }
            FetchStatus::Failed { ticker, message } => {
                ui.colored_label(
                    UI_CONFIG.colors.error,
                    format!("{}: {}", ticker, message),
                );
            }
        }
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_controls(ui);
                    ui.add_space(8.0);
                    ui.separator();
                    self.render_history_section(ui);
                    ui.add_space(8.0);
                    ui.separator();
                    self.render_forecast_section(ui);
                });
        });
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ComboBox::from_label(UI_TEXT.ticker_label)
                .selected_text(self.selected.symbol())
                .show_ui(ui, |ui| {
                    for ticker in Ticker::iter() {
                        ui.selectable_value(&mut self.selected, ticker, ticker.symbol());
                    }
                });

            ui.add_space(24.0);

            let mut years = self.horizon.value();
            ui.add(
                Slider::new(&mut years, HorizonYears::MIN..=HorizonYears::MAX)
                    .text(UI_TEXT.horizon_label),
            );
            self.horizon = HorizonYears::new(years);
        });
    }

    fn render_history_section(&mut self, ui: &mut Ui) {
        ui.heading(UI_TEXT.raw_header);
        if let Some(series) = self.selected_series() {
            // An empty series still renders: empty table, empty chart
            panels::quote_tail_table(ui, series);
            ui.add_space(6.0);
            ui.label(RichText::new(UI_TEXT.history_plot_title).strong());
            plot::history_plot(ui, series);
        } else {
            ui.label(UI_TEXT.waiting_for_data);
        }
    }

    fn render_forecast_section(&mut self, ui: &mut Ui) {
        ui.heading(UI_TEXT.forecast_header);
        ui.label(format!(
            "{} {}",
            UI_TEXT.forecast_caption_prefix, self.horizon
        ));

        if let Some(error) = &self.forecast_error {
            ui.colored_label(UI_CONFIG.colors.error, error);
            return;
        }

        match (&self.forecast, self.selected_series()) {
            (Some(forecast), Some(series)) => {
                panels::forecast_tail_table(ui, forecast);
                ui.add_space(6.0);
                plot::forecast_plot(ui, series, forecast);
            }
            _ => {
                ui.label(UI_TEXT.forecast_pending);
            }
        }
    }
}
