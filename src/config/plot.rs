/// Geometry and styling knobs for the two charts.
pub struct PlotConfig {
    pub history_height: f32,
    pub forecast_height: f32,
    pub line_width: f32,
    pub observed_radius: f32,
    /// Opacity multiplier for the uncertainty band fill
    pub band_opacity_pct: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    history_height: 300.0,
    forecast_height: 320.0,
    line_width: 1.5,
    observed_radius: 1.2,
    band_opacity_pct: 0.25,
};
