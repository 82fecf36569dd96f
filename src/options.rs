//! Options recognized by the figure assembler.

use std::collections::HashMap;

use plotly::Plot;

/// Configuration for [`plot_forecast`](crate::plot_forecast).
///
/// `Default` matches the conventional forecast plot: uncertainty band and
/// capacity lines on, `ds`/`y` axis labels, 800x600 pixels, legend hidden.
pub struct PlotOptions {
    /// Existing figure to extend. A new figure is created when `None`.
    pub fig: Option<Plot>,
    /// Include the uncertainty band when the model has posterior samples.
    pub uncertainty: bool,
    /// Include capacity/floor lines when the forecast frame carries them.
    pub plot_cap: bool,
    /// X axis label.
    pub xlabel: String,
    /// Y axis label.
    pub ylabel: String,
    /// Figure width in pixels.
    pub width: usize,
    /// Figure height in pixels.
    pub height: usize,
    /// Show a horizontal legend above the plot area.
    pub include_legend: bool,
    /// Partial palette override, role name to color value.
    pub colors: Option<HashMap<String, String>>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotOptions {
    /// The conventional defaults described above.
    pub fn new() -> Self {
        Self {
            fig: None,
            uncertainty: true,
            plot_cap: true,
            xlabel: "ds".to_string(),
            ylabel: "y".to_string(),
            width: 800,
            height: 600,
            include_legend: false,
            colors: None,
        }
    }

    /// Extend an existing figure instead of creating a new one.
    pub fn with_figure(mut self, fig: Plot) -> Self {
        self.fig = Some(fig);
        self
    }

    /// Toggle the uncertainty band.
    pub fn with_uncertainty(mut self, uncertainty: bool) -> Self {
        self.uncertainty = uncertainty;
        self
    }

    /// Toggle the capacity/floor lines.
    pub fn with_plot_cap(mut self, plot_cap: bool) -> Self {
        self.plot_cap = plot_cap;
        self
    }

    /// Set both axis labels.
    pub fn with_labels(mut self, xlabel: &str, ylabel: &str) -> Self {
        self.xlabel = xlabel.to_string();
        self.ylabel = ylabel.to_string();
        self
    }

    /// Set the figure dimensions in pixels.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Toggle the legend.
    pub fn with_legend(mut self, include_legend: bool) -> Self {
        self.include_legend = include_legend;
        self
    }

    /// Override palette roles, key by key.
    pub fn with_colors(mut self, colors: HashMap<String, String>) -> Self {
        self.colors = Some(colors);
        self
    }
}
