//! Plotly figure assembly for time-series forecast output.
//!
//! A thin visualization adapter: given a forecast frame (Polars
//! `DataFrame` with `ds` and `yhat` columns plus optional bound and
//! capacity columns) and a [`FittedModel`] view over the model that
//! produced it, [`plot_forecast`] assembles a layered interactive figure.
//! Rendering and export stay with the caller via [`plotly::Plot`].
//!
//! ```no_run
//! use forecast_plot::{plot_forecast, FittedModel, PlotOptions};
//! use polars::prelude::*;
//!
//! # fn main() -> forecast_plot::Result<()> {
//! let fcst = df!(
//!     "ds" => ["2024-01-01", "2024-01-02", "2024-01-03"],
//!     "yhat" => [1.0, 2.0, 3.0],
//! )
//! .map_err(forecast_plot::PlotError::from)?;
//!
//! let model = FittedModel::new();
//! let fig = plot_forecast(&model, &fcst, PlotOptions::new())?;
//! fig.show();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod helpers;
pub mod model;
pub mod options;
pub mod palette;
pub mod plot;


pub use error::{PlotError, Result};
pub use model::FittedModel;
pub use options::PlotOptions;
pub use palette::Palette;
pub use plot::plot_forecast;
