//! Figure assembly for forecast output.
//!
//! One public entry point, [`plot_forecast`], builds a layered Plotly
//! figure from a forecast frame and a [`FittedModel`] view. Every layer
//! beyond the mean line is conditional on data being present or on an
//! option flag; absence is a skip, never an error.

use polars::prelude::DataFrame;
use tracing::debug;

use plotly::common::{Anchor, DashType, Fill, HoverInfo, Line, Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, HoverMode, Legend, Margin};
use plotly::{Plot, Scatter};

use crate::error::Result;
use crate::helpers::converters::{numeric_column_to_f64, timestamp_column_to_strings};
use crate::model::FittedModel;
use crate::options::PlotOptions;
use crate::palette::Palette;

/// Assemble a Plotly figure for a forecast.
///
/// The forecast frame must carry `ds` and `yhat` columns; `yhat_lower`,
/// `yhat_upper`, `cap` and `floor` are picked up when present. Column
/// values are copied out before trace assembly, so the caller's frame is
/// never mutated. Rows are plotted in the order given.
///
/// Layer order: forecast mean, observed history, capacity/floor lines,
/// uncertainty band, then layout and legend handling.
pub fn plot_forecast(
    model: &FittedModel,
    fcst: &DataFrame,
    mut options: PlotOptions,
) -> Result<Plot> {
    let palette = Palette::with_overrides(options.colors.as_ref());
    let mut fig = options.fig.take().unwrap_or_else(Plot::new);

    add_forecast(&mut fig, fcst, &palette)?;
    add_observed(&mut fig, model, &palette)?;

    if options.plot_cap {
        add_capacity(&mut fig, model, fcst, &palette)?;
    }

    if options.uncertainty {
        if model.uncertainty_samples > 0 {
            add_uncertainty_band(&mut fig, fcst, &palette)?;
        } else {
            debug!("model has no posterior samples; skipping uncertainty band");
        }
    }

    apply_layout(&mut fig, &options);

    Ok(fig)
}

/// The forecast mean line over (`ds`, `yhat`).
fn add_forecast(fig: &mut Plot, fcst: &DataFrame, palette: &Palette) -> Result<()> {
    let ds = timestamp_column_to_strings(fcst, "ds")?;
    let yhat = numeric_column_to_f64(fcst, "yhat")?;

    let trace = Scatter::new(ds, yhat)
        .mode(Mode::Lines)
        .line(Line::new().color(palette.forecast()).width(2.0))
        .name("Forecast");
    fig.add_trace(trace);

    Ok(())
}

/// Observed history markers over (`ds`, `y`), when the model kept its history.
fn add_observed(fig: &mut Plot, model: &FittedModel, palette: &Palette) -> Result<()> {
    let Some(history) = &model.history else {
        debug!("model has no history; skipping observed data points");
        return Ok(());
    };

    let ds = timestamp_column_to_strings(history, "ds")?;
    let y = numeric_column_to_f64(history, "y")?;

    let trace = Scatter::new(ds, y)
        .mode(Mode::Markers)
        .marker(Marker::new().color(palette.observed()).size(4).opacity(1.0))
        .name("Observed data points");
    fig.add_trace(trace);

    Ok(())
}

/// Dashed capacity and floor lines. The two conditions are independent:
/// both, either or neither line may be added.
fn add_capacity(
    fig: &mut Plot,
    model: &FittedModel,
    fcst: &DataFrame,
    palette: &Palette,
) -> Result<()> {
    if fcst.column("cap").is_ok() {
        let ds = timestamp_column_to_strings(fcst, "ds")?;
        let cap = numeric_column_to_f64(fcst, "cap")?;

        let trace = Scatter::new(ds, cap)
            .mode(Mode::Lines)
            .line(Line::new().color(palette.cap()).dash(DashType::Dash))
            .name("Maximum capacity");
        fig.add_trace(trace);
    }

    if model.logistic_floor && fcst.column("floor").is_ok() {
        let ds = timestamp_column_to_strings(fcst, "ds")?;
        let floor = numeric_column_to_f64(fcst, "floor")?;

        let trace = Scatter::new(ds, floor)
            .mode(Mode::Lines)
            .line(Line::new().color(palette.cap()).dash(DashType::Dash))
            .name("Minimum capacity");
        fig.add_trace(trace);
    }

    Ok(())
}

/// The uncertainty band between `yhat_lower` and `yhat_upper`.
///
/// Plotly expresses a band as a fill between a trace and the trace right
/// before it, so the invisible upper-bound anchor and the filled
/// lower-bound trace are added back to back here and nowhere else.
fn add_uncertainty_band(fig: &mut Plot, fcst: &DataFrame, palette: &Palette) -> Result<()> {
    let ds = timestamp_column_to_strings(fcst, "ds")?;
    let upper = numeric_column_to_f64(fcst, "yhat_upper")?;
    let lower = numeric_column_to_f64(fcst, "yhat_lower")?;

    let upper_trace = Scatter::new(ds.clone(), upper)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .hover_info(HoverInfo::Skip)
        .show_legend(false);
    let lower_trace = Scatter::new(ds, lower)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .fill(Fill::ToNextY)
        .fill_color(palette.uncertainty())
        .hover_info(HoverInfo::Skip)
        .name("Uncertainty interval");

    fig.add_trace(upper_trace);
    fig.add_trace(lower_trace);

    Ok(())
}

/// Dimensions, margins, axis titles, unified hover and legend visibility.
fn apply_layout(fig: &mut Plot, options: &PlotOptions) {
    let layout = fig
        .layout()
        .clone()
        .width(options.width)
        .height(options.height)
        .margin(Margin::new().left(60).right(40).top(60).bottom(60))
        .title(Title::with_text("").x(0.5))
        .x_axis(Axis::new().title(Title::with_text(options.xlabel.as_str())))
        .y_axis(Axis::new().title(Title::with_text(options.ylabel.as_str())))
        .hover_mode(HoverMode::XUnified);

    // A hidden legend wins over any per-trace legend setting.
    let layout = if options.include_legend {
        layout.show_legend(true).legend(
            Legend::new()
                .orientation(Orientation::Horizontal)
                .y_anchor(Anchor::Bottom)
                .y(1.02),
        )
    } else {
        layout.show_legend(false)
    };

    fig.set_layout(layout);
}
