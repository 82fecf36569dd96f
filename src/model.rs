//! View over a fitted forecasting model.
//!
//! The assembler only consumes a model, it never trains or validates one.
//! Every field a model may or may not carry is an explicit optionality
//! marker here, so the figure assembly can branch on presence without any
//! reflection-style lookups.

use polars::prelude::DataFrame;

/// The parts of a fitted forecasting model the figure assembler reads.
///
/// `Default` yields a model with nothing optional present: no history,
/// no logistic floor, zero uncertainty samples.
#[derive(Debug, Clone, Default)]
pub struct FittedModel {
    /// Training history with `ds` and `y` columns, if the model kept it.
    pub history: Option<DataFrame>,
    /// Whether the model was configured with a saturating minimum.
    pub logistic_floor: bool,
    /// Number of posterior samples used for uncertainty estimation.
    /// Zero means no uncertainty estimate is available.
    pub uncertainty_samples: u32,
}

impl FittedModel {
    /// Create a model view with no optional data present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the training history (`ds`, `y` columns).
    pub fn with_history(mut self, history: DataFrame) -> Self {
        self.history = Some(history);
        self
    }

    /// Mark the model as having a saturating minimum.
    pub fn with_logistic_floor(mut self, logistic_floor: bool) -> Self {
        self.logistic_floor = logistic_floor;
        self
    }

    /// Set the posterior sample count used for uncertainty estimation.
    pub fn with_uncertainty_samples(mut self, uncertainty_samples: u32) -> Self {
        self.uncertainty_samples = uncertainty_samples;
        self
    }
}
