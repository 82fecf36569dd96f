//! Role-keyed color palette for forecast figures.
//!
//! Four semantic roles are always resolvable: `forecast`, `observed`,
//! `cap` and `uncertainty`. Caller overrides merge on top of a fresh
//! copy of the defaults, key by key, so one call's overrides can never
//! leak into another call's palette.

use std::collections::HashMap;

/// Default color for the forecast mean line.
const DEFAULT_FORECAST: &str = "#0D47A1";
/// Default color for observed data markers.
const DEFAULT_OBSERVED: &str = "#FF6F00";
/// Default color for the dashed capacity/floor lines.
const DEFAULT_CAP: &str = "#000000";
/// Default fill color for the confidence band.
const DEFAULT_UNCERTAINTY: &str = "rgba(0, 114, 178, 0.2)";

/// Effective color mapping used while assembling a figure.
///
/// Unrecognized override keys are kept in the map but never read, which
/// mirrors how callers are allowed to pass extra keys without an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: HashMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors = HashMap::new();
        colors.insert("forecast".to_string(), DEFAULT_FORECAST.to_string());
        colors.insert("observed".to_string(), DEFAULT_OBSERVED.to_string());
        colors.insert("cap".to_string(), DEFAULT_CAP.to_string());
        colors.insert("uncertainty".to_string(), DEFAULT_UNCERTAINTY.to_string());
        Self { colors }
    }
}

impl Palette {
    /// Build the effective palette: defaults plus optional caller overrides.
    pub fn with_overrides(overrides: Option<&HashMap<String, String>>) -> Self {
        let mut palette = Self::default();
        if let Some(overrides) = overrides {
            for (role, color) in overrides {
                palette.colors.insert(role.clone(), color.clone());
            }
        }
        palette
    }

    /// Look up a role, falling back to the built-in default so the four
    /// standard roles are always resolvable.
    fn role(&self, role: &str, fallback: &str) -> String {
        self.colors
            .get(role)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Color of the forecast mean line.
    pub fn forecast(&self) -> String {
        self.role("forecast", DEFAULT_FORECAST)
    }

    /// Color of the observed data markers.
    pub fn observed(&self) -> String {
        self.role("observed", DEFAULT_OBSERVED)
    }

    /// Color of the capacity and floor lines.
    pub fn cap(&self) -> String {
        self.role("cap", DEFAULT_CAP)
    }

    /// Fill color of the uncertainty band.
    pub fn uncertainty(&self) -> String {
        self.role("uncertainty", DEFAULT_UNCERTAINTY)
    }
}
