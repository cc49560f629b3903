use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Color, LegendPosition, NumericRange};
use crate::error::{ConfigError, ConfigResult};

/// Loading state advertised by the host for the configured plot.
///
/// The core stores and republishes it; no reactive rule depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Loaded,
}

/// Series color as supplied by the host: textual hex or an already-resolved
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Resolved(Color),
    Hex(String),
}

impl ColorSpec {
    pub fn resolve(&self) -> ConfigResult<Color> {
        match self {
            Self::Hex(input) => Color::from_hex_str(input),
            Self::Resolved(color) => Ok(*color),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Resolved(color)
    }
}

impl From<&str> for ColorSpec {
    fn from(input: &str) -> Self {
        Self::Hex(input.to_owned())
    }
}

/// Construction input for [`super::PlotConfig`].
///
/// Serializable with the host's camelCase key names so applications can
/// persist/load plot setup without inventing their own ad-hoc format.
/// Missing keys fall back to the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotConfigOptions {
    pub state: LoadState,
    pub series: Vec<SeriesOptions>,
    pub x_axis: XAxisOptions,
    pub y_axis: YAxisOptions,
    pub legend: LegendOptions,
}

impl PlotConfigOptions {
    /// Serializes options to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidOptions(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ConfigError::InvalidOptions(format!("failed to parse options: {e}")))
    }
}

/// One series entry as supplied at construction or via `add_series`.
///
/// Everything except `color` is an opaque host payload the core passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesOptions {
    pub color: Option<ColorSpec>,
    #[serde(flatten)]
    pub payload: Value,
}

impl SeriesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            color: None,
            payload: Value::Object(serde_json::Map::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct XAxisOptions {
    pub range: Option<NumericRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YAxisOptions {
    pub range: Option<NumericRange>,
    pub autoscale: bool,
    #[serde(default = "default_autoscale_padding")]
    pub autoscale_padding: f64,
}

impl Default for YAxisOptions {
    fn default() -> Self {
        Self {
            range: None,
            autoscale: false,
            autoscale_padding: default_autoscale_padding(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendOptions {
    pub position: LegendPosition,
    pub expand_by_default: bool,
    #[serde(default = "default_value_to_show")]
    pub value_to_show_when_collapsed: String,
    #[serde(default = "default_true")]
    pub show_timestamp_when_expanded: bool,
    #[serde(default = "default_true")]
    pub show_value_when_expanded: bool,
    #[serde(default = "default_true")]
    pub show_maximum_when_expanded: bool,
    #[serde(default = "default_true")]
    pub show_minimum_when_expanded: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            position: LegendPosition::Top,
            expand_by_default: false,
            value_to_show_when_collapsed: default_value_to_show(),
            show_timestamp_when_expanded: true,
            show_value_when_expanded: true,
            show_maximum_when_expanded: true,
            show_minimum_when_expanded: true,
        }
    }
}

fn default_autoscale_padding() -> f64 {
    0.1
}

fn default_value_to_show() -> String {
    "nearestValue".to_owned()
}

fn default_true() -> bool {
    true
}
