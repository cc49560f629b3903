//! plot-config: reactive configuration core for plotting widgets.
//!
//! This crate holds the user-adjustable and derived state that drives plot
//! rendering (axis ranges, autoscaling, per-series color, legend layout) and
//! keeps that state consistent on every mutation. Rendering, telemetry
//! fetching, and persistence are external collaborators that read the values
//! computed here through change subscriptions.

pub mod api;
pub mod core;
pub mod error;
pub mod observe;
pub mod telemetry;

pub use api::{PlotConfig, PlotConfigOptions};
pub use error::{ConfigError, ConfigResult};
