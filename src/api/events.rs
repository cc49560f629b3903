//! Typed change events dispatched through the configuration graph.
//!
//! Every event names the attribute that changed and carries the old and new
//! values, so subscribers never need to re-read state to know what happened.

use crate::core::{Color, NumericRange, Pixels};

use super::options::LoadState;
use super::series::SeriesId;

/// Change on one axis component (x or y; the wrapping [`ConfigEvent`]
/// variant says which).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisEvent {
    Range {
        old: Option<NumericRange>,
        new: Option<NumericRange>,
    },
    DisplayRange {
        old: Option<NumericRange>,
        new: Option<NumericRange>,
    },
    Autoscale {
        old: bool,
        new: bool,
    },
    AutoscalePadding {
        old: f64,
        new: f64,
    },
}

/// Change on the legend component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendEvent {
    Expanded { old: bool, new: bool },
    Height { old: Pixels, new: Pixels },
}

/// Membership or color change on the series collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesEvent {
    Added {
        id: SeriesId,
    },
    Removed {
        id: SeriesId,
        color: Option<Color>,
    },
    Color {
        id: SeriesId,
        old: Color,
        new: Color,
    },
}

/// Root-level event stream: everything that happens anywhere in the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigEvent {
    State { old: LoadState, new: LoadState },
    XAxis(AxisEvent),
    YAxis(AxisEvent),
    Legend(LegendEvent),
    Series(SeriesEvent),
}
