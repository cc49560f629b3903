//! Declarative table of cross-component reactive rules.
//!
//! Each rule names its source attribute via a matcher and applies an effect
//! that may emit follow-up events. The root's dispatcher evaluates the table
//! in order for every event, so the full rule set is auditable (and testable)
//! in one place instead of being scattered through construction.

use tracing::trace;

use crate::core::autoscaled_display_range;
use crate::error::ConfigResult;

use super::events::{AxisEvent, ConfigEvent, LegendEvent, SeriesEvent};
use super::plot_config::PlotConfig;

pub(crate) struct Rule {
    pub name: &'static str,
    pub matches: fn(&ConfigEvent) -> bool,
    pub apply: fn(&mut PlotConfig, &ConfigEvent) -> ConfigResult<Vec<ConfigEvent>>,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "x-range-passthrough",
        matches: matches_x_range,
        apply: apply_x_range_passthrough,
    },
    Rule {
        name: "y-range-autoscale",
        matches: matches_y_range,
        apply: apply_y_autoscale,
    },
    Rule {
        name: "y-autoscale-toggle",
        matches: matches_y_autoscale,
        apply: apply_y_autoscale,
    },
    Rule {
        name: "y-autoscale-padding",
        matches: matches_y_padding,
        apply: apply_y_padding,
    },
    Rule {
        name: "series-color-assign",
        matches: matches_series_added,
        apply: apply_series_color_assign,
    },
    Rule {
        name: "series-color-release",
        matches: matches_series_removed,
        apply: apply_series_color_release,
    },
    Rule {
        name: "series-recolor",
        matches: matches_series_recolor,
        apply: apply_series_recolor,
    },
    Rule {
        name: "legend-height-on-series-change",
        matches: matches_series_membership,
        apply: apply_legend_height,
    },
    Rule {
        name: "legend-height-on-expanded",
        matches: matches_legend_expanded,
        apply: apply_legend_height,
    },
];

fn matches_x_range(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::XAxis(AxisEvent::Range { .. }))
}

fn matches_y_range(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::YAxis(AxisEvent::Range { .. }))
}

fn matches_y_autoscale(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::YAxis(AxisEvent::Autoscale { .. }))
}

fn matches_y_padding(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::YAxis(AxisEvent::AutoscalePadding { .. }))
}

fn matches_series_added(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::Series(SeriesEvent::Added { .. }))
}

fn matches_series_removed(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::Series(SeriesEvent::Removed { .. }))
}

fn matches_series_recolor(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::Series(SeriesEvent::Color { .. }))
}

fn matches_series_membership(event: &ConfigEvent) -> bool {
    matches!(
        event,
        ConfigEvent::Series(SeriesEvent::Added { .. } | SeriesEvent::Removed { .. })
    )
}

fn matches_legend_expanded(event: &ConfigEvent) -> bool {
    matches!(event, ConfigEvent::Legend(LegendEvent::Expanded { .. }))
}

/// Rule 1: the x axis has no autoscale; its display range mirrors the raw
/// range.
fn apply_x_range_passthrough(
    config: &mut PlotConfig,
    event: &ConfigEvent,
) -> ConfigResult<Vec<ConfigEvent>> {
    let ConfigEvent::XAxis(AxisEvent::Range { new, .. }) = event else {
        return Ok(Vec::new());
    };
    Ok(config
        .x_axis
        .set_display_range(*new)
        .map(ConfigEvent::XAxis)
        .into_iter()
        .collect())
}

/// Rules 2 and 3 share one effect: recompute the display range from the
/// latest raw range and autoscale settings.
fn apply_y_autoscale(
    config: &mut PlotConfig,
    _event: &ConfigEvent,
) -> ConfigResult<Vec<ConfigEvent>> {
    let display = autoscaled_display_range(
        config.y_axis.range(),
        config.y_axis.autoscale(),
        config.y_axis.autoscale_padding(),
    );
    Ok(config
        .y_axis
        .set_display_range(display)
        .map(ConfigEvent::YAxis)
        .into_iter()
        .collect())
}

/// Rule 4: padding changes only matter while autoscale is on.
fn apply_y_padding(config: &mut PlotConfig, event: &ConfigEvent) -> ConfigResult<Vec<ConfigEvent>> {
    if !config.y_axis.autoscale() {
        return Ok(Vec::new());
    }
    apply_y_autoscale(config, event)
}

/// Rule 5 (add side): reserve a host-supplied color, or lease the next one.
fn apply_series_color_assign(
    config: &mut PlotConfig,
    event: &ConfigEvent,
) -> ConfigResult<Vec<ConfigEvent>> {
    let ConfigEvent::Series(SeriesEvent::Added { id }) = event else {
        return Ok(Vec::new());
    };
    let id = *id;

    if let Some(color) = config.series.get(id).and_then(|entry| entry.color()) {
        config.palette.reserve(color);
        trace!(%id, %color, "reserved host-supplied series color");
    } else {
        let color = config.palette.lease_next();
        config.series.assign_color(id, color);
        trace!(%id, %color, "leased color for series");
    }
    Ok(Vec::new())
}

/// Rule 5 (remove side): return the color unless another entry still uses it.
fn apply_series_color_release(
    config: &mut PlotConfig,
    event: &ConfigEvent,
) -> ConfigResult<Vec<ConfigEvent>> {
    let ConfigEvent::Series(SeriesEvent::Removed { color, .. }) = event else {
        return Ok(Vec::new());
    };
    if let Some(color) = *color {
        if config.series.any_holds(color) {
            trace!(%color, "color still held by another series; keeping it leased");
        } else {
            config.palette.release(color)?;
        }
    }
    Ok(Vec::new())
}

/// Recolor protocol: reserve the new color, and return the old one only if
/// no present entry still holds it.
fn apply_series_recolor(
    config: &mut PlotConfig,
    event: &ConfigEvent,
) -> ConfigResult<Vec<ConfigEvent>> {
    let ConfigEvent::Series(SeriesEvent::Color { old, new, .. }) = event else {
        return Ok(Vec::new());
    };
    config.palette.reserve(*new);
    if config.series.any_holds(*old) {
        trace!(color = %old, "old color still held by another series; keeping it leased");
    } else {
        config.palette.release(*old)?;
    }
    Ok(Vec::new())
}

/// Rules 5 and 6 (sizing side): legend height follows membership and
/// expansion.
fn apply_legend_height(
    config: &mut PlotConfig,
    _event: &ConfigEvent,
) -> ConfigResult<Vec<ConfigEvent>> {
    Ok(config.refresh_legend_height().into_iter().collect())
}
