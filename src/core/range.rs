use serde::{Deserialize, Serialize};

/// Closed numeric interval, used for both raw and display axis ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        (self.max - self.min).abs()
    }
}

/// Derives the plotted range for a value axis from its raw range.
///
/// With autoscale off the raw range passes through unchanged. With autoscale
/// on, `span * autoscale_padding` is added to both ends; a padding that
/// computes to exactly zero is forced to 1 so a flat series never collapses
/// to an invisible range. Negative paddings are applied as-is (signed).
#[must_use]
pub fn autoscaled_display_range(
    range: Option<NumericRange>,
    autoscale: bool,
    autoscale_padding: f64,
) -> Option<NumericRange> {
    let range = range?;
    if !autoscale {
        return Some(range);
    }

    let mut padding = range.span() * autoscale_padding;
    if padding == 0.0 {
        padding = 1.0;
    }
    Some(NumericRange::new(range.min - padding, range.max + padding))
}
