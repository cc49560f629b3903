use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Integer pixel length; `Display` renders the CSS-style `"{n}px"` form
/// consumers splice into layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixels(pub u32);

impl Pixels {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Legend sizing policy.
///
/// Height only matters in the top-position flow: collapsed legends are one
/// fixed line, expanded legends grow one 20px row per series plus a 40px
/// header/margin allowance.
#[must_use]
pub fn legend_height(position: LegendPosition, expanded: bool, series_count: usize) -> Pixels {
    if position != LegendPosition::Top {
        return Pixels(0);
    }
    if expanded {
        Pixels(20 * (series_count as u32 + 1) + 40)
    } else {
        Pixels(21)
    }
}
