use indexmap::IndexSet;
use tracing::trace;

use crate::core::Color;
use crate::error::{ConfigError, ConfigResult};

/// Default pool handed out to series that arrive without a color.
///
/// Thirty distinct values chosen for contrast on dark plot backgrounds.
const DEFAULT_COLORS: &[Color] = &[
    Color::rgb(0x20, 0xb2, 0xaa),
    Color::rgb(0x9a, 0xcd, 0x32),
    Color::rgb(0xff, 0x8c, 0x00),
    Color::rgb(0xd2, 0xb4, 0x8c),
    Color::rgb(0x40, 0xe0, 0xd0),
    Color::rgb(0x41, 0x69, 0xff),
    Color::rgb(0xff, 0xd7, 0x00),
    Color::rgb(0x6a, 0x5a, 0xcd),
    Color::rgb(0xee, 0x82, 0xee),
    Color::rgb(0xcc, 0x99, 0x66),
    Color::rgb(0x99, 0xcc, 0xcc),
    Color::rgb(0x66, 0xcc, 0x33),
    Color::rgb(0xff, 0xcc, 0x00),
    Color::rgb(0xff, 0x66, 0x33),
    Color::rgb(0xcc, 0x99, 0xcc),
    Color::rgb(0x66, 0xcc, 0xff),
    Color::rgb(0x99, 0xff, 0x33),
    Color::rgb(0xcc, 0x99, 0x00),
    Color::rgb(0xff, 0x66, 0x00),
    Color::rgb(0xcc, 0x66, 0xff),
    Color::rgb(0x66, 0xff, 0xcc),
    Color::rgb(0xcc, 0xff, 0x66),
    Color::rgb(0xff, 0xcc, 0x33),
    Color::rgb(0xff, 0x33, 0x66),
    Color::rgb(0x99, 0x66, 0xff),
    Color::rgb(0x00, 0xff, 0xcc),
    Color::rgb(0x99, 0xff, 0x66),
    Color::rgb(0xff, 0x99, 0x00),
    Color::rgb(0xff, 0x50, 0x50),
    Color::rgb(0x99, 0x33, 0xff),
];

/// Per-configuration pool of reusable display colors.
///
/// A color is either in the available pool or leased out, never both. The
/// pool is owned by exactly one configuration root; there is no process-wide
/// palette.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    base: Vec<Color>,
    available: IndexSet<Color>,
    leases: u64,
}

impl ColorPalette {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: DEFAULT_COLORS.to_vec(),
            available: DEFAULT_COLORS.iter().copied().collect(),
            leases: 0,
        }
    }

    /// Removes and returns the first available color.
    ///
    /// Never fails: once the pool is exhausted this cycles deterministically
    /// through the base list, so late series repeat colors rather than
    /// blocking.
    pub fn lease_next(&mut self) -> Color {
        self.leases += 1;
        if let Some(color) = self.available.shift_remove_index(0) {
            trace!(%color, "leased color from pool");
            return color;
        }

        let index = (self.leases as usize - 1) % self.base.len();
        let color = self.base[index];
        trace!(%color, "pool exhausted; cycling base palette");
        color
    }

    /// Removes a specific color from the available pool.
    ///
    /// No-op when the color is not currently available (for example, a
    /// host-supplied color that was never part of the pool).
    pub fn reserve(&mut self, color: Color) {
        if self.available.shift_remove(&color) {
            trace!(%color, "reserved color out of pool");
        }
    }

    /// Returns a color to the available pool.
    ///
    /// Returning a color that is already available would double-add it, which
    /// the release protocols are required to prevent; doing so is an error.
    pub fn release(&mut self, color: Color) -> ConfigResult<()> {
        if !self.available.insert(color) {
            return Err(ConfigError::InconsistentPaletteState { color });
        }
        trace!(%color, "returned color to pool");
        Ok(())
    }

    #[must_use]
    pub fn is_available(&self, color: Color) -> bool {
        self.available.contains(&color)
    }

    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Number of colors in the base list.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.base.len()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new()
    }
}
