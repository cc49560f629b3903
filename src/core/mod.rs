pub mod color;
pub mod legend;
pub mod palette;
pub mod range;

pub use color::Color;
pub use legend::{LegendPosition, Pixels, legend_height};
pub use palette::ColorPalette;
pub use range::{NumericRange, autoscaled_display_range};
