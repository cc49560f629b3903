pub mod axis;
pub mod events;
pub mod legend;
pub mod options;
pub mod plot_config;
pub(crate) mod rules;
pub mod series;

pub use axis::{XAxisState, YAxisState};
pub use events::{AxisEvent, ConfigEvent, LegendEvent, SeriesEvent};
pub use legend::LegendState;
pub use options::{
    ColorSpec, LegendOptions, LoadState, PlotConfigOptions, SeriesOptions, XAxisOptions,
    YAxisOptions,
};
pub use plot_config::PlotConfig;
pub use series::{SeriesCollection, SeriesEntry, SeriesId};
