use thiserror::Error;

use crate::api::series::SeriesId;
use crate::core::color::Color;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid color format: `{input}`")]
    InvalidColorFormat { input: String },

    #[error("color {color} returned to the palette while already available")]
    InconsistentPaletteState { color: Color },

    #[error("unknown series: {id}")]
    UnknownSeries { id: SeriesId },

    #[error("configuration has been destroyed")]
    Destroyed,

    #[error("invalid options: {0}")]
    InvalidOptions(String),
}
