//! Error types for building and rendering the chart.

use thiserror::Error;

/// Errors produced by the strict builders, fixture loading and rendering.
///
/// The lenient builders never return these.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A message count is not a base-10 integer.
    #[error("invalid count {value:?} for channel {channel_id}")]
    InvalidCount { channel_id: String, value: String },

    /// A time bucket is not a recognised timestamp.
    #[error("invalid time bucket {value:?} for channel {channel_id}")]
    InvalidTimeBucket { channel_id: String, value: String },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input or output JSON was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Drawing the chart failed.
    #[error("Failed to render chart: {0}")]
    Render(String),

    /// Encoding the rendered bitmap failed.
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// A background rendering task did not complete.
    #[error("Render task failed: {0}")]
    Task(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
