//! # Engagement Chart
//!
//! `engagement_chart` turns pre-aggregated message counts into the
//! "Engagement: Messages Over Time" chart. Each channel with at least two
//! data points becomes one curved time series; the result is a declarative
//! chart configuration that can be exported as Highcharts-compatible JSON,
//! rendered to PNG, or shown in a window.
//!
//! ## Features
//!
//! - Filter out channels that cannot form a trend (fewer than two points)
//! - Reshape message counts into per-channel `(timestamp, count)` series
//! - Fixed axes, tooltip, legend and plot options for the engagement chart
//! - Lenient parsing that carries invalid values through, or strict parsing
//!   that rejects them
//! - PNG rendering with plotters and a simple viewer window
//!
//! ## Example
//!
//! ```
//! use engagement_chart::{build_chart_configuration, Channel, Message};
//!
//! let channels = vec![Channel::new("a", "Alpha")];
//! let messages = vec![
//!     Message::new("5", "2024-01-01T00:00:00Z", "a"),
//!     Message::new("7", "2024-01-02T00:00:00Z", "a"),
//! ];
//!
//! let config = build_chart_configuration(&messages, &channels);
//! assert_eq!(config.series.len(), 1);
//! assert_eq!(
//!     config.tooltip_for(0, 0).as_deref(),
//!     Some("Alpha — 5 messages on 01 Jan")
//! );
//! ```

pub mod analysis;
pub mod app;
pub mod data;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use data::ChartInput;
pub use error::{ChartError, ChartResult};
pub use plotting::{
    build_chart_configuration, try_build_chart_configuration, ChartConfiguration, RenderOptions,
};
pub use types::{Channel, ChannelSeries, DataPoint, Message, SeriesKind};
