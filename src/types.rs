//! # Common Types
//!
//! This module contains the types shared across the crate: the raw message
//! count records and channels supplied by the caller, and the per-channel
//! series derived from them.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// One aggregated message-count observation for a channel.
///
/// Values arrive as strings from upstream and are parsed when the chart
/// series are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Number of messages in the bucket, as a base-10 string
    pub count: String,
    /// Start of the time bucket, as an ISO 8601 timestamp or date
    pub time_bucket: String,
    /// Identifier of the channel the count belongs to
    pub channel_id: String,
}

impl Message {
    pub fn new(
        count: impl Into<String>,
        time_bucket: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            count: count.into(),
            time_bucket: time_bucket.into(),
            channel_id: channel_id.into(),
        }
    }
}

/// A named communication stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Stable identifier referenced by [`Message::channel_id`]
    pub id: String,
    /// Display name, used as the series name
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single `(timestamp, count)` point of a channel series.
///
/// `None` marks a value that did not parse as a number. Such points are
/// kept in the series and serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataPoint {
    /// Epoch milliseconds of the time bucket
    pub x: Option<i64>,
    /// Message count
    pub y: Option<i64>,
}

impl DataPoint {
    pub fn new(x: Option<i64>, y: Option<i64>) -> Self {
        Self { x, y }
    }

    /// Both coordinates are numbers.
    pub fn is_valid(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

impl From<(i64, i64)> for DataPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(Some(x), Some(y))
    }
}

impl Serialize for DataPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.x)?;
        tuple.serialize_element(&self.y)?;
        tuple.end()
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Curved line through the points
    #[default]
    Spline,
}

/// The time series plotted for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSeries {
    /// The channel's display name
    pub name: String,
    /// Points in the order the messages were supplied
    pub data: Vec<DataPoint>,
    /// Rendering kind
    #[serde(rename = "type")]
    pub kind: SeriesKind,
}

impl ChannelSeries {
    /// Number of points whose coordinates are both numbers.
    pub fn valid_point_count(&self) -> usize {
        self.data.iter().filter(|p| p.is_valid()).count()
    }
}
