use std::collections::HashMap;

use tracing::debug;

use crate::error::ChartResult;
use crate::types::{Channel, ChannelSeries, DataPoint, Message, SeriesKind};
use crate::utils::{parse_count, parse_count_strict, parse_time_bucket, parse_time_bucket_strict};

/// Count how many messages reference each channel id.
pub fn count_messages_per_channel(messages: &[Message]) -> HashMap<&str, usize> {
    let mut channel_counts: HashMap<&str, usize> = HashMap::new();
    for message in messages {
        *channel_counts.entry(message.channel_id.as_str()).or_insert(0) += 1;
    }
    channel_counts
}

/// Keep the channels that have more than one message.
///
/// A single point cannot form a trend, and channels without any messages
/// are dropped as well. The input order of `channels` is preserved.
pub fn filter_channels_with_multiple_points<'a>(
    messages: &[Message],
    channels: &'a [Channel],
) -> Vec<&'a Channel> {
    let channel_counts = count_messages_per_channel(messages);

    let retained: Vec<&Channel> = channels
        .iter()
        .filter(|channel| channel_counts.get(channel.id.as_str()).copied().unwrap_or(0) > 1)
        .collect();

    debug!(
        "Retained {} of {} channels ({} messages)",
        retained.len(),
        channels.len(),
        messages.len()
    );

    retained
}

/// Messages grouped by channel id, each group in input order.
fn index_by_channel(messages: &[Message]) -> HashMap<&str, Vec<&Message>> {
    let mut index: HashMap<&str, Vec<&Message>> = HashMap::new();
    for message in messages {
        index
            .entry(message.channel_id.as_str())
            .or_default()
            .push(message);
    }
    index
}

/// Build one series per channel from the messages that reference it.
///
/// Points keep the relative order of `messages`; nothing is sorted,
/// deduplicated or aggregated. Values that fail to parse are kept as
/// `None` coordinates.
pub fn build_channel_series(messages: &[Message], channels: &[&Channel]) -> Vec<ChannelSeries> {
    let index = index_by_channel(messages);

    channels
        .iter()
        .map(|channel| {
            let data: Vec<DataPoint> = index
                .get(channel.id.as_str())
                .map(|channel_messages| {
                    channel_messages
                        .iter()
                        .map(|message| {
                            DataPoint::new(
                                parse_time_bucket(&message.time_bucket),
                                parse_count(&message.count),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();

            ChannelSeries {
                name: channel.name.clone(),
                data,
                kind: SeriesKind::Spline,
            }
        })
        .collect()
}

/// Like [`build_channel_series`], but fails on the first value that does
/// not parse completely.
pub fn try_build_channel_series(
    messages: &[Message],
    channels: &[&Channel],
) -> ChartResult<Vec<ChannelSeries>> {
    let index = index_by_channel(messages);
    let mut series = Vec::with_capacity(channels.len());

    for channel in channels {
        let channel_messages = index.get(channel.id.as_str()).map(Vec::as_slice).unwrap_or(&[]);
        let mut data = Vec::with_capacity(channel_messages.len());

        for message in channel_messages {
            let x = parse_time_bucket_strict(&message.time_bucket, &channel.id)?;
            let y = parse_count_strict(&message.count, &channel.id)?;
            data.push(DataPoint::from((x, y)));
        }

        series.push(ChannelSeries {
            name: channel.name.clone(),
            data,
            kind: SeriesKind::Spline,
        });
    }

    Ok(series)
}

/// Filter the channels and build their series in one step.
pub fn engagement_series(messages: &[Message], channels: &[Channel]) -> Vec<ChannelSeries> {
    let retained = filter_channels_with_multiple_points(messages, channels);
    build_channel_series(messages, &retained)
}

/// Strict counterpart of [`engagement_series`].
pub fn try_engagement_series(
    messages: &[Message],
    channels: &[Channel],
) -> ChartResult<Vec<ChannelSeries>> {
    let retained = filter_channels_with_multiple_points(messages, channels);
    try_build_channel_series(messages, &retained)
}
