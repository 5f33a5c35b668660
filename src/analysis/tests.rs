use super::*;
use crate::types::{Channel, DataPoint, Message, SeriesKind};
use pretty_assertions::assert_eq;

// 2024-01-01T00:00:00Z
const JAN_1: i64 = 1_704_067_200_000;
const DAY: i64 = 86_400_000;

fn channels() -> Vec<Channel> {
    vec![
        Channel::new("a", "Alpha"),
        Channel::new("b", "Beta"),
        Channel::new("c", "Gamma"),
    ]
}

fn message(count: &str, bucket: &str, channel: &str) -> Message {
    Message::new(count, bucket, channel)
}

#[test]
fn test_count_messages_per_channel() {
    let messages = vec![
        message("1", "2024-01-01", "a"),
        message("2", "2024-01-02", "b"),
        message("3", "2024-01-03", "a"),
        message("4", "2024-01-04", "x"),
    ];

    let counts = count_messages_per_channel(&messages);
    assert_eq!(counts.get("a"), Some(&2));
    assert_eq!(counts.get("b"), Some(&1));
    assert_eq!(counts.get("x"), Some(&1));
    assert_eq!(counts.get("c"), None);
}

#[test]
fn test_filter_drops_single_and_missing_channels() {
    let channels = channels();
    let messages = vec![
        message("5", "2024-01-01", "a"),
        message("7", "2024-01-02", "a"),
        message("1", "2024-01-01", "b"),
    ];

    let retained = filter_channels_with_multiple_points(&messages, &channels);
    let ids: Vec<&str> = retained.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn test_filter_preserves_channel_order() {
    let channels = channels();
    // Messages for "c" come first, but "a" is listed first in the channels.
    let messages = vec![
        message("1", "2024-01-01", "c"),
        message("1", "2024-01-02", "c"),
        message("1", "2024-01-01", "b"),
        message("1", "2024-01-01", "a"),
        message("1", "2024-01-02", "a"),
        message("1", "2024-01-02", "b"),
    ];

    let retained = filter_channels_with_multiple_points(&messages, &channels);
    let ids: Vec<&str> = retained.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_single_message_yields_no_series() {
    let channels = vec![Channel::new("a", "Alpha")];
    let messages = vec![message("5", "2024-01-01T00:00:00Z", "a")];

    assert!(engagement_series(&messages, &channels).is_empty());
}

#[test]
fn test_two_messages_yield_one_series() {
    let channels = vec![Channel::new("a", "Alpha")];
    let messages = vec![
        message("5", "2024-01-01", "a"),
        message("7", "2024-01-02", "a"),
    ];

    let series = engagement_series(&messages, &channels);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, "Alpha");
    assert_eq!(series[0].kind, SeriesKind::Spline);
    assert_eq!(
        series[0].data,
        vec![DataPoint::from((JAN_1, 5)), DataPoint::from((JAN_1 + DAY, 7))]
    );
}

#[test]
fn test_points_keep_input_order_and_duplicates() {
    let channels = vec![Channel::new("a", "Alpha")];
    let messages = vec![
        message("3", "2024-01-03", "a"),
        message("1", "2024-01-01", "a"),
        message("9", "2024-01-01", "a"),
    ];

    let series = engagement_series(&messages, &channels);
    assert_eq!(
        series[0].data,
        vec![
            DataPoint::from((JAN_1 + 2 * DAY, 3)),
            DataPoint::from((JAN_1, 1)),
            DataPoint::from((JAN_1, 9)),
        ]
    );
}

#[test]
fn test_every_message_appears_once_in_its_series() {
    let channels = channels();
    let messages: Vec<Message> = (0..30)
        .map(|i| {
            let channel = ["a", "b", "c"][i % 3];
            message(&i.to_string(), "2024-01-01", channel)
        })
        .collect();

    let series = engagement_series(&messages, &channels);
    assert_eq!(series.len(), 3);

    for (s, channel) in series.iter().zip(["a", "b", "c"]) {
        let expected: Vec<i64> = messages
            .iter()
            .filter(|m| m.channel_id == channel)
            .map(|m| m.count.parse().unwrap())
            .collect();
        let actual: Vec<i64> = s.data.iter().map(|p| p.y.unwrap()).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_invalid_values_propagate() {
    let channels = vec![Channel::new("a", "Alpha")];
    let messages = vec![
        message("abc", "2024-01-01", "a"),
        message("4", "not a date", "a"),
    ];

    let series = engagement_series(&messages, &channels);
    assert_eq!(
        series[0].data,
        vec![
            DataPoint::new(Some(JAN_1), None),
            DataPoint::new(None, Some(4)),
        ]
    );
    assert_eq!(series[0].valid_point_count(), 0);
}

#[test]
fn test_strict_series_rejects_invalid_values() {
    let channels = vec![Channel::new("a", "Alpha")];
    let messages = vec![
        message("5", "2024-01-01", "a"),
        message("5x", "2024-01-02", "a"),
    ];

    let err = try_engagement_series(&messages, &channels).unwrap_err();
    assert_eq!(err.to_string(), "invalid count \"5x\" for channel a");

    let messages = vec![
        message("5", "2024-01-01", "a"),
        message("6", "Jan 2nd", "a"),
    ];
    let err = try_engagement_series(&messages, &channels).unwrap_err();
    assert_eq!(err.to_string(), "invalid time bucket \"Jan 2nd\" for channel a");
}

#[test]
fn test_strict_series_matches_lenient_on_clean_input() {
    let channels = channels();
    let messages = vec![
        message("5", "2024-01-01", "a"),
        message("7", "2024-01-02", "a"),
        message("2", "2024-01-01", "c"),
        message("3", "2024-01-02", "c"),
    ];

    assert_eq!(
        try_engagement_series(&messages, &channels).unwrap(),
        engagement_series(&messages, &channels)
    );
}

#[test]
fn test_empty_inputs() {
    assert!(engagement_series(&[], &[]).is_empty());
    assert!(engagement_series(&[], &channels()).is_empty());
    assert!(engagement_series(&[message("1", "2024-01-01", "a")], &[]).is_empty());
}
