/// Benchmarks for building the engagement chart configuration.
/// Measures the channel filter, series construction and JSON export.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engagement_chart::analysis::filter_channels_with_multiple_points;
use engagement_chart::{build_chart_configuration, Channel, Message};

/// Generate `channel_count` channels with `days` daily buckets each
///
/// # Returns
/// * `(Vec<Message>, Vec<Channel>)` - Interleaved messages and their channels
fn generate_input(channel_count: usize, days: usize) -> (Vec<Message>, Vec<Channel>) {
    let channels: Vec<Channel> = (0..channel_count)
        .map(|i| Channel::new(format!("c-{}", i), format!("Channel {}", i)))
        .collect();

    let mut messages = Vec::with_capacity(channel_count * days);
    for day in 0..days {
        let bucket = format!("2024-01-{:02}T00:00:00.000Z", day % 28 + 1);
        for (i, channel) in channels.iter().enumerate() {
            messages.push(Message::new(
                ((i * 7 + day * 3) % 50).to_string(),
                bucket.clone(),
                channel.id.clone(),
            ));
        }
    }

    (messages, channels)
}

fn bench_filter(c: &mut Criterion) {
    let (messages, channels) = generate_input(50, 28);

    c.bench_function("filter_channels", |b| {
        b.iter(|| filter_channels_with_multiple_points(black_box(&messages), black_box(&channels)))
    });
}

fn bench_build_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_configuration");

    for channel_count in [5, 50, 500] {
        let (messages, channels) = generate_input(channel_count, 28);
        group.bench_with_input(
            BenchmarkId::from_parameter(channel_count),
            &(messages, channels),
            |b, (messages, channels)| {
                b.iter(|| build_chart_configuration(black_box(messages), black_box(channels)))
            },
        );
    }

    group.finish();
}

fn bench_json_export(c: &mut Criterion) {
    let (messages, channels) = generate_input(50, 28);
    let config = build_chart_configuration(&messages, &channels);

    c.bench_function("json_export", |b| {
        b.iter(|| black_box(&config).to_json_string(false).unwrap())
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_build_configuration,
    bench_json_export
);
criterion_main!(benches);
