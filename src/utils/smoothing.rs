use crate::types::DataPoint;

/// Split a series into runs of drawable points.
///
/// A point with a missing coordinate ends the current run, so the line is
/// interrupted there instead of being joined across the gap.
pub fn split_segments(points: &[DataPoint]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for point in points {
        match (point.x, point.y) {
            (Some(x), Some(y)) => current.push((x as f64, y as f64)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Interpolate a curved line through `points` with a Catmull-Rom spline.
///
/// `steps` intermediate positions are generated between each pair of
/// neighbours; the original points are always part of the output.
pub fn catmull_rom(points: &[(f64, f64)], steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || steps == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut curve = Vec::with_capacity(last * (steps + 1) + 1);

    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];

        curve.push(p1);
        for step in 1..=steps {
            let t = step as f64 / (steps + 1) as f64;
            curve.push((
                interpolate(p0.0, p1.0, p2.0, p3.0, t),
                interpolate(p0.1, p1.1, p2.1, p3.1, t),
            ));
        }
    }
    curve.push(points[last]);

    curve
}

fn interpolate(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
