/// `count` evenly spaced points from `min` to `max`, both ends included.
///
/// A single point is `min`; zero points is an empty vector.
pub fn sample_points(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![min],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| min + (max - min) * i as f64 / last)
                .collect()
        }
    }
}
