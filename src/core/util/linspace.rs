/// `count` evenly spaced values from `start` to `end`, endpoints included.
///
/// Matches numpy's `linspace`: a single-point request yields `[start]`, and
/// the final value is exactly `end` rather than `start + (count - 1) * step`.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}
