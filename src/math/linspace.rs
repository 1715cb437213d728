/// Returns `n` evenly spaced values over the closed interval `[start, end]`.
///
/// The first element is exactly `start` and the last is exactly `end`, so a
/// grid built this way always hits both bounds regardless of rounding in the
/// step. `n == 0` yields an empty vector and `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| match i {
                    0 => start,
                    _ if i == n - 1 => end,
                    _ => start + step * i as f64,
                })
                .collect()
        }
    }
}
