use crate::consts::TWO_PI;
use std::f64::consts::PI;

/// Wrap an angle into (-pi, pi].
#[inline]
pub fn wrap_angle(t: f64) -> f64 {
    let w = PI - (PI - t).rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly TWO_PI
    if w <= -PI { w + TWO_PI } else { w }
}

/// Map `atan2`'s -pi onto pi; every other angle passes through untouched.
#[inline]
pub fn fold_neg_pi(t: f64) -> f64 {
    if t <= -PI { PI } else { t }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included exactly.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Mean and population standard deviation.
pub fn mean_std(xs: &[f64]) -> (f64, f64) {
    if xs.is_empty() {
        return (0.0, 0.0);
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    (mean, var.sqrt())
}
