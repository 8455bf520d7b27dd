use crate::{
    types::{KinematicSeries, Path},
    utils::{fold_neg_pi, wrap_angle},
};
use rand::RngCore;
use tracing::debug;
use ziggurat_rs::Ziggurat;

/// Forward differences of `xs` divided by `step`. One sample shorter than
/// the input, empty for fewer than two samples.
pub fn diff(xs: &[f64], step: f64) -> Vec<f64> {
    let inv_step = 1.0 / step;
    xs.windows(2).map(|w| (w[1] - w[0]) * inv_step).collect()
}

impl KinematicSeries {
    /// Noise-free velocity, acceleration, heading and yaw rate.
    pub fn differentiate(path: &Path, step: f64) -> Self {
        let vel_x = diff(&path.x, step);
        let vel_y = diff(&path.y, step);
        let acc_x = diff(&vel_x, step);
        let acc_y = diff(&vel_y, step);

        let heading: Vec<f64> = vel_x
            .iter()
            .zip(&vel_y)
            .map(|(vx, vy)| fold_neg_pi(vy.atan2(*vx)))
            .collect();
        let inv_step = 1.0 / step;
        let yaw_rate = heading
            .windows(2)
            .map(|w| wrap_angle(w[1] - w[0]) * inv_step)
            .collect();

        Self {
            vel_x,
            vel_y,
            acc_x,
            acc_y,
            heading,
            yaw_rate,
        }
    }

    /// Add independent N(0, sd) noise to every acceleration sample.
    pub fn add_accel_noise<R: RngCore>(&mut self, rng: &mut Ziggurat<R>, sd: f64) {
        let noise_x = rng.gaussian_samples(0.0, sd, self.acc_x.len());
        let noise_y = rng.gaussian_samples(0.0, sd, self.acc_y.len());
        for (a, n) in self.acc_x.iter_mut().zip(noise_x) {
            *a += n;
        }
        for (a, n) in self.acc_y.iter_mut().zip(noise_y) {
            *a += n;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.acc_x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.acc_x.is_empty()
    }
}

/// Differentiate `path` and corrupt the accelerations with Gaussian noise.
pub fn simulate_imu<R: RngCore>(
    path: &Path,
    step: f64,
    noise_sd: f64,
    rng: &mut Ziggurat<R>,
) -> KinematicSeries {
    let mut imu = KinematicSeries::differentiate(path, step);
    imu.add_accel_noise(rng, noise_sd);
    debug!(
        velocity = imu.vel_x.len(),
        acceleration = imu.acc_x.len(),
        noise_sd,
        "differentiated path"
    );
    imu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{NOISE_LEVEL, PATH_LENGTH, STEP_SIZE, T_END, T_START};
    use crate::utils::mean_std;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_diff() {
        let d = diff(&[0.0, 1.0, 4.0, 9.0], 0.5);
        assert_eq!(d, vec![2.0, 6.0, 10.0]);
        assert!(diff(&[1.0], 0.1).is_empty());
        assert!(diff(&[], 0.1).is_empty());
    }

    #[test]
    fn test_series_lengths() {
        for n in 3..30 {
            let path = Path::sine(n, T_START, T_END);
            let imu = KinematicSeries::differentiate(&path, STEP_SIZE);
            assert_eq!(imu.vel_x.len(), n - 1);
            assert_eq!(imu.vel_y.len(), n - 1);
            assert_eq!(imu.heading.len(), n - 1);
            assert_eq!(imu.acc_x.len(), n - 2);
            assert_eq!(imu.acc_y.len(), n - 2);
            assert_eq!(imu.yaw_rate.len(), n - 2);
            assert_eq!(imu.len(), n - 2);
        }
    }

    #[test]
    fn test_second_difference_matches_neg_sine() {
        let n = 400;
        let path = Path::sine(n, T_START, T_END);
        let h = path.spacing();
        let imu = KinematicSeries::differentiate(&path, h);

        // Central second difference of sin at t[i+1] is -sin(t[i+1]) + O(h^2)
        for (i, a) in imu.acc_y.iter().enumerate() {
            let t = path.t[i + 1];
            assert_abs_diff_eq!(*a, -t.sin(), epsilon = h * h);
        }
        for a in &imu.acc_x {
            assert_abs_diff_eq!(*a, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_zero_noise_leaves_series_unchanged() {
        let path = Path::sine(PATH_LENGTH, T_START, T_END);
        let clean = KinematicSeries::differentiate(&path, STEP_SIZE);
        let mut rng = Ziggurat::new(1);
        let noisy = simulate_imu(&path, STEP_SIZE, 0.0, &mut rng);
        assert_eq!(clean.acc_x, noisy.acc_x);
        assert_eq!(clean.acc_y, noisy.acc_y);
    }

    #[test]
    fn test_noise_only_on_acceleration() {
        let path = Path::sine(2000, T_START, T_END);
        let clean = KinematicSeries::differentiate(&path, STEP_SIZE);
        let mut rng = Ziggurat::new(5);
        let noisy = simulate_imu(&path, STEP_SIZE, NOISE_LEVEL, &mut rng);

        assert_eq!(clean.vel_x, noisy.vel_x);
        assert_eq!(clean.vel_y, noisy.vel_y);
        assert_eq!(clean.heading, noisy.heading);
        assert_eq!(clean.yaw_rate, noisy.yaw_rate);

        let residual: Vec<f64> = noisy
            .acc_x
            .iter()
            .zip(&clean.acc_x)
            .map(|(a, b)| a - b)
            .collect();
        let (mean, sd) = mean_std(&residual);
        assert!(mean.abs() < 0.002, "mean {}", mean);
        assert_relative_eq!(sd, NOISE_LEVEL, max_relative = 0.1);
    }

    #[test]
    fn test_noise_drawn_per_axis_in_order() {
        let path = Path::sine(PATH_LENGTH, T_START, T_END);
        let clean = KinematicSeries::differentiate(&path, STEP_SIZE);
        let noisy = simulate_imu(&path, STEP_SIZE, NOISE_LEVEL, &mut Ziggurat::new(21));

        let mut rng = Ziggurat::new(21);
        let nx = rng.gaussian_samples(0.0, NOISE_LEVEL, clean.acc_x.len());
        let ny = rng.gaussian_samples(0.0, NOISE_LEVEL, clean.acc_y.len());
        for i in 0..clean.len() {
            assert_eq!(noisy.acc_x[i], clean.acc_x[i] + nx[i]);
            assert_eq!(noisy.acc_y[i], clean.acc_y[i] + ny[i]);
        }
    }

    #[test]
    fn test_heading_follows_slope() {
        let path = Path::sine(200, T_START, T_END);
        let h = path.spacing();
        let imu = KinematicSeries::differentiate(&path, h);
        // Slope at the origin is 1, so heading starts near pi/4
        assert_abs_diff_eq!(imu.heading[0], std::f64::consts::FRAC_PI_4, epsilon = 0.05);
        assert!(imu.heading.iter().all(|t| t.abs() < std::f64::consts::FRAC_PI_2));
    }
}
