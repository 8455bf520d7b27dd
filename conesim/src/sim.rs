use crate::{
    cones::{measure_path, nearest},
    consts::{CONES, NOISE_LEVEL, PATH_LENGTH, PLOT_DIR, STEP_SIZE, T_END, T_START},
    error::{SimError, SimResult},
    imu::simulate_imu,
    plot,
    types::{CCoord, KinematicSeries, Measurements, Path},
    utils::mean_std,
};
use std::path::{Path as FsPath, PathBuf};
use tracing::{debug, info};
use ziggurat_rs::Ziggurat;

/// Scenario parameters. `Default` reproduces the fixed scenario in [`crate::consts`].
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub path_length: usize,
    pub step_size: f64,
    pub t_start: f64,
    pub t_end: f64,
    pub noise_level: f64,
    pub cones: Vec<CCoord>,
    pub plot_dir: PathBuf,
    /// `None` seeds the noise generator from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            path_length: PATH_LENGTH,
            step_size: STEP_SIZE,
            t_start: T_START,
            t_end: T_END,
            noise_level: NOISE_LEVEL,
            cones: CONES.to_vec(),
            plot_dir: PathBuf::from(PLOT_DIR),
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_plot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plot_dir = dir.into();
        self
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.path_length < 3 {
            return Err(SimError::TooFewSamples {
                n: self.path_length,
            });
        }
        if !self.t_start.is_finite() || !self.t_end.is_finite() || self.t_end <= self.t_start {
            return Err(SimError::InvalidSpan {
                start: self.t_start,
                end: self.t_end,
            });
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SimError::InvalidStep(self.step_size));
        }
        if !self.noise_level.is_finite() || self.noise_level < 0.0 {
            return Err(SimError::InvalidNoise(self.noise_level));
        }
        if self.cones.is_empty() {
            return Err(SimError::EmptyLandmarks);
        }
        Ok(())
    }
}

/// Output of one run: the path and both streams derived from it.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub path: Path,
    pub imu: KinematicSeries,
    pub cones: Vec<CCoord>,
    pub measurements: Measurements,
}

impl Simulation {
    pub fn run(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => Ziggurat::new(seed),
            None => Ziggurat::default(),
        };

        let path = Path::sine(config.path_length, config.t_start, config.t_end);
        info!(samples = path.len(), "generated path");

        let spacing = path.spacing();
        if (spacing - config.step_size).abs() > 1e-12 {
            debug!(
                spacing,
                step = config.step_size,
                "differencing step differs from sample spacing"
            );
        }

        let imu = simulate_imu(&path, config.step_size, config.noise_level, &mut rng);
        info!(samples = imu.len(), "simulated IMU");

        let measurements = measure_path(&path, &config.cones);
        info!(
            samples = measurements.len(),
            cones = config.cones.len(),
            "simulated cone measurements"
        );

        Ok(Self {
            path,
            imu,
            cones: config.cones.clone(),
            measurements,
        })
    }

    /// Render the path, IMU and cone charts into `dir`.
    pub fn plot(&self, dir: &FsPath) -> SimResult<Vec<PathBuf>> {
        plot::render_all(self, dir)
    }

    pub fn log_summary(&self) {
        if let Some((lo, hi)) = self.path.bounds() {
            info!(
                x_min = lo.x,
                x_max = hi.x,
                y_min = lo.y,
                y_max = hi.y,
                "path extent"
            );
        }

        let (ax_mean, ax_sd) = mean_std(&self.imu.acc_x);
        let (ay_mean, ay_sd) = mean_std(&self.imu.acc_y);
        info!(ax_mean, ax_sd, ay_mean, ay_sd, "acceleration");

        let ends = [self.measurements.first(), self.measurements.last()];
        for (label, row) in ["first", "last"].into_iter().zip(ends) {
            if let Some((i, m)) = row.and_then(|row| nearest(row)) {
                let cone = self.cones[i];
                info!(
                    sample = label,
                    cone_x = cone.x,
                    cone_y = cone.y,
                    range = m.r,
                    bearing = m.t,
                    "nearest cone"
                );
            }
        }
    }
}
