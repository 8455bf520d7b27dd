//! Synthetic vehicle trajectory with simulated IMU and cone range/bearing
//! measurements.
//!
//! The pipeline is three stateless stages: a sampled sine path, finite
//! differences of that path with Gaussian accelerometer noise, and polar
//! measurements from every path sample to a fixed set of cones.

pub mod cones;
pub mod consts;
pub mod error;
pub mod imu;
mod path;
pub mod plot;
pub mod sim;
pub mod types;
pub mod utils;

pub use error::{SimError, SimResult};
pub use sim::{SimConfig, Simulation};
