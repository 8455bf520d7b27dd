use crate::types::CCoord;
use std::f64::consts::PI;

pub const PATH_LENGTH: usize = 100;
pub const STEP_SIZE: f64 = 0.1;

pub const T_START: f64 = 0.0;
pub const T_END: f64 = 4.0 * PI;

pub const NOISE_LEVEL: f64 = 0.01;

pub const CONES: [CCoord; 5] = [
    CCoord { x: 2.0, y: 1.0 },
    CCoord { x: 3.0, y: -1.0 },
    CCoord { x: 4.0, y: 2.0 },
    CCoord { x: 5.0, y: -2.0 },
    CCoord { x: 6.0, y: 0.0 },
];

pub const PLOT_DIR: &str = "plots";
pub const PLOT_WIDTH: u32 = 1024;
pub const PLOT_HEIGHT: u32 = 768;

pub const TWO_PI: f64 = 2.0 * PI;
