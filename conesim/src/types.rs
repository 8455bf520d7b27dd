/// Cartesian position.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct CCoord {
    pub x: f64,
    pub y: f64,
}

/// Polar offset: range `r` and bearing `t` in (-pi, pi].
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct ACoord {
    pub r: f64,
    pub t: f64,
}

/// Sampled vehicle path, stored as parallel arrays.
#[derive(Clone, Debug, Default)]
pub struct Path {
    // Curve parameter
    pub t: Vec<f64>,
    // Position
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Finite-difference IMU channels derived from a [`Path`].
///
/// Velocity and heading have one sample fewer than the path; acceleration
/// and yaw rate have two fewer.
#[derive(Clone, Debug, Default)]
pub struct KinematicSeries {
    pub vel_x: Vec<f64>,
    pub vel_y: Vec<f64>,
    pub acc_x: Vec<f64>,
    pub acc_y: Vec<f64>,
    pub heading: Vec<f64>,
    pub yaw_rate: Vec<f64>,
}

/// Range/bearing rows, one per path sample, one column per cone.
pub type Measurements = Vec<Vec<ACoord>>;
