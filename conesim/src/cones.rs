use crate::{
    types::{ACoord, CCoord, Measurements, Path},
    utils::fold_neg_pi,
};
use tracing::debug;

impl CCoord {
    /// Range and bearing from `self` to `landmark`.
    #[inline]
    pub fn range_bearing(&self, landmark: &CCoord) -> ACoord {
        let dx = landmark.x - self.x;
        let dy = landmark.y - self.y;
        ACoord {
            r: dx.hypot(dy),
            t: fold_neg_pi(dy.atan2(dx)),
        }
    }
}

impl ACoord {
    /// Project the measurement back out from `origin`.
    #[inline]
    pub fn landmark_from(&self, origin: CCoord) -> CCoord {
        let (sin_t, cos_t) = self.t.sin_cos();
        CCoord {
            x: origin.x + self.r * cos_t,
            y: origin.y + self.r * sin_t,
        }
    }
}

/// One measurement per cone, in cone order.
pub fn measure_cones(posn: CCoord, cones: &[CCoord]) -> Vec<ACoord> {
    cones.iter().map(|c| posn.range_bearing(c)).collect()
}

/// One row of cone measurements per path sample.
pub fn measure_path(path: &Path, cones: &[CCoord]) -> Measurements {
    let rows: Measurements = path.points().map(|p| measure_cones(p, cones)).collect();
    debug!(samples = rows.len(), cones = cones.len(), "measured cones");
    rows
}

/// Closest cone in a measurement row.
pub fn nearest(row: &[ACoord]) -> Option<(usize, ACoord)> {
    row.iter()
        .copied()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.r.total_cmp(&b.r))
}
