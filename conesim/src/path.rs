use crate::{
    types::{CCoord, Path},
    utils::linspace,
};

impl Path {
    /// Sine-wave path: `x = t`, `y = sin(t)` for `n` samples of `t` over
    /// `[t_start, t_end]`.
    pub fn sine(n: usize, t_start: f64, t_end: f64) -> Self {
        let t = linspace(t_start, t_end, n);
        let x = t.clone();
        let y = t.iter().map(|t| t.sin()).collect();
        Self { t, x, y }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    #[inline]
    pub fn point(&self, i: usize) -> CCoord {
        CCoord {
            x: self.x[i],
            y: self.y[i],
        }
    }

    pub fn points(&self) -> impl Iterator<Item = CCoord> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| CCoord { x, y })
    }

    /// Parameter distance between neighbouring samples.
    pub fn spacing(&self) -> f64 {
        match self.t.as_slice() {
            [first, .., last] => (last - first) / (self.len() - 1) as f64,
            _ => 0.0,
        }
    }

    /// Axis-aligned extent `(min, max)` of the samples.
    pub fn bounds(&self) -> Option<(CCoord, CCoord)> {
        let mut pts = self.points();
        let first = pts.next()?;
        Some(pts.fold((first, first), |(lo, hi), p| {
            (
                CCoord {
                    x: lo.x.min(p.x),
                    y: lo.y.min(p.y),
                },
                CCoord {
                    x: hi.x.max(p.x),
                    y: hi.y.max(p.y),
                },
            )
        }))
    }
}
