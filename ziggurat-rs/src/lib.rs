//! # Ziggurat: fast normally distributed variates
//!
//! Marsaglia and Tsang's Ziggurat method for Gaussian pseudo-random number
//! generation, layered over any [`rand::RngCore`] bit source.
//!
//! ## Performance
//!
//! The Ziggurat method is considerably faster than Box-Müller for generating
//! normal variates. The common path costs one 32-bit draw, two table lookups,
//! a floating-point multiply and an integer compare; the exponential and
//! logarithm calls are only reached on the rare rejection path.

mod constants;
mod tables;

use constants::*;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use tables::NORMAL;

/// Gaussian random number generator
pub struct Ziggurat<R = StdRng> {
    rng: R,
    last: u32,
}

impl Ziggurat<StdRng> {
    /// Create a reproducible generator from a seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from operating system entropy
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: RngCore> Ziggurat<R> {
    /// Wrap an existing bit source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            last: 0x63636363,
        }
    }

    /// Get a random 32-bit unsigned integer
    #[inline]
    pub fn rand32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Generate a uniform random number in [0, 1)
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Generate a standard normal (Gaussian) random variable (mean=0, stddev=1)
    #[inline]
    pub fn normal(&mut self) -> f64 {
        let (hz, idx) = self.draw();

        // ~98% of draws are accepted here
        if hz.unsigned_abs() < NORMAL.k[idx] {
            return hz as f64 * NORMAL.w[idx];
        }

        self.rand_normal(hz, idx)
    }

    /// Generate a Gaussian random variable with given standard deviation
    #[inline]
    pub fn gaussian(&mut self, sigma: f64) -> f64 {
        self.normal() * sigma
    }

    /// Draw `count` independent samples from N(mean, sigma)
    pub fn gaussian_samples(&mut self, mean: f64, sigma: f64, count: usize) -> Vec<f64> {
        (0..count).map(|_| mean + self.gaussian(sigma)).collect()
    }

    /// Signed 32-bit value plus a strip index taken from independent bits
    #[inline]
    fn draw(&mut self) -> (i32, usize) {
        let r = self.rand32();
        let idx = ((r ^ self.last) & ZIGGURAT_INDEX_MASK) as usize;
        self.last = r;
        (r as i32, idx)
    }

    /// Uniform in (0, 1], safe to take the logarithm of
    #[inline]
    fn uniform_open(&mut self) -> f64 {
        1.0 - self.uniform()
    }

    /// Slow path for normal distribution (tail and wedge rejection)
    fn rand_normal(&mut self, mut hz: i32, mut idx: usize) -> f64 {
        loop {
            let x = hz as f64 * NORMAL.w[idx];

            if idx == 0 {
                // Tail beyond r, Marsaglia's method:
                // x = -ln(U_1)/r, y = -ln(U_2), until y+y > x*x
                let mut xx: f64;
                let mut yy: f64;
                loop {
                    xx = -ZIGGURAT_NOR_INV_R * self.uniform_open().ln();
                    yy = -self.uniform_open().ln();
                    if yy + yy > xx * xx {
                        break;
                    }
                }
                return if hz > 0 {
                    ZIGGURAT_NOR_R + xx
                } else {
                    -ZIGGURAT_NOR_R - xx
                };
            }

            if NORMAL.f[idx] + self.uniform() * (NORMAL.f[idx - 1] - NORMAL.f[idx])
                < (-0.5 * x * x).exp()
            {
                return x;
            }

            (hz, idx) = self.draw();
            if hz.unsigned_abs() < NORMAL.k[idx] {
                return hz as f64 * NORMAL.w[idx];
            }
        }
    }
}

impl Default for Ziggurat<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
