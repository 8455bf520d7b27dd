//! Strip tables for the normal ziggurat, built once on first use.
//!
//! Layout follows Marsaglia & Tsang (2000): strip `i` has right edge
//! `w[i] * 2^31`, the density at that edge is `f[i]`, and `k[i]` is the
//! fast-accept threshold for a signed 32-bit draw landing in strip `i`.

use crate::constants::{M1, NOR_SECTION_AREA, ZIGGURAT_NOR_R, ZIGGURAT_TABLE_SIZE};
use std::sync::LazyLock;

pub static NORMAL: LazyLock<NormalTables> = LazyLock::new(NormalTables::build);

pub struct NormalTables {
    pub k: [u32; ZIGGURAT_TABLE_SIZE],
    pub w: [f64; ZIGGURAT_TABLE_SIZE],
    pub f: [f64; ZIGGURAT_TABLE_SIZE],
}

impl NormalTables {
    fn build() -> Self {
        const LAST: usize = ZIGGURAT_TABLE_SIZE - 1;

        let mut k = [0u32; ZIGGURAT_TABLE_SIZE];
        let mut w = [0.0f64; ZIGGURAT_TABLE_SIZE];
        let mut f = [0.0f64; ZIGGURAT_TABLE_SIZE];

        let mut dn = ZIGGURAT_NOR_R;
        let mut tn = dn;
        let q = NOR_SECTION_AREA / (-0.5 * dn * dn).exp();

        // Base strip: rectangle of width q, tail beyond r handled separately.
        k[0] = ((dn / q) * M1) as u32;
        k[1] = 0;
        w[0] = q / M1;
        w[LAST] = dn / M1;
        f[0] = 1.0;
        f[LAST] = (-0.5 * dn * dn).exp();

        for i in (1..LAST).rev() {
            dn = (-2.0 * (NOR_SECTION_AREA / dn + (-0.5 * dn * dn).exp()).ln()).sqrt();
            k[i + 1] = ((dn / tn) * M1) as u32;
            tn = dn;
            f[i] = (-0.5 * dn * dn).exp();
            w[i] = dn / M1;
        }

        Self { k, w, f }
    }
}
