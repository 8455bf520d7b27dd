//! Constants for the Ziggurat algorithm

/// Number of strips in the normal ziggurat.
pub const ZIGGURAT_TABLE_SIZE: usize = 128;
pub const ZIGGURAT_INDEX_MASK: u32 = (ZIGGURAT_TABLE_SIZE as u32) - 1;

// Normal distribution constants (128 strips)
pub const ZIGGURAT_NOR_R: f64 = 3.442619855899;
pub const ZIGGURAT_NOR_INV_R: f64 = 1.0 / ZIGGURAT_NOR_R;
pub const NOR_SECTION_AREA: f64 = 9.91256303526217e-3;

/// Scale of the signed 32-bit draws, 2^31.
pub const M1: f64 = 2147483648.0;
