//! NEON sine entry points.
//!
//! The shared `sin_slice` driver instantiated for [`F32x4`]. NEON loads
//! and stores have no aligned/unaligned split, but both entry points exist
//! so every tier exposes the same surface to the dispatcher.

use crate::simd::neon::f32x4::F32x4;
use crate::simd::sine::sin_slice;

/// Sine over 16-byte-aligned buffers using NEON.
///
/// # Safety
///
/// The CPU must support NEON, and `dst` and `src` must have equal lengths.
#[target_feature(enable = "neon")]
pub unsafe fn sin_f32_aligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x4, true>(dst, src)
}

/// Sine over arbitrarily-aligned buffers using NEON.
///
/// # Safety
///
/// The CPU must support NEON, and `dst` and `src` must have equal lengths.
#[target_feature(enable = "neon")]
pub unsafe fn sin_f32_unaligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x4, false>(dst, src)
}
