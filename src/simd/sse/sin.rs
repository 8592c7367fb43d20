//! SSE4.1 sine entry points.
//!
//! The shared `sin_slice` driver instantiated for [`F32x4`]. Four-lane
//! groups go through the vector reduction, the `len mod 4` tail through
//! the scalar reference path.

use crate::simd::sine::sin_slice;
use crate::simd::sse::f32x4::F32x4;

/// Sine over 16-byte-aligned buffers using SSE4.1.
///
/// # Safety
///
/// The CPU must support SSE4.1, `dst` and `src` must have equal lengths,
/// and both must be 16-byte aligned.
#[target_feature(enable = "sse4.1")]
pub unsafe fn sin_f32_aligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x4, true>(dst, src)
}

/// Sine over arbitrarily-aligned buffers using SSE4.1.
///
/// # Safety
///
/// The CPU must support SSE4.1, and `dst` and `src` must have equal
/// lengths.
#[target_feature(enable = "sse4.1")]
pub unsafe fn sin_f32_unaligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x4, false>(dst, src)
}
