//! AVX2 sine entry points, one per (FMA, alignment) pair.
//!
//! All four are the shared `sin_slice` driver instantiated for
//! [`F32x8`]; the dispatcher picks one at runtime. Eight-lane groups go
//! through the vector reduction, the `len mod 8` tail through the scalar
//! reference path.

use crate::simd::avx2::f32x8::F32x8;
use crate::simd::sine::sin_slice;

/// Sine over 32-byte-aligned buffers using AVX2 with fused multiply-add.
///
/// # Safety
///
/// The CPU must support AVX2 and FMA, `dst` and `src` must have equal
/// lengths, and both must be 32-byte aligned.
#[cfg(fma)]
#[target_feature(enable = "avx,avx2,fma")]
pub unsafe fn sin_f32_fma_aligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x8<true>, true>(dst, src)
}

/// Sine over arbitrarily-aligned buffers using AVX2 with fused
/// multiply-add.
///
/// # Safety
///
/// The CPU must support AVX2 and FMA, and `dst` and `src` must have equal
/// lengths.
#[cfg(fma)]
#[target_feature(enable = "avx,avx2,fma")]
pub unsafe fn sin_f32_fma_unaligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x8<true>, false>(dst, src)
}

/// Sine over 32-byte-aligned buffers using AVX2 without fused
/// multiply-add.
///
/// # Safety
///
/// The CPU must support AVX2, `dst` and `src` must have equal lengths, and
/// both must be 32-byte aligned.
#[target_feature(enable = "avx,avx2")]
pub unsafe fn sin_f32_aligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x8<false>, true>(dst, src)
}

/// Sine over arbitrarily-aligned buffers using AVX2 without fused
/// multiply-add.
///
/// # Safety
///
/// The CPU must support AVX2, and `dst` and `src` must have equal lengths.
#[target_feature(enable = "avx,avx2")]
pub unsafe fn sin_f32_unaligned(dst: &mut [f32], src: &[f32]) {
    sin_slice::<F32x8<false>, false>(dst, src)
}
